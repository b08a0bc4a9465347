//! The collection query engine: search, filter and sort over an in-memory
//! record list.
//!
//! [`apply`] is a pure function of `(records, spec)`. It never mutates its
//! input and never touches the store.

use std::cmp::Ordering;

use strum::{Display, EnumIter, EnumString};

use crate::{
  Error, Result,
  fragrance::{Fragrance, Rating, Season},
};

/// Minimum season rating for a fragrance to count as suited to that season.
pub const SEASON_SUITABLE: Rating = Rating::SUITABLE;

// ─── Sort ────────────────────────────────────────────────────────────────────

/// Attributes a result list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortKey {
  Name,
  House,
  #[strum(to_string = "type", serialize = "concentration")]
  Type,
  Longevity,
  Sillage,
  Spring,
  Summer,
  Fall,
  Winter,
  Favorite,
}

impl SortKey {
  /// Parse a user-supplied key; unknown keys are an invalid specification.
  pub fn parse(s: &str) -> Result<Self> {
    s.trim()
      .parse()
      .map_err(|_| Error::InvalidSpec(format!("unknown sort key: {s:?}")))
  }

  fn compare(self, a: &Fragrance, b: &Fragrance) -> Ordering {
    match self {
      Self::Name => cmp_text(&a.name, &b.name),
      Self::House => cmp_text(&a.house, &b.house),
      Self::Type => cmp_text(a.concentration.code(), b.concentration.code()),
      Self::Longevity => a.longevity.cmp(&b.longevity),
      Self::Sillage => a.sillage.cmp(&b.sillage),
      Self::Spring => a.seasons.spring.cmp(&b.seasons.spring),
      Self::Summer => a.seasons.summer.cmp(&b.seasons.summer),
      Self::Fall => a.seasons.fall.cmp(&b.seasons.fall),
      Self::Winter => a.seasons.winter.cmp(&b.seasons.winter),
      Self::Favorite => a.favorite.cmp(&b.favorite),
    }
  }
}

fn cmp_text(a: &str, b: &str) -> Ordering { a.to_lowercase().cmp(&b.to_lowercase()) }

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
  #[default]
  Asc,
  Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
  pub key:       SortKey,
  pub direction: Direction,
}

impl Sort {
  pub fn asc(key: SortKey) -> Self { Self { key, direction: Direction::Asc } }

  pub fn desc(key: SortKey) -> Self { Self { key, direction: Direction::Desc } }

  /// Descending reverses the key comparison only; equal keys are left to the
  /// stable sort and keep their input order.
  fn compare(self, a: &Fragrance, b: &Fragrance) -> Ordering {
    let ord = self.key.compare(a, b);
    match self.direction {
      Direction::Asc => ord,
      Direction::Desc => ord.reverse(),
    }
  }
}

// ─── Filters ─────────────────────────────────────────────────────────────────

/// An inclusive band on a rating; either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingBand {
  pub min: Option<Rating>,
  pub max: Option<Rating>,
}

impl RatingBand {
  pub fn contains(&self, rating: Rating) -> bool {
    self.min.is_none_or(|min| rating >= min) && self.max.is_none_or(|max| rating <= max)
  }

  fn check(&self, what: &str) -> Result<()> {
    match (self.min, self.max) {
      (Some(min), Some(max)) if min > max => Err(Error::InvalidSpec(format!(
        "{what} band is empty: min {min} > max {max}"
      ))),
      _ => Ok(()),
    }
  }
}

/// How a chosen note set is matched against a fragrance's notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NoteMatch {
  /// At least one chosen note is present.
  #[default]
  Any,
  /// Every chosen note is present.
  All,
}

// ─── QuerySpec ───────────────────────────────────────────────────────────────

/// Parameters for [`apply`]. Every category that is set must match (logical
/// AND); an all-default spec matches everything and keeps input order.
#[derive(Debug, Clone, Default)]
pub struct QuerySpec {
  /// Case-insensitive substring over name or house. Blank means no search.
  pub search:         Option<String>,
  /// Exact house, case-insensitive.
  pub house:          Option<String>,
  /// Only fragrances rated at least [`SEASON_SUITABLE`] for this season.
  pub season:         Option<Season>,
  pub longevity:      RatingBand,
  pub sillage:        RatingBand,
  /// Chosen notes, matched per `note_match` across all pyramid layers.
  pub notes:          Vec<String>,
  pub note_match:     NoteMatch,
  pub favorites_only: bool,
  pub sort:           Option<Sort>,
}

impl QuerySpec {
  pub fn validate(&self) -> Result<()> {
    self.longevity.check("longevity")?;
    self.sillage.check("sillage")?;
    Ok(())
  }

  /// Whether `f` passes every active filter.
  pub fn matches(&self, f: &Fragrance) -> bool {
    if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
      let needle = term.to_lowercase();
      if !f.name.to_lowercase().contains(&needle) && !f.house.to_lowercase().contains(&needle) {
        return false;
      }
    }

    if let Some(house) = self.house.as_deref().map(str::trim).filter(|h| !h.is_empty())
      && f.house.to_lowercase() != house.to_lowercase()
    {
      return false;
    }

    if let Some(season) = self.season
      && f.seasons.get(season) < SEASON_SUITABLE
    {
      return false;
    }

    if !self.longevity.contains(f.longevity) || !self.sillage.contains(f.sillage) {
      return false;
    }

    let chosen: Vec<&str> = self
      .notes
      .iter()
      .map(|n| n.trim())
      .filter(|n| !n.is_empty())
      .collect();
    if !chosen.is_empty() {
      let hit = |n: &&str| f.notes.contains(n);
      let ok = match self.note_match {
        NoteMatch::Any => chosen.iter().any(hit),
        NoteMatch::All => chosen.iter().all(hit),
      };
      if !ok {
        return false;
      }
    }

    !self.favorites_only || f.favorite
  }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Produce the ordered visible subset of `records` for `spec`.
///
/// The sort is stable, so records that compare equal under the key keep
/// their relative input order. Fed from
/// [`FragranceStore::list_all`](crate::store::FragranceStore::list_all), that
/// is insertion order.
pub fn apply(records: &[Fragrance], spec: &QuerySpec) -> Result<Vec<Fragrance>> {
  spec.validate()?;

  let mut visible: Vec<Fragrance> = records
    .iter()
    .filter(|f| spec.matches(f))
    .cloned()
    .collect();

  if let Some(sort) = spec.sort {
    visible.sort_by(|a, b| sort.compare(a, b));
  }

  Ok(visible)
}
