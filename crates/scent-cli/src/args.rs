//! Argument groups shared by several subcommands, and their conversion into
//! core types.

use clap::Args;
use scent_core::{
  fragrance::{Concentration, FragrancePatch, NewFragrance, Rating, Season, split_notes},
  query::{Direction, NoteMatch, QuerySpec, RatingBand, Sort, SortKey},
};

// ─── Filters ─────────────────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct FilterArgs {
  /// Case-insensitive substring of the name or house.
  #[arg(short, long)]
  pub search: Option<String>,

  /// Exact house (case-insensitive).
  #[arg(long)]
  pub house: Option<String>,

  /// Only fragrances suited to this season.
  #[arg(long)]
  pub season: Option<Season>,

  #[arg(long, value_name = "RATING")]
  pub min_longevity: Option<Rating>,

  #[arg(long, value_name = "RATING")]
  pub max_longevity: Option<Rating>,

  #[arg(long, value_name = "RATING")]
  pub min_sillage: Option<Rating>,

  #[arg(long, value_name = "RATING")]
  pub max_sillage: Option<Rating>,

  /// A note to look for; repeat or separate with commas.
  #[arg(short, long = "note", value_name = "NOTE")]
  pub notes: Vec<String>,

  /// Whether a fragrance needs any or all of the given notes.
  #[arg(long, default_value_t = NoteMatch::Any)]
  pub note_match: NoteMatch,

  /// Only favourites.
  #[arg(short, long)]
  pub favorites: bool,

  /// Sort key: name, house, type, longevity, sillage, spring, summer, fall,
  /// winter or favorite.
  #[arg(long, value_name = "KEY")]
  pub sort: Option<String>,

  /// Sort descending.
  #[arg(long, requires = "sort")]
  pub desc: bool,
}

impl FilterArgs {
  pub fn to_spec(&self) -> scent_core::Result<QuerySpec> {
    let sort = self
      .sort
      .as_deref()
      .map(|key| -> scent_core::Result<Sort> {
        let direction = if self.desc { Direction::Desc } else { Direction::Asc };
        Ok(Sort { key: SortKey::parse(key)?, direction })
      })
      .transpose()?;

    Ok(QuerySpec {
      search: self.search.clone(),
      house: self.house.clone(),
      season: self.season,
      longevity: RatingBand { min: self.min_longevity, max: self.max_longevity },
      sillage: RatingBand { min: self.min_sillage, max: self.max_sillage },
      notes: self.notes.iter().flat_map(|n| split_notes(n)).collect(),
      note_match: self.note_match,
      favorites_only: self.favorites,
      sort,
    })
  }
}

// ─── Add ─────────────────────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct AddArgs {
  #[arg(long)]
  pub name: String,

  #[arg(long)]
  pub house: String,

  /// Concentration, e.g. edt, edp, parfum, or free text.
  #[arg(long = "type", value_name = "TYPE")]
  pub concentration: Option<String>,

  /// Name of the fragrance this one is a clone of.
  #[arg(long)]
  pub clone_of: Option<String>,

  /// Comma-separated top notes.
  #[arg(long, value_name = "NOTES")]
  pub top: Option<String>,

  #[arg(long, value_name = "NOTES")]
  pub middle: Option<String>,

  #[arg(long, value_name = "NOTES")]
  pub base: Option<String>,

  #[arg(long, value_name = "RATING")]
  pub spring: Option<Rating>,

  #[arg(long, value_name = "RATING")]
  pub summer: Option<Rating>,

  #[arg(long, value_name = "RATING")]
  pub fall: Option<Rating>,

  #[arg(long, value_name = "RATING")]
  pub winter: Option<Rating>,

  #[arg(long, value_name = "RATING")]
  pub longevity: Option<Rating>,

  #[arg(long, value_name = "RATING")]
  pub sillage: Option<Rating>,

  #[arg(long)]
  pub favorite: bool,

  #[arg(long)]
  pub remarks: Option<String>,

  /// Bottle size in millilitres.
  #[arg(long, value_name = "ML")]
  pub size_ml: Option<f64>,
}

impl AddArgs {
  pub fn into_new(self) -> NewFragrance {
    let mut input = NewFragrance::new(self.name, self.house);
    if let Some(c) = self.concentration {
      input.concentration = Concentration::parse(&c);
    }
    input.clone_of = self.clone_of;
    input.notes.top = self.top.as_deref().map(split_notes).unwrap_or_default();
    input.notes.middle = self.middle.as_deref().map(split_notes).unwrap_or_default();
    input.notes.base = self.base.as_deref().map(split_notes).unwrap_or_default();
    for (season, rating) in [
      (Season::Spring, self.spring),
      (Season::Summer, self.summer),
      (Season::Fall, self.fall),
      (Season::Winter, self.winter),
    ] {
      if let Some(r) = rating {
        input.seasons.set(season, r);
      }
    }
    input.longevity = self.longevity.unwrap_or_default();
    input.sillage = self.sillage.unwrap_or_default();
    input.favorite = self.favorite;
    input.remarks = self.remarks;
    input.size_ml = self.size_ml;
    input
  }
}

// ─── Edit ────────────────────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct EditArgs {
  #[arg(long)]
  pub name: Option<String>,

  #[arg(long)]
  pub house: Option<String>,

  #[arg(long = "type", value_name = "TYPE")]
  pub concentration: Option<String>,

  #[arg(long, conflicts_with = "no_clone_of")]
  pub clone_of: Option<String>,

  /// Mark as not a clone.
  #[arg(long)]
  pub no_clone_of: bool,

  /// Replace the top notes (comma-separated; empty clears).
  #[arg(long, value_name = "NOTES")]
  pub top: Option<String>,

  #[arg(long, value_name = "NOTES")]
  pub middle: Option<String>,

  #[arg(long, value_name = "NOTES")]
  pub base: Option<String>,

  #[arg(long, value_name = "RATING")]
  pub spring: Option<Rating>,

  #[arg(long, value_name = "RATING")]
  pub summer: Option<Rating>,

  #[arg(long, value_name = "RATING")]
  pub fall: Option<Rating>,

  #[arg(long, value_name = "RATING")]
  pub winter: Option<Rating>,

  #[arg(long, value_name = "RATING")]
  pub longevity: Option<Rating>,

  #[arg(long, value_name = "RATING")]
  pub sillage: Option<Rating>,

  #[arg(long, value_name = "BOOL")]
  pub favorite: Option<bool>,

  #[arg(long, conflicts_with = "no_remarks")]
  pub remarks: Option<String>,

  #[arg(long)]
  pub no_remarks: bool,

  #[arg(long, value_name = "ML", conflicts_with = "no_size")]
  pub size_ml: Option<f64>,

  /// Forget the bottle size.
  #[arg(long)]
  pub no_size: bool,
}

impl EditArgs {
  pub fn into_patch(self) -> FragrancePatch {
    let mut patch = FragrancePatch {
      name: self.name,
      house: self.house,
      concentration: self.concentration.as_deref().map(Concentration::parse),
      clone_of: clearable(self.clone_of, self.no_clone_of),
      top_notes: self.top.as_deref().map(split_notes),
      middle_notes: self.middle.as_deref().map(split_notes),
      base_notes: self.base.as_deref().map(split_notes),
      longevity: self.longevity,
      sillage: self.sillage,
      favorite: self.favorite,
      remarks: clearable(self.remarks, self.no_remarks),
      size_ml: clearable(self.size_ml, self.no_size),
      ..Default::default()
    };
    for (season, rating) in [
      (Season::Spring, self.spring),
      (Season::Summer, self.summer),
      (Season::Fall, self.fall),
      (Season::Winter, self.winter),
    ] {
      if let Some(r) = rating {
        patch = patch.with_season(season, r);
      }
    }
    patch
  }
}

/// `Some(Some(v))` to set, `Some(None)` to clear, `None` to leave alone.
fn clearable<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
  if clear { Some(None) } else { value.map(Some) }
}
