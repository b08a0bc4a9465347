//! Fragrance types, the single kind of record in the catalogue.
//!
//! A [`Fragrance`] is created from a [`NewFragrance`], edited in place through
//! a [`FragrancePatch`] and removed by id. Validation lives here so every
//! backend enforces the same rules.

use std::{fmt, num::ParseIntError, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator as _, IntoStaticStr};

use crate::{Error, Result};

/// Millilitres per US fluid ounce.
pub const ML_PER_OZ: f64 = 29.5735;

// ─── Identity ────────────────────────────────────────────────────────────────

/// Store-assigned identifier. Strictly increasing in insertion order and never
/// reused after deletion.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FragranceId(pub i64);

impl fmt::Display for FragranceId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl FromStr for FragranceId {
  type Err = ParseIntError;

  fn from_str(s: &str) -> Result<Self, Self::Err> { s.trim().parse().map(Self) }
}

// ─── Ratings ─────────────────────────────────────────────────────────────────

/// An integer rating on the fixed `0..=5` scale used for seasons, longevity and
/// sillage.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
  pub const MIN: Rating = Rating(0);
  pub const MAX: Rating = Rating(5);
  /// A season rated at least this is considered suited to the fragrance.
  pub const SUITABLE: Rating = Rating(4);

  pub fn new(value: u8) -> Result<Self> {
    if value > Self::MAX.0 {
      return Err(Error::Validation(format!(
        "rating {value} is outside {}..={}",
        Self::MIN,
        Self::MAX
      )));
    }
    Ok(Self(value))
  }

  pub fn get(self) -> u8 { self.0 }
}

impl Default for Rating {
  fn default() -> Self { Self(3) }
}

impl TryFrom<u8> for Rating {
  type Error = Error;

  fn try_from(value: u8) -> Result<Self> { Self::new(value) }
}

impl From<Rating> for u8 {
  fn from(r: Rating) -> u8 { r.0 }
}

impl fmt::Display for Rating {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl FromStr for Rating {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let value: u8 = s
      .trim()
      .parse()
      .map_err(|_| Error::Validation(format!("rating {s:?} is not a whole number")))?;
    Self::new(value)
  }
}

// ─── Seasons ─────────────────────────────────────────────────────────────────

/// The four seasons a fragrance is rated against, in canonical order.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Season {
  Spring,
  Summer,
  Fall,
  Winter,
}

impl Season {
  /// Capitalised name for human-facing text.
  pub fn label(self) -> &'static str {
    match self {
      Self::Spring => "Spring",
      Self::Summer => "Summer",
      Self::Fall => "Fall",
      Self::Winter => "Winter",
    }
  }

  pub fn all() -> impl Iterator<Item = Season> { Self::iter() }
}

/// One rating per season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRatings {
  pub spring: Rating,
  pub summer: Rating,
  pub fall:   Rating,
  pub winter: Rating,
}

impl SeasonRatings {
  pub fn get(&self, season: Season) -> Rating {
    match season {
      Season::Spring => self.spring,
      Season::Summer => self.summer,
      Season::Fall => self.fall,
      Season::Winter => self.winter,
    }
  }

  pub fn set(&mut self, season: Season, rating: Rating) {
    match season {
      Season::Spring => self.spring = rating,
      Season::Summer => self.summer = rating,
      Season::Fall => self.fall = rating,
      Season::Winter => self.winter = rating,
    }
  }

  /// `(season, rating)` pairs in canonical season order.
  pub fn iter(&self) -> impl Iterator<Item = (Season, Rating)> + '_ {
    Season::all().map(|s| (s, self.get(s)))
  }

  /// The highest rating across all four seasons.
  pub fn peak(&self) -> Rating {
    self.iter().map(|(_, r)| r).max().unwrap_or_default()
  }
}

// ─── Concentration ───────────────────────────────────────────────────────────

/// The "type" of a fragrance. Free text that matches none of the known
/// concentrations is kept verbatim in [`Concentration::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Concentration {
  EdC,
  #[default]
  EdT,
  EdP,
  Parfum,
  Elixir,
  PurePerfume,
  /// Unrecognised free text. Build it through [`Concentration::parse`]: text
  /// naming a known concentration is normalised there, and the stored code
  /// form is read back the same way.
  Other(String),
}

impl Concentration {
  /// Known concentrations in the order a picker should offer them.
  pub const KNOWN: [Concentration; 6] = [
    Self::EdC,
    Self::EdT,
    Self::EdP,
    Self::Parfum,
    Self::Elixir,
    Self::PurePerfume,
  ];

  /// Interpret user or database text. Accepts short codes (`edp`), long labels
  /// (`Eau de Parfum (EdP)`) and the stored code form, case-insensitively.
  pub fn parse(s: &str) -> Self {
    let trimmed = s.trim();
    let key = trimmed.to_lowercase();
    match key.as_str() {
      "" | "edt" | "eau de toilette" | "eau de toilette (edt)" => Self::EdT,
      "edc" | "eau de cologne" | "eau de cologne (edc)" | "cologne" => Self::EdC,
      "edp" | "eau de parfum" | "eau de parfum (edp)" => Self::EdP,
      "parfum" | "extrait" | "parfum / extrait" | "extrait de parfum" => Self::Parfum,
      "elixir" => Self::Elixir,
      "pure_perfume" | "pure perfume" => Self::PurePerfume,
      _ => Self::Other(trimmed.to_owned()),
    }
  }

  /// Short form stored in the database and shown in tables.
  pub fn code(&self) -> &str {
    match self {
      Self::EdC => "EdC",
      Self::EdT => "EdT",
      Self::EdP => "EdP",
      Self::Parfum => "Parfum",
      Self::Elixir => "Elixir",
      Self::PurePerfume => "Pure Perfume",
      Self::Other(s) => s,
    }
  }

  /// Long descriptive label.
  pub fn label(&self) -> &str {
    match self {
      Self::EdC => "Eau de Cologne (EdC)",
      Self::EdT => "Eau de Toilette (EdT)",
      Self::EdP => "Eau de Parfum (EdP)",
      Self::Parfum => "Parfum / Extrait",
      Self::Elixir => "Elixir",
      Self::PurePerfume => "Pure Perfume",
      Self::Other(s) => s,
    }
  }
}

impl fmt::Display for Concentration {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.code()) }
}

impl From<String> for Concentration {
  fn from(s: String) -> Self { Self::parse(&s) }
}

impl From<Concentration> for String {
  fn from(c: Concentration) -> String { c.code().to_owned() }
}

// ─── Notes ───────────────────────────────────────────────────────────────────

/// Notes grouped by pyramid layer; order within a layer is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePyramid {
  pub top:    Vec<String>,
  pub middle: Vec<String>,
  pub base:   Vec<String>,
}

impl NotePyramid {
  /// Every note, top to base.
  pub fn all(&self) -> impl Iterator<Item = &str> {
    self
      .top
      .iter()
      .chain(&self.middle)
      .chain(&self.base)
      .map(String::as_str)
  }

  pub fn is_empty(&self) -> bool {
    self.top.is_empty() && self.middle.is_empty() && self.base.is_empty()
  }

  /// Case-insensitive membership test across all layers.
  pub fn contains(&self, note: &str) -> bool {
    let needle = note.trim().to_lowercase();
    self.all().any(|n| n.to_lowercase() == needle)
  }

  fn normalized(self) -> Self {
    Self {
      top:    clean_notes(self.top),
      middle: clean_notes(self.middle),
      base:   clean_notes(self.base),
    }
  }
}

/// Split a comma-separated note list, trimming each token and dropping empty
/// ones.
pub fn split_notes(list: &str) -> Vec<String> {
  list
    .split(',')
    .map(str::trim)
    .filter(|n| !n.is_empty())
    .map(str::to_owned)
    .collect()
}

fn clean_notes(notes: Vec<String>) -> Vec<String> {
  notes
    .into_iter()
    .map(|n| n.trim().to_owned())
    .filter(|n| !n.is_empty())
    .collect()
}

// ─── Fragrance ───────────────────────────────────────────────────────────────

/// One entry in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragrance {
  pub id:            FragranceId,
  pub name:          String,
  pub house:         String,
  pub concentration: Concentration,
  /// The fragrance this one replicates, if it is a clone.
  pub clone_of:      Option<String>,
  pub notes:         NotePyramid,
  pub seasons:       SeasonRatings,
  pub longevity:     Rating,
  pub sillage:       Rating,
  pub favorite:      bool,
  pub remarks:       Option<String>,
  pub size_ml:       Option<f64>,
  /// Store-assigned; never changes after creation.
  pub created_at:    DateTime<Utc>,
  pub updated_at:    DateTime<Utc>,
}

impl Fragrance {
  pub fn is_clone(&self) -> bool { self.clone_of.is_some() }

  pub fn size_oz(&self) -> Option<f64> {
    self.size_ml.map(|ml| (ml / ML_PER_OZ * 100.0).round() / 100.0)
  }

  /// "House Name", as shown in lists.
  pub fn full_name(&self) -> String { format!("{} {}", self.house, self.name) }

  /// Merge `patch` onto this record and re-validate the result. Identity and
  /// timestamps are left to the store.
  pub fn patched(mut self, patch: FragrancePatch) -> Result<Self> {
    let FragrancePatch {
      name,
      house,
      concentration,
      clone_of,
      top_notes,
      middle_notes,
      base_notes,
      spring,
      summer,
      fall,
      winter,
      longevity,
      sillage,
      favorite,
      remarks,
      size_ml,
    } = patch;

    if let Some(v) = name {
      self.name = require_text("name", &v)?;
    }
    if let Some(v) = house {
      self.house = require_text("house", &v)?;
    }
    if let Some(v) = concentration {
      self.concentration = v;
    }
    if let Some(v) = clone_of {
      self.clone_of = optional_text(v);
    }
    if let Some(v) = top_notes {
      self.notes.top = clean_notes(v);
    }
    if let Some(v) = middle_notes {
      self.notes.middle = clean_notes(v);
    }
    if let Some(v) = base_notes {
      self.notes.base = clean_notes(v);
    }
    for (season, rating) in [
      (Season::Spring, spring),
      (Season::Summer, summer),
      (Season::Fall, fall),
      (Season::Winter, winter),
    ] {
      if let Some(r) = rating {
        self.seasons.set(season, r);
      }
    }
    if let Some(v) = longevity {
      self.longevity = v;
    }
    if let Some(v) = sillage {
      self.sillage = v;
    }
    if let Some(v) = favorite {
      self.favorite = v;
    }
    if let Some(v) = remarks {
      self.remarks = optional_text(v);
    }
    if let Some(v) = size_ml {
      self.size_ml = check_size(v)?;
    }

    Ok(self)
  }
}

// ─── NewFragrance ────────────────────────────────────────────────────────────

/// Input to [`crate::store::FragranceStore::create`]. The id and timestamps
/// are always assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFragrance {
  pub name:          String,
  pub house:         String,
  pub concentration: Concentration,
  pub clone_of:      Option<String>,
  pub notes:         NotePyramid,
  pub seasons:       SeasonRatings,
  pub longevity:     Rating,
  pub sillage:       Rating,
  pub favorite:      bool,
  pub remarks:       Option<String>,
  pub size_ml:       Option<f64>,
}

impl NewFragrance {
  /// Convenience constructor with every optional attribute at its default.
  pub fn new(name: impl Into<String>, house: impl Into<String>) -> Self {
    Self {
      name:          name.into(),
      house:         house.into(),
      concentration: Concentration::default(),
      clone_of:      None,
      notes:         NotePyramid::default(),
      seasons:       SeasonRatings::default(),
      longevity:     Rating::default(),
      sillage:       Rating::default(),
      favorite:      false,
      remarks:       None,
      size_ml:       None,
    }
  }

  /// Trim text, drop blank optionals and empty notes, and check the required
  /// fields. Ratings are already bounded by [`Rating`].
  pub fn validated(self) -> Result<Self> {
    Ok(Self {
      name: require_text("name", &self.name)?,
      house: require_text("house", &self.house)?,
      clone_of: optional_text(self.clone_of),
      notes: self.notes.normalized(),
      remarks: optional_text(self.remarks),
      size_ml: check_size(self.size_ml)?,
      ..self
    })
  }

  /// Attach store-assigned identity and timestamps.
  pub fn into_fragrance(self, id: FragranceId, now: DateTime<Utc>) -> Fragrance {
    Fragrance {
      id,
      name: self.name,
      house: self.house,
      concentration: self.concentration,
      clone_of: self.clone_of,
      notes: self.notes,
      seasons: self.seasons,
      longevity: self.longevity,
      sillage: self.sillage,
      favorite: self.favorite,
      remarks: self.remarks,
      size_ml: self.size_ml,
      created_at: now,
      updated_at: now,
    }
  }
}

// ─── FragrancePatch ──────────────────────────────────────────────────────────

/// A partial update. `None` leaves an attribute untouched; for optional
/// attributes `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragrancePatch {
  pub name:          Option<String>,
  pub house:         Option<String>,
  pub concentration: Option<Concentration>,
  pub clone_of:      Option<Option<String>>,
  pub top_notes:     Option<Vec<String>>,
  pub middle_notes:  Option<Vec<String>>,
  pub base_notes:    Option<Vec<String>>,
  pub spring:        Option<Rating>,
  pub summer:        Option<Rating>,
  pub fall:          Option<Rating>,
  pub winter:        Option<Rating>,
  pub longevity:     Option<Rating>,
  pub sillage:       Option<Rating>,
  pub favorite:      Option<bool>,
  pub remarks:       Option<Option<String>>,
  pub size_ml:       Option<Option<f64>>,
}

impl FragrancePatch {
  pub fn is_empty(&self) -> bool { *self == Self::default() }

  /// Set the rating for one season.
  pub fn with_season(mut self, season: Season, rating: Rating) -> Self {
    let slot = match season {
      Season::Spring => &mut self.spring,
      Season::Summer => &mut self.summer,
      Season::Fall => &mut self.fall,
      Season::Winter => &mut self.winter,
    };
    *slot = Some(rating);
    self
  }
}

// ─── Validation helpers ──────────────────────────────────────────────────────

fn require_text(field: &str, value: &str) -> Result<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(Error::Validation(format!("{field} must not be empty")));
  }
  Ok(trimmed.to_owned())
}

fn optional_text(value: Option<String>) -> Option<String> {
  value
    .map(|v| v.trim().to_owned())
    .filter(|v| !v.is_empty())
}

fn check_size(size_ml: Option<f64>) -> Result<Option<f64>> {
  match size_ml {
    Some(ml) if !ml.is_finite() || ml <= 0.0 => Err(Error::Validation(format!(
      "bottle size must be a positive number of millilitres, got {ml}"
    ))),
    other => Ok(other),
  }
}
