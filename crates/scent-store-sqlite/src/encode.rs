//! Encoding and decoding between domain types and SQLite column values.
//!
//! Timestamps are RFC 3339 strings, note layers are compact JSON arrays and
//! ratings are plain integers re-checked against the rating scale on read.

use chrono::{DateTime, Utc};
use scent_core::fragrance::{
  Concentration, Fragrance, FragranceId, NotePyramid, Rating, SeasonRatings,
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Notes ───────────────────────────────────────────────────────────────────

pub fn encode_notes(notes: &[String]) -> Result<String> {
  Ok(serde_json::to_string(notes)?)
}

pub fn decode_notes(s: &str) -> Result<Vec<String>> { Ok(serde_json::from_str(s)?) }

// ─── Ratings ─────────────────────────────────────────────────────────────────

pub fn encode_rating(r: Rating) -> i64 { i64::from(r.get()) }

pub fn decode_rating(column: &str, value: i64) -> Result<Rating> {
  let byte = u8::try_from(value)
    .map_err(|_| Error::Decode(format!("{column} = {value} is not a rating")))?;
  Rating::new(byte).map_err(|_| Error::Decode(format!("{column} = {value} is not a rating")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column values for everything but `id`, ready to bind as parameters.
pub struct EncodedFragrance {
  pub name:          String,
  pub house:         String,
  pub concentration: String,
  pub clone_of:      Option<String>,
  pub top_notes:     String,
  pub middle_notes:  String,
  pub base_notes:    String,
  pub spring:        i64,
  pub summer:        i64,
  pub fall:          i64,
  pub winter:        i64,
  pub longevity:     i64,
  pub sillage:       i64,
  pub favorite:      bool,
  pub remarks:       Option<String>,
  pub size_ml:       Option<f64>,
  pub created_at:    String,
  pub updated_at:    String,
}

impl EncodedFragrance {
  pub fn encode(f: &Fragrance) -> Result<Self> {
    Ok(Self {
      name:          f.name.clone(),
      house:         f.house.clone(),
      concentration: f.concentration.code().to_owned(),
      clone_of:      f.clone_of.clone(),
      top_notes:     encode_notes(&f.notes.top)?,
      middle_notes:  encode_notes(&f.notes.middle)?,
      base_notes:    encode_notes(&f.notes.base)?,
      spring:        encode_rating(f.seasons.spring),
      summer:        encode_rating(f.seasons.summer),
      fall:          encode_rating(f.seasons.fall),
      winter:        encode_rating(f.seasons.winter),
      longevity:     encode_rating(f.longevity),
      sillage:       encode_rating(f.sillage),
      favorite:      f.favorite,
      remarks:       f.remarks.clone(),
      size_ml:       f.size_ml,
      created_at:    encode_dt(f.created_at),
      updated_at:    encode_dt(f.updated_at),
    })
  }
}

/// Raw values read directly from a `fragrances` row, in
/// [`crate::schema::COLUMNS`] order.
pub struct RawFragrance {
  pub id:            i64,
  pub name:          String,
  pub house:         String,
  pub concentration: String,
  pub clone_of:      Option<String>,
  pub top_notes:     String,
  pub middle_notes:  String,
  pub base_notes:    String,
  pub spring:        i64,
  pub summer:        i64,
  pub fall:          i64,
  pub winter:        i64,
  pub longevity:     i64,
  pub sillage:       i64,
  pub favorite:      bool,
  pub remarks:       Option<String>,
  pub size_ml:       Option<f64>,
  pub created_at:    String,
  pub updated_at:    String,
}

impl RawFragrance {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      name:          row.get(1)?,
      house:         row.get(2)?,
      concentration: row.get(3)?,
      clone_of:      row.get(4)?,
      top_notes:     row.get(5)?,
      middle_notes:  row.get(6)?,
      base_notes:    row.get(7)?,
      spring:        row.get(8)?,
      summer:        row.get(9)?,
      fall:          row.get(10)?,
      winter:        row.get(11)?,
      longevity:     row.get(12)?,
      sillage:       row.get(13)?,
      favorite:      row.get(14)?,
      remarks:       row.get(15)?,
      size_ml:       row.get(16)?,
      created_at:    row.get(17)?,
      updated_at:    row.get(18)?,
    })
  }

  pub fn into_fragrance(self) -> Result<Fragrance> {
    Ok(Fragrance {
      id:            FragranceId(self.id),
      name:          self.name,
      house:         self.house,
      concentration: Concentration::parse(&self.concentration),
      clone_of:      self.clone_of,
      notes:         NotePyramid {
        top:    decode_notes(&self.top_notes)?,
        middle: decode_notes(&self.middle_notes)?,
        base:   decode_notes(&self.base_notes)?,
      },
      seasons:       SeasonRatings {
        spring: decode_rating("spring_rating", self.spring)?,
        summer: decode_rating("summer_rating", self.summer)?,
        fall:   decode_rating("fall_rating", self.fall)?,
        winter: decode_rating("winter_rating", self.winter)?,
      },
      longevity:     decode_rating("longevity", self.longevity)?,
      sillage:       decode_rating("sillage", self.sillage)?,
      favorite:      self.favorite,
      remarks:       self.remarks,
      size_ml:       self.size_ml,
      created_at:    decode_dt(&self.created_at)?,
      updated_at:    decode_dt(&self.updated_at)?,
    })
  }
}
