//! CSV export for the scent fragrance catalogue.
//!
//! Projects records onto a caller-chosen, ordered list of
//! [`ExportField`]s. Quoting follows RFC 4180 through the `csv` crate, so a
//! `csv::Reader` recovers every cell exactly.
//!
//! ```no_run
//! # fn demo(records: &[scent_core::fragrance::Fragrance]) -> scent_csv::Result<()> {
//! let text = scent_csv::format(records, &["name", "house"])?;
//! print!("{text}");
//! # Ok(())
//! # }
//! ```

mod cell;
pub mod error;

use std::io;

pub use error::{Error, Result};
use scent_core::{field::ExportField, fragrance::Fragrance};

/// Separator between notes inside a single cell.
pub const NOTE_DELIMITER: &str = "; ";

/// Render `records` as CSV text: one header row of field names, then one row
/// per record in the given order.
pub fn format<S: AsRef<str>>(records: &[Fragrance], fields: &[S]) -> Result<String> {
  let mut buf = Vec::new();
  write_to(&mut buf, records, fields)?;
  Ok(String::from_utf8(buf)?)
}

/// Stream the same CSV as [`format`] into `out`.
///
/// The field selection is checked before anything is written.
pub fn write_to<W: io::Write, S: AsRef<str>>(
  out: W,
  records: &[Fragrance],
  fields: &[S],
) -> Result<()> {
  let fields = ExportField::parse_all(fields)?;

  let mut writer = csv::Writer::from_writer(out);
  writer.write_record(fields.iter().map(|f| f.name()))?;
  for record in records {
    writer.write_record(fields.iter().map(|&field| cell::render(record, field)))?;
  }
  writer.flush()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use scent_core::fragrance::{FragranceId, NewFragrance, Rating};

  use super::*;

  fn fragrance(id: i64, name: &str, house: &str) -> Fragrance {
    NewFragrance::new(name, house).into_fragrance(FragranceId(id), Utc::now())
  }

  fn read_back(text: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let header = reader
      .headers()
      .unwrap()
      .iter()
      .map(str::to_owned)
      .collect();
    let rows = reader
      .records()
      .map(|r| r.unwrap().iter().map(str::to_owned).collect())
      .collect();
    (header, rows)
  }

  #[test]
  fn two_records_two_fields_give_three_lines() {
    let records = vec![fragrance(1, "Aventus", "Creed"), fragrance(2, "Sauvage", "Dior")];
    let text = format(&records, &["name", "house"]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["name,house", "Aventus,Creed", "Sauvage,Dior"]);
  }

  #[test]
  fn awkward_values_survive_a_reader() {
    let mut f = fragrance(1, "Eau \"Sauvage\"", "Dior, Paris");
    f.remarks = Some("first line\nsecond line".into());
    f.notes.top = vec!["Lemon".into(), "Basil".into()];
    f.notes.base = vec!["Vetiver".into()];

    let text = format(&[f], &["name", "house", "remarks", "notes"]).unwrap();
    let (header, rows) = read_back(&text);
    assert_eq!(header, vec!["name", "house", "remarks", "notes"]);
    assert_eq!(
      rows,
      vec![vec![
        "Eau \"Sauvage\"".to_owned(),
        "Dior, Paris".to_owned(),
        "first line\nsecond line".to_owned(),
        "Lemon; Basil; Vetiver".to_owned(),
      ]]
    );
  }

  #[test]
  fn booleans_and_absent_values() {
    let mut clone = fragrance(3, "Club de Nuit Intense", "Armaf");
    clone.clone_of = Some("Aventus".into());
    clone.favorite = true;
    clone.longevity = Rating::new(4).unwrap();

    let text = format(
      &[clone, fragrance(4, "Hacivat", "Nishane")],
      &["id", "is_clone", "clone_of", "favorite", "longevity", "size_ml"],
    )
    .unwrap();
    let (_, rows) = read_back(&text);
    assert_eq!(rows[0], vec!["3", "yes", "Aventus", "yes", "4", ""]);
    assert_eq!(rows[1], vec!["4", "no", "", "no", "3", ""]);
  }

  #[test]
  fn size_columns() {
    let mut f = fragrance(1, "Aventus", "Creed");
    f.size_ml = Some(100.0);
    let (_, rows) = read_back(&format(&[f], &["size_ml", "size_oz"]).unwrap());
    assert_eq!(rows[0], vec!["100", "3.38"]);
  }

  #[test]
  fn unknown_field_is_rejected_before_writing() {
    let mut out = Vec::new();
    let err = write_to(&mut out, &[fragrance(1, "A", "B")], &["name", "price"]).unwrap_err();
    assert!(matches!(err, Error::Core(scent_core::Error::InvalidField(f)) if f == "price"));
    assert!(out.is_empty());
  }

  #[test]
  fn empty_selection_is_rejected() {
    let none: [&str; 0] = [];
    assert!(matches!(
      format(&[], &none),
      Err(Error::Core(scent_core::Error::InvalidField(_)))
    ));
  }

  #[test]
  fn no_records_gives_header_only() {
    assert_eq!(format(&[], &["name", "type"]).unwrap(), "name,type\n");
  }
}
