//! Catalogue of fragrance attributes that can be selected for export.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator as _, IntoStaticStr};

use crate::{Error, Result};

/// A selectable attribute. The string form (`name`, `top_notes`, …) is what
/// callers pass and what appears in an export header.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ExportField {
  Id,
  Name,
  House,
  #[strum(to_string = "type", serialize = "concentration")]
  Type,
  CloneOf,
  IsClone,
  /// Every note across all pyramid layers.
  Notes,
  TopNotes,
  MiddleNotes,
  BaseNotes,
  Spring,
  Summer,
  Fall,
  Winter,
  Longevity,
  Sillage,
  Favorite,
  Remarks,
  SizeMl,
  SizeOz,
}

impl ExportField {
  pub fn parse(s: &str) -> Result<Self> {
    s.trim()
      .parse()
      .map_err(|_| Error::InvalidField(s.to_owned()))
  }

  /// Parse a whole selection, preserving order. An empty selection is
  /// rejected; there would be nothing to project.
  pub fn parse_all<S: AsRef<str>>(names: &[S]) -> Result<Vec<Self>> {
    if names.is_empty() {
      return Err(Error::InvalidField(String::new()));
    }
    names.iter().map(|n| Self::parse(n.as_ref())).collect()
  }

  pub fn name(self) -> &'static str { self.into() }

  pub fn all() -> impl Iterator<Item = ExportField> { Self::iter() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_round_trip_through_parse() {
    for field in ExportField::all() {
      assert_eq!(ExportField::parse(field.name()).unwrap(), field);
    }
    assert_eq!(ExportField::TopNotes.name(), "top_notes");
    assert_eq!(ExportField::Type.name(), "type");
  }

  #[test]
  fn unknown_field_is_rejected() {
    let err = ExportField::parse_all(&["name", "price"]).unwrap_err();
    assert!(matches!(err, Error::InvalidField(f) if f == "price"));
  }

  #[test]
  fn empty_selection_is_rejected() {
    let none: [&str; 0] = [];
    assert!(matches!(ExportField::parse_all(&none), Err(Error::InvalidField(_))));
  }

  #[test]
  fn selection_keeps_caller_order() {
    let fields = ExportField::parse_all(&["house", "NAME", "concentration"]).unwrap();
    assert_eq!(fields, vec![ExportField::House, ExportField::Name, ExportField::Type]);
  }
}
