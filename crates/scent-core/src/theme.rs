//! Named colour themes.
//!
//! Only the name is modelled; palettes and styling belong to whatever front
//! end renders them. Nothing else in this crate depends on the active theme.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator as _};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Theme {
  #[default]
  Dark,
  Light,
  Monochrome,
  ReverseMonochrome,
  Nature,
  Midnight,
  Violet,
}

impl Theme {
  /// Themes in the order a picker lists them.
  pub fn all() -> impl Iterator<Item = Theme> { Self::iter() }

  pub fn display_name(self) -> &'static str {
    match self {
      Self::Dark => "Dark Elegance",
      Self::Light => "Light Elegance",
      Self::Monochrome => "Monochrome",
      Self::ReverseMonochrome => "Light Monochrome",
      Self::Nature => "Emerald Veil",
      Self::Midnight => "Midnight Blue",
      Self::Violet => "Violet Dream",
    }
  }
}
