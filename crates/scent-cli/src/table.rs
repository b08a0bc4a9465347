//! Tabular output for `scent list`.

use scent_core::{fragrance::Fragrance, theme::Theme};
use tabled::{builder::Builder, settings::Style};

const HEADER: [&str; 12] = [
  "ID", "House", "Name", "Type", "Clone of", "Longevity", "Sillage", "Spring", "Summer", "Fall",
  "Winter", "Fav",
];

pub fn render(records: &[Fragrance], theme: Theme) -> String {
  let mut builder = Builder::default();
  builder.push_record(HEADER);
  for f in records {
    builder.push_record([
      f.id.to_string(),
      f.house.clone(),
      f.name.clone(),
      f.concentration.code().to_owned(),
      f.clone_of.clone().unwrap_or_default(),
      f.longevity.to_string(),
      f.sillage.to_string(),
      f.seasons.spring.to_string(),
      f.seasons.summer.to_string(),
      f.seasons.fall.to_string(),
      f.seasons.winter.to_string(),
      if f.favorite { "*" } else { "" }.to_owned(),
    ]);
  }

  let mut table = builder.build();
  // Themes map onto border styles only.
  match theme {
    Theme::Monochrome | Theme::ReverseMonochrome => table.with(Style::ascii()),
    Theme::Light => table.with(Style::modern()),
    Theme::Dark | Theme::Nature | Theme::Midnight | Theme::Violet => table.with(Style::rounded()),
  };
  table.to_string()
}
