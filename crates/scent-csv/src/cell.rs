//! Rendering of a single attribute as CSV cell text.

use scent_core::{field::ExportField, fragrance::Fragrance};

use crate::NOTE_DELIMITER;

pub fn render(f: &Fragrance, field: ExportField) -> String {
  match field {
    ExportField::Id => f.id.to_string(),
    ExportField::Name => f.name.clone(),
    ExportField::House => f.house.clone(),
    ExportField::Type => f.concentration.code().to_owned(),
    ExportField::CloneOf => f.clone_of.clone().unwrap_or_default(),
    ExportField::IsClone => yes_no(f.is_clone()),
    ExportField::Notes => f.notes.all().collect::<Vec<_>>().join(NOTE_DELIMITER),
    ExportField::TopNotes => f.notes.top.join(NOTE_DELIMITER),
    ExportField::MiddleNotes => f.notes.middle.join(NOTE_DELIMITER),
    ExportField::BaseNotes => f.notes.base.join(NOTE_DELIMITER),
    ExportField::Spring => f.seasons.spring.to_string(),
    ExportField::Summer => f.seasons.summer.to_string(),
    ExportField::Fall => f.seasons.fall.to_string(),
    ExportField::Winter => f.seasons.winter.to_string(),
    ExportField::Longevity => f.longevity.to_string(),
    ExportField::Sillage => f.sillage.to_string(),
    ExportField::Favorite => yes_no(f.favorite),
    ExportField::Remarks => f.remarks.clone().unwrap_or_default(),
    ExportField::SizeMl => f.size_ml.map(|ml| ml.to_string()).unwrap_or_default(),
    ExportField::SizeOz => f.size_oz().map(|oz| oz.to_string()).unwrap_or_default(),
  }
}

fn yes_no(b: bool) -> String { if b { "yes" } else { "no" }.to_owned() }
