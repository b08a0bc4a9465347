//! Plain-text renderings handed to the clipboard or printed as-is.

use crate::{
  fragrance::{Fragrance, Rating},
  stats::Snapshot,
};

/// A multi-line description of one fragrance.
pub fn detail_text(f: &Fragrance) -> String {
  let max = Rating::MAX;
  let mut out = String::new();

  out.push_str(&format!("{}\n", f.full_name()));
  if let (Some(ml), Some(oz)) = (f.size_ml, f.size_oz()) {
    out.push_str(&format!("Size: {oz} oz ({ml} ml)\n"));
  }
  out.push_str(&format!("Concentration: {}\n", f.concentration.label()));
  if f.favorite {
    out.push_str("Favorite\n");
  }

  if !f.notes.is_empty() {
    out.push('\n');
    for (label, layer) in [
      ("TOP NOTES", &f.notes.top),
      ("MIDDLE NOTES", &f.notes.middle),
      ("BASE NOTES", &f.notes.base),
    ] {
      if !layer.is_empty() {
        out.push_str(&format!("{label}: {}\n", layer.join(", ")));
      }
    }
  }

  out.push_str("\nSeasonality:\n");
  for (season, rating) in f.seasons.iter() {
    out.push_str(&format!("{}: {rating}/{max}\n", season.label()));
  }

  out.push_str("\nPerformance:\n");
  out.push_str(&format!("Longevity: {}/{max}\n", f.longevity));
  out.push_str(&format!("Sillage: {}/{max}\n", f.sillage));

  if let Some(original) = &f.clone_of {
    out.push_str(&format!("\nCLONE OF: {original}\n"));
  }
  if let Some(remarks) = &f.remarks {
    out.push_str(&format!("\nRemarks: {remarks}\n"));
  }

  out
}

/// The collection overview as a copyable text block.
pub fn overview_text(s: &Snapshot) -> String {
  let mut out = String::new();
  out.push_str("FRAGRANCE COLLECTION OVERVIEW\n");
  out.push_str("=============================\n\n");

  out.push_str("Collection Statistics:\n");
  out.push_str(&format!("- Total Fragrances: {}\n", s.total));
  out.push_str(&format!("- Total Houses: {}\n\n", s.distinct_houses));

  ranked_list(&mut out, "Most Common Houses:", &s.top_houses, "fragrances", "No house data available");
  ranked_list(&mut out, "Most Common Notes:", &s.top_notes, "occurrences", "No notes data available");
  ranked_list(
    &mut out,
    "Notes in Favorite Fragrances:",
    &s.top_favorite_notes,
    "occurrences",
    "No favorited fragrances found or no notes data available",
  );

  out.push_str("Seasons ranked by average rating:\n");
  for (i, standing) in s.seasons.iter().enumerate() {
    let mean = standing
      .mean
      .map(|m| format!("{m:.2}/{}", Rating::MAX))
      .unwrap_or_else(|| "n/a".to_owned());
    let plural = if standing.peak_count == 1 { "" } else { "s" };
    out.push_str(&format!(
      "{}. {}: {mean} ({} fragrance{plural})\n",
      i + 1,
      standing.season.label(),
      standing.peak_count,
    ));
  }
  out
}

fn ranked_list(out: &mut String, title: &str, rows: &[(String, usize)], unit: &str, empty: &str) {
  out.push_str(title);
  out.push('\n');
  if rows.is_empty() {
    out.push_str(empty);
    out.push('\n');
  }
  for (i, (term, count)) in rows.iter().enumerate() {
    out.push_str(&format!("{}. {term} ({count} {unit})\n", i + 1));
  }
  out.push('\n');
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;
  use crate::{
    fragrance::{FragranceId, NewFragrance},
    stats::summarize,
  };

  fn aventus() -> Fragrance {
    let mut f = NewFragrance::new("Aventus", "Creed").into_fragrance(FragranceId(7), Utc::now());
    f.notes.top = vec!["Pineapple".into(), "Bergamot".into()];
    f.clone_of = None;
    f.size_ml = Some(100.0);
    f.seasons.fall = Rating::new(5).unwrap();
    f
  }

  #[test]
  fn detail_lists_notes_seasons_and_performance() {
    let text = detail_text(&aventus());
    assert!(text.starts_with("Creed Aventus\n"));
    assert!(text.contains("Size: 3.38 oz (100 ml)"));
    assert!(text.contains("TOP NOTES: Pineapple, Bergamot"));
    assert!(!text.contains("BASE NOTES"));
    assert!(text.contains("Fall: 5/5"));
    assert!(text.contains("Longevity: 3/5"));
    assert!(!text.contains("CLONE OF"));
  }

  #[test]
  fn detail_layout_is_exact() {
    let mut input = NewFragrance::new("Sauvage", "Dior");
    input.remarks = Some("Batch A12".into());
    let text = detail_text(&input.into_fragrance(FragranceId(1), Utc::now()));
    assert_eq!(
      text,
      "Dior Sauvage\n\
       Concentration: Eau de Toilette (EdT)\n\
       \n\
       Seasonality:\n\
       Spring: 3/5\n\
       Summer: 3/5\n\
       Fall: 3/5\n\
       Winter: 3/5\n\
       \n\
       Performance:\n\
       Longevity: 3/5\n\
       Sillage: 3/5\n\
       \n\
       Remarks: Batch A12\n"
    );
  }

  #[test]
  fn detail_mentions_clone_source() {
    let mut f = aventus();
    f.clone_of = Some("Original".into());
    assert!(detail_text(&f).contains("CLONE OF: Original"));
  }

  #[test]
  fn overview_ranks_seasons() {
    let text = overview_text(&summarize(&[aventus()]));
    assert!(text.contains("- Total Fragrances: 1"));
    assert!(text.contains("1. Creed (1 fragrances)"));
    assert!(text.contains("1. Fall: 5.00/5 (1 fragrance)"));
  }

  #[test]
  fn overview_of_empty_collection_has_placeholders() {
    let text = overview_text(&summarize(&[]));
    assert!(text.contains("No house data available"));
    assert!(text.contains("1. Spring: n/a (0 fragrances)"));
  }
}
