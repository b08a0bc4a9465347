//! Collection-wide statistics.
//!
//! [`summarize`] is pure and recomputed on demand; nothing is cached between
//! calls, so the caller re-runs it after every change to the store.

use std::collections::HashMap;

use serde::Serialize;

use crate::fragrance::{Fragrance, Season};

pub const DEFAULT_TOP_HOUSES: usize = 3;
pub const DEFAULT_TOP_NOTES: usize = 10;

/// How many entries the top-N lists keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOptions {
  pub top_houses: usize,
  pub top_notes:  usize,
}

impl Default for StatsOptions {
  fn default() -> Self {
    Self { top_houses: DEFAULT_TOP_HOUSES, top_notes: DEFAULT_TOP_NOTES }
  }
}

/// Aggregate rating for one season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonStanding {
  pub season:     Season,
  /// Mean rating across the collection; `None` when there are no ratings.
  pub mean:       Option<f64>,
  /// Fragrances whose best season is this one. A fragrance tied across
  /// several seasons counts toward each of them.
  pub peak_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
  pub total:              usize,
  pub distinct_houses:    usize,
  /// `(house, count)`, most common first.
  pub top_houses:         Vec<(String, usize)>,
  /// `(note, occurrences)` across every layer of every fragrance.
  pub top_notes:          Vec<(String, usize)>,
  /// Same as `top_notes`, restricted to favourites.
  pub top_favorite_notes: Vec<(String, usize)>,
  /// Seasons ranked by mean rating, best first.
  pub seasons:            Vec<SeasonStanding>,
}

pub fn summarize(records: &[Fragrance]) -> Snapshot {
  summarize_with(records, &StatsOptions::default())
}

pub fn summarize_with(records: &[Fragrance], options: &StatsOptions) -> Snapshot {
  let top_houses = tally(records.iter().map(|f| f.house.as_str()), usize::MAX);
  let distinct_houses = top_houses.len();

  Snapshot {
    total: records.len(),
    distinct_houses,
    top_houses: top_houses.into_iter().take(options.top_houses).collect(),
    top_notes: tally(records.iter().flat_map(|f| f.notes.all()), options.top_notes),
    top_favorite_notes: tally(
      records.iter().filter(|f| f.favorite).flat_map(|f| f.notes.all()),
      options.top_notes,
    ),
    seasons: rank_seasons(records),
  }
}

/// Frequency count grouped case-insensitively, keeping the first-seen casing.
/// Sorted by count descending, ties alphabetical.
fn tally<'a>(terms: impl Iterator<Item = &'a str>, limit: usize) -> Vec<(String, usize)> {
  let mut counts: HashMap<String, (String, usize)> = HashMap::new();
  for term in terms.map(str::trim).filter(|t| !t.is_empty()) {
    counts
      .entry(term.to_lowercase())
      .or_insert_with(|| (term.to_owned(), 0))
      .1 += 1;
  }

  let mut ranked: Vec<(String, String, usize)> = counts
    .into_iter()
    .map(|(key, (shown, count))| (key, shown, count))
    .collect();
  ranked.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));

  ranked
    .into_iter()
    .take(limit)
    .map(|(_, shown, count)| (shown, count))
    .collect()
}

fn rank_seasons(records: &[Fragrance]) -> Vec<SeasonStanding> {
  let mut standings: Vec<SeasonStanding> = Season::all()
    .map(|season| {
      let sum: u32 = records.iter().map(|f| u32::from(f.seasons.get(season).get())).sum();
      let mean = (!records.is_empty()).then(|| f64::from(sum) / records.len() as f64);
      let peak_count = records
        .iter()
        .filter(|f| f.seasons.get(season) == f.seasons.peak())
        .count();
      SeasonStanding { season, mean, peak_count }
    })
    .collect();

  // Stable: equal means stay in canonical season order.
  standings.sort_by(|a, b| match (a.mean, b.mean) {
    (Some(x), Some(y)) => y.total_cmp(&x),
    (Some(_), None) => std::cmp::Ordering::Less,
    (None, Some(_)) => std::cmp::Ordering::Greater,
    (None, None) => std::cmp::Ordering::Equal,
  });
  standings
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;
  use crate::fragrance::{FragranceId, NewFragrance, Rating};

  fn rating(v: u8) -> Rating { Rating::new(v).unwrap() }

  fn fragrance(id: i64, name: &str, house: &str) -> Fragrance {
    NewFragrance::new(name, house).into_fragrance(FragranceId(id), Utc::now())
  }

  fn aventus() -> Fragrance {
    let mut f = fragrance(1, "Aventus", "Creed");
    f.longevity = rating(5);
    f.sillage = rating(4);
    f.seasons.fall = rating(5);
    f.seasons.winter = rating(4);
    f.seasons.summer = rating(1);
    f.seasons.spring = rating(2);
    f.favorite = true;
    f
  }

  #[test]
  fn single_record_snapshot() {
    let snap = summarize(&[aventus()]);
    assert_eq!(snap.total, 1);
    assert_eq!(snap.distinct_houses, 1);
    assert_eq!(snap.top_houses, vec![("Creed".to_owned(), 1)]);
    assert_eq!(snap.seasons[0].season, Season::Fall);
    assert_eq!(snap.seasons[0].mean, Some(5.0));
    assert_eq!(snap.seasons[0].peak_count, 1);
    let order: Vec<Season> = snap.seasons.iter().map(|s| s.season).collect();
    assert_eq!(order, vec![Season::Fall, Season::Winter, Season::Spring, Season::Summer]);
  }

  #[test]
  fn empty_collection_keeps_every_season() {
    let snap = summarize(&[]);
    assert_eq!(snap.total, 0);
    assert_eq!(snap.distinct_houses, 0);
    assert!(snap.top_houses.is_empty());
    assert_eq!(snap.seasons.len(), 4);
    assert!(snap.seasons.iter().all(|s| s.mean.is_none() && s.peak_count == 0));
    assert_eq!(snap.seasons[0].season, Season::Spring);
  }

  #[test]
  fn houses_are_counted_case_insensitively() {
    let records = vec![
      fragrance(1, "Aventus", "Creed"),
      fragrance(2, "Green Irish Tweed", "creed"),
      fragrance(3, "Sauvage", "Dior"),
      fragrance(4, "Club de Nuit Intense", "Armaf"),
      fragrance(5, "Fahrenheit", "Dior"),
      fragrance(6, "Hacivat", "Nishane"),
    ];
    let snap = summarize(&records);
    assert_eq!(snap.distinct_houses, 4);
    assert_eq!(
      snap.top_houses,
      vec![("Creed".to_owned(), 2), ("Dior".to_owned(), 2), ("Armaf".to_owned(), 1)]
    );
  }

  #[test]
  fn notes_tally_ties_break_alphabetically() {
    let mut a = fragrance(1, "A", "X");
    a.notes.top = vec!["Vanilla".into(), "Bergamot".into()];
    a.favorite = true;
    let mut b = fragrance(2, "B", "X");
    b.notes.base = vec!["vanilla".into(), "Amber".into()];

    let snap = summarize_with(&[a, b], &StatsOptions { top_houses: 3, top_notes: 2 });
    assert_eq!(
      snap.top_notes,
      vec![("Vanilla".to_owned(), 2), ("Amber".to_owned(), 1)]
    );
    assert_eq!(
      snap.top_favorite_notes,
      vec![("Bergamot".to_owned(), 1), ("Vanilla".to_owned(), 1)]
    );
  }

  #[test]
  fn peak_ties_count_toward_each_season() {
    let mut f = fragrance(1, "A", "X");
    f.seasons.spring = rating(4);
    f.seasons.summer = rating(4);
    f.seasons.fall = rating(1);
    f.seasons.winter = rating(1);
    let snap = summarize(&[f]);
    let peaks: HashMap<Season, usize> =
      snap.seasons.iter().map(|s| (s.season, s.peak_count)).collect();
    assert_eq!(peaks[&Season::Spring], 1);
    assert_eq!(peaks[&Season::Summer], 1);
    assert_eq!(peaks[&Season::Fall], 0);
  }
}
