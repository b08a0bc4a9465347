//! Integration tests for `SqliteStore` against in-memory and on-disk
//! databases.

use scent_core::{
  fragrance::{Concentration, FragranceId, FragrancePatch, NewFragrance, Rating, Season},
  store::FragranceStore,
};

use crate::{Error, SqliteStore};

fn store() -> SqliteStore { SqliteStore::open_in_memory().expect("in-memory store") }

fn not_found(result: Result<impl Sized, Error>, expected: FragranceId) -> bool {
  matches!(result, Err(Error::Core(scent_core::Error::NotFound(id))) if id == expected)
}

fn rating(v: u8) -> Rating { Rating::new(v).unwrap() }

fn aventus() -> NewFragrance {
  let mut input = NewFragrance::new("Aventus", "Creed");
  input.concentration = Concentration::EdP;
  input.notes.top = vec!["Pineapple".into(), "Bergamot".into()];
  input.notes.base = vec!["Oakmoss".into()];
  input.seasons.fall = rating(5);
  input.longevity = rating(5);
  input.sillage = rating(4);
  input.size_ml = Some(100.0);
  input
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[test]
fn create_and_get() {
  let mut s = store();
  let created = s.create(aventus()).unwrap();
  assert_eq!(created.name, "Aventus");
  assert_eq!(created.created_at, created.updated_at);

  let fetched = s.get(created.id).unwrap();
  assert_eq!(fetched, created);
  assert_eq!(fetched.notes.top, vec!["Pineapple", "Bergamot"]);
  assert_eq!(fetched.concentration, Concentration::EdP);
  assert_eq!(fetched.size_ml, Some(100.0));
}

#[test]
fn unknown_concentration_survives_storage() {
  let mut s = store();
  let mut input = NewFragrance::new("Amber Oud", "Ajmal");
  input.concentration = Concentration::parse("Attar");
  let created = s.create(input).unwrap();
  assert_eq!(s.get(created.id).unwrap().concentration, Concentration::Other("Attar".into()));
}

#[test]
fn create_trims_text() {
  let mut s = store();
  let created = s.create(NewFragrance::new("  Sauvage ", "Dior ")).unwrap();
  assert_eq!(created.name, "Sauvage");
  assert_eq!(s.get(created.id).unwrap().house, "Dior");
}

#[test]
fn create_rejects_blank_name_without_writing() {
  let mut s = store();
  let err = s.create(NewFragrance::new("   ", "Creed")).unwrap_err();
  assert!(matches!(err, Error::Core(scent_core::Error::Validation(_))));
  assert!(s.list_all().unwrap().is_empty());
}

#[test]
fn get_missing_is_not_found() {
  let s = store();
  assert!(not_found(s.get(FragranceId(42)), FragranceId(42)));
}

// ─── Ids and ordering ────────────────────────────────────────────────────────

#[test]
fn ids_increase_and_list_is_in_insertion_order() {
  let mut s = store();
  let a = s.create(NewFragrance::new("Sauvage", "Dior")).unwrap();
  let b = s.create(NewFragrance::new("Aventus", "Creed")).unwrap();
  let c = s.create(NewFragrance::new("Hacivat", "Nishane")).unwrap();
  assert!(a.id < b.id && b.id < c.id);

  let names: Vec<String> = s.list_all().unwrap().into_iter().map(|f| f.name).collect();
  assert_eq!(names, vec!["Sauvage", "Aventus", "Hacivat"]);
}

#[test]
fn deleted_ids_are_never_reused() {
  let mut s = store();
  let first = s.create(NewFragrance::new("Sauvage", "Dior")).unwrap();
  let last = s.create(NewFragrance::new("Aventus", "Creed")).unwrap();
  s.delete(last.id).unwrap();

  let next = s.create(NewFragrance::new("Hacivat", "Nishane")).unwrap();
  assert!(next.id > last.id);
  assert!(next.id > first.id);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[test]
fn update_changes_only_patched_fields() {
  let mut s = store();
  let created = s.create(aventus()).unwrap();

  let patch = FragrancePatch {
    favorite: Some(true),
    remarks: Some(Some("Batch A12".into())),
    ..Default::default()
  }
  .with_season(Season::Winter, rating(4));
  let updated = s.update(created.id, patch).unwrap();

  assert!(updated.favorite);
  assert_eq!(updated.remarks.as_deref(), Some("Batch A12"));
  assert_eq!(updated.seasons.winter, rating(4));
  assert_eq!(updated.seasons.fall, created.seasons.fall);
  assert_eq!(updated.notes, created.notes);
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at >= created.updated_at);
  assert_eq!(s.get(created.id).unwrap(), updated);
}

#[test]
fn update_can_clear_optional_fields() {
  let mut s = store();
  let mut input = aventus();
  input.clone_of = Some("Something".into());
  let created = s.create(input).unwrap();

  let patch = FragrancePatch {
    clone_of: Some(None),
    size_ml: Some(None),
    ..Default::default()
  };
  let updated = s.update(created.id, patch).unwrap();
  assert_eq!(updated.clone_of, None);
  assert_eq!(updated.size_ml, None);
}

#[test]
fn empty_patch_leaves_record_untouched() {
  let mut s = store();
  let created = s.create(aventus()).unwrap();
  let same = s.update(created.id, FragrancePatch::default()).unwrap();
  assert_eq!(same, created);
  assert_eq!(s.get(created.id).unwrap().updated_at, created.updated_at);
}

#[test]
fn invalid_update_writes_nothing() {
  let mut s = store();
  let created = s.create(aventus()).unwrap();

  let patch = FragrancePatch {
    name: Some("  ".into()),
    favorite: Some(true),
    ..Default::default()
  };
  let err = s.update(created.id, patch).unwrap_err();
  assert!(matches!(err, Error::Core(scent_core::Error::Validation(_))));
  assert_eq!(s.get(created.id).unwrap(), created);
}

#[test]
fn update_missing_is_not_found() {
  let mut s = store();
  let patch = FragrancePatch { favorite: Some(true), ..Default::default() };
  assert!(not_found(s.update(FragranceId(7), patch), FragranceId(7)));
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[test]
fn delete_then_get_is_not_found() {
  let mut s = store();
  let created = s.create(aventus()).unwrap();
  s.delete(created.id).unwrap();
  assert!(not_found(s.get(created.id), created.id));
  assert!(s.list_all().unwrap().is_empty());
}

#[test]
fn delete_missing_is_not_found() {
  let mut s = store();
  assert!(not_found(s.delete(FragranceId(1)), FragranceId(1)));
}

// ─── Persistence and migration ───────────────────────────────────────────────

#[test]
fn records_survive_reopen() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("fragrances.db");

  let created = {
    let mut s = SqliteStore::open(&path).unwrap();
    s.create(aventus()).unwrap()
  };

  let s = SqliteStore::open(&path).unwrap();
  assert_eq!(s.get(created.id).unwrap(), created);
}

#[test]
fn older_file_gains_missing_columns() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("old.db");

  {
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn
      .execute_batch(
        "CREATE TABLE fragrances (
           id             INTEGER PRIMARY KEY AUTOINCREMENT,
           name           TEXT    NOT NULL,
           house          TEXT    NOT NULL,
           concentration  TEXT    NOT NULL DEFAULT 'EdT',
           clone_of       TEXT,
           top_notes      TEXT    NOT NULL DEFAULT '[]',
           middle_notes   TEXT    NOT NULL DEFAULT '[]',
           base_notes     TEXT    NOT NULL DEFAULT '[]',
           spring_rating  INTEGER NOT NULL DEFAULT 3,
           summer_rating  INTEGER NOT NULL DEFAULT 3,
           fall_rating    INTEGER NOT NULL DEFAULT 3,
           winter_rating  INTEGER NOT NULL DEFAULT 3,
           longevity      INTEGER NOT NULL DEFAULT 3,
           sillage        INTEGER NOT NULL DEFAULT 3,
           created_at     TEXT    NOT NULL,
           updated_at     TEXT    NOT NULL
         );
         INSERT INTO fragrances (name, house, created_at, updated_at)
         VALUES ('Sauvage', 'Dior', '2024-01-01T00:00:00+00:00', '2024-01-01T00:00:00+00:00');",
      )
      .unwrap();
  }

  let mut s = SqliteStore::open(&path).unwrap();
  let all = s.list_all().unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].name, "Sauvage");
  assert!(!all[0].favorite);
  assert_eq!(all[0].remarks, None);
  assert_eq!(all[0].size_ml, None);

  let patch = FragrancePatch { favorite: Some(true), ..Default::default() };
  assert!(s.update(all[0].id, patch).unwrap().favorite);
}

// ─── Store feeding the pure engines ──────────────────────────────────────────

#[test]
fn summary_of_single_stored_record() {
  let mut s = store();
  let mut input = NewFragrance::new("Aventus", "Creed");
  input.longevity = rating(5);
  input.sillage = rating(4);
  input.seasons.fall = rating(5);
  input.seasons.winter = rating(4);
  input.seasons.summer = rating(1);
  input.seasons.spring = rating(2);
  input.favorite = true;
  s.create(input).unwrap();

  let snap = scent_core::stats::summarize(&s.list_all().unwrap());
  assert_eq!(snap.total, 1);
  assert_eq!(snap.distinct_houses, 1);
  assert_eq!(snap.top_houses, vec![("Creed".to_owned(), 1)]);
  assert_eq!(snap.seasons[0].season, Season::Fall);
}

#[test]
fn sort_ties_fall_back_to_id_order() {
  use scent_core::query::{QuerySpec, Sort, SortKey, apply};

  let mut s = store();
  for name in ["Sauvage", "Aventus", "Hacivat"] {
    s.create(NewFragrance::new(name, "Same House")).unwrap();
  }
  let spec = QuerySpec { sort: Some(Sort::desc(SortKey::House)), ..Default::default() };
  let names: Vec<String> = apply(&s.list_all().unwrap(), &spec)
    .unwrap()
    .into_iter()
    .map(|f| f.name)
    .collect();
  assert_eq!(names, vec!["Sauvage", "Aventus", "Hacivat"]);
}
