//! SQL schema for the scent SQLite store.
//!
//! Executed at every connection startup. Columns introduced after the first
//! release are listed in [`ADDITIVE_COLUMNS`] and added in place when an older
//! file is opened; existing rows pick up the column default.

/// Bumped whenever [`ADDITIVE_COLUMNS`] grows.
pub const SCHEMA_VERSION: i64 = 2;

/// Base DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids strictly increasing even after the newest row is
-- deleted.
CREATE TABLE IF NOT EXISTS fragrances (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT    NOT NULL,
    house          TEXT    NOT NULL,
    concentration  TEXT    NOT NULL DEFAULT 'EdT',
    clone_of       TEXT,
    top_notes      TEXT    NOT NULL DEFAULT '[]',   -- JSON array of strings
    middle_notes   TEXT    NOT NULL DEFAULT '[]',
    base_notes     TEXT    NOT NULL DEFAULT '[]',
    spring_rating  INTEGER NOT NULL DEFAULT 3,
    summer_rating  INTEGER NOT NULL DEFAULT 3,
    fall_rating    INTEGER NOT NULL DEFAULT 3,
    winter_rating  INTEGER NOT NULL DEFAULT 3,
    longevity      INTEGER NOT NULL DEFAULT 3,
    sillage        INTEGER NOT NULL DEFAULT 3,
    created_at     TEXT    NOT NULL,              -- RFC 3339 UTC
    updated_at     TEXT    NOT NULL
);

CREATE INDEX IF NOT EXISTS fragrances_house ON fragrances(house);
";

/// `(column, definition)` pairs added by `ALTER TABLE` when missing.
pub const ADDITIVE_COLUMNS: &[(&str, &str)] = &[
  ("is_favorite", "INTEGER NOT NULL DEFAULT 0"),
  ("remarks", "TEXT"),
  ("size_ml", "REAL"),
];

/// Column list shared by every `SELECT`, in [`crate::encode::RawFragrance`]
/// field order.
pub const COLUMNS: &str = "id, name, house, concentration, clone_of, top_notes, middle_notes, \
  base_notes, spring_rating, summer_rating, fall_rating, winter_rating, longevity, sillage, \
  is_favorite, remarks, size_ml, created_at, updated_at";
