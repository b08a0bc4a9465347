//! [`SqliteStore`], the SQLite implementation of [`FragranceStore`].

use std::{collections::HashSet, path::Path};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension as _, params};
use tracing::{debug, info};

use scent_core::{
  fragrance::{Fragrance, FragranceId, FragrancePatch, NewFragrance},
  store::FragranceStore,
};

use crate::{
  Error, Result,
  encode::{EncodedFragrance, RawFragrance},
  schema::{ADDITIVE_COLUMNS, COLUMNS, SCHEMA, SCHEMA_VERSION},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A fragrance catalogue backed by a single SQLite file.
pub struct SqliteStore {
  conn: Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and bring its schema up to date.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening fragrance store");
    let mut store = Self { conn: Connection::open(path)? };
    store.init_schema()?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub fn open_in_memory() -> Result<Self> {
    let mut store = Self { conn: Connection::open_in_memory()? };
    store.init_schema()?;
    Ok(store)
  }

  fn init_schema(&mut self) -> Result<()> {
    self.conn.execute_batch(SCHEMA)?;

    let present = table_columns(&self.conn, "fragrances")?;
    let tx = self.conn.transaction()?;
    for (column, definition) in ADDITIVE_COLUMNS {
      if !present.contains(*column) {
        info!(column, "adding missing column to fragrances");
        tx.execute_batch(&format!(
          "ALTER TABLE fragrances ADD COLUMN {column} {definition};"
        ))?;
      }
    }
    tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tx.commit()?;
    Ok(())
  }
}

fn table_columns(conn: &Connection, table: &str) -> Result<HashSet<String>> {
  let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
  let names = stmt
    .query_map([], |row| row.get::<_, String>(1))?
    .collect::<rusqlite::Result<HashSet<_>>>()?;
  Ok(names)
}

fn not_found(id: FragranceId) -> Error { scent_core::Error::NotFound(id).into() }

fn select_one(conn: &Connection, id: FragranceId) -> Result<Option<Fragrance>> {
  let raw = conn
    .query_row(
      &format!("SELECT {COLUMNS} FROM fragrances WHERE id = ?1"),
      params![id.0],
      RawFragrance::from_row,
    )
    .optional()?;
  raw.map(RawFragrance::into_fragrance).transpose()
}

// ─── FragranceStore impl ─────────────────────────────────────────────────────

impl FragranceStore for SqliteStore {
  type Error = Error;

  fn create(&mut self, input: NewFragrance) -> Result<Fragrance> {
    let input = input.validated()?;
    // The placeholder id is replaced by the row id once inserted.
    let draft = input.into_fragrance(FragranceId(0), Utc::now());
    let e = EncodedFragrance::encode(&draft)?;

    self.conn.execute(
      &format!(
        "INSERT INTO fragrances ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, \
         ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
        COLUMNS.trim_start_matches("id, ")
      ),
      params![
        e.name,
        e.house,
        e.concentration,
        e.clone_of,
        e.top_notes,
        e.middle_notes,
        e.base_notes,
        e.spring,
        e.summer,
        e.fall,
        e.winter,
        e.longevity,
        e.sillage,
        e.favorite,
        e.remarks,
        e.size_ml,
        e.created_at,
        e.updated_at,
      ],
    )?;

    let id = FragranceId(self.conn.last_insert_rowid());
    debug!(%id, name = %draft.name, house = %draft.house, "created fragrance");
    Ok(Fragrance { id, ..draft })
  }

  fn update(&mut self, id: FragranceId, patch: FragrancePatch) -> Result<Fragrance> {
    let tx = self.conn.transaction()?;
    let current = select_one(&tx, id)?.ok_or_else(|| not_found(id))?;
    if patch.is_empty() {
      return Ok(current);
    }

    let mut updated = current.patched(patch)?;
    updated.updated_at = Utc::now();
    let e = EncodedFragrance::encode(&updated)?;

    tx.execute(
      "UPDATE fragrances SET
         name = ?2, house = ?3, concentration = ?4, clone_of = ?5,
         top_notes = ?6, middle_notes = ?7, base_notes = ?8,
         spring_rating = ?9, summer_rating = ?10, fall_rating = ?11, winter_rating = ?12,
         longevity = ?13, sillage = ?14, is_favorite = ?15, remarks = ?16, size_ml = ?17,
         updated_at = ?18
       WHERE id = ?1",
      params![
        id.0,
        e.name,
        e.house,
        e.concentration,
        e.clone_of,
        e.top_notes,
        e.middle_notes,
        e.base_notes,
        e.spring,
        e.summer,
        e.fall,
        e.winter,
        e.longevity,
        e.sillage,
        e.favorite,
        e.remarks,
        e.size_ml,
        e.updated_at,
      ],
    )?;
    tx.commit()?;

    debug!(%id, "updated fragrance");
    Ok(updated)
  }

  fn delete(&mut self, id: FragranceId) -> Result<()> {
    let n = self
      .conn
      .execute("DELETE FROM fragrances WHERE id = ?1", params![id.0])?;
    if n == 0 {
      return Err(not_found(id));
    }
    debug!(%id, "deleted fragrance");
    Ok(())
  }

  fn get(&self, id: FragranceId) -> Result<Fragrance> {
    select_one(&self.conn, id)?.ok_or_else(|| not_found(id))
  }

  fn list_all(&self) -> Result<Vec<Fragrance>> {
    let mut stmt = self
      .conn
      .prepare(&format!("SELECT {COLUMNS} FROM fragrances ORDER BY id"))?;
    let raws = stmt
      .query_map([], RawFragrance::from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    raws.into_iter().map(RawFragrance::into_fragrance).collect()
  }
}
