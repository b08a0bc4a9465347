//! The `FragranceStore` trait.
//!
//! Implemented by storage backends (e.g. `scent-store-sqlite`). The CLI and
//! any other front end depend on this abstraction, not on a concrete backend.

use crate::fragrance::{Fragrance, FragranceId, FragrancePatch, NewFragrance};

/// Abstraction over the durable record store.
///
/// Access is synchronous and single-threaded: writers take `&mut self`, so
/// the borrow checker rules out concurrent mutation.
pub trait FragranceStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Validate and persist a new fragrance, returning it with its fresh id.
  fn create(&mut self, input: NewFragrance) -> Result<Fragrance, Self::Error>;

  /// Apply a partial update atomically and return the resulting record.
  ///
  /// Fails if `id` is unknown or the merged record is invalid; in both cases
  /// nothing is written. An empty patch writes nothing.
  fn update(
    &mut self,
    id: FragranceId,
    patch: FragrancePatch,
  ) -> Result<Fragrance, Self::Error>;

  /// Remove a fragrance. Its id never satisfies a later lookup.
  fn delete(&mut self, id: FragranceId) -> Result<(), Self::Error>;

  /// Fetch one fragrance; unknown ids are an error, not `None`.
  fn get(&self, id: FragranceId) -> Result<Fragrance, Self::Error>;

  /// Every stored fragrance, in insertion order.
  fn list_all(&self) -> Result<Vec<Fragrance>, Self::Error>;
}
