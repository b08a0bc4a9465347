//! Error types for `scent-core`.

use thiserror::Error;

use crate::fragrance::FragranceId;

#[derive(Debug, Error)]
pub enum Error {
  /// Bad input to create/update: empty required field, out-of-range rating.
  #[error("invalid fragrance: {0}")]
  Validation(String),

  #[error("fragrance not found: {0}")]
  NotFound(FragranceId),

  /// Malformed filter/sort specification.
  #[error("invalid query: {0}")]
  InvalidSpec(String),

  /// An export requested a field that is not a fragrance attribute.
  #[error("unknown export field: {0:?}")]
  InvalidField(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
