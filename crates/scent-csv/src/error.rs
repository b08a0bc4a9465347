//! Error types for the scent-csv exporter.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Unknown or empty field selection.
  #[error(transparent)]
  Core(#[from] scent_core::Error),

  #[error("CSV error: {0}")]
  Csv(#[from] csv::Error),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("export is not valid UTF-8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
