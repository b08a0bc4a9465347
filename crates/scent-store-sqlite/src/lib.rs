//! SQLite backend for the scent fragrance catalogue.
//!
//! One `rusqlite` connection, used synchronously from a single thread.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
