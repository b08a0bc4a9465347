//! Core types and operations for the scent fragrance catalogue.
//!
//! This crate is free of database and I/O dependencies. It holds the data
//! model, the [`store::FragranceStore`] abstraction, and the pure functions
//! that work over a loaded collection: querying, statistics, autocompletion
//! vocabulary and text rendering.
//!
//! Everything here assumes a personal-scale collection (a few hundred
//! records). Queries, statistics and suggestions are linear scans over a
//! `Vec`; there is no index structure.

pub mod error;
pub mod field;
pub mod fragrance;
pub mod query;
pub mod render;
pub mod stats;
pub mod store;
pub mod suggest;
pub mod theme;

pub use error::{Error, Result};
