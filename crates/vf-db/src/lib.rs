//! vf-db - Sheet loading layer for Vehicle Finder
//!
//! This crate provides the `RowSource` trait that delivers raw rows to the
//! relation builder, and a DuckDB-backed implementation that reads csv and
//! xlsx files.

pub mod duckdb;
pub mod error;
pub mod source;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use source::DataSource;
pub use traits::RowSource;
