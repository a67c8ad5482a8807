//! vf-core - Core library for Vehicle Finder
//!
//! This crate turns raw spreadsheet rows into a normalized flat/vehicle
//! relation and answers live lookups against it by flat, vehicle number,
//! or vehicle model. It also owns the `vehicle-finder.yml` configuration.

pub mod cell;
pub mod config;
pub mod error;
pub mod relation;
pub mod search;
pub mod vehicle_number;

pub use cell::{Cell, RawRow};
pub use config::{Config, DataConfig, SearchConfig, SourceFormat};
pub use error::{CoreError, CoreResult};
pub use relation::{FlatRecord, Relation, Vehicle};
pub use search::{
    normalize_query, search, search_with, MatchResult, ModelHit, SearchOptions,
    DEFAULT_PARTIAL_MATCH_LENGTH,
};
pub use vehicle_number::VehicleNumber;
