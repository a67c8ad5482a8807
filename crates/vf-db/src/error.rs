//! Error types for vf-db

use thiserror::Error;

/// Sheet loading errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Data file missing (D002)
    #[error("[D002] Data file not found: {0}")]
    FileNotFound(String),

    /// Sheet could not be read (D003)
    #[error("[D003] Failed to read '{path}': {message}")]
    ReadError { path: String, message: String },

    /// DuckDB extension could not be installed or loaded (D004)
    #[error("[D004] DuckDB extension '{name}' unavailable: {message}")]
    ExtensionUnavailable { name: String, message: String },

    /// Mutex poisoned (D005)
    #[error("[D005] Database mutex poisoned: {0}")]
    MutexPoisoned(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

