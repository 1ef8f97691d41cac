//! Error types for Boxer
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using BoxerError
pub type Result<T> = std::result::Result<T, BoxerError>;

/// Unified error type for Boxer operations
#[derive(Debug, Error)]
pub enum BoxerError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("key {0} not found")]
    KeyNotFound(String),

    /// The index pointed at a record holding a different key
    #[error("can't read key {expected}, read key {found} instead")]
    IncorrectKey { expected: String, found: String },

    #[error("can't open file {}, file not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("can't open snapshot file {}, file not found", .0.display())]
    SnapshotNotFound(PathBuf),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BoxerError {
    /// Whether this error is an expected miss rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, BoxerError::KeyNotFound(_))
    }
}
