//! Platform error types

use thiserror::Error;

/// Capability-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Failed to read a value from storage
    #[error("storage read failed for key `{key}`: {reason}")]
    StorageRead { key: String, reason: String },

    /// Failed to write a value to storage
    #[error("storage write failed for key `{key}`: {reason}")]
    StorageWrite { key: String, reason: String },

    /// Failed to flush a durable storage table to disk
    #[error("storage flush failed at {path}: {reason}")]
    StorageFlush { path: String, reason: String },
}

/// Result type for capability operations
pub type Result<T> = std::result::Result<T, PlatformError>;
