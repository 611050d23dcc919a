//! Error types for unit tree mutations and data loading

use thiserror::Error;

/// Main error type for unit tree operations.
///
/// Permission denials are never reported through this type: a denied check
/// is simply `false`.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Unit '{0}' not found in tree")]
    UnitNotFound(String),

    #[error("Duplicate unit id '{0}' already exists")]
    DuplicateId(String),

    #[error("Invalid path for unit '{id}': {reason}")]
    InvalidPath { id: String, reason: String },

    #[error("Unit name must not be empty")]
    EmptyName,

    #[error("Invalid panel configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for unit tree operations
pub type TreeResult<T> = Result<T, TreeError>;
