//! Error types for pixmon-core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Snapshot not loaded
    NotLoaded,
    /// Record not found
    RecordNotFound,
    /// Store failure
    StoreFailure,
    /// Row failed to deserialize
    InvalidRow,
    /// Internal error
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::NotLoaded => write!(f, "NOT_LOADED"),
            ErrorCode::RecordNotFound => write!(f, "RECORD_NOT_FOUND"),
            ErrorCode::StoreFailure => write!(f, "STORE_FAILURE"),
            ErrorCode::InvalidRow => write!(f, "INVALID_ROW"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Core errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Snapshot not loaded")]
    NotLoaded,

    #[error("Record not found in {collection}: {id}")]
    RecordNotFound { collection: String, id: String },

    #[error("Store failure: {0}")]
    StoreFailure(#[from] pixmon_store::StoreError),

    #[error("Invalid row in {collection}: {message}")]
    InvalidRow { collection: String, message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::NotLoaded => ErrorCode::NotLoaded,
            CoreError::RecordNotFound { .. } => ErrorCode::RecordNotFound,
            CoreError::StoreFailure(_) => ErrorCode::StoreFailure,
            CoreError::InvalidRow { .. } => ErrorCode::InvalidRow,
            CoreError::InternalError { .. } => ErrorCode::InternalError,
        }
    }
}
