//! Error types for pixmon-store

use thiserror::Error;

/// Errors produced while fetching collection rows
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Collection not found: {collection}")]
    CollectionNotFound { collection: String },

    #[error("Invalid data in collection {collection}: {message}")]
    InvalidFormat { collection: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
