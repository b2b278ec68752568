//! # Store Errors
//!
//! Common error type returned by every store operation. Documents that reject
//! a save or fail to load surface through [`StoreError::Document`].

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable")]
    Unavailable,
    #[error("Store dropped response channel")]
    Dropped,
    #[error("Key already stored: {0}")]
    DuplicateKey(String),
    #[error("Document error: {0}")]
    Document(Box<dyn std::error::Error + Send + Sync>),
}
