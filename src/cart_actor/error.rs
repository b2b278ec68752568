//! Error types for the Cart store.

use crate::framework::StoreError;
use thiserror::Error;

/// Errors that can occur while saving or loading a cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// Every cart must belong to someone.
    #[error("Cart has no customer id")]
    MissingCustomerId,

    /// The item store failed while the cart's lines were being refreshed.
    #[error("Failed to resolve cart items: {0}")]
    ItemResolution(#[from] StoreError),
}
