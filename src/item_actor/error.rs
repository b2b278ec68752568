//! Error types for the Item store.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons an [`Item`](crate::model::Item) is rejected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    /// The item has no catalogue item id.
    #[error("Item Id must not be null")]
    MissingItemId,

    /// Quantities start at one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Unit price must not be negative: {0}")]
    NegativePrice(Decimal),
}
