//! Error type shared by every resource operation.

use crate::cart_actor::CartError;
use crate::framework::StoreError;
use crate::item_actor::ItemError;
use thiserror::Error;

/// Failures surfaced by resources and the services built on them.
///
/// Store failures pass through unchanged; nothing at this layer retries.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An identity lookup found no matching line.
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Item(#[from] ItemError),
}
