//! # Resources
//!
//! A resource binds a logical key (a customer id, a stored item) to the aggregate it
//! addresses and exposes that aggregate's lifecycle. The contract is split into capability
//! traits so that each resource implements only what it supports:
//!
//! | Trait | Operations | Implemented by |
//! |-------|------------|----------------|
//! | [`Resource`] | `create`, `value`, `destroy` | [`CartResource`], [`ItemResource`] |
//! | [`Merge`] | `merge` | [`CartResource`], [`ItemResource`] |
//! | [`Contents`] | `contents` | [`CartContents`] |
//! | [`ContentsMut`] | `add`, `delete` | [`CartContents`] |
//!
//! Resources are request scoped. Build one at the start of an operation, use it, drop it.
//!
//! ```rust
//! use cart_resource::clients::CartStore;
//! use cart_resource::resource::{CartResource, ContentsMut, Resource, ResourceError};
//! use cart_resource::model::Item;
//!
//! async fn add_line(carts: CartStore) -> Result<(), ResourceError> {
//!     let mut cart = CartResource::new(carts, "alice");
//!     cart.contents().add(Item::from_id("sock-1")).await?;
//!     assert_eq!(cart.value().await?.items().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod cart;
pub mod contents;
pub mod error;
pub mod found_item;
pub mod item;

pub use cart::CartResource;
pub use contents::CartContents;
pub use error::ResourceError;
pub use found_item::FoundItem;
pub use item::ItemResource;

use async_trait::async_trait;

/// Lifecycle of an aggregate addressed by a key.
#[async_trait]
pub trait Resource: Send {
    type Value: Send;

    /// Builds a new aggregate for the key without looking for an existing one.
    async fn create(&mut self) -> Result<Self::Value, ResourceError>;

    /// The existing aggregate for the key, created first if there is none.
    async fn value(&mut self) -> Result<Self::Value, ResourceError>;

    /// Removes the aggregate from its store. Does nothing if there is none.
    async fn destroy(&mut self) -> Result<(), ResourceError>;
}

/// Resources that can fold another instance of their aggregate into themselves.
#[async_trait]
pub trait Merge: Resource {
    /// Combines `other` into the addressed aggregate and returns the persisted result.
    async fn merge(&mut self, other: Self::Value) -> Result<Self::Value, ResourceError>;
}

/// Read access to a collection held by an aggregate.
#[async_trait]
pub trait Contents: Send {
    type Item: Send + Sync;

    /// The collection as it is at call time.
    async fn contents(&mut self) -> Result<Vec<Self::Item>, ResourceError>;
}

/// Write access to a collection held by an aggregate.
#[async_trait]
pub trait ContentsMut: Contents {
    /// Appends `item`. Does not check for an equal element already present.
    async fn add(&mut self, item: Self::Item) -> Result<(), ResourceError>;

    /// Removes the first element equal to `item`. Does nothing if there is none.
    async fn delete(&mut self, item: &Self::Item) -> Result<(), ResourceError>;
}
