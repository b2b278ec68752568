//! # Item Actor
//!
//! This module implements the Item store, the collection every cart line is persisted in.
//!
//! ## Structure
//!
//! - [`document`] - [`Document`](crate::framework::Document) implementation for [`Item`]
//! - [`error`] - [`ItemError`] type for validation failures
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use cart_resource::clients::DocumentStore;
//! use cart_resource::item_actor;
//! use cart_resource::model::Item;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, store) = item_actor::new(32);
//!
//!     // No dependencies, so context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let saved = store.save(Item::from_id("sock-1")).await?;
//!     assert_eq!(saved.id().map(|id| id.as_str()), Some("item_1"));
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;

pub use error::*;

use crate::clients::ItemStore;
use crate::framework::StoreActor;
use crate::model::Item;

/// Creates a new Item actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Item>, ItemStore) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    (actor, ItemStore::new(generic_client))
}
