//! # Cart Actor
//!
//! This module implements the Cart store, holding at most one cart per customer id.
//!
//! ## Overview
//!
//! Unlike the Item store, the Cart store has a dependency: it receives an
//! [`ItemStore`](crate::clients::ItemStore) as its context so that loading a cart can
//! refresh the lines it references.
//!
//! ## Structure
//!
//! - [`document`] - [`Document`](crate::framework::Document) implementation for [`Cart`]
//! - [`error`] - [`CartError`] type
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use cart_resource::clients::DocumentStore;
//! use cart_resource::model::Cart;
//! use cart_resource::{cart_actor, item_actor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (item_actor, items) = item_actor::new(32);
//!     let (cart_actor, carts) = cart_actor::new(32);
//!
//!     // The cart store gets the item store it depends on
//!     tokio::spawn(item_actor.run(()));
//!     tokio::spawn(cart_actor.run(items));
//!
//!     carts.save(Cart::new("alice")?).await?;
//!     assert!(carts.find_by_customer_id("alice").await?.is_some());
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;

pub use error::*;

use crate::clients::CartStore;
use crate::framework::StoreActor;
use crate::model::Cart;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Cart>, CartStore) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    (actor, CartStore::new(generic_client))
}
