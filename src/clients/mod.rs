//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient).

pub mod cart_store;
pub mod document_store;
pub mod item_store;

pub use cart_store::*;
pub use document_store::*;
pub use item_store::*;
