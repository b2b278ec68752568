//! Caller-facing cart and item operations.
//!
//! Each method builds the resources it needs for one request, runs the operation and lets
//! every error bubble up as a [`ResourceError`](crate::resource::ResourceError). A
//! transport layer sits on top of these and decides how errors are presented.

pub mod carts;
pub mod items;

pub use carts::CartService;
pub use items::ItemService;
