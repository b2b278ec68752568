//! Pure data structures implementing the [`Document`](crate::framework::Document) trait.

pub mod cart;
pub mod ids;
pub mod item;

pub use cart::*;
pub use ids::*;
pub use item::*;
