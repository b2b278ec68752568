//! # System Lifecycle & Orchestration
//!
//! This module starts, wires and shuts down the store actors.
//!
//! ## Dependency Injection via Context
//!
//! The Cart store needs the Item store to refresh cart lines on load. Both actors are
//! created first, without dependencies, and the Item store client is injected when the
//! Cart store is started:
//!
//! ```rust,ignore
//! let (item_actor, item_store) = item_actor::new(32);
//! let (cart_actor, cart_store) = cart_actor::new(32);
//!
//! tokio::spawn(item_actor.run(()));
//! tokio::spawn(cart_actor.run(item_store.clone()));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for the actor tasks to finish
//!
//! The dependency graph is acyclic (carts depend on items, never the reverse), so channel
//! closure is enough to stop everything.

pub mod cart_system;
pub mod tracing;

pub use cart_system::CartSystem;
pub use self::tracing::setup_tracing;
