//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format without the module prefix (`with_target(false)`).
//! `RUST_LOG` wins when set; otherwise the filter passed in (usually
//! [`CartConfig::log_filter`](crate::config::CartConfig::log_filter)) is used.
//!
//! ```bash
//! # Store lifecycle and mutations
//! RUST_LOG=info cargo run
//!
//! # Full payloads at every entry point
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: `Actor started` and `Shutdown` with the final collection size
//! - **Mutations**: `Saved`, `Deleted`, `Created cart`, `Item added to cart`, …
//! - **Request Flow**: one span per service call, carrying `customer_id` and `item_id`
//!
//! With `RUST_LOG=info` a first add to an empty cart looks like:
//!
//! ```text
//! INFO Actor started collection="item"
//! INFO Actor started collection="cart"
//! INFO add{customer_id=alice item_id=sock-1}: Saved collection="cart" id=cart_1 size=1
//! INFO add{customer_id=alice item_id=sock-1}: Created cart customer_id=alice id=Some(StorageId("cart_1"))
//! INFO add{customer_id=alice item_id=sock-1}: Saved collection="item" id=item_1 size=1
//! INFO add{customer_id=alice item_id=sock-1}: Saved collection="cart" id=cart_1 size=1
//! INFO add{customer_id=alice item_id=sock-1}: Item added to cart id=Some(StorageId("item_1"))
//! ```
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
