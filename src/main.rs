//! # Cart Resource Demo
//!
//! Walks a shopper through an anonymous session, a login and a merge:
//! 1.  Setting up the [`CartSystem`].
//! 2.  Adding items to a session cart (one of them twice).
//! 3.  Adding an item to the customer's own cart.
//! 4.  Merging the session cart into the customer cart at login.
//! 5.  Removing a line and shutting down.

use cart_resource::config::CartConfig;
use cart_resource::lifecycle::{setup_tracing, CartSystem};
use cart_resource::model::{CustomerId, Item, ItemId};
use rust_decimal::Decimal;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    setup_tracing(&config.log_filter);

    info!(buffer = config.store_buffer_size, "Starting cart system");
    let system = CartSystem::new(&config);

    let session = CustomerId::new("session-7f3a");
    let customer = CustomerId::new("alice");

    {
        let carts = system.carts();
        let items = system.items();

        let span = tracing::info_span!("anonymous_session");
        async {
            items
                .add(&session, Item::new("sock-blue", 1, Decimal::new(1250, 2))?)
                .await?;
            items
                .add(&session, Item::new("sock-red", 1, Decimal::new(1100, 2))?)
                .await?;
            let again = items
                .add(&session, Item::new("sock-blue", 1, Decimal::new(1250, 2))?)
                .await?;
            info!(quantity = again.quantity(), "Added sock-blue twice");
            Ok::<_, Box<dyn std::error::Error>>(())
        }
        .instrument(span)
        .await?;

        items
            .add(&customer, Item::new("hat-grey", 1, Decimal::new(2000, 2))?)
            .await?;

        let span = tracing::info_span!("login");
        let merged = carts.merge(&customer, &session).instrument(span).await?;
        info!(lines = merged.items().len(), "Session cart merged");

        items.remove(&customer, &ItemId::new("sock-red")).await?;

        let cart = carts.get(&customer).await?;
        for line in cart.items() {
            info!(item_id = %line.item_id(), quantity = line.quantity(), "Line");
        }
        match cart.total() {
            Some(total) => info!(%total, "Cart total"),
            None => warn!("Cart total does not fit in a decimal"),
        }
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
