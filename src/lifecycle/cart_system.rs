use crate::clients::{CartStore, ItemStore};
use crate::config::CartConfig;
use crate::service::{CartService, ItemService};
use tracing::{error, info};

/// The runtime orchestrator for the cart stores.
///
/// `CartSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both store actors
/// - **Dependency Wiring**: Handing the Item store to the Cart store as its context
/// - **Service Construction**: Building [`CartService`] and [`ItemService`] on top
///
/// # Example
///
/// ```rust
/// use cart_resource::config::CartConfig;
/// use cart_resource::lifecycle::CartSystem;
/// use cart_resource::model::CustomerId;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = CartSystem::new(&CartConfig::default());
///
///     let cart = system.carts().get(&CustomerId::new("alice")).await?;
///     assert!(cart.items().is_empty());
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct CartSystem {
    cart_store: CartStore,
    item_store: ItemStore,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CartSystem {
    /// Creates both stores and spawns their actors.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &CartConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (item_actor, item_store) = crate::item_actor::new(config.store_buffer_size);
        let (cart_actor, cart_store) = crate::cart_actor::new(config.store_buffer_size);

        // 2. Start actors with injected context
        let item_handle = tokio::spawn(item_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(item_store.clone()));

        Self {
            cart_store,
            item_store,
            handles: vec![cart_handle, item_handle],
        }
    }

    pub fn carts(&self) -> CartService {
        CartService::new(self.cart_store.clone())
    }

    pub fn items(&self) -> ItemService {
        ItemService::new(self.cart_store.clone(), self.item_store.clone())
    }

    /// Gracefully shuts down both stores.
    ///
    /// Services handed out by [`carts`](Self::carts) and [`items`](Self::items) hold store
    /// clients too; drop them first or this waits for them.
    ///
    /// The Cart store holds a clone of the Item store client, so the Cart store is awaited
    /// first. Once it exits, its context is dropped and the Item store can follow.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.cart_store);
        drop(self.item_store);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
