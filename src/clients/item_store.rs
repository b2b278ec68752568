//! # Item Store
//!
//! Provides a high‑level API for the `Item` store.
use crate::clients::DocumentStore;
use crate::framework::{StoreClient, StoreError};
use crate::model::Item;
use tracing::{debug, instrument};

/// Client for interacting with the Item store.
#[derive(Clone)]
pub struct ItemStore {
    inner: StoreClient<Item>,
}

impl ItemStore {
    pub fn new(inner: StoreClient<Item>) -> Self {
        Self { inner }
    }

    /// Removes `item` from the store. Items that were never saved are ignored.
    #[instrument(skip(self), fields(item_id = %item.item_id()))]
    pub async fn destroy(&self, item: &Item) -> Result<(), StoreError> {
        let removed = self.delete(item).await?;
        debug!(removed, "Item destroyed");
        Ok(())
    }
}

impl DocumentStore<Item> for ItemStore {
    fn inner(&self) -> &StoreClient<Item> {
        &self.inner
    }
}
