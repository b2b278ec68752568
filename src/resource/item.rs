//! A single stored item as a resource.

use crate::clients::{DocumentStore, ItemStore};
use crate::model::Item;
use crate::resource::{Merge, Resource, ResourceError};
use async_trait::async_trait;
use tracing::debug;

/// Resource wrapping one [`Item`] and the store it lives in.
///
/// Items are never changed in place. A merge builds a new value that keeps the stored
/// item's identity and takes the other item's quantity, then saves it over the old one.
pub struct ItemResource {
    store: ItemStore,
    item: Item,
}

impl ItemResource {
    pub fn new(store: ItemStore, item: Item) -> Self {
        Self { store, item }
    }
}

#[async_trait]
impl Resource for ItemResource {
    type Value = Item;

    async fn create(&mut self) -> Result<Item, ResourceError> {
        let saved = self.store.save(self.item.clone()).await?;
        self.item = saved.clone();
        Ok(saved)
    }

    async fn value(&mut self) -> Result<Item, ResourceError> {
        Ok(self.item.clone())
    }

    async fn destroy(&mut self) -> Result<(), ResourceError> {
        self.store.destroy(&self.item).await?;
        Ok(())
    }
}

#[async_trait]
impl Merge for ItemResource {
    async fn merge(&mut self, other: Item) -> Result<Item, ResourceError> {
        debug!(
            item_id = %self.item.item_id(),
            from = self.item.quantity(),
            to = other.quantity(),
            "Merging item quantity"
        );
        let saved = self
            .store
            .save(self.item.with_quantity(other.quantity()))
            .await?;
        self.item = saved.clone();
        Ok(saved)
    }
}
