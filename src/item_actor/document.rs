//! Document trait implementation for the Item domain type.
//!
//! Items need no collaborators, so the store runs with a `()` context. The only hook used
//! is `on_save`, which rejects items that fail validation before they reach the collection.

use crate::framework::{Document, StorageId};
use crate::item_actor::ItemError;
use crate::model::{Item, ItemId};
use async_trait::async_trait;

#[async_trait]
impl Document for Item {
    type Key = ItemId;
    type Context = ();
    type Error = ItemError;

    const COLLECTION: &'static str = "item";

    fn storage_id(&self) -> Option<&StorageId> {
        self.id.as_ref()
    }

    fn assign_storage_id(&mut self, id: StorageId) {
        self.id = Some(id);
    }

    fn key(&self) -> &ItemId {
        self.item_id()
    }

    async fn on_save(&mut self, _ctx: &()) -> Result<(), ItemError> {
        self.validate()
    }
}
