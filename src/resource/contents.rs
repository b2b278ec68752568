//! Line items of a cart as a collection resource.

use crate::model::Item;
use crate::resource::{CartResource, Contents, ContentsMut, ResourceError};
use async_trait::async_trait;
use tracing::debug;

/// The items of the cart addressed by a [`CartResource`].
///
/// Every change saves the whole cart back to the Cart store.
pub struct CartContents<'a> {
    resource: &'a mut CartResource,
}

impl<'a> CartContents<'a> {
    pub fn new(resource: &'a mut CartResource) -> Self {
        Self { resource }
    }
}

#[async_trait]
impl<'a> Contents for CartContents<'a> {
    type Item = Item;

    async fn contents(&mut self) -> Result<Vec<Item>, ResourceError> {
        Ok(self.resource.load().await?.items().to_vec())
    }
}

#[async_trait]
impl<'a> ContentsMut for CartContents<'a> {
    async fn add(&mut self, item: Item) -> Result<(), ResourceError> {
        debug!(customer_id = %self.resource.customer_id(), ?item, "Adding item to cart");
        let updated = {
            let cart = self.resource.load().await?;
            cart.add(item);
            cart.clone()
        };
        self.resource.save(updated).await?;
        Ok(())
    }

    async fn delete(&mut self, item: &Item) -> Result<(), ResourceError> {
        let updated = {
            let cart = self.resource.load().await?;
            if !cart.remove(item) {
                debug!(item_id = %item.item_id(), "Item not in cart, nothing to delete");
                return Ok(());
            }
            cart.clone()
        };
        debug!(customer_id = %self.resource.customer_id(), item_id = %item.item_id(), "Deleted item from cart");
        self.resource.save(updated).await?;
        Ok(())
    }
}
