use crate::clients::{CartStore, ItemStore};
use crate::item_actor::ItemError;
use crate::model::{CustomerId, Item, ItemId};
use crate::resource::{
    CartResource, Contents, ContentsMut, FoundItem, ItemResource, Merge, Resource, ResourceError,
};
use tracing::{debug, info, instrument, warn};

/// Operations on the lines of a customer's cart.
#[derive(Clone)]
pub struct ItemService {
    carts: CartStore,
    items: ItemStore,
}

impl ItemService {
    pub fn new(carts: CartStore, items: ItemStore) -> Self {
        Self { carts, items }
    }

    fn cart(&self, customer_id: &CustomerId) -> CartResource {
        CartResource::new(self.carts.clone(), customer_id.clone())
    }

    /// The stored line for `item_id`.
    ///
    /// # Errors
    /// [`ResourceError::NotFound`] if the cart holds no such line.
    #[instrument(skip(self), fields(customer_id = %customer_id, item_id = %item_id))]
    pub async fn get(
        &self,
        customer_id: &CustomerId,
        item_id: &ItemId,
    ) -> Result<Item, ResourceError> {
        let cart = self.cart(customer_id).value().await?;
        let lookup = Item::from_id(item_id.clone());
        FoundItem::new(cart.items(), &lookup).get().cloned()
    }

    #[instrument(skip(self), fields(customer_id = %customer_id))]
    pub async fn list(&self, customer_id: &CustomerId) -> Result<Vec<Item>, ResourceError> {
        self.cart(customer_id).contents().contents().await
    }

    /// Adds `item` to the cart, or bumps the quantity of the line already there by one.
    ///
    /// Returns the stored line.
    #[instrument(skip(self, item), fields(customer_id = %customer_id, item_id = %item.item_id()))]
    pub async fn add(&self, customer_id: &CustomerId, item: Item) -> Result<Item, ResourceError> {
        debug!(?item, "add called");
        let item = Item::new(item.item_id().clone(), item.quantity(), item.unit_price())?;

        let mut cart = self.cart(customer_id);
        let current = cart.value().await?;
        let existing = {
            let found = FoundItem::new(current.items(), &item);
            if found.has_item() {
                Some(found.get()?.clone())
            } else {
                None
            }
        };

        let Some(existing) = existing else {
            let mut resource = ItemResource::new(self.items.clone(), item);
            let created = resource.create().await?;
            if let Err(e) = cart.contents().add(created.clone()).await {
                warn!(error = %e, id = ?created.id(), "Cart save failed, destroying new item");
                resource.destroy().await?;
                return Err(e);
            }
            info!(id = ?created.id(), "Item added to cart");
            return Ok(created);
        };

        let next = existing
            .quantity()
            .checked_add(1)
            .ok_or(ItemError::InvalidQuantity(existing.quantity()))?;
        let updated = ItemResource::new(self.items.clone(), existing.clone())
            .merge(existing.with_quantity(next))
            .await?;
        info!(quantity = updated.quantity(), "Item quantity incremented");
        Ok(updated)
    }

    /// Removes the line for `item_id` from the cart and deletes the item itself.
    ///
    /// Removing an item the cart does not hold does nothing.
    #[instrument(skip(self), fields(customer_id = %customer_id, item_id = %item_id))]
    pub async fn remove(
        &self,
        customer_id: &CustomerId,
        item_id: &ItemId,
    ) -> Result<(), ResourceError> {
        let mut cart = self.cart(customer_id);
        let current = cart.value().await?;
        let lookup = Item::from_id(item_id.clone());
        let found = FoundItem::new(current.items(), &lookup);

        if !found.has_item() {
            debug!("Item not in cart, nothing to remove");
            return Ok(());
        }

        let existing = found.get()?.clone();
        cart.contents().delete(&existing).await?;
        ItemResource::new(self.items.clone(), existing).destroy().await?;
        info!("Item removed from cart");
        Ok(())
    }

    /// Sets the quantity of the line matching `item` to `item.quantity()`.
    ///
    /// # Errors
    /// - [`ItemError::InvalidQuantity`] for a quantity of zero
    /// - [`ResourceError::NotFound`] if the cart holds no such line
    #[instrument(skip(self, item), fields(customer_id = %customer_id, item_id = %item.item_id()))]
    pub async fn update(
        &self,
        customer_id: &CustomerId,
        item: Item,
    ) -> Result<Item, ResourceError> {
        debug!(?item, "update called");
        if item.quantity() == 0 {
            return Err(ItemError::InvalidQuantity(0).into());
        }

        let cart = self.cart(customer_id).value().await?;
        let existing = FoundItem::new(cart.items(), &item).get()?.clone();
        ItemResource::new(self.items.clone(), existing)
            .merge(item)
            .await
    }
}
