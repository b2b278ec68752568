//! Document trait implementation for the Cart domain type.
//!
//! A cart keeps a copy of each line together with the line's storage id in the Item store.
//! On every read the copies are refreshed from the Item store, so a quantity merged into an
//! item on its own is what the next reader of the cart sees. Lines whose item has since
//! been deleted are dropped from the loaded copy.

use crate::cart_actor::CartError;
use crate::clients::{DocumentStore, ItemStore};
use crate::framework::{Document, StorageId};
use crate::model::{Cart, CustomerId};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl Document for Cart {
    type Key = CustomerId;
    type Context = ItemStore;
    type Error = CartError;

    const COLLECTION: &'static str = "cart";
    const UNIQUE_KEY: bool = true;

    fn storage_id(&self) -> Option<&StorageId> {
        self.id.as_ref()
    }

    fn assign_storage_id(&mut self, id: StorageId) {
        self.id = Some(id);
    }

    fn key(&self) -> &CustomerId {
        self.customer_id()
    }

    async fn on_save(&mut self, _items: &ItemStore) -> Result<(), CartError> {
        self.validate()
    }

    async fn on_load(&mut self, items: &ItemStore) -> Result<(), CartError> {
        let lines = std::mem::take(&mut self.items);
        let mut refreshed = Vec::with_capacity(lines.len());
        for line in lines {
            let Some(id) = line.id().cloned() else {
                refreshed.push(line);
                continue;
            };
            match items.find_one(id.clone()).await? {
                Some(current) => refreshed.push(current),
                None => debug!(cart = ?self.id, item = %id, "Dropping dangling item reference"),
            }
        }
        self.items = refreshed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::cart_actor::CartError;
    use crate::clients::{CartStore, DocumentStore, ItemStore};
    use crate::framework::mock::MockStore;
    use crate::framework::{StorageId, StoreError};
    use crate::model::{Cart, Item};
    use crate::{cart_actor, item_actor};
    use rust_decimal::Decimal;

    async fn spawn_stores() -> (CartStore, ItemStore) {
        let (item_actor, items) = item_actor::new(8);
        let (cart_actor, carts) = cart_actor::new(8);
        tokio::spawn(item_actor.run(()));
        tokio::spawn(cart_actor.run(items.clone()));
        (carts, items)
    }

    #[tokio::test]
    async fn test_load_refreshes_lines_from_item_store() {
        let (carts, items) = spawn_stores().await;

        let line = items
            .save(Item::new("sock-1", 1, Decimal::ONE).unwrap())
            .await
            .unwrap();
        let mut cart = Cart::new("alice").unwrap();
        cart.add(line.clone());
        carts.save(cart).await.unwrap();

        items.save(line.with_quantity(4)).await.unwrap();

        let loaded = carts.find_by_customer_id("alice").await.unwrap().unwrap();
        assert_eq!(loaded.items()[0].quantity(), 4);
    }

    #[tokio::test]
    async fn test_load_drops_deleted_lines() {
        let (carts, items) = spawn_stores().await;

        let kept = items.save(Item::from_id("a")).await.unwrap();
        let gone = items.save(Item::from_id("b")).await.unwrap();
        let mut cart = Cart::new("alice").unwrap();
        cart.add(kept).add(gone.clone()).add(Item::from_id("unsaved"));
        carts.save(cart).await.unwrap();

        items.destroy(&gone).await.unwrap();

        let loaded = carts.find_by_customer_id("alice").await.unwrap().unwrap();
        let ids: Vec<&str> = loaded.items().iter().map(|i| i.item_id().as_str()).collect();
        assert_eq!(ids, vec!["a", "unsaved"]);
    }

    #[tokio::test]
    async fn test_save_rejects_cart_without_customer() {
        let (carts, _items) = spawn_stores().await;
        let cart: Cart = serde_json::from_str(r#"{ "customerId": "" }"#).unwrap();

        let err = carts.save(cart).await.unwrap_err();
        match err {
            StoreError::Document(inner) => {
                assert!(matches!(
                    inner.downcast_ref::<CartError>(),
                    Some(CartError::MissingCustomerId)
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_load_surfaces_item_store_failure() {
        let mut item_mock = MockStore::<Item>::new();
        item_mock
            .expect_find_one(StorageId::new("item_1"))
            .return_err(StoreError::Unavailable);

        let (cart_actor, carts) = cart_actor::new(8);
        tokio::spawn(cart_actor.run(ItemStore::new(item_mock.client())));

        let mut line = Item::from_id("sock-1");
        line.id = Some(StorageId::new("item_1"));
        let mut cart = Cart::new("alice").unwrap();
        cart.add(line);
        carts.save(cart).await.unwrap();

        let err = carts.find_by_customer_id("alice").await.unwrap_err();
        assert!(matches!(err, StoreError::Document(_)));
        item_mock.verify();
    }
}
