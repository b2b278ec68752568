//! # Cart Store
//!
//! Provides a high‑level API for the `Cart` store.
//! It wraps a `StoreClient<Cart>` and adds the lookups by customer id.
use crate::clients::DocumentStore;
use crate::framework::{StoreClient, StoreError};
use crate::model::{Cart, CustomerId};
use tracing::{instrument, warn};

/// Client for interacting with the Cart store.
#[derive(Clone)]
pub struct CartStore {
    inner: StoreClient<Cart>,
}

impl CartStore {
    pub fn new(inner: StoreClient<Cart>) -> Self {
        Self { inner }
    }

    /// All carts stored for `customer_id`. The store expects zero or one.
    #[instrument(skip(self), fields(customer_id = %customer_id))]
    pub async fn find_all_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<Cart>, StoreError> {
        self.inner.find_by(customer_id.clone()).await
    }

    /// The cart stored for `cart`'s customer, or `cart` itself once saved.
    ///
    /// Lookup and insert are one store request, so concurrent callers share one cart.
    #[instrument(skip(self, cart), fields(customer_id = %cart.customer_id()))]
    pub async fn find_or_create(&self, cart: Cart) -> Result<Cart, StoreError> {
        self.inner.find_or_insert(cart).await
    }

    /// The oldest cart stored for `customer_id`, if any.
    pub async fn find_by_customer_id(
        &self,
        customer_id: impl Into<CustomerId>,
    ) -> Result<Option<Cart>, StoreError> {
        let customer_id = customer_id.into();
        let carts = self.find_all_by_customer_id(&customer_id).await?;
        if carts.len() > 1 {
            warn!(%customer_id, count = carts.len(), "More than one cart stored for customer");
        }
        Ok(carts.into_iter().next())
    }
}

impl DocumentStore<Cart> for CartStore {
    fn inner(&self) -> &StoreClient<Cart> {
        &self.inner
    }
}
