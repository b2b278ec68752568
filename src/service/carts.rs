use crate::clients::CartStore;
use crate::model::{Cart, CustomerId};
use crate::resource::{CartResource, Merge, Resource, ResourceError};
use tracing::{debug, info, instrument};

/// Whole-cart operations.
#[derive(Clone)]
pub struct CartService {
    carts: CartStore,
}

impl CartService {
    pub fn new(carts: CartStore) -> Self {
        Self { carts }
    }

    fn resource(&self, customer_id: impl Into<CustomerId>) -> CartResource {
        CartResource::new(self.carts.clone(), customer_id)
    }

    /// The customer's cart, created on first access.
    #[instrument(skip(self), fields(customer_id = %customer_id))]
    pub async fn get(&self, customer_id: &CustomerId) -> Result<Cart, ResourceError> {
        self.resource(customer_id.clone()).value().await
    }

    #[instrument(skip(self), fields(customer_id = %customer_id))]
    pub async fn destroy(&self, customer_id: &CustomerId) -> Result<(), ResourceError> {
        self.resource(customer_id.clone()).destroy().await
    }

    /// Folds the session cart into the customer cart, then destroys the session cart.
    ///
    /// Lines are appended as they are. If both carts hold the same item the result has two
    /// lines for it.
    #[instrument(skip(self), fields(customer_id = %customer_id, session_id = %session_id))]
    pub async fn merge(
        &self,
        customer_id: &CustomerId,
        session_id: &CustomerId,
    ) -> Result<Cart, ResourceError> {
        let mut target = self.resource(customer_id.clone());
        if customer_id == session_id {
            debug!("Session and customer ids match, nothing to merge");
            return target.value().await;
        }

        let mut session = self.resource(session_id.clone());
        let session_cart = session.value().await?;
        let merged = target.merge(session_cart).await?;
        session.destroy().await?;

        info!(lines = merged.items().len(), "Merged session cart");
        Ok(merged)
    }
}
