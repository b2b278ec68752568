//! The cart of one customer as a resource.

use crate::clients::{CartStore, DocumentStore};
use crate::model::{Cart, CustomerId};
use crate::resource::{CartContents, Merge, Resource, ResourceError};
use async_trait::async_trait;
use tracing::{debug, info};

/// Resource addressing the cart stored for a customer id.
///
/// # Caching
/// The first `value()` loads the cart, or creates and saves one if the store has none, and
/// keeps it for the lifetime of the resource. Later calls return the kept cart. The lookup
/// and the insert are a single store request, so two resources racing on a new customer
/// end up with the same cart. Every write through this resource replaces the kept cart
/// with the stored result.
pub struct CartResource {
    store: CartStore,
    customer_id: CustomerId,
    cached: Option<Cart>,
}

impl CartResource {
    pub fn new(store: CartStore, customer_id: impl Into<CustomerId>) -> Self {
        Self {
            store,
            customer_id: customer_id.into(),
            cached: None,
        }
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Line items of this cart.
    pub fn contents(&mut self) -> CartContents<'_> {
        CartContents::new(self)
    }

    /// The kept cart, loading or creating it first.
    pub(crate) async fn load(&mut self) -> Result<&mut Cart, ResourceError> {
        let cart = match self.cached.take() {
            Some(cart) => cart,
            None => {
                let cart = self
                    .store
                    .find_or_create(Cart::new(self.customer_id.clone())?)
                    .await?;
                debug!(customer_id = %self.customer_id, id = ?cart.id(), "Loaded cart");
                cart
            }
        };
        Ok(self.cached.insert(cart))
    }

    /// Saves the whole cart and keeps the stored form.
    pub(crate) async fn save(&mut self, cart: Cart) -> Result<Cart, ResourceError> {
        let saved = self.store.save(cart).await?;
        self.cached = Some(saved.clone());
        Ok(saved)
    }

    /// # Errors
    /// [`StoreError::DuplicateKey`](crate::framework::StoreError::DuplicateKey) if the
    /// customer already has a cart.
    async fn persist_new(&self) -> Result<Cart, ResourceError> {
        let cart = self.store.save(Cart::new(self.customer_id.clone())?).await?;
        info!(customer_id = %self.customer_id, id = ?cart.id(), "Created cart");
        Ok(cart)
    }
}

#[async_trait]
impl Resource for CartResource {
    type Value = Cart;

    async fn create(&mut self) -> Result<Cart, ResourceError> {
        let cart = self.persist_new().await?;
        self.cached = Some(cart.clone());
        Ok(cart)
    }

    async fn value(&mut self) -> Result<Cart, ResourceError> {
        Ok(self.load().await?.clone())
    }

    async fn destroy(&mut self) -> Result<(), ResourceError> {
        self.cached = None;
        let carts = self.store.find_all_by_customer_id(&self.customer_id).await?;
        if carts.is_empty() {
            debug!(customer_id = %self.customer_id, "No cart to destroy");
        }
        for cart in &carts {
            self.store.delete(cart).await?;
            info!(customer_id = %self.customer_id, id = ?cart.id(), "Destroyed cart");
        }
        Ok(())
    }
}

#[async_trait]
impl Merge for CartResource {
    /// Appends every line of `other` to this cart, in order and without checking for lines
    /// already present, then saves this cart once.
    async fn merge(&mut self, other: Cart) -> Result<Cart, ResourceError> {
        debug!(customer_id = %self.customer_id, ?other, "Merging cart");
        let merged = {
            let cart = self.load().await?;
            for line in other.items() {
                cart.add(line.clone());
            }
            cart.clone()
        };
        self.save(merged).await
    }
}
