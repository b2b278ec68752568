use crate::cart_actor::CartError;
use crate::framework::StorageId;
use crate::model::{CustomerId, Item};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer's cart: an ordered list of [`Item`] lines.
///
/// The list itself does not reject two lines with the same item id; callers that need
/// add-or-increment semantics look the item up first.
///
/// See [`impl Document for Cart`](#impl-Document-for-Cart) for storage details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    customer_id: CustomerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<StorageId>,
    #[serde(default)]
    pub(crate) items: Vec<Item>,
}

impl Cart {
    /// Creates an empty cart owned by `customer_id`.
    ///
    /// # Errors
    /// [`CartError::MissingCustomerId`] if `customer_id` is blank.
    pub fn new(customer_id: impl Into<CustomerId>) -> Result<Self, CartError> {
        let cart = Self {
            customer_id: customer_id.into(),
            id: None,
            items: Vec::new(),
        };
        cart.validate()?;
        Ok(cart)
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn id(&self) -> Option<&StorageId> {
        self.id.as_ref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Appends `item` to the end of the cart.
    pub fn add(&mut self, item: Item) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Removes the first line equal to `item`. Returns whether a line was removed.
    pub fn remove(&mut self, item: &Item) -> bool {
        match self.items.iter().position(|line| line == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sum of every line's subtotal, or `None` if it does not fit in a [`Decimal`].
    pub fn total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.subtotal()?))
    }

    pub(crate) fn validate(&self) -> Result<(), CartError> {
        if self.customer_id.is_empty() {
            return Err(CartError::MissingCustomerId);
        }
        Ok(())
    }
}
