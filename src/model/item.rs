use crate::framework::StorageId;
use crate::item_actor::ItemError;
use crate::model::ItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A line in a cart: which catalogue item, how many, and at what price.
///
/// # Identity
/// Two items are equal when their [`ItemId`]s are equal. The storage id, quantity and
/// unit price take no part in equality or hashing, which is what lets a bare
/// [`Item::from_id`] find the fully populated line stored in a cart.
///
/// # Request bodies
/// Deserializes from a camelCase body. `quantity` defaults to 1 and `unitPrice` to 0:
///
/// ```rust
/// use cart_resource::model::Item;
///
/// let item: Item = serde_json::from_str(r#"{ "itemId": "sock-1" }"#).unwrap();
/// assert_eq!(item.quantity(), 1);
/// assert!(item.unit_price().is_zero());
/// ```
///
/// See [`impl Document for Item`](#impl-Document-for-Item) for storage details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<StorageId>,
    item_id: ItemId,
    #[serde(default = "default_quantity")]
    quantity: u32,
    #[serde(default, with = "rust_decimal::serde::float")]
    unit_price: Decimal,
}

fn default_quantity() -> u32 {
    1
}

impl Item {
    /// Creates a validated, not yet persisted item.
    ///
    /// # Errors
    /// - [`ItemError::MissingItemId`] if `item_id` is blank
    /// - [`ItemError::InvalidQuantity`] if `quantity` is zero
    /// - [`ItemError::NegativePrice`] if `unit_price` is below zero
    pub fn new(
        item_id: impl Into<ItemId>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Result<Self, ItemError> {
        let item = Self {
            id: None,
            item_id: item_id.into(),
            quantity,
            unit_price,
        };
        item.validate()?;
        Ok(item)
    }

    /// The bare lookup form of an item: quantity 1, price 0.
    pub fn from_id(item_id: impl Into<ItemId>) -> Self {
        Self {
            id: None,
            item_id: item_id.into(),
            quantity: 1,
            unit_price: Decimal::ZERO,
        }
    }

    /// Builds the superseding value of this item with a new quantity.
    ///
    /// The storage id is carried over, so saving the result replaces the stored item.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    pub fn id(&self) -> Option<&StorageId> {
        self.id.as_ref()
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// `quantity × unit_price`, or `None` if it does not fit in a [`Decimal`].
    pub fn subtotal(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    pub(crate) fn validate(&self) -> Result<(), ItemError> {
        if self.item_id.is_empty() {
            return Err(ItemError::MissingItemId);
        }
        if self.quantity == 0 {
            return Err(ItemError::InvalidQuantity(self.quantity));
        }
        if self.unit_price < Decimal::ZERO {
            return Err(ItemError::NegativePrice(self.unit_price));
        }
        Ok(())
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item_id.hash(state);
    }
}
