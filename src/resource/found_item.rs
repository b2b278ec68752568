//! Identity lookup of a line within a list of lines.

use crate::model::Item;
use crate::resource::ResourceError;
use tracing::debug;

/// Answers whether `items` holds a line equal to `candidate`, and which one.
///
/// Equality is by item id only, so a bare [`Item::from_id`] finds the stored line with its
/// storage id, quantity and price.
///
/// ```rust
/// use cart_resource::model::Item;
/// use cart_resource::resource::FoundItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![Item::new("sock-1", 3, Decimal::ONE).unwrap()];
/// let lookup = Item::from_id("sock-1");
/// let found = FoundItem::new(&items, &lookup);
///
/// assert!(found.has_item());
/// assert_eq!(found.get().unwrap().quantity(), 3);
/// ```
pub struct FoundItem<'a> {
    items: &'a [Item],
    candidate: &'a Item,
}

impl<'a> FoundItem<'a> {
    pub fn new(items: &'a [Item], candidate: &'a Item) -> Self {
        Self { items, candidate }
    }

    pub fn has_item(&self) -> bool {
        let found = self.items.contains(self.candidate);
        debug!(item_id = %self.candidate.item_id(), found, "Searching for item in cart");
        found
    }

    /// The first line equal to the candidate.
    ///
    /// # Errors
    /// [`ResourceError::NotFound`] if there is none.
    pub fn get(&self) -> Result<&'a Item, ResourceError> {
        let candidate = self.candidate;
        self.items
            .iter()
            .find(|line| *line == candidate)
            .ok_or_else(|| {
                ResourceError::NotFound(format!(
                    "Cannot find item in cart: {}",
                    candidate.item_id()
                ))
            })
    }
}
