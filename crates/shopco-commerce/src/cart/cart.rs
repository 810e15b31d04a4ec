//! Cart store and line item types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Default upper bound on a single line item's quantity.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product this line refers to. Unique within a cart.
    pub id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price, fixed when the item was first added.
    pub price: Money,
    /// Product image URL.
    pub image: Option<String>,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image: None,
            quantity: 1,
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the quantity. Zero is raised to 1.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    /// Unit price times quantity, `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.price.try_multiply(i64::from(self.quantity))
    }
}

/// What `add_to_cart` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Inserted { quantity: u32 },
    /// An existing line absorbed the incoming quantity.
    Merged { quantity: u32 },
}

impl AddOutcome {
    /// Resulting quantity of the affected line.
    pub fn quantity(&self) -> u32 {
        match self {
            AddOutcome::Inserted { quantity } | AddOutcome::Merged { quantity } => *quantity,
        }
    }
}

/// The session's shopping cart.
///
/// Lines are keyed by product id and kept in insertion order, which is also
/// the display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    items: Vec<LineItem>,
    max_quantity: u32,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            max_quantity: MAX_QUANTITY_PER_ITEM,
        }
    }

    /// Override the per-line quantity cap (at least 1).
    pub fn with_max_quantity(mut self, max_quantity: u32) -> Self {
        self.max_quantity = max_quantity.max(1);
        self
    }

    /// Add an item, merging with an existing line for the same product.
    ///
    /// Merging keeps the existing line's title and price; only the quantity
    /// grows. Quantities saturate at the cart's cap.
    pub fn add_to_cart(&mut self, item: LineItem) -> AddOutcome {
        let incoming = self.clamp(item.quantity);
        let max_quantity = self.max_quantity();

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            let quantity = existing
                .quantity
                .saturating_add(incoming)
                .min(max_quantity);
            existing.quantity = quantity;
            return AddOutcome::Merged { quantity };
        }

        self.items.push(LineItem {
            quantity: incoming,
            ..item
        });
        AddOutcome::Inserted { quantity: incoming }
    }

    /// Remove the line for a product. Returns whether anything was removed.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Set a line's quantity, clamped into `1..=max`.
    ///
    /// Returns the stored quantity, or `None` if the product is not in the cart.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> Option<u32> {
        let quantity = self.clamp(quantity);
        let item = self.items.iter_mut().find(|i| &i.id == id)?;
        item.quantity = quantity;
        Some(quantity)
    }

    /// All lines in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line for a product.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Check whether a product is in the cart.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// The per-line quantity cap. Never below 1, even for a deserialized cart.
    pub fn max_quantity(&self) -> u32 {
        self.max_quantity.max(1)
    }

    fn clamp(&self, quantity: u32) -> u32 {
        quantity.clamp(1, self.max_quantity())
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(units: i64) -> Money {
        Money::from_units(units, Currency::USD)
    }

    fn hoodie() -> LineItem {
        LineItem::new("1", "Hoodie For Mens", usd(120)).with_image("/images/pic1.png")
    }

    #[test]
    fn test_cart_creation() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_line_item_defaults_to_one() {
        let item = hoodie();
        assert_eq!(item.quantity, 1);
        assert_eq!(hoodie().with_quantity(0).quantity, 1);
    }

    #[test]
    fn test_add_item() {
        let mut cart = CartStore::new();
        let outcome = cart.add_to_cart(hoodie().with_quantity(2));

        assert_eq!(outcome, AddOutcome::Inserted { quantity: 2 });
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_same_item_merges_quantity() {
        let mut cart = CartStore::new();
        cart.add_to_cart(hoodie().with_quantity(2));
        let outcome = cart.add_to_cart(hoodie().with_quantity(3));

        assert_eq!(outcome, AddOutcome::Merged { quantity: 5 });
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ProductId::new("1")).unwrap().quantity, 5);
    }

    #[test]
    fn test_merge_keeps_original_price() {
        let mut cart = CartStore::new();
        cart.add_to_cart(hoodie());
        cart.add_to_cart(LineItem::new("1", "Hoodie (repriced)", usd(99)));

        let line = cart.get(&ProductId::new("1")).unwrap();
        assert_eq!(line.price, usd(120));
        assert_eq!(line.title, "Hoodie For Mens");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = CartStore::new();
        cart.add_to_cart(LineItem::new("3", "Trousers For Women", usd(180)));
        cart.add_to_cart(hoodie());
        cart.add_to_cart(LineItem::new("3", "Trousers For Women", usd(180)));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartStore::new();
        cart.add_to_cart(hoodie());

        assert!(cart.remove_from_cart(&ProductId::new("1")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_item_is_noop() {
        let mut cart = CartStore::new();
        cart.add_to_cart(hoodie());
        let before = cart.clone();

        assert!(!cart.remove_from_cart(&ProductId::new("42")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = CartStore::new();
        cart.add_to_cart(hoodie());

        assert_eq!(cart.update_quantity(&ProductId::new("1"), 5), Some(5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let mut cart = CartStore::new();
        cart.add_to_cart(hoodie().with_quantity(3));

        assert_eq!(cart.update_quantity(&ProductId::new("1"), 0), Some(1));
        assert_eq!(cart.get(&ProductId::new("1")).unwrap().quantity, 1);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_absent_item_is_noop() {
        let mut cart = CartStore::new();
        cart.add_to_cart(hoodie());
        let before = cart.clone();

        assert_eq!(cart.update_quantity(&ProductId::new("9"), 4), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_quantity_cap() {
        let mut cart = CartStore::new().with_max_quantity(10);
        cart.add_to_cart(hoodie().with_quantity(8));
        let outcome = cart.add_to_cart(hoodie().with_quantity(8));

        assert_eq!(outcome.quantity(), 10);
        assert_eq!(cart.update_quantity(&ProductId::new("1"), 50), Some(10));
    }

    #[test]
    fn test_deserialized_zero_cap_treated_as_one() {
        let mut cart: CartStore =
            serde_json::from_str(r#"{"items":[],"max_quantity":0}"#).unwrap();
        assert_eq!(cart.max_quantity(), 1);

        assert_eq!(cart.add_to_cart(hoodie().with_quantity(3)).quantity(), 1);
        assert_eq!(cart.add_to_cart(hoodie()).quantity(), 1);
        assert_eq!(cart.update_quantity(&ProductId::new("1"), 7), Some(1));
    }

    #[test]
    fn test_line_total() {
        let item = LineItem::new("2", "T-Shirts For Mens", usd(240)).with_quantity(2);
        assert_eq!(item.line_total(), Some(usd(480)));
    }
}
