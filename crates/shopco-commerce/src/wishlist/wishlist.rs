//! Wishlist store and item types.

use crate::cart::{AddOutcome, CartStore, LineItem};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product reference on the wishlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistItem {
    /// Product id. Unique within a wishlist.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Price when the item was saved.
    pub price: Money,
    /// Product image URL.
    pub image: Option<String>,
}

impl WishlistItem {
    /// Create a new wishlist item.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image: None,
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// A single-unit cart line for this item.
    pub fn to_line_item(&self) -> LineItem {
        let line = LineItem::new(self.id.clone(), self.title.clone(), self.price);
        match &self.image {
            Some(image) => line.with_image(image.clone()),
            None => line,
        }
    }
}

/// The session's wishlist, in the order items were saved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WishlistStore {
    items: Vec<WishlistItem>,
}

impl WishlistStore {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save an item. Returns `false` and leaves the existing entry untouched
    /// if the product is already on the list.
    pub fn add_to_wishlist(&mut self, item: WishlistItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove a product. Returns whether anything was removed.
    pub fn remove_from_wishlist(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Move a product into the cart with quantity 1.
    ///
    /// Returns `None` without touching the cart if the product is not saved.
    pub fn move_to_cart(&mut self, id: &ProductId, cart: &mut CartStore) -> Option<AddOutcome> {
        let index = self.items.iter().position(|i| &i.id == id)?;
        let item = self.items.remove(index);
        Some(cart.add_to_cart(item.to_line_item()))
    }

    /// All saved items in display order.
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    /// Get a saved item.
    pub fn get(&self, id: &ProductId) -> Option<&WishlistItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Check whether a product is saved.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of saved items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn shirt() -> WishlistItem {
        WishlistItem::new("5", "Vertical Striped Shirt", Money::from_units(212, Currency::USD))
            .with_image("/images/pic5.png")
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = WishlistStore::new();
        assert!(wishlist.add_to_wishlist(shirt()));
        assert!(!wishlist.add_to_wishlist(shirt()));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_duplicate_keeps_existing_entry() {
        let mut wishlist = WishlistStore::new();
        wishlist.add_to_wishlist(shirt());
        wishlist.add_to_wishlist(WishlistItem::new(
            "5",
            "Renamed",
            Money::from_units(1, Currency::USD),
        ));

        let saved = wishlist.get(&ProductId::new("5")).unwrap();
        assert_eq!(saved.title, "Vertical Striped Shirt");
        assert_eq!(saved.image.as_deref(), Some("/images/pic5.png"));
    }

    #[test]
    fn test_remove() {
        let mut wishlist = WishlistStore::new();
        wishlist.add_to_wishlist(shirt());

        assert!(!wishlist.remove_from_wishlist(&ProductId::new("6")));
        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.remove_from_wishlist(&ProductId::new("5")));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_move_to_cart() {
        let mut wishlist = WishlistStore::new();
        let mut cart = CartStore::new();
        wishlist.add_to_wishlist(shirt());

        let outcome = wishlist.move_to_cart(&ProductId::new("5"), &mut cart);
        assert_eq!(outcome, Some(AddOutcome::Inserted { quantity: 1 }));
        assert!(wishlist.is_empty());

        let line = cart.get(&ProductId::new("5")).unwrap();
        assert_eq!(line.price, Money::from_units(212, Currency::USD));
        assert_eq!(line.image.as_deref(), Some("/images/pic5.png"));
    }

    #[test]
    fn test_move_absent_item() {
        let mut wishlist = WishlistStore::new();
        let mut cart = CartStore::new();

        assert_eq!(wishlist.move_to_cart(&ProductId::new("5"), &mut cart), None);
        assert!(cart.is_empty());
    }
}
