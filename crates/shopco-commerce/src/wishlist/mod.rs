//! Wishlist module.
//!
//! A set of products the shopper marked as interesting, without quantities.

mod wishlist;

pub use wishlist::{WishlistItem, WishlistStore};
