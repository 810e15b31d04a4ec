//! Storefront domain types and logic for SHOP.CO.
//!
//! This crate provides everything the storefront UI reads and mutates:
//!
//! - **Catalog**: Static products, home page sections, reviews
//! - **Cart**: Line items keyed by product, quantity stepping, promo codes, order summary
//! - **Wishlist**: Saved products without quantities
//! - **Session**: One owner for all of the above, with structured logging
//!
//! # Example
//!
//! ```rust
//! use shopco_commerce::prelude::*;
//!
//! let config = ShopConfig::default();
//! let catalog = Catalog::demo(config.currency);
//! let mut session = ShopSession::new(&config);
//!
//! let hoodie = catalog.find("1")?;
//! session.add_to_cart(hoodie.to_line_item(2));
//! session.apply_promo("DISCOUNT20")?;
//!
//! let summary = session.summary()?;
//! assert_eq!(summary.total.display(), "$207.00");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod session;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{demo_reviews, Catalog, Product, ProductSection, Review, Size};

    // Cart
    pub use crate::cart::{
        AddOutcome, CartStore, LineItem, OrderSummary, PricingCalculator, PromoState,
        QuantityAction,
    };

    // Wishlist
    pub use crate::wishlist::{WishlistItem, WishlistStore};

    // Session
    pub use crate::config::ShopConfig;
    pub use crate::session::ShopSession;
}
