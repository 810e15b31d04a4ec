//! SHOP.CO storefront.
//!
//! Client-side rendered Leptos app over the static demo catalog:
//! - Home page with New Arrivals and Top Selling sections
//! - Product detail page with size, quantity, reviews and related products
//! - Cart page with order summary and promo code
//! - Wishlist page

mod app;
mod pages;
mod state;

pub use app::App;
