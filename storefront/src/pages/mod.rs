//! Routed pages.

mod cart;
mod home;
mod product;
mod wishlist;

pub use cart::CartPage;
pub use home::HomePage;
pub use product::ProductPage;
pub use wishlist::WishlistPage;
