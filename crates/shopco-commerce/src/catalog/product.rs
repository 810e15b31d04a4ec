//! Product types.

use crate::cart::LineItem;
use crate::ids::ProductId;
use crate::money::Money;
use crate::wishlist::WishlistItem;
use serde::{Deserialize, Serialize};

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

/// Home page section a product is featured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductSection {
    NewArrivals,
    TopSelling,
}

impl ProductSection {
    /// Both sections in home page order.
    pub const ALL: [ProductSection; 2] = [ProductSection::NewArrivals, ProductSection::TopSelling];

    /// Section heading.
    pub fn title(&self) -> &'static str {
        match self {
            ProductSection::NewArrivals => "NEW ARRIVALS",
            ProductSection::TopSelling => "TOP SELLING",
        }
    }

    /// In-page anchor the header links to.
    pub fn anchor(&self) -> &'static str {
        match self {
            ProductSection::NewArrivals => "arrival",
            ProductSection::TopSelling => "topsell",
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Image URL.
    pub image_url: String,
    /// Current price.
    pub price: Money,
    /// Star rating, 0 to 5.
    pub rating: u8,
    /// Long description for the detail page.
    pub description: Option<String>,
    /// Home page section.
    pub section: ProductSection,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        image_url: impl Into<String>,
        price: Money,
        rating: u8,
        section: ProductSection,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: image_url.into(),
            price,
            rating: rating.min(MAX_RATING),
            description: None,
            section,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Detail page path.
    pub fn href(&self) -> String {
        format!("/product/{}", self.id)
    }

    /// Rating as shown under listing cards, e.g. "4.0/5".
    pub fn rating_label(&self) -> String {
        format!("{}.0/{}", self.rating, MAX_RATING)
    }

    /// A cart line for this product at its current price.
    pub fn to_line_item(&self, quantity: u32) -> LineItem {
        LineItem::new(self.id.clone(), self.name.clone(), self.price)
            .with_image(self.image_url.clone())
            .with_quantity(quantity)
    }

    /// A wishlist entry for this product at its current price.
    pub fn to_wishlist_item(&self) -> WishlistItem {
        WishlistItem::new(self.id.clone(), self.name.clone(), self.price)
            .with_image(self.image_url.clone())
    }
}

/// Sizes offered on the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
    XLarge,
}

impl Size {
    /// All sizes in selector order.
    pub const ALL: [Size; 4] = [Size::Small, Size::Medium, Size::Large, Size::XLarge];

    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
            Size::XLarge => "X-Large",
        }
    }
}
