//! Product catalog module.
//!
//! The catalog is static and read-only: the listing sections, the detail
//! page and the "You Might Also Like" strip all read from one ordered list.

mod product;
mod review;

pub use product::{Product, ProductSection, Size, MAX_RATING};
pub use review::{demo_reviews, Review};

use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// An ordered, read-only list of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products in display order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The demo storefront's eight products, priced in `currency`.
    pub fn demo(currency: Currency) -> Self {
        let price = |units| Money::from_units(units, currency);
        use ProductSection::{NewArrivals, TopSelling};

        Self::new(vec![
            Product::new(1u32, "Hoodie For Mens", "/images/pic1.png", price(120), 5, NewArrivals)
                .with_description("Stylish hoodie made for comfort and durability."),
            Product::new(2u32, "T-Shirts For Mens", "/images/pic2.png", price(240), 3, NewArrivals)
                .with_description("Casual t-shirt for everyday wear."),
            Product::new(3u32, "Trousers For Women", "/images/pic3.png", price(180), 4, NewArrivals),
            Product::new(4u32, "Fits Bermuda T-Shirts", "/images/pic4.png", price(130), 5, NewArrivals)
                .with_description("High-quality t-shirt for a relaxed fit."),
            Product::new(5u32, "Vertical Striped Shirt", "/images/pic5.png", price(212), 5, TopSelling),
            Product::new(6u32, "Courage Graphic T-Shirt", "/images/pic6.png", price(145), 3, TopSelling),
            Product::new(7u32, "Loose Fits Bermuda Shorts", "/images/pic7.png", price(80), 4, TopSelling)
                .with_description("Comfortable shorts perfect for summer."),
            Product::new(8u32, "Faded Skinny Jeans", "/images/pic8.png", price(210), 5, TopSelling),
        ])
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by the id segment of its detail page path.
    pub fn find(&self, id: &str) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Every product except `id`, in catalog order.
    pub fn related<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.id.as_str() != id)
    }

    /// Products featured in a home page section.
    pub fn section(&self, section: ProductSection) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter().filter(move |p| p.section == section)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo(Currency::USD);
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.section(ProductSection::NewArrivals).count(), 4);
        assert_eq!(catalog.section(ProductSection::TopSelling).count(), 4);
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::demo(Currency::USD);
        let product = catalog.find("3").unwrap();
        assert_eq!(product.name, "Trousers For Women");
        assert_eq!(product.price, Money::from_units(180, Currency::USD));
    }

    #[test]
    fn test_find_missing() {
        let catalog = Catalog::demo(Currency::USD);
        assert_eq!(
            catalog.find("99").unwrap_err(),
            CommerceError::ProductNotFound("99".to_string())
        );
        assert!(catalog.find("").is_err());
    }

    #[test]
    fn test_related_excludes_current() {
        let catalog = Catalog::demo(Currency::USD);
        let ids: Vec<&str> = catalog.related("2").map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_related_for_unknown_id_is_everything() {
        let catalog = Catalog::demo(Currency::USD);
        assert_eq!(catalog.related("nope").count(), catalog.len());
    }

    #[test]
    fn test_demo_reviews() {
        let reviews = demo_reviews();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[1].rating_label(), "4/5");
    }
}
