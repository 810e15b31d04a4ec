//! Customer reviews shown on the product page.

use serde::{Deserialize, Serialize};

/// A customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: u32,
    pub author: String,
    pub rating: u8,
    pub comment: String,
    /// Display date, already formatted.
    pub date: String,
}

impl Review {
    /// Rating as shown on the review card, e.g. "4/5".
    pub fn rating_label(&self) -> String {
        format!("{}/{}", self.rating, super::MAX_RATING)
    }
}

/// Reviews shown under every product.
pub fn demo_reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            author: "Samantha D.".to_string(),
            rating: 5,
            comment: "I love this product! The design is unique and fits perfectly.".to_string(),
            date: "August 14, 2020".to_string(),
        },
        Review {
            id: 2,
            author: "Alex M.".to_string(),
            rating: 4,
            comment: "Great quality! Comfortable and stylish.".to_string(),
            date: "August 10, 2024".to_string(),
        },
    ]
}
