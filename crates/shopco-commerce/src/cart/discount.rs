//! Promo code types.

use crate::config::PricingConfig;
use serde::{Deserialize, Serialize};

/// The one promotion the shop accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoRule {
    /// Accepted code. Compared case-sensitively.
    pub code: String,
    /// Percentage off the subtotal once applied.
    pub discount_percent: u8,
}

impl PromoRule {
    /// Create a new percentage promotion.
    pub fn new(code: impl Into<String>, discount_percent: u8) -> Self {
        Self {
            code: code.into(),
            discount_percent: discount_percent.min(100),
        }
    }

    /// Check whether user input names this promotion.
    pub fn matches(&self, input: &str) -> bool {
        input == self.code
    }
}

impl Default for PromoRule {
    fn default() -> Self {
        let pricing = PricingConfig::default();
        Self::new(pricing.promo_code, pricing.promo_discount_percent)
    }
}

/// Promo state owned by the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoState {
    /// Raw contents of the promo code text field.
    pub code: String,
    /// Discount currently applied to the subtotal.
    pub discount_percent: u8,
}

impl PromoState {
    /// Start with an empty text field and the given discount.
    pub fn new(discount_percent: u8) -> Self {
        Self {
            code: String::new(),
            discount_percent: discount_percent.min(100),
        }
    }
}

impl Default for PromoState {
    fn default() -> Self {
        Self::new(PricingConfig::default().default_discount_percent)
    }
}
