//! Storefront configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use shopco_observability::{LogFormat, LogLevel};

use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Top-level storefront configuration, usually read from `shop.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Currency every price in the session is expressed in.
    #[serde(default)]
    pub currency: Currency,

    /// Promo and fee settings.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Cart limits.
    #[serde(default)]
    pub cart: CartConfig,

    /// Session logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShopConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let config: ShopConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Check value ranges serde cannot express.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.pricing.promo_discount_percent > 100 {
            return Err(CommerceError::ConfigError(format!(
                "promo_discount_percent must be at most 100, got {}",
                self.pricing.promo_discount_percent
            )));
        }
        if self.pricing.default_discount_percent > 100 {
            return Err(CommerceError::ConfigError(format!(
                "default_discount_percent must be at most 100, got {}",
                self.pricing.default_discount_percent
            )));
        }
        if self.pricing.delivery_fee < 0.0 || !self.pricing.delivery_fee.is_finite() {
            return Err(CommerceError::ConfigError(format!(
                "delivery_fee must be a non-negative amount, got {}",
                self.pricing.delivery_fee
            )));
        }
        if self.pricing.promo_code.is_empty() {
            return Err(CommerceError::ConfigError(
                "promo_code must not be empty".to_string(),
            ));
        }
        if self.cart.max_quantity_per_item == 0 {
            return Err(CommerceError::ConfigError(
                "max_quantity_per_item must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The delivery fee as money in the configured currency.
    pub fn delivery_fee(&self) -> Money {
        Money::from_decimal(self.pricing.delivery_fee, self.currency)
    }
}

/// Promo and fee settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat delivery fee in whole currency units.
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: f64,

    /// Discount applied before any promo code is entered.
    #[serde(default = "default_discount_percent")]
    pub default_discount_percent: u8,

    /// The single accepted promo code (case-sensitive).
    #[serde(default = "default_promo_code")]
    pub promo_code: String,

    /// Discount the promo code grants.
    #[serde(default = "default_discount_percent")]
    pub promo_discount_percent: u8,
}

fn default_delivery_fee() -> f64 {
    15.0
}

fn default_discount_percent() -> u8 {
    20
}

fn default_promo_code() -> String {
    "DISCOUNT20".to_string()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            delivery_fee: default_delivery_fee(),
            default_discount_percent: default_discount_percent(),
            promo_code: default_promo_code(),
            promo_discount_percent: default_discount_percent(),
        }
    }
}

/// Cart limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Upper bound on a single line item's quantity.
    #[serde(default = "default_max_quantity")]
    pub max_quantity_per_item: u32,
}

fn default_max_quantity() -> u32 {
    crate::cart::MAX_QUANTITY_PER_ITEM
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            max_quantity_per_item: default_max_quantity(),
        }
    }
}

/// Session logging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}
