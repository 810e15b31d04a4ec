//! Order summary pricing.
//!
//! The summary is derived from the cart on every read; the calculator only
//! owns the promo state and the fee.

use crate::cart::{CartStore, PromoRule, PromoState};
use crate::config::ShopConfig;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Pricing breakdown shown in the order summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Sum of price times quantity over all lines.
    pub subtotal: Money,
    /// Discount percentage in effect.
    pub discount_percent: u8,
    /// Amount taken off the subtotal.
    pub discount_amount: Money,
    /// Flat delivery fee.
    pub delivery_fee: Money,
    /// subtotal - discount + delivery fee.
    pub total: Money,
    /// Number of units in the cart.
    pub item_count: u64,
}

/// Computes totals from the cart plus the active promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingCalculator {
    rule: PromoRule,
    promo: PromoState,
    delivery_fee: Money,
}

impl PricingCalculator {
    /// Calculator with the stock promotion and a $15 delivery fee.
    pub fn new(currency: Currency) -> Self {
        Self::from_config(&ShopConfig {
            currency,
            ..ShopConfig::default()
        })
    }

    /// Build from storefront configuration.
    pub fn from_config(config: &ShopConfig) -> Self {
        Self {
            rule: PromoRule::new(
                config.pricing.promo_code.clone(),
                config.pricing.promo_discount_percent,
            ),
            promo: PromoState::new(config.pricing.default_discount_percent),
            delivery_fee: config.delivery_fee(),
        }
    }

    /// Currently applied discount percentage.
    pub fn discount_percent(&self) -> u8 {
        self.promo.discount_percent
    }

    /// Current promo state.
    pub fn promo(&self) -> &PromoState {
        &self.promo
    }

    /// The flat delivery fee.
    pub fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    /// Store the raw promo text field.
    pub fn set_promo_input(&mut self, text: impl Into<String>) {
        self.promo.code = text.into();
    }

    /// Apply a promo code.
    ///
    /// On a match the promotion's discount replaces the current one and is
    /// returned. Otherwise the discount is left unchanged.
    pub fn apply_promo(&mut self, code: &str) -> Result<u8, CommerceError> {
        if !self.rule.matches(code) {
            return Err(CommerceError::InvalidPromoCode(code.to_string()));
        }
        self.promo.discount_percent = self.rule.discount_percent;
        Ok(self.promo.discount_percent)
    }

    /// Apply whatever is in the promo text field.
    pub fn apply_promo_input(&mut self) -> Result<u8, CommerceError> {
        let code = self.promo.code.clone();
        self.apply_promo(&code)
    }

    /// Compute the order summary for the cart's current contents.
    pub fn summarize(&self, cart: &CartStore) -> Result<OrderSummary, CommerceError> {
        let currency = self.delivery_fee.currency;

        let mut line_totals = Vec::with_capacity(cart.len());
        for item in cart.items() {
            if item.price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: item.price.currency.code().to_string(),
                });
            }
            line_totals.push(item.line_total().ok_or(CommerceError::Overflow)?);
        }
        let subtotal =
            Money::try_sum(line_totals.iter(), currency).ok_or(CommerceError::Overflow)?;

        let discount_amount = subtotal.percentage(self.promo.discount_percent);
        let total = subtotal
            .try_subtract(&discount_amount)
            .and_then(|m| m.try_add(&self.delivery_fee))
            .ok_or(CommerceError::Overflow)?;

        Ok(OrderSummary {
            subtotal,
            discount_percent: self.promo.discount_percent,
            discount_amount,
            delivery_fee: self.delivery_fee,
            total,
            item_count: cart.item_count(),
        })
    }
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::LineItem;

    fn usd(units: i64) -> Money {
        Money::from_units(units, Currency::USD)
    }

    fn sample_cart() -> CartStore {
        let mut cart = CartStore::new();
        cart.add_to_cart(LineItem::new("1", "Hoodie For Mens", usd(120)));
        cart.add_to_cart(LineItem::new("2", "T-Shirts For Mens", usd(240)).with_quantity(2));
        cart
    }

    #[test]
    fn test_summary_breakdown() {
        let calc = PricingCalculator::default();
        let summary = calc.summarize(&sample_cart()).unwrap();

        assert_eq!(summary.subtotal, usd(600));
        assert_eq!(summary.discount_percent, 20);
        assert_eq!(summary.discount_amount, usd(120));
        assert_eq!(summary.delivery_fee, usd(15));
        assert_eq!(summary.total, usd(495));
        assert_eq!(summary.item_count, 3);
    }

    #[test]
    fn test_empty_cart_still_pays_delivery() {
        let calc = PricingCalculator::default();
        let summary = calc.summarize(&CartStore::new()).unwrap();

        assert_eq!(summary.subtotal, usd(0));
        assert_eq!(summary.total, usd(15));
        assert!(summary.discount_amount.is_zero());
    }

    #[test]
    fn test_apply_valid_promo() {
        let mut config = ShopConfig::default();
        config.pricing.default_discount_percent = 0;
        let mut calc = PricingCalculator::from_config(&config);
        assert_eq!(calc.discount_percent(), 0);

        assert_eq!(calc.apply_promo("DISCOUNT20"), Ok(20));
        assert_eq!(calc.discount_percent(), 20);
    }

    #[test]
    fn test_apply_invalid_promo_keeps_discount() {
        let mut config = ShopConfig::default();
        config.pricing.default_discount_percent = 5;
        let mut calc = PricingCalculator::from_config(&config);

        let err = calc.apply_promo("WRONG").unwrap_err();
        assert_eq!(err, CommerceError::InvalidPromoCode("WRONG".to_string()));
        assert_eq!(calc.discount_percent(), 5);
    }

    #[test]
    fn test_apply_promo_input() {
        let mut calc = PricingCalculator::default();
        calc.set_promo_input("discount20");
        assert!(calc.apply_promo_input().is_err());
        assert_eq!(calc.promo().code, "discount20");

        calc.set_promo_input("DISCOUNT20");
        assert_eq!(calc.apply_promo_input(), Ok(20));
    }

    #[test]
    fn test_currency_mismatch() {
        let calc = PricingCalculator::new(Currency::EUR);
        let err = calc.summarize(&sample_cart()).unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
    }

    #[test]
    fn test_overflow_reported() {
        let mut cart = CartStore::new();
        cart.add_to_cart(
            LineItem::new("x", "Gold", Money::new(i64::MAX, Currency::USD)).with_quantity(2),
        );
        let err = PricingCalculator::default().summarize(&cart).unwrap_err();
        assert_eq!(err, CommerceError::Overflow);
    }
}
