//! Shopping cart module.
//!
//! Contains the cart store, quantity stepping, promo codes and pricing.

mod cart;
mod discount;
mod pricing;
mod quantity;

pub use cart::{AddOutcome, CartStore, LineItem, MAX_QUANTITY_PER_ITEM};
pub use discount::{PromoRule, PromoState};
pub use pricing::{OrderSummary, PricingCalculator};
pub use quantity::QuantityAction;
