//! Per-tab shopping session.
//!
//! `ShopSession` is the single owner of the cart, the wishlist and the promo
//! state. The UI holds it in one reactive cell and routes every mutation
//! through the methods below, so each change is also logged.

use shopco_observability::{LogSink, SessionLogger};

use crate::cart::{AddOutcome, CartStore, LineItem, OrderSummary, PricingCalculator, QuantityAction};
use crate::config::ShopConfig;
use crate::error::CommerceError;
use crate::ids::{ProductId, SessionId};
use crate::wishlist::{WishlistItem, WishlistStore};

/// Cart, wishlist and pricing state for one shopper.
#[derive(Debug, Clone)]
pub struct ShopSession {
    id: SessionId,
    cart: CartStore,
    wishlist: WishlistStore,
    pricing: PricingCalculator,
    promo_error: Option<CommerceError>,
    logger: SessionLogger,
}

impl ShopSession {
    /// Start an empty session logging to stderr.
    pub fn new(config: &ShopConfig) -> Self {
        Self::with_sink(config, LogSink::Stderr)
    }

    /// Start an empty session with an explicit log sink.
    pub fn with_sink(config: &ShopConfig, sink: LogSink) -> Self {
        let id = SessionId::generate();
        let logger = SessionLogger::new(id.as_str())
            .with_min_level(config.logging.level)
            .with_format(config.logging.format)
            .with_sink(sink);

        logger
            .info_builder("session started")
            .field("currency", config.currency.code())
            .field_u64(
                "max_quantity_per_item",
                u64::from(config.cart.max_quantity_per_item),
            )
            .emit();

        Self {
            id,
            cart: CartStore::new().with_max_quantity(config.cart.max_quantity_per_item),
            wishlist: WishlistStore::new(),
            pricing: PricingCalculator::from_config(config),
            promo_error: None,
            logger,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    pub fn pricing(&self) -> &PricingCalculator {
        &self.pricing
    }

    /// Why the last promo attempt failed, until the next attempt.
    pub fn promo_error(&self) -> Option<&CommerceError> {
        self.promo_error.as_ref()
    }

    /// The session's logger, for UI-level events.
    pub fn logger(&self) -> &SessionLogger {
        &self.logger
    }

    /// Add to the cart, merging with an existing line.
    pub fn add_to_cart(&mut self, item: LineItem) -> AddOutcome {
        let id = item.id.clone();
        let outcome = self.cart.add_to_cart(item);

        let message = match outcome {
            AddOutcome::Inserted { .. } => "cart item added",
            AddOutcome::Merged { .. } => "cart item merged",
        };
        self.logger
            .scoped("cart")
            .debug_builder(message)
            .field("product_id", id.as_str())
            .field_u64("quantity", u64::from(outcome.quantity()))
            .emit();

        outcome
    }

    /// Remove a cart line. Absent ids are ignored.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        let removed = self.cart.remove_from_cart(id);
        self.logger
            .scoped("cart")
            .debug_builder("cart item removed")
            .field("product_id", id.as_str())
            .field_bool("found", removed)
            .emit();
        removed
    }

    /// Set a cart line's quantity (clamped to at least 1).
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> Option<u32> {
        let stored = self.cart.update_quantity(id, quantity);
        let logger = self.logger.scoped("cart");
        let builder = logger
            .debug_builder("cart quantity updated")
            .field("product_id", id.as_str())
            .field_u64("requested", u64::from(quantity));
        match stored {
            Some(q) => builder.field_u64("quantity", u64::from(q)).emit(),
            None => builder.field_bool("found", false).emit(),
        }
        stored
    }

    /// Apply a +/- press to a cart line.
    pub fn step_quantity(&mut self, id: &ProductId, action: QuantityAction) -> Option<u32> {
        let current = self.cart.get(id)?.quantity;
        self.update_quantity(id, action.apply(current))
    }

    /// Save to the wishlist. Returns `false` if already saved.
    pub fn add_to_wishlist(&mut self, item: WishlistItem) -> bool {
        let id = item.id.clone();
        let added = self.wishlist.add_to_wishlist(item);
        self.logger
            .scoped("wishlist")
            .debug_builder("wishlist item added")
            .field("product_id", id.as_str())
            .field_bool("new", added)
            .emit();
        added
    }

    /// Remove from the wishlist. Absent ids are ignored.
    pub fn remove_from_wishlist(&mut self, id: &ProductId) -> bool {
        let removed = self.wishlist.remove_from_wishlist(id);
        self.logger
            .scoped("wishlist")
            .debug_builder("wishlist item removed")
            .field("product_id", id.as_str())
            .field_bool("found", removed)
            .emit();
        removed
    }

    /// Move a wishlist item into the cart.
    pub fn move_to_cart(&mut self, id: &ProductId) -> Option<AddOutcome> {
        let outcome = self.wishlist.move_to_cart(id, &mut self.cart);
        if let Some(outcome) = outcome {
            self.logger
                .scoped("wishlist")
                .debug_builder("wishlist item moved to cart")
                .field("product_id", id.as_str())
                .field_u64("quantity", u64::from(outcome.quantity()))
                .emit();
        }
        outcome
    }

    /// Update the promo text field.
    pub fn set_promo_input(&mut self, text: impl Into<String>) {
        self.pricing.set_promo_input(text);
    }

    /// Apply the promo text field.
    pub fn apply_promo_input(&mut self) -> Result<u8, CommerceError> {
        let result = self.pricing.apply_promo_input();
        let code = self.pricing.promo().code.clone();
        self.record_promo(&code, result)
    }

    /// Apply a promo code.
    pub fn apply_promo(&mut self, code: &str) -> Result<u8, CommerceError> {
        let result = self.pricing.apply_promo(code);
        self.record_promo(code, result)
    }

    fn record_promo(
        &mut self,
        code: &str,
        result: Result<u8, CommerceError>,
    ) -> Result<u8, CommerceError> {
        let logger = self.logger.scoped("pricing");
        match &result {
            Ok(percent) => logger
                .info_builder("promo applied")
                .field("code", code)
                .field_u64("discount_percent", u64::from(*percent))
                .emit(),
            Err(_) => logger
                .warn_builder("promo rejected")
                .field("code", code)
                .field_u64(
                    "discount_percent",
                    u64::from(self.pricing.discount_percent()),
                )
                .emit(),
        }
        self.promo_error = result.as_ref().err().cloned();
        result
    }

    /// Current order summary.
    pub fn summary(&self) -> Result<OrderSummary, CommerceError> {
        self.pricing.summarize(&self.cart).inspect_err(|e| {
            self.logger
                .scoped("pricing")
                .error_builder("order summary failed")
                .field("error", e.to_string())
                .emit();
        })
    }
}
