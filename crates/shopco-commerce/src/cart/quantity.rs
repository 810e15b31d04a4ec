//! Quantity stepper used by the cart rows and the product page picker.

/// A +/- button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityAction {
    Increment,
    Decrement,
}

impl QuantityAction {
    /// The quantity after this press. Never goes below 1.
    pub fn apply(self, current: u32) -> u32 {
        match self {
            QuantityAction::Increment => current.saturating_add(1),
            QuantityAction::Decrement => current.saturating_sub(1).max(1),
        }
    }
}
