use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::{Cart, CartLine};
use crate::error::CheckoutError;

/// Snapshot of a completed checkout. Owns copies of the purchased lines, so
/// later cart mutations never show through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    lines: Vec<CartLine>,
    total_items: u64,
    total_price: Decimal,
    purchased_at: DateTime<Utc>,
}

impl PurchaseReceipt {
    fn snapshot(cart: &Cart, purchased_at: DateTime<Utc>) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
            purchased_at,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    #[must_use]
    pub fn purchased_at(&self) -> DateTime<Utc> {
        self.purchased_at
    }
}

/// Two-state checkout flow: `Idle` until a purchase completes, then
/// `ReceiptShown` until the receipt is dismissed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutState {
    #[default]
    Idle,
    ReceiptShown(PurchaseReceipt),
}

impl CheckoutState {
    /// Checks out `cart` at the current time. See [`CheckoutState::checkout_at`].
    ///
    /// # Errors
    ///
    /// Same as [`CheckoutState::checkout_at`].
    pub fn checkout(&mut self, cart: &mut Cart) -> Result<&PurchaseReceipt, CheckoutError> {
        self.checkout_at(cart, Utc::now())
    }

    /// Turns the cart contents into a receipt stamped `now`, empties the cart,
    /// closes the cart panel and moves to `ReceiptShown`.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`] when the cart has no lines.
    /// - [`CheckoutError::ReceiptPending`] when a receipt is still shown.
    ///
    /// Neither the cart nor the state changes on error.
    pub fn checkout_at(
        &mut self,
        cart: &mut Cart,
        now: DateTime<Utc>,
    ) -> Result<&PurchaseReceipt, CheckoutError> {
        if matches!(self, Self::ReceiptShown(_)) {
            return Err(CheckoutError::ReceiptPending);
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let receipt = PurchaseReceipt::snapshot(cart, now);
        cart.clear();
        cart.set_open(false);

        tracing::info!(
            total_items = receipt.total_items,
            total_price = %receipt.total_price,
            "checkout completed"
        );

        *self = Self::ReceiptShown(receipt);
        self.receipt().ok_or(CheckoutError::EmptyCart)
    }

    /// Discards the shown receipt and returns to `Idle`. No-op when idle.
    pub fn dismiss_receipt(&mut self) -> Option<PurchaseReceipt> {
        match std::mem::take(self) {
            Self::ReceiptShown(receipt) => Some(receipt),
            Self::Idle => None,
        }
    }

    #[must_use]
    pub fn receipt(&self) -> Option<&PurchaseReceipt> {
        match self {
            Self::ReceiptShown(receipt) => Some(receipt),
            Self::Idle => None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
