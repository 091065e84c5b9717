//! In-memory shopping cart.
//!
//! Every operation is total: bad input (unknown ids, deltas that would drive
//! a quantity to zero or below) is normalized, never rejected. After any
//! operation each line has `quantity >= 1` and product ids are unique.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::products::{Product, ProductId};

/// One product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub product: Product,
    quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Always at least 1.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price * quantity` for this line, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product
            .price
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(Decimal::MAX)
    }
}

/// Cart lines in first-added order plus the cart panel's open flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    open: bool,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`, appending a new line if it is not in the
    /// cart yet. Opens the cart panel.
    pub fn add_item(&mut self, product: &Product) {
        match self.position(&product.id) {
            Some(idx) => {
                if let Some(line) = self.lines.get_mut(idx) {
                    line.quantity = line.quantity.saturating_add(1);
                }
            }
            None => self.lines.push(CartLine::new(product.clone())),
        }
        self.open = true;
    }

    /// Shifts a line's quantity by `delta`. A result of zero or less removes
    /// the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: &ProductId, delta: i64) {
        let Some(idx) = self.position(product_id) else {
            tracing::debug!(product_id = %product_id, "update_quantity: id not in cart");
            return;
        };

        let new_qty = self
            .lines
            .get(idx)
            .map_or(0, |line| i64::from(line.quantity).saturating_add(delta));

        if new_qty > 0 {
            if let Some(line) = self.lines.get_mut(idx) {
                line.quantity = u32::try_from(new_qty).unwrap_or(u32::MAX);
            }
        } else {
            self.lines.remove(idx);
        }
    }

    /// Removes the line for `product_id` if present.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| &line.product.id != product_id);
    }

    /// Sum of `price * quantity` over the current lines.
    /// Saturates at [`Decimal::MAX`] instead of overflowing.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .try_fold(Decimal::ZERO, Decimal::checked_add)
            .unwrap_or(Decimal::MAX)
    }

    /// Sum of quantities over the current lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity for `product_id`, or 0 when it is not in the cart.
    #[must_use]
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.position(product_id)
            .and_then(|idx| self.lines.get(idx))
            .map_or(0, CartLine::quantity)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| &line.product.id == product_id)
    }
}

#[cfg(test)]
#[path = "cart_test.rs"]
mod tests;
