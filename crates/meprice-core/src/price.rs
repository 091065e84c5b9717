//! Rupiah display formatting, matching the `id-ID` locale: `.` groups
//! thousands, `,` separates decimals, at most three fraction digits.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::cart::CartLine;

const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats an amount as `Rp 12.000`.
#[must_use]
pub fn format_rupiah(amount: Decimal) -> String {
    format!("Rp {}", format_id_number(amount))
}

/// Receipt line: `Kopi Susu (x2) - Rp 30.000`.
#[must_use]
pub fn format_line_total(line: &CartLine) -> String {
    format!(
        "{} (x{}) - {}",
        line.product.name,
        line.quantity(),
        format_rupiah(line.line_total())
    )
}

/// Formats a number the way `toLocaleString("id-ID")` does.
#[must_use]
pub fn format_id_number(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}
