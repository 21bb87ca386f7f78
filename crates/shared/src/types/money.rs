//! Money helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`; statement figures are
//! carried at 2 fractional digits.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a statement amount to 2 decimal places using Banker's Rounding.
#[must_use]
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Renders an amount as a plain 2-dp decimal string (e.g. `-1234.50`).
///
/// This is the machine-readable form used by CSV export; it parses back
/// with `Decimal::from_str`.
#[must_use]
pub fn plain_amount(amount: Decimal) -> String {
    format!("{:.2}", round2(amount))
}

/// Renders an amount for display with a currency symbol and thousands
/// separators (e.g. `$1,234.50`).
#[must_use]
pub fn display_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = round2(amount);
    let negative = rounded.is_sign_negative();
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{frac_part}")
}
