//! Invoice totals derivation and display formatting.
//!
//! Totals are pure functions of the line items and the `include_vat` flag,
//! re-derived from scratch on every call — never incrementally patched — so
//! they cannot drift from the items that produced them. Arithmetic is exact;
//! rounding happens only in [`format_gbp`].

use rust_decimal::Decimal;

use super::types::{LineItem, LineTotals, Totals};

/// Currency symbol for all displayed amounts. Single-currency by design.
pub const CURRENCY_SYMBOL: &str = "£";

/// Derive the full monetary summary for a list of items.
///
/// Per-line net and tax are computed at each line's own rate regardless of
/// `include_vat`; the flag suppresses only the aggregate `tax` (and thereby
/// its contribution to `total`).
pub fn calculate_totals(items: &[LineItem], include_vat: bool) -> Totals {
    let lines: Vec<LineTotals> = items
        .iter()
        .map(|item| LineTotals {
            total: item.line_total(),
            tax: item.line_tax(),
        })
        .collect();

    let subtotal: Decimal = lines.iter().map(|l| l.total).sum();
    let tax: Decimal = if include_vat {
        lines.iter().map(|l| l.tax).sum()
    } else {
        Decimal::ZERO
    };

    Totals {
        subtotal,
        tax,
        total: subtotal + tax,
        lines,
    }
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount for display: "£" + exactly two fractional digits,
/// half-up rounded.
pub fn format_gbp(amount: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{:.2}", round_half_up(amount, 2))
}
