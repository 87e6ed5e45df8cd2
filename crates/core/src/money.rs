//! Currency amounts: rounding and display formatting.
//!
//! Amounts are rupee values (`f64`) as the catalog supplies them — whole
//! numbers or simple decimals. Tax and display rounding is to the nearest
//! rupee, ties away from zero.

/// A rupee amount.
pub type Amount = f64;

/// Round to the nearest rupee, ties away from zero.
pub fn round_to_rupee(amount: Amount) -> i64 {
    amount.round() as i64
}

/// Format an amount for display: `₹` prefix, rounded, no decimal places.
pub fn format_price(amount: Amount) -> String {
    format!("₹{}", round_to_rupee(amount))
}
