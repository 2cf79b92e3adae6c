//! Number formatting for the cart table

use contracts::domain::a026_pos_cart::aggregate::round_to_cents;

/// Fixed two-decimal rendering, no thousands separator: `300.00`
///
/// Rounds to cents exactly like the checkout payload, so the shown total is
/// the submitted one (half a cent rounds up: `6.125` shows `6.13`).
pub fn format_money(value: f64) -> String {
    let cents = round_to_cents(value);
    // -0.00 reads as a bug on a receipt
    let cents = if cents == 0.0 { 0.0 } else { cents };
    format!("{:.2}", cents)
}

/// Money with the currency symbol in front, e.g. `₱300.00`
pub fn format_currency(value: f64, symbol: &str) -> String {
    format!("{}{}", symbol, format_money(value))
}

/// Quantities are shown as entered: `2`, `2.5`
pub fn format_quantity(value: f64) -> String {
    value.to_string()
}
