//! Lenient parsing of the quantity/price fields of the POS form.
//!
//! Form inputs are free text. A value is read the way a browser reads a
//! float: leading whitespace is skipped and the longest numeric prefix is
//! used, so `"2 bags"` reads as `2`. Anything that yields no number falls
//! back to a default instead of surfacing an error.

pub const DEFAULT_QUANTITY: f64 = 1.0;
pub const DEFAULT_UNIT_PRICE: f64 = 0.0;

/// Longest float prefix of `text`, if any.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s.get(..end)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Quantity field; zero and unparsable input count as one unit.
pub fn parse_quantity(text: &str) -> f64 {
    match parse_float_prefix(text) {
        Some(v) if v != 0.0 => v,
        _ => DEFAULT_QUANTITY,
    }
}

/// Unit price field; unparsable input counts as free.
pub fn parse_unit_price(text: &str) -> f64 {
    parse_float_prefix(text).unwrap_or(DEFAULT_UNIT_PRICE)
}
