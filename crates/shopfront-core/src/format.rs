//! Display formatting shared by both pages.

use std::borrow::Cow;

/// Listing-page description limit, in characters.
pub const DESCRIPTION_LIMIT: usize = 120;

/// Shown in place of a missing price.
pub const PRICE_PLACEHOLDER: &str = "—";

/// Format a price as US dollars: `$1,234.50`.
///
/// Always two fractional digits, rounded half away from zero, with comma
/// thousands separators. Negative values get a leading minus.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return PRICE_PLACEHOLDER.to_owned();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let fraction = cents % 100;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    format!("{sign}${}.{fraction:02}", group_thousands(dollars))
}

/// Format an optional price, falling back to [`PRICE_PLACEHOLDER`].
pub fn price_label(value: Option<f64>) -> String {
    value.map_or_else(|| PRICE_PLACEHOLDER.to_owned(), format_price)
}

/// Cut `value` to `limit` characters plus `…` if it is longer.
pub fn truncate(value: &str, limit: usize) -> Cow<'_, str> {
    match value.char_indices().nth(limit) {
        Some((cut, _)) => Cow::Owned(format!("{}…", &value[..cut])),
        None => Cow::Borrowed(value),
    }
}

/// Listing-page blurb: [`truncate`] at [`DESCRIPTION_LIMIT`].
pub fn blurb(description: &str) -> Cow<'_, str> {
    truncate(description, DESCRIPTION_LIMIT)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
