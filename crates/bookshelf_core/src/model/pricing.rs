//! Discount pricing helper.

/// Discount fraction applied when the caller does not supply one.
pub const DEFAULT_DISCOUNT: f64 = 0.10;

/// Returns `price` reduced by [`DEFAULT_DISCOUNT`], formatted to 2 decimals.
pub fn discounted_price(price: f64) -> String {
    discounted_price_with(price, DEFAULT_DISCOUNT)
}

/// Returns `price - price * discount`, formatted to 2 decimals.
///
/// The fraction is not clamped; a discount above `1.0` yields a negative
/// price.
pub fn discounted_price_with(price: f64, discount: f64) -> String {
    format!("{:.2}", price - price * discount)
}
