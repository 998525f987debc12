/// Number of decimal digits kept in a vector's cached magnitude.
///
/// Rounding only applies to the magnitude used for display and ordering;
/// components, the exact norm and everything derived from it stay unrounded.
pub const MAGNITUDE_PRECISION: i32 = 2;

/// Rounds `value` to `digits` decimal places, halves away from zero.
pub fn round_to_precision(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    let scaled = value * factor;
    // From 2^52 up an f64 has no fractional digits left to round.
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }
    scaled.round() / factor
}

pub fn round_magnitude(norm: f64) -> f64 {
    round_to_precision(norm, MAGNITUDE_PRECISION)
}
