use crate::core::data::complex::Complex;

/// Smooth value of escaped orbits too far out for the formula to have a real value.
pub const ESCAPED_FLOOR: f64 = 0.0;

/// Continuous escape value `ln(1.5 + n - log2(ln|z|)) / 3.4` for the final orbit point.
///
/// Orbits that never escape can end with `|z| <= 1`, where the formula has no
/// real value; those get `max_iterations`. An orbit that escapes after very few
/// steps to a huge `|z|` pushes the outer logarithm's argument below zero and
/// gets [`ESCAPED_FLOOR`] instead, so it is never mistaken for a bounded orbit.
#[must_use]
pub fn smooth_value(count: u32, z: Complex, max_iterations: u32) -> f64 {
    let value = (1.5 + count as f64 - z.magnitude().ln().ln() / std::f64::consts::LN_2).ln() / 3.4;

    if value.is_finite() {
        value
    } else if count < max_iterations {
        ESCAPED_FLOOR
    } else {
        max_iterations as f64
    }
}
