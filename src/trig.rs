use std::f64::consts::PI;

/// Converts an angle in degrees to radians. Defined for every `f64`, so NaN
/// and infinities pass through unchanged.
pub fn degrees_to_radians(x: f64) -> f64 {
    x * PI / 180.0
}
