//! Numeric primitives shared by the coordinate types.
//!
//! Everything here is radius-agnostic: the Haversine routine returns a
//! central angle, and callers multiply by whichever body radius their
//! samples were recorded on.

use std::f64::consts::PI;

/// Floor of `value` at the given number of decimal digits,
/// `floor(value * 10^precision) / 10^precision`.
///
/// Rounds toward negative infinity, matching [`f64::floor`] for
/// negative inputs, and is idempotent at a fixed precision. Used as
/// the tolerance mechanism for coordinate equality as well as the
/// final rounding step of a distance.
pub fn decimal_floor(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);

    (value * scale).floor() / scale
}

/// Converts `degrees` to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180f64
}

/// Central angle between two surface points, via the Haversine formula.
///
/// All four coordinates are in radians. The returned angle is in
/// radians; multiplying by a body's radius yields the great-circle
/// distance between the points.
pub fn haversine_central_angle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lat = lat2 - lat1;
    let delta_lon = lon2 - lon1;

    let a = (delta_lat / 2f64).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2f64).sin().powi(2);

    2f64 * a.sqrt().atan2((1f64 - a).sqrt())
}
