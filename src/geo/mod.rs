#![doc = include_str!("../../docs/geo.md")]

/// Equatorial radius of Earth in meters, the radius samples
/// are recorded against by default.
pub const EARTH_EQUATORIAL_RADIUS: f64 = 6_371_000.0;

/// Decimal precision at which two coordinates are considered coincident.
pub const COINCIDENCE_PRECISION: i32 = 10;
/// Decimal precision applied to computed distances, in meters.
pub const DISTANCE_PRECISION: i32 = 3;

#[doc(hidden)]
pub mod body;
#[doc(hidden)]
pub mod error;
pub mod location;
pub mod math;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use body::{Body, Earth};
#[doc(inline)]
pub use location::{Degree, Location, Meters};
