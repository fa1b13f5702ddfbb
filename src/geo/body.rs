use crate::geo::{EARTH_EQUATORIAL_RADIUS, Meters};

/// `Body`
///
/// Radius capability for the spherical body a sample was recorded on.
/// A [`Location`](crate::geo::Location) bakes the radius in at
/// construction; supporting another body means supplying another
/// implementor, not new distance logic.
pub trait Body {
    /// Radius of the body in meters.
    const RADIUS_METERS: Meters;
}

/// Earth, modeled as a sphere at its equatorial radius.
pub struct Earth;

impl Body for Earth {
    const RADIUS_METERS: Meters = EARTH_EQUATORIAL_RADIUS;
}
