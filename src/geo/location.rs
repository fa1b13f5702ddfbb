use std::fmt::{Debug, Formatter};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::geo::body::Body;
use crate::geo::error::GeoError;
use crate::geo::math;
use crate::geo::{COINCIDENCE_PRECISION, DISTANCE_PRECISION};

pub type Degree = f64;
pub type Meters = f64;

/// `Location`
///
/// A single time-stamped location sample: a latitude/longitude pair in
/// degrees, an altitude in meters, and the radius of the body the
/// sample was recorded on. The radius is fixed at construction through
/// a [`Body`] implementor and never changes afterwards.
///
/// ```rust
/// use chrono::Utc;
/// use waypath::{Earth, Location};
///
/// let location = Location::new::<Earth>(12.123, 13.234, Utc::now()).unwrap();
/// println!("Position: {:?}", location);
/// ```
///
/// Latitude and longitude are validated on every assignment, so a
/// constructed value always holds legal coordinates.
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    id: u64,
    latitude: Degree,
    longitude: Degree,
    altitude: Meters,
    timestamp: DateTime<Utc>,
    radius: Meters,
}

impl Location {
    /// Constructs a new `Location` on the body `B` from a coordinate
    /// pair in degrees, rejecting latitudes outside [-90, 90] and
    /// longitudes outside [-180, 180]. Altitude and id start at zero.
    pub fn new<B: Body>(
        latitude: Degree,
        longitude: Degree,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, GeoError> {
        let mut location = Location {
            id: 0,
            latitude: 0f64,
            longitude: 0f64,
            altitude: 0f64,
            timestamp,
            radius: B::RADIUS_METERS,
        };

        location.set_latitude(latitude)?;
        location.set_longitude(longitude)?;

        Ok(location)
    }

    /// Checks whether `other` sits on the same surface position,
    /// at [`COINCIDENCE_PRECISION`] decimals.
    pub fn coincides(&self, other: &Self) -> bool {
        self.coincides_at(other, COINCIDENCE_PRECISION)
    }

    /// Surface-level equality at the given decimal precision.
    ///
    /// Both latitudes and both longitudes are floored to `precision`
    /// decimals and the rounded values compared exactly; the flooring
    /// is the tolerance mechanism, there is no epsilon on top of it.
    /// Altitude and timestamp play no part: two samples taken hours
    /// apart at the same coordinates still coincide.
    pub fn coincides_at(&self, other: &Self, precision: i32) -> bool {
        math::decimal_floor(self.latitude, precision)
            == math::decimal_floor(other.latitude, precision)
            && math::decimal_floor(self.longitude, precision)
                == math::decimal_floor(other.longitude, precision)
    }

    /// Great-circle distance to `other` in meters, floored at
    /// [`DISTANCE_PRECISION`] decimals.
    pub fn distance(&self, other: &Self) -> Meters {
        self.distance_at(other, DISTANCE_PRECISION)
    }

    /// Great-circle distance to `other` in meters, floored at the given
    /// decimal precision. Always non-negative.
    ///
    /// Coincident locations short-circuit to exactly `0.0` before any
    /// trigonometry runs, so near-zero separations carry no
    /// floating-point noise.
    ///
    /// The arc length uses the radius of `self`. When the two samples
    /// were recorded on bodies of different radii the operation is
    /// asymmetric: `a.distance(&b)` and `b.distance(&a)` differ. The
    /// radii are deliberately not averaged.
    pub fn distance_at(&self, other: &Self, precision: i32) -> Meters {
        if self.coincides_at(other, COINCIDENCE_PRECISION) {
            return 0f64;
        }

        let angle = math::haversine_central_angle(
            math::degrees_to_radians(self.latitude),
            math::degrees_to_radians(self.longitude),
            math::degrees_to_radians(other.latitude),
            math::degrees_to_radians(other.longitude),
        );

        math::decimal_floor(self.radius * angle, precision)
    }

    /// Speed between the two samples in meters per second, using the
    /// default distance precision.
    ///
    /// Fails with [`GeoError::ZeroDuration`] when the timestamps are
    /// identical, since no meaningful speed exists over zero elapsed
    /// time. The ordering of the two samples does not matter.
    pub fn speed(&self, other: &Self) -> Result<f64, GeoError> {
        if self.timestamp == other.timestamp {
            return Err(GeoError::ZeroDuration);
        }

        let elapsed = (self.timestamp - other.timestamp).abs().as_seconds_f64();

        Ok(self.distance(other) / elapsed)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Caller-assigned identifier, opaque to the crate.
    pub fn set_id(&mut self, id: u64) -> &mut Self {
        self.id = id;

        self
    }

    pub fn latitude(&self) -> Degree {
        self.latitude
    }

    pub fn set_latitude(&mut self, latitude: Degree) -> Result<&mut Self, GeoError> {
        if !(-90f64..=90f64).contains(&latitude) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Latitude must be within -90 and 90. Given: {}",
                latitude
            )));
        }

        self.latitude = latitude;

        Ok(self)
    }

    pub fn longitude(&self) -> Degree {
        self.longitude
    }

    pub fn set_longitude(&mut self, longitude: Degree) -> Result<&mut Self, GeoError> {
        if !(-180f64..=180f64).contains(&longitude) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Longitude must be within -180 and 180. Given: {}",
                longitude
            )));
        }

        self.longitude = longitude;

        Ok(self)
    }

    pub fn altitude(&self) -> Meters {
        self.altitude
    }

    pub fn set_altitude(&mut self, altitude: Meters) -> &mut Self {
        self.altitude = altitude;

        self
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) -> &mut Self {
        self.timestamp = timestamp;

        self
    }

    /// Radius of the body this sample was recorded on, in meters.
    pub fn radius(&self) -> Meters {
        self.radius
    }
}

impl From<&Location> for geo::Point {
    fn from(value: &Location) -> Self {
        geo::Point::new(value.longitude, value.latitude)
    }
}

impl Debug for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POINT({} {})", self.longitude, self.latitude)
    }
}
