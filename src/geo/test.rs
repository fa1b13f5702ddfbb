use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};
use geo::{Distance, Haversine, Point};

use crate::geo::error::GeoError;
use crate::geo::math::{decimal_floor, degrees_to_radians, haversine_central_angle};
use crate::geo::{Body, Earth, Location, Meters};

fn epoch(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

fn located(latitude: f64, longitude: f64) -> Location {
    Location::new::<Earth>(latitude, longitude, epoch(0)).expect("Coordinates must be legal")
}

#[test]
fn coordinates_stored_exactly() {
    let location = located(12.123, -77.02343850496823);

    assert_eq!(location.latitude(), 12.123);
    assert_eq!(location.longitude(), -77.02343850496823);
    assert_eq!(location.altitude(), 0.0);
    assert_eq!(location.radius(), Earth::RADIUS_METERS);
}

#[test]
fn out_of_range_coordinates_rejected() {
    assert!(matches!(
        Location::new::<Earth>(90.1, 0.0, epoch(0)),
        Err(GeoError::InvalidCoordinate(_))
    ));
    assert!(matches!(
        Location::new::<Earth>(0.0, -180.5, epoch(0)),
        Err(GeoError::InvalidCoordinate(_))
    ));

    let mut location = located(0.0, 0.0);
    assert!(location.set_latitude(-91.0).is_err());
    assert!(location.set_longitude(181.0).is_err());

    // A failed assignment must leave the previous value in place.
    assert_eq!(location.latitude(), 0.0);
    assert_eq!(location.longitude(), 0.0);

    // Boundary values are legal.
    assert!(location.set_latitude(90.0).is_ok());
    assert!(location.set_longitude(-180.0).is_ok());
}

#[test]
fn coincidence_is_reflexive() {
    let location = located(12.123, 43.234);

    for precision in 0..=12 {
        assert!(location.coincides_at(&location, precision));
    }
}

#[test]
fn coincidence_of_equal_coordinates() {
    let a = located(12.123, 43.234);
    let b = located(12.123, 43.234);

    assert!(a.coincides_at(&b, 10));
}

#[test]
fn coincidence_ignores_altitude_and_timestamp() {
    let a = located(12.123, 43.234);
    let mut b = Location::new::<Earth>(12.123, 43.234, epoch(7200)).unwrap();
    b.set_altitude(1250.0);

    assert!(a.coincides(&b));
}

#[test]
fn distance_to_self_is_zero() {
    let location = located(48.8566, 2.3522);

    assert_eq!(location.distance(&location), 0.0);
}

#[test_log::test]
fn distance_of_reference_pair() {
    let a = located(12.123, 13.234);
    let b = located(12.223, 13.244);

    assert_eq!(a.distance(&b), 11172.491);
}

#[test]
fn distance_is_symmetric_on_shared_radius() {
    let a = located(52.5200, 13.4050);
    let b = located(48.8566, 2.3522);

    assert_eq!(a.distance(&b), b.distance(&a));
}

#[test]
fn distance_of_near_coincident_pair_floors_to_zero() {
    let a = located(12.123, 43.234);
    let b = located(12.123 + 1e-12, 43.234);

    // Within the coincidence precision the fast path applies,
    // no trigonometric noise leaks through.
    assert_eq!(a.distance(&b), 0.0);
}

#[test]
fn collinear_distances_add_up() {
    let a = located(0.0, 10.0);
    let b = located(1.0, 10.0);
    let c = located(2.0, 10.0);

    // B lies between A and C on the same meridian.
    assert_relative_eq!(
        a.distance(&b) + b.distance(&c),
        a.distance(&c),
        epsilon = 0.01
    );
}

#[test]
fn distance_agrees_with_georust() {
    let a = located(52.5200, 13.4050);
    let b = located(48.8566, 2.3522);

    // geo models Earth at its mean rather than equatorial radius,
    // so the comparison is relative.
    assert_relative_eq!(
        a.distance(&b),
        Haversine.distance(Point::from(&a), Point::from(&b)),
        max_relative = 1e-4
    );
}

#[test]
fn distance_uses_receiver_radius() {
    struct HalfEarth;

    impl Body for HalfEarth {
        const RADIUS_METERS: Meters = Earth::RADIUS_METERS / 2.0;
    }

    let a = located(12.123, 13.234);
    let b = Location::new::<HalfEarth>(12.223, 13.244, epoch(0)).unwrap();

    assert_relative_eq!(a.distance(&b), 2.0 * b.distance(&a), max_relative = 1e-6);
}

#[test_log::test]
fn speed_of_reference_pair() {
    let a = located(12.123, 13.234);
    let mut b = located(12.223, 13.244);
    b.set_timestamp(epoch(3600));

    let speed = a.speed(&b).expect("Timestamps differ");
    assert_relative_eq!(speed, 11172.491 / 3600.0);

    // Same elapsed magnitude in both directions.
    assert_eq!(a.speed(&b).unwrap(), b.speed(&a).unwrap());
}

#[test]
fn speed_with_identical_timestamps_fails() {
    let a = located(12.123, 13.234);
    let b = located(12.223, 13.244);

    assert_eq!(a.speed(&b), Err(GeoError::ZeroDuration));
}

#[test]
fn speed_with_subsecond_elapsed() {
    let a = located(0.0, 0.0);
    let mut b = located(0.0, 0.001);
    b.set_timestamp(Utc.timestamp_millis_opt(500).unwrap());

    let speed = a.speed(&b).unwrap();
    assert_relative_eq!(speed, a.distance(&b) / 0.5);
}

#[test]
fn decimal_floor_rounds_toward_negative_infinity() {
    assert_eq!(decimal_floor(-1.2345, 2), -1.24);
    assert_eq!(decimal_floor(-1.5, 0), -2.0);
    assert_eq!(decimal_floor(1.2399, 2), 1.23);
}

#[test]
fn decimal_floor_is_idempotent() {
    for value in [12.123456789, -0.9999, 11172.4917381, 180.0] {
        for precision in 0..=10 {
            let once = decimal_floor(value, precision);
            assert_eq!(decimal_floor(once, precision), once);
        }
    }
}

#[test]
fn degree_conversion() {
    assert_relative_eq!(degrees_to_radians(180.0), std::f64::consts::PI);
    assert_eq!(degrees_to_radians(0.0), 0.0);
}

#[test]
fn central_angle_of_antipodes() {
    let angle = haversine_central_angle(
        degrees_to_radians(0.0),
        degrees_to_radians(0.0),
        degrees_to_radians(0.0),
        degrees_to_radians(180.0),
    );

    assert_relative_eq!(angle, std::f64::consts::PI);
}
