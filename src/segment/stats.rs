use serde::{Deserialize, Serialize};

use crate::geo::Meters;

/// Aggregate movement statistics of a segment, recomputed on demand by
/// [`Segment::analyse`](crate::segment::Segment::analyse). Speeds are
/// in meters per second.
///
/// `distance` is the summed path length over consecutive samples, while
/// `transposition` is the direct first-to-last distance; a segment that
/// loops back on itself has a large `distance` and a near-zero
/// `transposition`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub distance: Meters,
    pub transposition: Meters,
    pub min_speed: f64,
    pub max_speed: f64,
    pub average_speed: f64,
}
