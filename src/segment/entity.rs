use itertools::Itertools;
use log::debug;

use crate::geo::{Location, Meters};
use crate::segment::error::SegmentError;
use crate::segment::kind::SegmentKind;
use crate::segment::stats::Statistics;

/// `Segment`
///
/// A chronological run of [`Location`] samples sharing one
/// classification, with movement statistics derived over the run.
///
/// The sequence is kept sorted ascending by timestamp: every mutation
/// marks the sort cache dirty and re-sorts before returning, so the
/// accessors always observe chronological order no matter the insertion
/// order. The sort is stable; samples sharing a timestamp keep their
/// relative insertion order.
///
/// Statistics follow a lazy contract instead. Mutations only mark them
/// stale; [`Segment::analyse`] is the single operation that recomputes
/// them, either called directly or through the `analyse` flag the
/// mutators take. Until then the previously computed values remain
/// readable.
///
/// ```rust
/// use waypath::{Earth, Location, Segment};
/// use chrono::{TimeZone, Utc};
///
/// let mut segment = Segment::default();
/// for (hour, (lat, lng)) in [(12.123, 13.234), (12.223, 13.244)].iter().enumerate() {
///     let at = Utc.with_ymd_and_hms(2024, 5, 1, 9 + hour as u32, 0, 0).unwrap();
///     let location = Location::new::<Earth>(*lat, *lng, at).unwrap();
///     segment.push_location(location, false).unwrap();
/// }
///
/// segment.analyse().unwrap();
/// assert!(segment.distance() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Segment {
    kind: Option<SegmentKind>,
    locations: Vec<Location>,
    statistics: Statistics,
    stale: bool,
    sorted: bool,
}

impl Default for Segment {
    fn default() -> Self {
        Segment {
            kind: None,
            locations: Vec::new(),
            statistics: Statistics::default(),
            stale: true,
            sorted: false,
        }
    }
}

impl Segment {
    /// Constructs a segment over an initial set of locations, sorting
    /// them chronologically. Statistics stay at their zeroed defaults
    /// until [`Segment::analyse`] runs.
    pub fn new(locations: Vec<Location>, kind: Option<SegmentKind>) -> Self {
        let mut segment = Segment {
            kind,
            locations,
            ..Segment::default()
        };

        segment.sort_locations();
        segment
    }

    /// Replaces the whole location sequence and re-sorts. With
    /// `analyse` set, statistics are recomputed immediately.
    pub fn set_locations(
        &mut self,
        locations: Vec<Location>,
        analyse: bool,
    ) -> Result<&mut Self, SegmentError> {
        self.locations = locations;
        self.sorted = false;
        self.stale = true;
        self.sort_locations();

        if analyse {
            self.analyse()?;
        }

        Ok(self)
    }

    /// Appends one location and re-sorts the sequence.
    ///
    /// Each push re-sorts, costing O(n log n) per call. Acceptable for
    /// the bounded per-segment sample counts this crate targets, not
    /// for high-frequency streaming ingestion.
    pub fn push_location(
        &mut self,
        location: Location,
        analyse: bool,
    ) -> Result<&mut Self, SegmentError> {
        self.locations.push(location);
        self.sorted = false;
        self.stale = true;
        self.sort_locations();

        if analyse {
            self.analyse()?;
        }

        Ok(self)
    }

    /// Removes and returns the chronologically-first location.
    ///
    /// Fails with [`SegmentError::EmptyCollection`] when the segment
    /// holds none. Removing the front never unsorts the remainder, so
    /// no re-sort happens.
    pub fn pop_location(&mut self, analyse: bool) -> Result<Location, SegmentError> {
        if self.locations.is_empty() {
            return Err(SegmentError::EmptyCollection);
        }

        let popped = self.locations.remove(0);
        self.stale = true;

        if analyse {
            self.analyse()?;
        }

        Ok(popped)
    }

    fn sort_locations(&mut self) {
        if self.sorted {
            return;
        }

        // Vec::sort_by_key is stable, equal timestamps keep their
        // relative insertion order.
        self.locations.sort_by_key(Location::timestamp);
        self.sorted = true;
    }

    /// Recomputes the segment statistics from the sorted sequence.
    ///
    /// With fewer than two locations this is a no-op and the previous
    /// values (zeroed defaults on a fresh segment) remain. Otherwise
    /// consecutive pairs are walked in chronological order: `distance`
    /// accumulates the pairwise path, the pairwise speeds feed the
    /// min/max (a single-pair segment reports min equal to max), and
    /// `transposition` is the direct first-to-last distance.
    ///
    /// `average_speed` is total distance over total elapsed time,
    /// assigned only when the elapsed time is strictly positive; it
    /// keeps its previous value otherwise.
    ///
    /// A pair of samples sharing a timestamp makes the pairwise speed
    /// undefined; the error is surfaced immediately and the cached
    /// statistics are left untouched.
    pub fn analyse(&mut self) -> Result<(), SegmentError> {
        self.sort_locations();

        if self.locations.len() < 2 {
            return Ok(());
        }

        let mut distance = 0f64;
        let mut min_speed = f64::MAX;
        let mut max_speed = 0f64;

        for (from, to) in self.locations.iter().tuple_windows() {
            distance += from.distance(to);

            let speed = from.speed(to)?;
            min_speed = min_speed.min(speed);
            max_speed = max_speed.max(speed);
        }

        // len() >= 2 here, both endpoints exist.
        let first = self.locations[0];
        let last = self.locations[self.locations.len() - 1];

        self.statistics.distance = distance;
        self.statistics.min_speed = min_speed;
        self.statistics.max_speed = max_speed;
        self.statistics.transposition = first.distance(&last);

        let elapsed = (last.timestamp() - first.timestamp()).as_seconds_f64();
        if elapsed > 0f64 {
            self.statistics.average_speed = distance / elapsed;
        }

        self.stale = false;

        debug!(
            "Analysed segment of {} locations: {:?}",
            self.locations.len(),
            self.statistics
        );

        Ok(())
    }

    /// Chronologically earliest location, `None` on an empty segment.
    pub fn first_location(&self) -> Option<&Location> {
        self.locations.first()
    }

    /// Chronologically latest location, `None` on an empty segment.
    pub fn last_location(&self) -> Option<&Location> {
        self.locations.last()
    }

    /// The sorted location sequence.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn kind(&self) -> Option<SegmentKind> {
        self.kind
    }

    pub fn set_kind(&mut self, kind: SegmentKind) -> &mut Self {
        self.kind = Some(kind);

        self
    }

    /// The cached statistics as last computed by [`Segment::analyse`].
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Whether the cached statistics predate the latest mutation.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn distance(&self) -> Meters {
        self.statistics.distance
    }

    pub fn transposition(&self) -> Meters {
        self.statistics.transposition
    }

    pub fn min_speed(&self) -> f64 {
        self.statistics.min_speed
    }

    pub fn max_speed(&self) -> f64 {
        self.statistics.max_speed
    }

    pub fn average_speed(&self) -> f64 {
        self.statistics.average_speed
    }
}
