use crate::geo::error::GeoError;
use crate::impl_err;

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentError {
    /// A location was popped from a segment holding none.
    EmptyCollection,
    /// A pairwise computation failed while analysing the sequence.
    Geo(GeoError),
}

impl_err!(GeoError, SegmentError, Geo);
