use crate::geo::error::GeoError;
use crate::impl_err;
use crate::segment::error::SegmentError;

/// Crate-level error, one variant per submodule.
#[derive(Debug)]
pub enum Error {
    Geo(GeoError),
    Segment(SegmentError),
}

impl_err!(GeoError, Geo);
impl_err!(SegmentError, Segment);
