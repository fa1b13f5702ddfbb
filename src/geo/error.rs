#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// A latitude or longitude fell outside its legal range.
    /// Out-of-range values are rejected, never clamped.
    InvalidCoordinate(String),
    /// Speed was requested between two samples sharing a timestamp.
    ZeroDuration,
}
