use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, VariantArray};

/// Classification assigned to a segment by an upstream policy.
/// Carries no behavior; the crate only stores it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumCount,
    EnumIter,
    VariantArray,
    strum::Display,
    Serialize,
    Deserialize,
)]
pub enum SegmentKind {
    Moving,
    Stopped,
}
