#![doc = include_str!("../readme.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod error;
pub mod geo;
pub mod segment;
pub mod util;

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use geo::{Body, Earth, Location};
#[doc(inline)]
pub use segment::{Segment, SegmentKind, Statistics};
