#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod image;
pub mod stitcher;

// Geometric internals – public for tools and tests, but considered
// unstable.
pub mod align;
pub mod diagram;
pub mod mask;
pub mod transform;

// --- High-level re-exports -------------------------------------------------

// Main entry points: stitcher + report.
pub use crate::stitcher::{ImageStitcher, StitchParams};

pub use crate::diagnostics::StitchReport;
pub use crate::error::StitchError;
pub use crate::geometry::{DisplayGeometry, Zone, ZoneRotation};
pub use crate::image::ImageBuf;
pub use crate::mask::ZoneMasks;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use dreamoc_stitcher::prelude::*;
///
/// # fn main() {
/// let stitcher = ImageStitcher::new(StitchParams {
///     width: 192,
///     height: 108,
///     ..Default::default()
/// })
/// .expect("width exceeds height");
///
/// let view = ImageBuf::filled(192, 108, 3, 128);
/// let canvas = stitcher.stitch(&view, &view, &view).expect("same channel count");
/// assert_eq!((canvas.w, canvas.h), (192, 108));
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageBuf;
    pub use crate::{ImageStitcher, StitchError, StitchParams, Zone};
}
