//! Structured diagnostics for one stitching pass.
use crate::geometry::Zone;
use crate::image::ImageBuf;
use serde::Serialize;

/// Dimensions of one source view as handed to the compositor.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl InputDescriptor {
    pub fn describe(img: &ImageBuf) -> Self {
        Self {
            width: img.w,
            height: img.h,
            channels: img.channels,
        }
    }
}

/// Timing of one zone's align + transform pipeline.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ZoneTiming {
    pub zone: Zone,
    pub align_ms: f64,
    pub transform_ms: f64,
}

/// Full report for one stitching pass.
#[derive(Clone, Debug, Serialize)]
pub struct StitchReport {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    /// Left, center, right source dimensions.
    pub inputs: [InputDescriptor; 3],
    pub zones: Vec<ZoneTiming>,
    pub merge_ms: f64,
    pub latency_ms: f64,
}
