//! Three-view compositor for the pyramidal display canvas.
use crate::align::center_image;
use crate::diagnostics::{InputDescriptor, StitchReport, ZoneTiming};
use crate::error::StitchError;
use crate::geometry::{DisplayGeometry, Zone};
use crate::image::ImageBuf;
use crate::mask::ZoneMasks;
use crate::transform::apply_zone_transform;
use log::debug;
use serde::Deserialize;
use std::time::Instant;

/// Canvas parameters.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct StitchParams {
    /// Canvas extent along the display's long axis, pixels.
    pub width: usize,
    /// Canvas extent along the short axis, pixels; must stay below `width`.
    pub height: usize,
    /// Dots per inch, consumed only by the zone diagram renderer.
    pub dpi: u32,
}

impl Default for StitchParams {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            dpi: 200,
        }
    }
}

/// Composites three views into one canvas using the zone partition.
///
/// Geometry and masks are derived once at construction; each call to
/// [`stitch`](Self::stitch) is a pure pass over its inputs.
#[derive(Debug)]
pub struct ImageStitcher {
    params: StitchParams,
    geometry: DisplayGeometry,
    masks: ZoneMasks,
}

impl ImageStitcher {
    /// Validate the geometry and precompute the zone partition.
    pub fn new(params: StitchParams) -> Result<Self, StitchError> {
        if params.width <= params.height {
            return Err(StitchError::InvalidGeometry {
                width: params.width,
                height: params.height,
            });
        }
        let geometry = DisplayGeometry::new(params.width, params.height);
        let masks = ZoneMasks::compute(params.width, params.height);
        Ok(Self {
            params,
            geometry,
            masks,
        })
    }

    pub fn params(&self) -> &StitchParams {
        &self.params
    }

    pub fn geometry(&self) -> &DisplayGeometry {
        &self.geometry
    }

    pub fn masks(&self) -> &ZoneMasks {
        &self.masks
    }

    /// Composite the three views into one canvas.
    pub fn stitch(
        &self,
        left: &ImageBuf,
        center: &ImageBuf,
        right: &ImageBuf,
    ) -> Result<ImageBuf, StitchError> {
        self.stitch_with_report(left, center, right)
            .map(|(canvas, _)| canvas)
    }

    /// Like [`stitch`](Self::stitch), additionally returning per-zone
    /// diagnostics.
    pub fn stitch_with_report(
        &self,
        left: &ImageBuf,
        center: &ImageBuf,
        right: &ImageBuf,
    ) -> Result<(ImageBuf, StitchReport), StitchError> {
        let t0 = Instant::now();
        if left.channels != center.channels || left.channels != right.channels {
            return Err(StitchError::ChannelMismatch {
                left: left.channels,
                center: center.channels,
                right: right.channels,
            });
        }
        let channels = left.channels;
        let (w, h) = (self.params.width, self.params.height);

        // the three zone pipelines are independent; run them concurrently
        let ((cand_l, cand_c), cand_r) = rayon::join(
            || {
                rayon::join(
                    || self.zone_candidate(Zone::Left, left),
                    || self.zone_candidate(Zone::Center, center),
                )
            },
            || self.zone_candidate(Zone::Right, right),
        );

        // merge order is fixed; disjointness is checked, not assumed
        assert!(
            self.masks.is_partition(),
            "zone masks must tile the canvas disjointly"
        );

        let t_merge = Instant::now();
        let mut canvas = ImageBuf::filled(w, h, channels, 0xff);
        let mut timings = Vec::with_capacity(3);
        for (candidate, timing) in [cand_l, cand_c, cand_r] {
            if candidate.dims() != (w, h, channels) {
                return Err(StitchError::ShapeMismatch {
                    context: "zone candidate",
                    expected: (w, h, channels),
                    actual: candidate.dims(),
                });
            }
            let mask = self.masks.for_zone(timing.zone);
            for j in 0..h {
                for i in 0..w {
                    if mask.get(i, j) {
                        canvas.set_pixel(i, j, candidate.pixel(i, j));
                    }
                }
            }
            timings.push(timing);
        }
        let merge_ms = t_merge.elapsed().as_secs_f64() * 1000.0;

        let report = StitchReport {
            width: w,
            height: h,
            channels,
            inputs: [
                InputDescriptor::describe(left),
                InputDescriptor::describe(center),
                InputDescriptor::describe(right),
            ],
            zones: timings,
            merge_ms,
            latency_ms: t0.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            "stitched {}x{}x{} canvas in {:.3} ms (merge {:.3} ms)",
            w, h, channels, report.latency_ms, merge_ms
        );
        Ok((canvas, report))
    }

    fn zone_candidate(&self, zone: Zone, source: &ImageBuf) -> (ImageBuf, ZoneTiming) {
        let t = Instant::now();
        let aligned = center_image(
            source,
            self.params.width,
            self.params.height,
            self.geometry.alignment_anchor(),
        );
        let align_ms = t.elapsed().as_secs_f64() * 1000.0;

        let t = Instant::now();
        let candidate =
            apply_zone_transform(&aligned, zone, self.params.width, self.params.height);
        let transform_ms = t.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "zone {}: {}x{} source aligned in {:.3} ms, transformed in {:.3} ms",
            zone.label(),
            source.w,
            source.h,
            align_ms,
            transform_ms
        );
        (
            candidate,
            ZoneTiming {
                zone,
                align_ms,
                transform_ms,
            },
        )
    }
}
