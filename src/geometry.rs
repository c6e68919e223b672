//! Static display geometry: zones, their rotations, and anchor points.
//!
//! The canvas is partitioned into three regions by the two diagonals of its
//! square sub-region. All views are centered onto one shared anchor before
//! their zone rotation; the per-zone label anchors exist only for the
//! diagram renderer.
use nalgebra::Point2;
use serde::Serialize;
use std::f32::consts::FRAC_PI_2;

/// One of the three display regions the canvas is partitioned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Zone {
    Left,
    Center,
    Right,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Left, Zone::Center, Zone::Right];

    /// Single-letter label used by the diagram renderer.
    pub fn label(self) -> &'static str {
        match self {
            Zone::Left => "L",
            Zone::Center => "C",
            Zone::Right => "R",
        }
    }

    /// Quarter turn applied to this zone's aligned buffer, in display
    /// orientation.
    pub fn rotation(self) -> ZoneRotation {
        match self {
            Zone::Left => ZoneRotation::Ccw90,
            Zone::Center => ZoneRotation::None,
            Zone::Right => ZoneRotation::Cw90,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ZoneRotation {
    None,
    Ccw90,
    Cw90,
}

/// Diagram placement for one zone: where its marker sits and at what angle
/// it reads.
#[derive(Clone, Copy, Debug)]
pub struct ZoneLayout {
    pub zone: Zone,
    pub label_center: Point2<f32>,
    /// Radians; side zones read along their facet.
    pub label_angle: f32,
}

/// Geometric parameters shared by the aligner, the transformer, and the
/// diagram renderer. Pure configuration derived from the canvas extents.
#[derive(Clone, Debug)]
pub struct DisplayGeometry {
    pub width: usize,
    pub height: usize,
    anchor: (usize, usize),
    layouts: [ZoneLayout; 3],
}

impl DisplayGeometry {
    /// Derive the geometry for a canvas. Callers validate `width > height`.
    pub fn new(width: usize, height: usize) -> Self {
        let w = width as f32;
        let anchor = (width / 2, width / 4);
        let layouts = [
            ZoneLayout {
                zone: Zone::Left,
                label_center: Point2::new(w / 4.0, w / 2.0),
                label_angle: -FRAC_PI_2,
            },
            ZoneLayout {
                zone: Zone::Center,
                label_center: Point2::new(anchor.0 as f32, anchor.1 as f32),
                label_angle: 0.0,
            },
            ZoneLayout {
                zone: Zone::Right,
                label_center: Point2::new(3.0 * w / 4.0, w / 2.0),
                label_angle: FRAC_PI_2,
            },
        ];
        Self {
            width,
            height,
            anchor,
            layouts,
        }
    }

    /// Anchor every view is centered onto before its zone rotation.
    pub fn alignment_anchor(&self) -> (usize, usize) {
        self.anchor
    }

    pub fn layouts(&self) -> &[ZoneLayout; 3] {
        &self.layouts
    }

    pub fn layout(&self, zone: Zone) -> &ZoneLayout {
        &self.layouts[match zone {
            Zone::Left => 0,
            Zone::Center => 1,
            Zone::Right => 2,
        }]
    }
}
