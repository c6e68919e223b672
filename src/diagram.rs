//! Zone-geometry diagram for visual inspection of the display layout.
//!
//! Draws the canvas outline, the two dividing diagonals, the vertical center
//! separator, and a direction marker at each zone's label anchor. Not part
//! of the compositing path.
use crate::geometry::{DisplayGeometry, ZoneLayout};
use crate::image::ImageBuf;
use nalgebra::{Point2, Rotation2, Vector2};

/// Drawing parameters for the diagram renderer, passed explicitly.
#[derive(Clone, Copy, Debug)]
pub struct DrawContext {
    pub background: [u8; 3],
    pub stroke: [u8; 3],
    /// Dash period in pixels for the canvas outline.
    pub dash_len: usize,
    /// Dots per inch; scales the anchor markers.
    pub dpi: u32,
}

impl Default for DrawContext {
    fn default() -> Self {
        Self {
            background: [255, 255, 255],
            stroke: [0, 0, 0],
            dash_len: 8,
            dpi: 200,
        }
    }
}

/// Render the zone geometry onto a fresh RGB canvas.
pub fn render_zone_diagram(geometry: &DisplayGeometry, ctx: &DrawContext) -> ImageBuf {
    let (w, h) = (geometry.width, geometry.height);
    let mut img = ImageBuf::filled(w, h, 3, 0);
    for j in 0..h {
        for i in 0..w {
            img.set_pixel(i, j, &ctx.background);
        }
    }

    let (wf, hf) = ((w - 1) as f32, (h - 1) as f32);
    let corners = [
        Point2::new(0.0, 0.0),
        Point2::new(wf, 0.0),
        Point2::new(wf, hf),
        Point2::new(0.0, hf),
    ];
    for k in 0..4 {
        draw_line(
            &mut img,
            corners[k],
            corners[(k + 1) % 4],
            ctx.stroke,
            Some(ctx.dash_len),
        );
    }

    // the diagonals start at the bottom corners and meet at the apex of the
    // square sub-region; the vertical separator continues above the apex
    let apex = Point2::new(w as f32 / 2.0, w as f32 / 2.0);
    draw_line(&mut img, Point2::new(0.0, 0.0), apex, ctx.stroke, None);
    draw_line(&mut img, Point2::new(wf, 0.0), apex, ctx.stroke, None);
    draw_line(
        &mut img,
        apex,
        Point2::new(w as f32 / 2.0, hf),
        ctx.stroke,
        None,
    );

    for layout in geometry.layouts() {
        draw_marker(&mut img, layout, ctx);
    }
    img
}

/// Direction marker at a zone's label anchor: an arrow rotated by the
/// zone's label angle, pointing along its reading direction.
fn draw_marker(img: &mut ImageBuf, layout: &ZoneLayout, ctx: &DrawContext) {
    let len = ctx.dpi as f32 / 8.0;
    let rot = Rotation2::new(layout.label_angle);
    let half = rot * Vector2::new(len / 2.0, 0.0);
    let tail = layout.label_center - half;
    let tip = layout.label_center + half;
    draw_line(img, tail, tip, ctx.stroke, None);
    for side in [0.18, -0.18] {
        let barb = rot * Vector2::new(-0.25 * len, side * len);
        draw_line(img, tip, tip + barb, ctx.stroke, None);
    }
}

/// Step along the segment, plotting the nearest pixel and skipping every
/// other dash period when `dash` is set. Out-of-bounds samples are clipped.
fn draw_line(
    img: &mut ImageBuf,
    p0: Point2<f32>,
    p1: Point2<f32>,
    color: [u8; 3],
    dash: Option<usize>,
) {
    let delta = p1 - p0;
    let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;
    for s in 0..=steps {
        if let Some(d) = dash {
            if d > 0 && (s / d) % 2 == 1 {
                continue;
            }
        }
        let p = p0 + delta * (s as f32 / steps as f32);
        plot(img, p.x.round() as isize, p.y.round() as isize, color);
    }
}

fn plot(img: &mut ImageBuf, i: isize, j: isize, color: [u8; 3]) {
    if i >= 0 && j >= 0 && (i as usize) < img.w && (j as usize) < img.h {
        img.set_pixel(i as usize, j as usize, &color);
    }
}
