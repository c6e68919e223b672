mod common;

use common::synthetic_image::{coordinate_gradient, solid_rgb, solid_rgba};
use dreamoc_stitcher::{ImageStitcher, StitchError, StitchParams};

fn stitcher(width: usize, height: usize) -> ImageStitcher {
    ImageStitcher::new(StitchParams {
        width,
        height,
        ..Default::default()
    })
    .expect("width exceeds height")
}

#[test]
fn solid_colors_land_in_their_zones() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (w, h) = (192usize, 108usize);
    let s = stitcher(w, h);

    let red = solid_rgb(w, h, [255, 0, 0]);
    let green = solid_rgb(w, h, [0, 255, 0]);
    let blue = solid_rgb(w, h, [0, 0, 255]);
    let out = s.stitch(&red, &green, &blue).expect("stitch succeeds");

    assert_eq!(out.dims(), (w, h, 3));
    let masks = s.masks();
    for j in 0..h {
        for i in 0..w {
            let expected: [u8; 3] = if masks.left.get(i, j) {
                [255, 0, 0]
            } else if masks.right.get(i, j) {
                [0, 0, 255]
            } else {
                [0, 255, 0]
            };
            assert_eq!(
                out.pixel(i, j),
                &expected[..],
                "pixel ({i}, {j}) holds the wrong zone's color"
            );
        }
    }
}

#[test]
fn output_shape_is_canvas_shape_for_any_input_size() {
    let s = stitcher(64, 40);
    for (wi, hi) in [(16, 12), (200, 90), (64, 40), (40, 40)] {
        let img = coordinate_gradient(wi, hi);
        let out = s.stitch(&img, &img, &img).expect("stitch succeeds");
        assert_eq!(out.dims(), (64, 40, 3), "for {wi}x{hi} inputs");
    }
}

#[test]
fn channel_mismatch_is_rejected() {
    let s = stitcher(64, 40);
    let rgb = solid_rgb(32, 20, [10, 20, 30]);
    let rgba = solid_rgba(32, 20, [10, 20, 30, 255]);
    match s.stitch(&rgb, &rgba, &rgb) {
        Err(StitchError::ChannelMismatch {
            left,
            center,
            right,
        }) => assert_eq!((left, center, right), (3, 4, 3)),
        other => panic!("expected a channel mismatch, got {other:?}"),
    }
}

#[test]
fn square_canvas_is_rejected() {
    let err = ImageStitcher::new(StitchParams {
        width: 100,
        height: 100,
        ..Default::default()
    })
    .expect_err("square canvas must fail");
    assert!(matches!(err, StitchError::InvalidGeometry { .. }));
}

#[test]
fn report_describes_inputs_and_zones() {
    let s = stitcher(64, 40);
    let img = coordinate_gradient(16, 12);
    let (_, report) = s
        .stitch_with_report(&img, &img, &img)
        .expect("stitch succeeds");
    assert_eq!((report.width, report.height, report.channels), (64, 40, 3));
    assert_eq!(report.zones.len(), 3);
    assert_eq!(
        (report.inputs[0].width, report.inputs[0].height),
        (16, 12)
    );
    assert!(report.latency_ms >= 0.0);
    serde_json::to_string(&report).expect("report serializes");
}
