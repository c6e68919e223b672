mod common;

use common::synthetic_image::solid_rgb;
use dreamoc_stitcher::image::io::{load_color_image, save_color_image};

#[test]
fn save_then_load_preserves_display_orientation() {
    let mut img = solid_rgb(8, 4, [255, 255, 255]);
    img.set_pixel(3, 1, &[1, 2, 3]);

    let path = std::env::temp_dir().join(format!("dreamoc_io_{}.png", std::process::id()));
    save_color_image(&img, &path).expect("save succeeds");
    let back = load_color_image(&path).expect("load succeeds");
    std::fs::remove_file(&path).ok();

    assert_eq!(back.dims(), (8, 4, 3));
    // rows are emitted bottom-up, so the loaded row index is flipped
    assert_eq!(back.pixel(3, 4 - 1 - 1), &[1, 2, 3][..]);
    assert_eq!(back.pixel(0, 0), &[255, 255, 255][..]);
}

#[test]
fn missing_input_reports_the_path() {
    let path = std::path::Path::new("definitely/not/here.png");
    let err = load_color_image(path).expect_err("missing file must fail");
    assert!(err.to_string().contains("definitely/not/here.png"));
}
