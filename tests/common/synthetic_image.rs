use dreamoc_stitcher::ImageBuf;

/// Generates a uniform single-color RGB image.
pub fn solid_rgb(width: usize, height: usize, color: [u8; 3]) -> ImageBuf {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = ImageBuf::filled(width, height, 3, 0);
    for j in 0..height {
        for i in 0..width {
            img.set_pixel(i, j, &color);
        }
    }
    img
}

/// Generates a uniform single-color RGBA image.
pub fn solid_rgba(width: usize, height: usize, color: [u8; 4]) -> ImageBuf {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = ImageBuf::filled(width, height, 4, 0);
    for j in 0..height {
        for i in 0..width {
            img.set_pixel(i, j, &color);
        }
    }
    img
}

/// RGB image where each pixel encodes its own coordinates.
pub fn coordinate_gradient(width: usize, height: usize) -> ImageBuf {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = ImageBuf::filled(width, height, 3, 0);
    for j in 0..height {
        for i in 0..width {
            img.set_pixel(i, j, &[(i % 256) as u8, (j % 256) as u8, ((i + j) % 256) as u8]);
        }
    }
    img
}
