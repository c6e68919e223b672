//! Centering of a source view onto a canvas anchor with toroidal wraparound.
use crate::image::ImageBuf;

/// Return a canvas-sized buffer with `source`'s own center placed on `anchor`.
///
/// The working buffer spans the larger of source and canvas in each dimension
/// and is filled white, matching the compositor background. Indices wrap
/// modulo the working extents, so content shifted past an edge re-enters at
/// the opposite edge; an over-size source wraps around instead of being
/// discarded.
pub fn center_image(
    source: &ImageBuf,
    canvas_w: usize,
    canvas_h: usize,
    anchor: (usize, usize),
) -> ImageBuf {
    let (w_in, h_in, channels) = source.dims();
    let pad_w = w_in.max(canvas_w);
    let pad_h = h_in.max(canvas_h);

    let mut padded = ImageBuf::filled(pad_w, pad_h, channels, 0xff);
    for j in 0..h_in {
        let row = source.row(j);
        padded.row_mut(j)[..row.len()].copy_from_slice(row);
    }

    // composed circular shift moving the source center (w_in/2, h_in/2)
    // onto the anchor
    let shift_i = anchor.0 as isize - (w_in / 2) as isize;
    let shift_j = anchor.1 as isize - (h_in / 2) as isize;

    let mut aligned = ImageBuf::filled(canvas_w, canvas_h, channels, 0xff);
    for j in 0..canvas_h {
        let src_j = (j as isize - shift_j).rem_euclid(pad_h as isize) as usize;
        for i in 0..canvas_w {
            let src_i = (i as isize - shift_i).rem_euclid(pad_w as isize) as usize;
            aligned.set_pixel(i, j, padded.pixel(src_i, src_j));
        }
    }
    aligned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: usize, h: usize) -> ImageBuf {
        let mut img = ImageBuf::filled(w, h, 3, 0);
        for j in 0..h {
            for i in 0..w {
                img.set_pixel(i, j, &[i as u8, j as u8, 7]);
            }
        }
        img
    }

    #[test]
    fn canvas_sized_source_centered_at_own_center_is_identity() {
        let (w, h) = (12, 8);
        let img = gradient(w, h);
        let aligned = center_image(&img, w, h, (w / 2, h / 2));
        assert_eq!(aligned, img);
    }

    #[test]
    fn source_center_lands_on_anchor() {
        let mut src = ImageBuf::filled(5, 3, 3, 9);
        src.set_pixel(2, 1, &[1, 2, 3]);
        let aligned = center_image(&src, 8, 4, (4, 2));
        assert_eq!(aligned.pixel(4, 2), &[1, 2, 3][..]);
    }

    #[test]
    fn oversize_source_wraps_around() {
        // 6x4 source on a 4x2 canvas; shift is (2 - 3, 1 - 2) = (-1, -1)
        let src = gradient(6, 4);
        let aligned = center_image(&src, 4, 2, (2, 1));
        assert_eq!(aligned.pixel(0, 0), src.pixel(1, 1));
        assert_eq!(aligned.pixel(3, 1), src.pixel(4, 2));
    }

    #[test]
    fn undersize_source_is_padded_with_white() {
        let src = ImageBuf::filled(2, 2, 3, 0);
        let aligned = center_image(&src, 8, 4, (4, 2));
        assert_eq!(aligned.pixel(0, 0), &[255, 255, 255][..]);
        assert_eq!(aligned.pixel(4, 2), &[0, 0, 0][..]);
    }
}
