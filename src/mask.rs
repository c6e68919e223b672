//! Zone partition masks.
//!
//! The square viewing sub-region is split by the two diagonals that start at
//! its bottom corners and meet the top edge at its midpoint. The side masks
//! use strict inequalities, so pixels exactly on a diagonal belong to the
//! center zone.
use crate::geometry::Zone;

/// Boolean pixel-ownership grid for one zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionMask {
    pub w: usize,
    pub h: usize,
    data: Vec<bool>,
}

impl RegionMask {
    fn build(w: usize, h: usize, pred: impl Fn(usize, usize) -> bool) -> Self {
        let mut data = vec![false; w * h];
        for j in 0..h {
            for i in 0..w {
                data[j * w + i] = pred(i, j);
            }
        }
        Self { w, h, data }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.data[j * self.w + i]
    }

    /// Number of pixels owned by this mask.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }
}

/// The three disjoint masks tiling the canvas.
#[derive(Clone, Debug)]
pub struct ZoneMasks {
    pub left: RegionMask,
    pub center: RegionMask,
    pub right: RegionMask,
}

impl ZoneMasks {
    /// Compute the partition for a canvas.
    ///
    /// `left` holds where `j > i` and `i < width/2`; `right` where
    /// `j > width - i` and `i > width/2`; `center` takes the remainder. The
    /// half-width comparisons are written in integer form (`2i < width`,
    /// `2i > width`), exact for odd widths as well.
    pub fn compute(width: usize, height: usize) -> Self {
        let left = RegionMask::build(width, height, |i, j| j > i && 2 * i < width);
        let right = RegionMask::build(width, height, |i, j| i + j > width && 2 * i > width);
        let center =
            RegionMask::build(width, height, |i, j| !left.get(i, j) && !right.get(i, j));
        let masks = Self {
            left,
            center,
            right,
        };
        assert!(
            masks.is_partition(),
            "zone masks must tile the {width}x{height} canvas disjointly"
        );
        masks
    }

    pub fn for_zone(&self, zone: Zone) -> &RegionMask {
        match zone {
            Zone::Left => &self.left,
            Zone::Center => &self.center,
            Zone::Right => &self.right,
        }
    }

    /// True when every pixel belongs to exactly one mask.
    pub fn is_partition(&self) -> bool {
        let (w, h) = (self.left.w, self.left.h);
        if (self.center.w, self.center.h) != (w, h) || (self.right.w, self.right.h) != (w, h) {
            return false;
        }
        for j in 0..h {
            for i in 0..w {
                let owners = self.left.get(i, j) as usize
                    + self.center.get(i, j) as usize
                    + self.right.get(i, j) as usize;
                if owners != 1 {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_is_total_and_disjoint() {
        for (w, h) in [(4, 2), (5, 3), (7, 4), (192, 108), (641, 480)] {
            let masks = ZoneMasks::compute(w, h);
            for j in 0..h {
                for i in 0..w {
                    let owners = masks.left.get(i, j) as usize
                        + masks.center.get(i, j) as usize
                        + masks.right.get(i, j) as usize;
                    assert_eq!(owners, 1, "pixel ({i}, {j}) of {w}x{h} owned by {owners} zones");
                }
            }
        }
    }

    #[test]
    fn tiny_canvas_reference_table() {
        let masks = ZoneMasks::compute(4, 2);
        for j in 0..2 {
            for i in 0..4 {
                assert_eq!(masks.left.get(i, j), j > i && 2 * i < 4, "left ({i}, {j})");
                assert_eq!(masks.right.get(i, j), i + j > 4 && 2 * i > 4, "right ({i}, {j})");
                assert_eq!(
                    masks.center.get(i, j),
                    !(masks.left.get(i, j) || masks.right.get(i, j)),
                    "center ({i}, {j})"
                );
            }
        }
        // only (0, 1) clears the left diagonal; no pixel clears the right one
        assert_eq!(masks.left.count(), 1);
        assert!(masks.left.get(0, 1));
        assert_eq!(masks.right.count(), 0);
        assert_eq!(masks.center.count(), 7);
    }

    #[test]
    fn diagonal_pixels_belong_to_center() {
        let masks = ZoneMasks::compute(8, 5);
        // j == i sits on the left diagonal, i + j == width on the right one
        assert!(masks.center.get(2, 2));
        assert!(!masks.left.get(2, 2));
        assert!(masks.center.get(6, 2));
        assert!(!masks.right.get(6, 2));
    }
}
