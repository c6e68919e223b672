//! I/O helpers for color images and JSON reports.
//!
//! - `load_color_image`: read a PNG/JPEG/etc. into an owned interleaved
//!   buffer, preserving the decoded channel count (gray, RGB, or RGBA).
//! - `save_color_image`: write a buffer in the display's physical
//!   orientation.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageBuf;
use crate::error::StitchError;
use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, keeping its decoded channel layout.
///
/// Grayscale stays single-channel; anything with an alpha channel decodes to
/// RGBA8, everything else to RGB8. Buffer `j` equals the raster row, so the
/// decoded bytes are adopted without copying.
pub fn load_color_image(path: &Path) -> Result<ImageBuf, StitchError> {
    let img = image::open(path).map_err(|e| StitchError::ImageRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let buf = match img {
        DynamicImage::ImageLuma8(gray) => {
            let (w, h) = (gray.width() as usize, gray.height() as usize);
            ImageBuf::from_raw(w, h, 1, gray.into_raw())
        }
        other if other.color().has_alpha() => {
            let rgba = other.to_rgba8();
            let (w, h) = (rgba.width() as usize, rgba.height() as usize);
            ImageBuf::from_raw(w, h, 4, rgba.into_raw())
        }
        other => {
            let rgb = other.to_rgb8();
            let (w, h) = (rgb.width() as usize, rgb.height() as usize);
            ImageBuf::from_raw(w, h, 3, rgb.into_raw())
        }
    };
    Ok(buf)
}

/// Save a buffer to disk in the display's physical orientation.
///
/// Buffer `j` increases upward in display geometry while raster rows scan
/// top-down, so lines are emitted bottom-up.
pub fn save_color_image(img: &ImageBuf, path: &Path) -> Result<(), StitchError> {
    ensure_parent_dir(path)?;
    let mut data = Vec::with_capacity(img.data.len());
    for j in (0..img.h).rev() {
        data.extend_from_slice(img.row(j));
    }
    let (w, h) = (img.w as u32, img.h as u32);
    let write_err = |e| StitchError::ImageWrite {
        path: path.to_path_buf(),
        source: e,
    };
    match img.channels {
        1 => encode_buffer(GrayImage::from_raw(w, h, data), img)?
            .save(path)
            .map_err(write_err),
        3 => encode_buffer(RgbImage::from_raw(w, h, data), img)?
            .save(path)
            .map_err(write_err),
        4 => encode_buffer(RgbaImage::from_raw(w, h, data), img)?
            .save(path)
            .map_err(write_err),
        n => Err(StitchError::UnsupportedChannelCount(n)),
    }
}

fn encode_buffer<T>(buffer: Option<T>, img: &ImageBuf) -> Result<T, StitchError> {
    buffer.ok_or(StitchError::ShapeMismatch {
        context: "image encode",
        expected: img.dims(),
        actual: (img.w, img.h, img.data.len() / (img.w * img.h).max(1)),
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), StitchError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| StitchError::ReportWrite {
        path: path.to_path_buf(),
        source: std::io::Error::other(e),
    })?;
    fs::write(path, json).map_err(|e| StitchError::ReportWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), StitchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StitchError::ImageWrite {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(e),
            })?;
        }
    }
    Ok(())
}
