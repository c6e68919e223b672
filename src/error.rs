use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the stitching pipeline and its command-line front-ends.
///
/// Configuration problems (canvas geometry, channel disagreement, CLI misuse)
/// fail before any pixel work. I/O problems carry the offending path and are
/// not retried. `ShapeMismatch` flags an internal invariant violation; it is
/// never recovered from, only reported.
#[derive(Debug, Error)]
pub enum StitchError {
    #[error("invalid canvas geometry: width {width} must exceed height {height}")]
    InvalidGeometry { width: usize, height: usize },

    #[error("channel count mismatch across inputs: left={left} center={center} right={right}")]
    ChannelMismatch {
        left: usize,
        center: usize,
        right: usize,
    },

    #[error("unsupported channel count {0} (expected 1, 3, or 4)")]
    UnsupportedChannelCount(usize),

    #[error("{0}")]
    Usage(String),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read image {path}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write image {path}: {source}")]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("shape mismatch in {context}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        context: &'static str,
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    },
}
