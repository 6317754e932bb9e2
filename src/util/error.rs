//! Error types for scanflow.

use thiserror::Error;

/// Result alias for scanflow operations.
pub type ScanFlowResult<T> = std::result::Result<T, ScanFlowError>;

/// Errors that can occur when running scanflow algorithms.
#[derive(Debug, Error, PartialEq)]
pub enum ScanFlowError {
    /// The image dimensions are invalid.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The row stride is smaller than the image width.
    #[error("invalid stride: width {width}, stride {stride}")]
    InvalidStride { width: usize, stride: usize },
    /// The backing buffer is smaller than the dimensions require.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A feature table needs at least one bin.
    #[error("bin count must be non-zero")]
    InvalidBinCount,
    /// The scan-line spacing must be a positive distance.
    #[error("scan spacing must be positive, got {spacing}")]
    InvalidSpacing { spacing: f32 },
    /// An index was outside the valid range for the named container.
    #[error("index {index} out of bounds for {context} of length {len}")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        context: &'static str,
    },
    /// A point mapped outside the table's aligned bounds.
    ///
    /// The scanner only produces in-bounds points, so hitting this from the
    /// scan pipeline indicates a caller bug.
    #[error("point ({x}, {y}) maps to bin fraction {fraction} outside [0, 1)")]
    PointOutOfBounds { x: f32, y: f32, fraction: f32 },
    /// Two tables being aligned have different bin counts.
    #[error("bin count mismatch: {left} vs {right}")]
    BinCountMismatch { left: usize, right: usize },
    /// Image decoding or disk access failed.
    #[cfg(feature = "image-io")]
    #[error("image io failed: {reason}")]
    ImageIo { reason: String },
}
