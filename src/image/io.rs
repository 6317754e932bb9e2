//! Convenience helpers for loading frames via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::PixelBuffer;
use crate::util::{ScanFlowError, ScanFlowResult};
use std::path::Path;

/// Creates an owned buffer from an RGB image.
pub fn buffer_from_rgb_image(img: &image::RgbImage) -> ScanFlowResult<PixelBuffer> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelBuffer::from_vec(img.as_raw().clone(), width, height)
}

/// Creates an owned RGB buffer from a dynamic image.
pub fn buffer_from_dynamic_image(img: &image::DynamicImage) -> ScanFlowResult<PixelBuffer> {
    let rgb = img.to_rgb8();
    buffer_from_rgb_image(&rgb)
}

/// Loads an image from disk and converts it to an RGB buffer.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> ScanFlowResult<PixelBuffer> {
    let img = image::open(path).map_err(|err| ScanFlowError::ImageIo {
        reason: err.to_string(),
    })?;
    buffer_from_dynamic_image(&img)
}
