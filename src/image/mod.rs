//! RGB pixel views and buffers.
//!
//! `PixelView` is a borrowed 2D view into a packed RGB byte buffer with an
//! explicit stride. The stride counts pixels between the starts of
//! consecutive rows, so a stride larger than the width represents padded
//! rows. Samples are read nearest-pixel; the scanner uses clamped intensity
//! reads so a clipped scan line can never index out of range.

use crate::geometry::{AlignedBox2, Vec2};
use crate::util::{ScanFlowError, ScanFlowResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Number of color channels per pixel.
pub const CHANNELS: usize = 3;

/// Borrowed 2D RGB image view with an explicit stride (in pixels).
#[derive(Copy, Clone)]
pub struct PixelView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> PixelView<'a> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [u8], width: usize, height: usize) -> ScanFlowResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> ScanFlowResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(ScanFlowError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in pixels between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Image bounds as a box anchored at the origin.
    pub fn bounds(&self) -> AlignedBox2 {
        AlignedBox2::from_origin_and_size(Vec2::new(self.width as f32, self.height as f32))
    }

    /// Returns the RGB sample at `(x, y)` if it is within bounds.
    ///
    /// `y` is measured from the top row.
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; CHANNELS]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.stride + x) * CHANNELS;
        let px = self.data.get(idx..idx + CHANNELS)?;
        Some([px[0], px[1], px[2]])
    }

    /// Mean of the three channels at `(x, y)`, clamped to the image edge.
    ///
    /// This is the luma proxy the edge detector runs on.
    pub fn intensity_clamped(&self, x: i32, y: i32) -> f32 {
        let x = x.clamp(0, self.width as i32 - 1) as usize;
        let y = y.clamp(0, self.height as i32 - 1) as usize;
        let idx = (y * self.stride + x) * CHANNELS;
        let px = &self.data[idx..idx + CHANNELS];
        (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0
    }
}

/// Owned contiguous RGB image buffer.
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Creates a buffer from a packed RGB byte vector.
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize) -> ScanFlowResult<Self> {
        let needed = required_len(width, height, width)?;
        if data.len() != needed {
            return Err(ScanFlowError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns a borrowed view of the buffer.
    pub fn view(&self) -> PixelView<'_> {
        PixelView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> ScanFlowResult<usize> {
    if width == 0 || height == 0 {
        return Err(ScanFlowError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(ScanFlowError::InvalidStride { width, stride });
    }
    let pixels = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(ScanFlowError::InvalidDimensions { width, height })?;
    pixels
        .checked_mul(CHANNELS)
        .ok_or(ScanFlowError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::{PixelBuffer, PixelView};
    use crate::util::ScanFlowError;

    #[test]
    fn view_rejects_invalid_dimensions() {
        let data = [0u8; 12];
        let err = PixelView::from_slice(&data, 0, 1).err().unwrap();
        assert_eq!(
            err,
            ScanFlowError::InvalidDimensions {
                width: 0,
                height: 1,
            }
        );
    }

    #[test]
    fn view_rejects_small_buffer() {
        let data = [0u8; 9];
        let err = PixelView::from_slice(&data, 2, 2).err().unwrap();
        assert_eq!(err, ScanFlowError::BufferTooSmall { needed: 12, got: 9 });
    }

    #[test]
    fn get_reads_rgb_samples() {
        let mut data = vec![0u8; 2 * 2 * 3];
        data[3..6].copy_from_slice(&[10, 20, 30]);
        let view = PixelView::from_slice(&data, 2, 2).unwrap();
        assert_eq!(view.get(1, 0), Some([10, 20, 30]));
        assert_eq!(view.get(2, 0), None);
    }

    #[test]
    fn intensity_is_channel_mean_with_clamping() {
        let data = vec![30u8; 2 * 2 * 3];
        let buffer = PixelBuffer::from_vec(data, 2, 2).unwrap();
        let view = buffer.view();
        assert_eq!(view.intensity_clamped(0, 0), 30.0);
        // Out-of-range reads clamp to the nearest edge pixel.
        assert_eq!(view.intensity_clamped(-3, 7), 30.0);
    }
}
