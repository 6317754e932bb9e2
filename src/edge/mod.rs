//! Sub-pixel edge detection along rasterized scan lines.
//!
//! The detector consumes one intensity sample per grid coordinate, maintains
//! a sliding [`LaplacianWindow`], and reports the sub-pixel position of each
//! zero crossing that clears the local-contrast gate. Positions are tracked
//! in a ring parallel to the intensity ring, so interpolation always sees the
//! correct 2D coordinates even after the buffers wrap.

mod window;

pub use window::LaplacianWindow;

use crate::geometry::Vec2;

/// Number of taps in the validated detector configuration.
pub const WINDOW_TAPS: usize = 5;

/// Edge detector tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeConfig {
    /// Minimum local contrast (sum of squared half-window steps) for a
    /// crossing to count as a real edge rather than sensor noise.
    pub min_contrast: f32,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self { min_contrast: 600.0 }
    }
}

/// Streaming edge detector over a single scan line.
///
/// Recreate one per line; the window state is not meaningful across lines.
pub struct EdgeDetector {
    window: LaplacianWindow<WINDOW_TAPS>,
    config: EdgeConfig,
}

impl EdgeDetector {
    /// Creates a detector with the given tuning.
    pub fn new(config: EdgeConfig) -> Self {
        Self {
            window: LaplacianWindow::new(),
            config,
        }
    }

    /// Feeds one sample; returns a feature position on a gated crossing.
    pub fn push(&mut self, intensity: f32, position: Vec2) -> Option<Vec2> {
        self.window.push(intensity, position, self.config.min_contrast)
    }
}
