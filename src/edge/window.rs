//! Circular sample window with a discrete Laplacian tap.

use crate::geometry::Vec2;

/// Circular buffer of the last `H` intensity samples and their 2D positions.
///
/// The Laplacian kernel weights the center tap by `H - 1` and every other tap
/// by `-1`, so the kernel sums to zero and responds only to curvature. The
/// two most recent Laplacian outputs are kept as scalars; a sign change
/// between them marks a sub-pixel edge crossing.
///
/// Only odd `H >= 5` is meaningful: the contrast gate reads two taps on each
/// side of the center.
pub struct LaplacianWindow<const H: usize> {
    samples: [f32; H],
    positions: [Vec2; H],
    output: [f32; 2],
    count: usize,
}

impl<const H: usize> LaplacianWindow<H> {
    /// Creates an empty window.
    pub fn new() -> Self {
        debug_assert!(H >= 5 && H % 2 == 1);
        Self {
            samples: [0.0; H],
            positions: [Vec2::default(); H],
            output: [0.0; 2],
            count: 0,
        }
    }

    /// Number of samples pushed so far.
    pub fn count(&self) -> usize {
        self.count
    }

    fn at(&self, index: usize) -> f32 {
        self.samples[index % H]
    }

    /// Discrete Laplacian at the window's logical center, where `offset` is
    /// the ring position of the oldest sample.
    fn laplacian(&self, offset: usize) -> f32 {
        let mid = ((H - 1) / 2 + offset) % H;
        let mut sum = self.samples[mid] * (H - 1) as f32;

        // Keep the ring index positive so the modulus behaves.
        let mid = mid + H;
        for i in 1..=(H - 1) / 2 {
            sum -= self.samples[(mid - i) % H];
            sum -= self.samples[(mid + i) % H];
        }

        sum
    }

    /// Local contrast around the center tap at absolute sample `index`:
    /// squared steps from the left pair average to the center and from the
    /// center to the right pair average.
    fn contrast(&self, index: usize) -> f32 {
        let left = (self.at(index - 2) + self.at(index - 1)) / 2.0;
        let center = self.at(index);
        let right = (self.at(index + 1) + self.at(index + 2)) / 2.0;

        let rise = center - left;
        let fall = right - center;
        rise * rise + fall * fall
    }

    /// Pushes one sample and its 2D position; returns a sub-pixel feature
    /// position when a gated zero crossing is detected at the lagged center.
    pub fn push(&mut self, intensity: f32, position: Vec2, min_contrast: f32) -> Option<Vec2> {
        let slot = self.count % H;
        self.samples[slot] = intensity;
        self.positions[slot] = position;

        let mut feature = None;
        if self.count >= H - 1 {
            self.output[1] = self.laplacian((self.count - (H - 1)) % H);

            if self.count >= H {
                feature = self.feature_at(self.count - (H - 1) / 2, min_contrast);
            }

            self.output[0] = self.output[1];
        }

        self.count += 1;
        feature
    }

    fn feature_at(&self, index: usize, min_contrast: f32) -> Option<Vec2> {
        let a = self.output[0];
        let b = self.output[1];

        if a != 0.0 && b == 0.0 {
            // Exact zero crossing at the center tap (rare).
            if self.contrast(index) < min_contrast {
                return None;
            }
            Some(self.positions[index % H])
        } else if (a < 0.0 && b > 0.0) || (b < 0.0 && a > 0.0) {
            if self.contrast(index) < min_contrast {
                return None;
            }
            let t = -a / (b - a);
            Some(Vec2::lerp(
                t,
                self.positions[(index - 1) % H],
                self.positions[index % H],
            ))
        } else {
            None
        }
    }
}

impl<const H: usize> Default for LaplacianWindow<H> {
    fn default() -> Self {
        Self::new()
    }
}
