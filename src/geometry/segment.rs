//! Line segments and box clipping.

use super::{AlignedBox2, Vec2};

/// Directed line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    start: Vec2,
    end: Vec2,
}

impl LineSegment {
    /// Creates a segment from `start` to `end`.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Segment start point.
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Segment end point.
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Displacement from start to end.
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// Clips the segment against `bounds` (Liang-Barsky).
    ///
    /// Returns `None` when the segment lies entirely outside. The clipped
    /// segment keeps the original direction.
    pub fn clip(&self, bounds: &AlignedBox2) -> Option<LineSegment> {
        let direction = self.direction();
        let mut t0 = 0.0f32;
        let mut t1 = 1.0f32;

        let edges = [
            (-direction.x, self.start.x - bounds.min().x),
            (direction.x, bounds.max().x - self.start.x),
            (-direction.y, self.start.y - bounds.min().y),
            (direction.y, bounds.max().y - self.start.y),
        ];

        for (p, q) in edges {
            if p == 0.0 {
                // Parallel to this edge: outside means no intersection at all.
                if q < 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    if r > t1 {
                        return None;
                    }
                    if r > t0 {
                        t0 = r;
                    }
                } else {
                    if r < t0 {
                        return None;
                    }
                    if r < t1 {
                        t1 = r;
                    }
                }
            }
        }

        Some(LineSegment::new(
            self.start + direction * t0,
            self.start + direction * t1,
        ))
    }
}
