//! Axis-aligned 2D bounding box.

use super::Vec2;

/// Axis-aligned box defined by its minimum and maximum corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlignedBox2 {
    min: Vec2,
    max: Vec2,
}

impl AlignedBox2 {
    /// Degenerate box covering a single point.
    pub fn from_point(point: Vec2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Box anchored at the origin with the given size.
    pub fn from_origin_and_size(size: Vec2) -> Self {
        Self {
            min: Vec2::default(),
            max: size,
        }
    }

    /// Box centered on `center` with the given size.
    pub fn from_center_and_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Box center.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Box size per axis.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Grows the box to include `point`.
    pub fn union_with_point(&mut self, point: Vec2) {
        self.min = Vec2::new(self.min.x.min(point.x), self.min.y.min(point.y));
        self.max = Vec2::new(self.max.x.max(point.x), self.max.y.max(point.y));
    }

    /// Closed-interval containment test.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}
