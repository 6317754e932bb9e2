//! Integer-grid line rasterization.
//!
//! Both iterators walk a Bresenham approximation of the segment, visiting
//! exactly one coordinate per step along the dominant axis. Steep segments
//! swap axes internally and un-swap on emission. The error term is pure
//! integer arithmetic; there is no division by a coordinate delta, so a
//! degenerate segment simply yields an empty sequence.
//!
//! [`OrderedLine`] preserves the caller-supplied direction start -> end.
//! [`NormalizedLine`] re-orders so the dominant axis always increases, which
//! makes its output independent of which endpoint is labeled "start".

use crate::geometry::Vec2i;

/// Bresenham traversal preserving the caller-supplied direction.
pub struct OrderedLine {
    x: i32,
    y: i32,
    end_x: i32,
    dx: i32,
    dy: i32,
    error: i32,
    ystep: i32,
    increment: i32,
    steep: bool,
}

impl OrderedLine {
    /// Creates a traversal from `start` towards `end`.
    pub fn new(start: Vec2i, end: Vec2i) -> Self {
        let steep = (end.y - start.y).abs() > (end.x - start.x).abs();
        let (start, end) = if steep {
            (Vec2i::new(start.y, start.x), Vec2i::new(end.y, end.x))
        } else {
            (start, end)
        };

        let dx = (end.x - start.x).abs();
        let dy = (end.y - start.y).abs();

        Self {
            x: start.x,
            y: start.y,
            end_x: end.x,
            dx,
            dy,
            error: dx / 2,
            ystep: if start.y < end.y { 1 } else { -1 },
            increment: if start.x < end.x { 1 } else { -1 },
            steep,
        }
    }
}

impl Iterator for OrderedLine {
    type Item = Vec2i;

    fn next(&mut self) -> Option<Vec2i> {
        if self.x == self.end_x {
            return None;
        }

        let out = if self.steep {
            Vec2i::new(self.y, self.x)
        } else {
            Vec2i::new(self.x, self.y)
        };

        self.error -= self.dy;
        if self.error < 0 {
            self.y += self.ystep;
            self.error += self.dx;
        }
        self.x += self.increment;

        Some(out)
    }
}

/// Bresenham traversal normalized to increasing dominant axis.
pub struct NormalizedLine {
    x: i32,
    y: i32,
    end_x: i32,
    dx: i32,
    dy: i32,
    error: i32,
    ystep: i32,
    steep: bool,
}

impl NormalizedLine {
    /// Creates a traversal between `start` and `end` in either order.
    pub fn new(start: Vec2i, end: Vec2i) -> Self {
        let steep = (end.y - start.y).abs() > (end.x - start.x).abs();
        let (start, end) = if steep {
            (Vec2i::new(start.y, start.x), Vec2i::new(end.y, end.x))
        } else {
            (start, end)
        };
        let (start, end) = if start.x > end.x {
            (end, start)
        } else {
            (start, end)
        };

        let dx = end.x - start.x;
        let dy = (end.y - start.y).abs();

        Self {
            x: start.x,
            y: start.y,
            end_x: end.x,
            dx,
            dy,
            error: dx / 2,
            ystep: if start.y < end.y { 1 } else { -1 },
            steep,
        }
    }
}

impl Iterator for NormalizedLine {
    type Item = Vec2i;

    fn next(&mut self) -> Option<Vec2i> {
        if self.x >= self.end_x {
            return None;
        }

        let out = if self.steep {
            Vec2i::new(self.y, self.x)
        } else {
            Vec2i::new(self.x, self.y)
        };

        self.error -= self.dy;
        if self.error < 0 {
            self.y += self.ystep;
            self.error += self.dx;
        }
        self.x += 1;

        Some(out)
    }
}
