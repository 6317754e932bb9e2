//! Mathematical helpers for binning and alignment.

/// Running weighted mean of scalar samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Average {
    total: f32,
    weight: f32,
}

impl Average {
    /// Adds a sample with unit weight.
    pub fn add_sample(&mut self, value: f32) {
        self.add_weighted_sample(value, 1.0);
    }

    /// Adds a sample with an explicit weight.
    pub fn add_weighted_sample(&mut self, value: f32, weight: f32) {
        self.total += value * weight;
        self.weight += weight;
    }

    /// Returns the mean, or `None` when no samples were added.
    pub fn value(&self) -> Option<f32> {
        if self.weight > 0.0 {
            Some(self.total / self.weight)
        } else {
            None
        }
    }

    /// Returns the accumulated sample weight.
    pub fn weight(&self) -> f32 {
        self.weight
    }
}
