//! Gravity-aligned scan-line feature extraction.
//!
//! The scanner sweeps horizontal lines through the gravity-aligned frame,
//! maps each line back into image space, clips it against a slightly shrunk
//! image box, and runs the rasterized line through the edge detector.
//! Scanning in the rotated frame keeps the rasterizer on a plain horizontal
//! line while the visible sweep stays perpendicular to gravity for any
//! camera roll.

use crate::edge::{EdgeConfig, EdgeDetector};
use crate::geometry::{AlignedBox2, LineSegment, Mat2, Vec2, Vec2i};
use crate::image::PixelView;
use crate::raster::OrderedLine;
use crate::table::FeatureTable;
use crate::trace::{trace_event, trace_span};
use crate::util::{ScanFlowError, ScanFlowResult};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Fraction of the image kept by the clipping box; trimming the outer 2%
/// avoids boundary artifacts from partially visible edges.
const CLIP_SCALE: f32 = 0.98;

/// Scan parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanConfig {
    /// Distance between scan lines in the gravity-aligned frame.
    pub spacing: f32,
    /// Number of bins in the feature table built after the sweep.
    pub bin_count: usize,
    /// Edge detector tuning.
    pub edge: EdgeConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            bin_count: 32,
            edge: EdgeConfig::default(),
        }
    }
}

/// Scan-line feature scanner for a single frame.
///
/// A scanner instance is single-use: once populated, further `scan` calls
/// are no-ops. Construct a new scanner to scan again.
#[derive(Default)]
pub struct FeatureScanner {
    points: Vec<Vec2>,
    segments: Vec<LineSegment>,
    table: Option<FeatureTable>,
}

impl FeatureScanner {
    /// Creates an empty scanner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sub-pixel feature points found by the sweep, in image coordinates.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Clipped scan segments that were rasterized, for diagnostics.
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Feature table built from the scanned points.
    pub fn table(&self) -> Option<&FeatureTable> {
        self.table.as_ref()
    }

    /// Scans `image` with lines perpendicular to the `tilt` direction
    /// (radians) and chains the detected features.
    ///
    /// Idempotent: once a scan has completed, repeated calls return
    /// immediately without rescanning.
    pub fn scan(
        &mut self,
        image: &PixelView<'_>,
        tilt: f32,
        config: &ScanConfig,
    ) -> ScanFlowResult<()> {
        if self.table.is_some() {
            return Ok(());
        }
        if !(config.spacing > 0.0) {
            return Err(ScanFlowError::InvalidSpacing {
                spacing: config.spacing,
            });
        }
        if config.bin_count == 0 {
            return Err(ScanFlowError::InvalidBinCount);
        }

        let _span = trace_span!("scan", bins = config.bin_count).entered();

        let image_box = image.bounds();
        let size = image_box.size();

        // Bounding box of the image under the forward rotation; scan-line
        // positions are enumerated in this frame, where -y is "down".
        let rotation = Mat2::rotation(tilt);
        let mut bounds = AlignedBox2::from_point(Vec2::default());
        bounds.union_with_point(rotation * size);
        bounds.union_with_point(rotation * Vec2::new(size.x, 0.0));
        bounds.union_with_point(rotation * Vec2::new(0.0, size.y));

        let inverse = Mat2::rotation(-tilt);
        let clipping_box =
            AlignedBox2::from_center_and_size(image_box.center(), size * CLIP_SCALE);

        // Enumerate lines in the rotated frame and map them back to image
        // space. The last partial step before the far boundary is skipped.
        let mut y = bounds.min().y + config.spacing;
        while y + config.spacing < bounds.max().y {
            let segment = LineSegment::new(
                inverse * Vec2::new(bounds.min().x, y),
                inverse * Vec2::new(bounds.max().x, y),
            );

            if let Some(clipped) = segment.clip(&clipping_box) {
                self.segments.push(clipped);
            }

            y += config.spacing;
        }

        for line in collect_line_features(image, &self.segments, &config.edge) {
            self.points.extend(line);
        }

        trace_event!(
            "scan_complete",
            segments = self.segments.len(),
            points = self.points.len()
        );

        let mut table = FeatureTable::new(config.bin_count, image_box, tilt)?;
        table.update(&self.points)?;
        self.table = Some(table);

        Ok(())
    }
}

/// Runs the edge detector along one clipped segment.
///
/// Rasterization happens in a bottom-origin frame (geometric reasoning wants
/// +y up); samples are read and features reported in the image's top-origin
/// coordinates.
pub fn features_along_line(
    image: &PixelView<'_>,
    segment: &LineSegment,
    config: &EdgeConfig,
) -> Vec<Vec2> {
    let height = image.height() as i32;

    let start = Vec2i::new(
        segment.start().x as i32,
        height - segment.start().y as i32,
    );
    let end = Vec2i::new(segment.end().x as i32, height - segment.end().y as i32);

    let mut detector = EdgeDetector::new(*config);
    let mut features = Vec::new();

    for grid in OrderedLine::new(start, end) {
        let image_y = height - grid.y;
        let intensity = image.intensity_clamped(grid.x, image_y);
        let position = Vec2::new(grid.x as f32, image_y as f32);

        if let Some(feature) = detector.push(intensity, position) {
            features.push(feature);
        }
    }

    features
}

// Scan lines are independent until table insertion, so feature extraction
// can run per line in parallel as long as results are merged in scan order.
#[cfg(feature = "rayon")]
fn collect_line_features(
    image: &PixelView<'_>,
    segments: &[LineSegment],
    config: &EdgeConfig,
) -> Vec<Vec<Vec2>> {
    segments
        .par_iter()
        .map(|segment| features_along_line(image, segment, config))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn collect_line_features(
    image: &PixelView<'_>,
    segments: &[LineSegment],
    config: &EdgeConfig,
) -> Vec<Vec<Vec2>> {
    segments
        .iter()
        .map(|segment| features_along_line(image, segment, config))
        .collect()
}
