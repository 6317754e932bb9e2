//! ScanFlow extracts sub-pixel edge features along gravity-aligned scan
//! lines and chains them across lines and frames for motion estimation.
//!
//! The pipeline rasterizes tilt-aware horizontal lines across a frame, runs
//! a sliding Laplacian window over the sampled intensities to find sub-pixel
//! zero crossings, and feeds the resulting points into a binned
//! [`FeatureTable`] that links matching points into chains. Per-bin centroid
//! statistics from two tables yield a relative offset estimate, optional
//! parallelism is available via the `rayon` feature, and frame loading via
//! `image-io`.

pub mod edge;
pub mod geometry;
pub mod image;
pub mod raster;
pub mod scanner;
pub mod table;
mod trace;
pub mod util;

pub use edge::{EdgeConfig, EdgeDetector, LaplacianWindow, WINDOW_TAPS};
pub use geometry::{AlignedBox2, LineSegment, Mat2, Transform, Vec2, Vec2i};
pub use image::{PixelBuffer, PixelView};
pub use raster::{NormalizedLine, OrderedLine};
pub use scanner::{features_along_line, FeatureScanner, ScanConfig};
pub use table::{align_tables, ChainLink, ChainRef, FeatureTable};
pub use util::{Average, ScanFlowError, ScanFlowResult};
