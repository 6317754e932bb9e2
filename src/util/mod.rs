//! Shared utility helpers.

pub mod error;
pub mod math;

pub use error::{ScanFlowError, ScanFlowResult};
pub use math::Average;
