//! Cross-table alignment from per-bin centroids.

use crate::table::FeatureTable;
use crate::util::{Average, ScanFlowError, ScanFlowResult};

/// Estimates the aligned-x offset of `right` relative to `left`.
///
/// For every bin populated in both tables, the difference of the bin
/// centroids contributes one sample, weighted by the smaller of the two
/// sample counts. An empty result (zero weight) means the tables share no
/// populated bins and no estimate is possible.
pub fn align_tables(left: &FeatureTable, right: &FeatureTable) -> ScanFlowResult<Average> {
    if left.bin_count() != right.bin_count() {
        return Err(ScanFlowError::BinCountMismatch {
            left: left.bin_count(),
            right: right.bin_count(),
        });
    }

    let mut offsets = Average::default();
    for bin in 0..left.bin_count() {
        let left_position = left.average_chain_position(bin)?;
        let right_position = right.average_chain_position(bin)?;

        let (Some(left_centroid), Some(right_centroid)) =
            (left_position.value(), right_position.value())
        else {
            continue;
        };

        let weight = left_position.weight().min(right_position.weight());
        offsets.add_weighted_sample(right_centroid - left_centroid, weight);
    }

    Ok(offsets)
}
