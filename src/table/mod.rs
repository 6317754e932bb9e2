//! Spatial binning and chaining of feature points.
//!
//! A [`FeatureTable`] maps image-space points into a gravity-aligned,
//! origin-centered frame, buckets them into bins along the aligned x axis,
//! and links matching points across bins into chains. Chain links are stored
//! by value inside their bin and addressed by [`ChainRef`] (bin index,
//! position), so the structure stays valid as bins grow; links never move
//! between bins after insertion.

mod align;

pub use align::align_tables;

use crate::geometry::{AlignedBox2, Mat2, Transform, Vec2};
use crate::trace::trace_event;
use crate::util::{Average, ScanFlowError, ScanFlowResult};

/// A new point may extend a chain only when its per-axis displacement from
/// the chain's latest link stays within this tolerance. The vertical slack is
/// looser because scan lines are spaced along that axis.
const MAX_DISPLACEMENT: Vec2 = Vec2::new(4.0, 25.0);

/// Stable address of a chain link: bin index plus position within the bin.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChainRef {
    pub bin: usize,
    pub index: usize,
}

/// One feature observation, linked to the next observation of the same edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainLink {
    /// Position in the gravity-aligned, origin-centered frame.
    pub aligned_offset: Vec2,
    /// Position in image coordinates.
    pub offset: Vec2,
    /// Next link in this chain, if the chain has been extended.
    pub next: Option<ChainRef>,
}

#[derive(Clone, Debug, Default)]
struct Bin {
    links: Vec<ChainLink>,
}

/// Binned feature storage with chain matching across neighboring bins.
pub struct FeatureTable {
    transform: Transform,
    bounds: AlignedBox2,
    bins: Vec<Bin>,
    chains: Vec<ChainRef>,
}

impl FeatureTable {
    /// Creates a table over `bounds` (the image box) with `bin_count` bins
    /// along the axis perpendicular to the `tilt` direction.
    pub fn new(bin_count: usize, bounds: AlignedBox2, tilt: f32) -> ScanFlowResult<Self> {
        if bin_count == 0 {
            return Err(ScanFlowError::InvalidBinCount);
        }

        // Points arrive in image coordinates, which are unsuitable for
        // binning directly: center the box on the origin, then rotate so the
        // binning axis is perpendicular to gravity.
        let transform = Transform::new(Mat2::rotation(tilt), -bounds.size() * 0.5);

        // Rotation can make any corner extremal, so union all four.
        let mut aligned = AlignedBox2::from_point(transform.apply(bounds.min()));
        aligned.union_with_point(transform.apply(bounds.max()));
        aligned.union_with_point(transform.apply(Vec2::new(bounds.min().x, bounds.max().y)));
        aligned.union_with_point(transform.apply(Vec2::new(bounds.max().x, bounds.min().y)));

        Ok(Self {
            transform,
            bounds: aligned,
            bins: vec![Bin::default(); bin_count],
            chains: Vec::new(),
        })
    }

    /// Number of bins.
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Gravity-aligned bounding box the bins span.
    pub fn bounds(&self) -> &AlignedBox2 {
        &self.bounds
    }

    /// Image-space to aligned-space transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Links stored in a bin, in insertion order.
    pub fn bin_links(&self, bin: usize) -> ScanFlowResult<&[ChainLink]> {
        self.bins
            .get(bin)
            .map(|b| b.links.as_slice())
            .ok_or(ScanFlowError::IndexOutOfBounds {
                index: bin,
                len: self.bins.len(),
                context: "bin",
            })
    }

    /// Resolves a chain reference to its link.
    pub fn link(&self, reference: ChainRef) -> Option<&ChainLink> {
        self.bins.get(reference.bin)?.links.get(reference.index)
    }

    /// Heads of all chains, in creation order.
    pub fn chains(&self) -> &[ChainRef] {
        &self.chains
    }

    /// Iterates a chain from its head by following `next` references.
    pub fn chain(&self, head: ChainRef) -> ChainIter<'_> {
        ChainIter {
            table: self,
            next: Some(head),
        }
    }

    /// Inserts feature points (image coordinates), chaining each onto the
    /// closest recent compatible link or starting a new chain.
    ///
    /// Points must fall inside the table's aligned bounds; the scanner
    /// guarantees this for points it produced. Insertion order matters: a
    /// chain can only be extended through its most recent link.
    pub fn update(&mut self, offsets: &[Vec2]) -> ScanFlowResult<()> {
        for &offset in offsets {
            let aligned_offset = self.transform.apply(offset);

            // Only the horizontal position relative to the aligned bounds
            // decides the bin.
            let fraction = (aligned_offset.x - self.bounds.min().x) / self.bounds.size().x;
            if !(0.0..1.0).contains(&fraction) {
                return Err(ScanFlowError::PointOutOfBounds {
                    x: offset.x,
                    y: offset.y,
                    fraction,
                });
            }

            // Rounding can push fraction * bins up to the bin count itself.
            let index = ((fraction * self.bins.len() as f32) as usize).min(self.bins.len() - 1);

            let previous = self.find_previous_similar(aligned_offset, index);

            self.bins[index].links.push(ChainLink {
                aligned_offset,
                offset,
                next: None,
            });
            let link = ChainRef {
                bin: index,
                index: self.bins[index].links.len() - 1,
            };

            match previous {
                Some(previous) => self.bins[previous.bin].links[previous.index].next = Some(link),
                None => self.chains.push(link),
            }
        }

        trace_event!(
            "table_update",
            points = offsets.len(),
            chains = self.chains.len()
        );
        Ok(())
    }

    /// Finds the closest compatible chain tail in the owning bin and its two
    /// immediate neighbors. Only each bin's most recent link is considered,
    /// which keeps the chain topology strictly forward in scan order.
    fn find_previous_similar(&self, aligned_offset: Vec2, index: usize) -> Option<ChainRef> {
        let begin = index.saturating_sub(1);
        let end = (index + 1).min(self.bins.len() - 1);

        let mut best: Option<(ChainRef, f32)> = None;
        for bin in begin..=end {
            let links = &self.bins[bin].links;
            let Some(last) = links.last() else {
                continue;
            };

            let displacement = (aligned_offset - last.aligned_offset).abs();
            if displacement.x > MAX_DISPLACEMENT.x || displacement.y > MAX_DISPLACEMENT.y {
                continue;
            }

            let length = displacement.length();
            if best.map_or(true, |(_, best_length)| length < best_length) {
                best = Some((
                    ChainRef {
                        bin,
                        index: links.len() - 1,
                    },
                    length,
                ));
            }
        }

        best.map(|(reference, _)| reference)
    }

    /// Distribution of aligned x positions of all links in a bin.
    pub fn average_chain_position(&self, bin: usize) -> ScanFlowResult<Average> {
        let links = self.bin_links(bin)?;
        let mut distribution = Average::default();
        for link in links {
            distribution.add_sample(link.aligned_offset.x);
        }
        Ok(distribution)
    }

    /// Estimates the horizontal offset of `other` relative to this table by
    /// comparing per-bin centroids.
    pub fn calculate_offset(&self, other: &FeatureTable) -> ScanFlowResult<Average> {
        align_tables(self, other)
    }
}

/// Iterator over the links of one chain.
pub struct ChainIter<'a> {
    table: &'a FeatureTable,
    next: Option<ChainRef>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a ChainLink;

    fn next(&mut self) -> Option<&'a ChainLink> {
        let reference = self.next.take()?;
        let link = self.table.link(reference)?;
        self.next = link.next;
        Some(link)
    }
}
