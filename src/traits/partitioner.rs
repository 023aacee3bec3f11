//! Partitioning strategies
use super::ProcessGroup;
use crate::types::{GlobalCellExtent, PartitionError, RankGrid};

/// A strategy for laying out the ranks of a process group over a 3D grid
///
/// Every strategy is a deterministic pure function of its inputs, so all
/// processes in the group compute the same rank grid independently without
/// communicating. Downstream Cartesian topology construction relies on this.
pub trait Partitioner {
    /// Number of ranks along each axis for the given process group and domain
    ///
    /// On success the product of the returned components equals
    /// `group.size()`.
    fn ranks_per_dimension<G: ProcessGroup>(
        &self,
        group: &G,
        extent: GlobalCellExtent,
    ) -> Result<RankGrid, PartitionError>;
}

/// Reject domains with a zero cell count along some axis
///
/// Called by every strategy before its own logic so that invalid domains fail
/// the same way regardless of strategy.
pub(crate) fn validate_extent(extent: GlobalCellExtent) -> Result<(), PartitionError> {
    if (0..3).any(|axis| extent.cells(axis) == 0) {
        return Err(PartitionError::InvalidDomain {
            extent: extent.as_array(),
        });
    }
    Ok(())
}
