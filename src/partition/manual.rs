//! Manual partitioning
use crate::{
    traits::{validate_extent, Partitioner, ProcessGroup},
    types::{GlobalCellExtent, PartitionError, RankGrid},
};
use log::debug;

/// Strategy that returns a caller-supplied rank grid verbatim
///
/// This lets a caller pin a known-good decomposition, for example one that
/// matches the hardware topology or the layout of a previous checkpoint,
/// without the partitioner second-guessing it. The rank grid is only checked
/// for consistency against the process group; the cell extent has no
/// influence on the result.
#[derive(Debug, Clone, Copy)]
pub struct ManualPartitioner {
    ranks_per_dim: RankGrid,
}

impl ManualPartitioner {
    /// Create a partitioner that will return the given rank grid
    ///
    /// The grid is not validated here: the process group it has to agree with
    /// is only known once [`Partitioner::ranks_per_dimension`] is called.
    pub fn new(ranks_per_dim: RankGrid) -> Self {
        Self { ranks_per_dim }
    }
}

impl Partitioner for ManualPartitioner {
    fn ranks_per_dimension<G: ProcessGroup>(
        &self,
        group: &G,
        extent: GlobalCellExtent,
    ) -> Result<RankGrid, PartitionError> {
        validate_extent(extent)?;
        let expected = self.ranks_per_dim.num_ranks();
        let actual = group.size();
        if expected != actual {
            return Err(PartitionError::PartitionMismatch { expected, actual });
        }
        debug!(
            "[{}] using manual rank grid {:?}",
            group.rank(),
            self.ranks_per_dim.as_array()
        );
        Ok(self.ranks_per_dim)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::SerialGroup;

    struct FakeGroup(usize);
    impl ProcessGroup for FakeGroup {
        fn size(&self) -> usize {
            self.0
        }
        fn rank(&self) -> usize {
            0
        }
    }

    #[test]
    fn test_returns_stored_grid() {
        let p = ManualPartitioner::new(RankGrid::new(3, 2, 1));
        let grid = p
            .ranks_per_dimension(&FakeGroup(6), GlobalCellExtent::new(30, 20, 10))
            .unwrap();
        assert_eq!(grid, RankGrid::new(3, 2, 1));
    }

    #[test]
    fn test_extent_does_not_influence_result() {
        let p = ManualPartitioner::new(RankGrid::new(2, 3, 4));
        let group = FakeGroup(24);
        let a = p
            .ranks_per_dimension(&group, GlobalCellExtent::new(100, 1, 1))
            .unwrap();
        let b = p
            .ranks_per_dimension(&group, GlobalCellExtent::new(7, 1000, 3))
            .unwrap();
        assert_eq!(a, RankGrid::new(2, 3, 4));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mismatch_reports_expected_and_actual() {
        let p = ManualPartitioner::new(RankGrid::new(2, 2, 2));
        assert_eq!(
            p.ranks_per_dimension(&FakeGroup(4), GlobalCellExtent::new(10, 10, 10)),
            Err(PartitionError::PartitionMismatch {
                expected: 8,
                actual: 4
            })
        );
    }

    #[test]
    fn test_invalid_domain_rejected_before_mismatch() {
        let p = ManualPartitioner::new(RankGrid::new(2, 2, 2));
        assert_eq!(
            p.ranks_per_dimension(&FakeGroup(4), GlobalCellExtent::new(0, 10, 10)),
            Err(PartitionError::InvalidDomain {
                extent: [0, 10, 10]
            })
        );
    }

    #[test]
    fn test_serial_group() {
        let p = ManualPartitioner::new(RankGrid::new(1, 1, 1));
        let grid = p
            .ranks_per_dimension(&SerialGroup, GlobalCellExtent::new(5, 5, 5))
            .unwrap();
        assert_eq!(grid.num_ranks(), 1);
    }
}
