//! Near-uniform block partitioning
use crate::{
    traits::{validate_extent, Partitioner, ProcessGroup},
    types::{GlobalCellExtent, PartitionError, RankGrid},
};
use itertools::izip;
use log::debug;

/// Strategy that factorizes the process count into near-uniform blocks
///
/// All ordered factorizations of the process count into three factors are
/// enumerated and the one giving the smallest maximum block size is chosen.
/// Ties are broken by the smallest block surface, then lexicographically so
/// that every rank agrees on the result. A factorization is only a candidate
/// if every rank owns at least one whole cell along each axis; if no
/// factorization qualifies the decomposition is unsatisfiable.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockPartitioner;

fn divisors(n: usize) -> Vec<usize> {
    (1..=n).filter(|d| n % d == 0).collect()
}

/// Largest number of cells any single rank owns under this rank grid
fn max_block_cells(ranks: [usize; 3], cells: [usize; 3]) -> usize {
    izip!(ranks, cells).map(|(r, n)| n.div_ceil(r)).product()
}

/// Half the surface area of a block, a proxy for its halo size
fn block_surface(ranks: [usize; 3], cells: [usize; 3]) -> usize {
    let b: Vec<usize> = izip!(ranks, cells).map(|(r, n)| n.div_ceil(r)).collect();
    b[0] * b[1] + b[1] * b[2] + b[2] * b[0]
}

impl Partitioner for BlockPartitioner {
    fn ranks_per_dimension<G: ProcessGroup>(
        &self,
        group: &G,
        extent: GlobalCellExtent,
    ) -> Result<RankGrid, PartitionError> {
        validate_extent(extent)?;
        let size = group.size();
        let cells = extent.as_array();

        let candidates = divisors(size).into_iter().flat_map(|nx| {
            divisors(size / nx)
                .into_iter()
                .map(move |ny| [nx, ny, size / nx / ny])
        });
        let ranks = candidates
            .filter(|ranks| izip!(*ranks, cells).all(|(r, n)| r <= n))
            .min_by_key(|&ranks| {
                (
                    max_block_cells(ranks, cells),
                    block_surface(ranks, cells),
                    ranks,
                )
            })
            .ok_or(PartitionError::UnsatisfiableDecomposition { size })?;

        debug!(
            "[{}] block partition of {size} ranks over {cells:?} cells: {ranks:?}",
            group.rank()
        );
        Ok(RankGrid::from(ranks))
    }
}
