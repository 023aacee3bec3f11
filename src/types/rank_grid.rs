//! Rank grids

/// Number of processes laid out along each spatial axis
///
/// A valid rank grid for a process group has a component product equal to the
/// size of the group, so that every rank owns exactly one block of the domain.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankGrid([usize; 3]);

impl RankGrid {
    /// Create a rank grid from the number of ranks along each axis
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self([nx, ny, nz])
    }

    /// Number of ranks along the given axis
    pub fn ranks(&self, axis: usize) -> usize {
        self.0[axis]
    }

    /// Total number of ranks in the grid
    pub fn num_ranks(&self) -> usize {
        self.0.iter().product()
    }

    /// The ranks along each axis as an array
    pub fn as_array(&self) -> [usize; 3] {
        self.0
    }
}

impl From<[usize; 3]> for RankGrid {
    fn from(ranks: [usize; 3]) -> Self {
        Self(ranks)
    }
}
