//! Global cell extents

/// Total number of grid cells along each spatial axis of the whole domain
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalCellExtent([usize; 3]);

impl GlobalCellExtent {
    /// Create an extent from the number of cells along each axis
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self([nx, ny, nz])
    }

    /// Number of cells along the given axis
    pub fn cells(&self, axis: usize) -> usize {
        self.0[axis]
    }

    /// The cell counts along each axis as an array
    pub fn as_array(&self) -> [usize; 3] {
        self.0
    }

    /// Total number of cells in the domain
    pub fn total_cells(&self) -> usize {
        self.0.iter().product()
    }
}

impl From<[usize; 3]> for GlobalCellExtent {
    fn from(cells: [usize; 3]) -> Self {
        Self(cells)
    }
}
