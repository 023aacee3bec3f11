//! MPI process groups
use crate::{traits::ProcessGroup, types::RankGrid};
use mpi::{topology::CartesianCommunicator, traits::Communicator, Count};

/// A process group backed by an MPI communicator
pub struct CommunicatorGroup<'a, C: Communicator> {
    comm: &'a C,
}

impl<'a, C: Communicator> CommunicatorGroup<'a, C> {
    /// Wrap a communicator
    pub fn new(comm: &'a C) -> Self {
        Self { comm }
    }

    /// Build the Cartesian communicator for a computed rank grid
    ///
    /// Returns `None` on processes that are not part of the new communicator.
    pub fn create_cartesian_communicator(
        &self,
        rank_grid: RankGrid,
        periodic: [bool; 3],
        reorder: bool,
    ) -> Option<CartesianCommunicator> {
        let dims = rank_grid.as_array().map(|r| r as Count);
        self.comm
            .create_cartesian_communicator(&dims, &periodic, reorder)
    }
}

impl<C: Communicator> ProcessGroup for CommunicatorGroup<'_, C> {
    fn size(&self) -> usize {
        self.comm.size() as usize
    }
    fn rank(&self) -> usize {
        self.comm.rank() as usize
    }
}
