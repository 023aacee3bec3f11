//! Rank-grid partitioning for structured 3D grids
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

#[cfg(feature = "mpi")]
pub mod parallel;
pub mod partition;
pub mod traits;
pub mod types;

#[cfg(feature = "mpi")]
pub use parallel::CommunicatorGroup;
pub use partition::{BlockPartitioner, ManualPartitioner};
pub use traits::{Partitioner, ProcessGroup, SerialGroup};
pub use types::{GlobalCellExtent, PartitionError, RankGrid};
