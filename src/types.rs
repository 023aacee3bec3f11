//! Types

mod error;
mod extent;
mod rank_grid;

pub use error::PartitionError;
pub use extent::GlobalCellExtent;
pub use rank_grid::RankGrid;
