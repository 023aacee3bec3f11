//! Partitioning strategies

mod block;
mod manual;

pub use block::BlockPartitioner;
pub use manual::ManualPartitioner;
