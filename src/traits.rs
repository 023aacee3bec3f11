//! Traits

mod partitioner;
mod process_group;

pub(crate) use partitioner::validate_extent;
pub use partitioner::Partitioner;
pub use process_group::{ProcessGroup, SerialGroup};
