//! Partitioning errors
use thiserror::Error;

/// Partitioning error
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PartitionError {
    /// A global cell extent has a zero component
    #[error("invalid domain: global cell extent {extent:?} has a zero component")]
    InvalidDomain {
        /// The rejected cell counts per axis
        extent: [usize; 3],
    },
    /// A rank grid is inconsistent with the size of the process group
    #[error("rank grid needs {expected} processes but the process group has {actual}")]
    PartitionMismatch {
        /// Number of processes the rank grid lays out
        expected: usize,
        /// Size of the process group
        actual: usize,
    },
    /// No factorization of the process count fits the domain
    #[error("no rank grid over {size} processes fits the domain")]
    UnsatisfiableDecomposition {
        /// Size of the process group
        size: usize,
    },
}
