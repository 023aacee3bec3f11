//! Process groups

/// A fixed-size collection of cooperating parallel processes
///
/// The partitioning strategies only need the size of the group; the rank of
/// the calling process is exposed for logging.
pub trait ProcessGroup {
    /// Total number of processes in the group
    fn size(&self) -> usize;

    /// Rank of the calling process within the group
    fn rank(&self) -> usize;
}

/// The trivial process group of a single-process run
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialGroup;

impl ProcessGroup for SerialGroup {
    fn size(&self) -> usize {
        1
    }
    fn rank(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_serial_group() {
        let g = SerialGroup;
        assert_eq!(g.size(), 1);
        assert_eq!(g.rank(), 0);
    }
}
