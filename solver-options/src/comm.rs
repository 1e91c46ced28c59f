//! Collective-execution context consulted by the print operations

/// A group of cooperating processes identified by rank.
///
/// Only rank zero produces output when options are printed; every other rank
/// returns without writing anything.
pub trait Communicator {
    /// Rank of the calling participant
    fn rank(&self) -> usize;

    /// Number of participants in the group
    fn size(&self) -> usize;

    fn is_root(&self) -> bool {
        self.rank() == 0
    }
}

/// Single-process group
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalComm;

impl Communicator for LocalComm {
    fn rank(&self) -> usize {
        0
    }

    fn size(&self) -> usize {
        1
    }
}

/// Fixed rank and size, for hosts that learn them from their launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticComm {
    pub rank: usize,
    pub size: usize,
}

impl StaticComm {
    pub fn new(rank: usize, size: usize) -> Self {
        Self { rank, size }
    }
}

impl Communicator for StaticComm {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }
}

/// Whether the caller should produce output.
///
/// Without a communicator every caller runs locally and prints.
pub fn should_print(comm: Option<&dyn Communicator>) -> bool {
    comm.is_none_or(|c| c.is_root())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_print() {
        assert!(should_print(None));
        assert!(should_print(Some(&LocalComm)));
        assert!(should_print(Some(&StaticComm::new(0, 2))));
        assert!(!should_print(Some(&StaticComm::new(1, 2))));
    }
}
