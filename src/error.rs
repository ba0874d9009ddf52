use thiserror::Error;

/// Errors reported by [`PowHeap`](crate::heap::PowHeap)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The branching exponent is negative or `2^power` does not fit in a `usize`
    #[error("invalid branching exponent {power}: must be in 0..{}", usize::BITS)]
    InvalidArgument { power: i32 },

    /// Extraction was attempted on a heap holding no elements
    #[error("heap is empty")]
    EmptyStructure,
}
