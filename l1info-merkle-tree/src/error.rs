use thiserror::Error;

/// Errors from sparse Merkle tree operations.
#[derive(Debug, Error)]
pub enum SparseMerkleError {
    /// Height outside the supported 1..=32 range.
    #[error("height must be between 1 and 32, got {0}")]
    InvalidHeight(u8),
    /// Insertion index at or beyond `2^height`.
    #[error("tree is full: index {index} exceeds capacity {capacity}")]
    CapacityExceeded {
        /// The rejected insertion index.
        index: u32,
        /// Total leaf capacity, `2^height`.
        capacity: u64,
    },
    /// Insertion index does not continue the append-only sequence.
    #[error("non-contiguous insert: got index {index}, expected {expected}")]
    IndexMismatch {
        /// The rejected insertion index.
        index: u32,
        /// The next valid index (current leaf count).
        expected: u64,
    },
    /// Proof request inconsistent with the tree or the supplied leaf set.
    #[error("invalid proof request: {0}")]
    ProofError(String),
}
