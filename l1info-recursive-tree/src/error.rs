use l1info_merkle_tree::SparseMerkleError;
use thiserror::Error;

/// Errors from recursive commitment tree operations.
///
/// The engine adds no failure modes of its own; every error originates in
/// the base tree (construction, insertion, or proof computation) and is
/// propagated unchanged. On failure the engine's snapshot is left
/// untouched.
#[derive(Debug, Error)]
pub enum RecursiveTreeError {
    /// Error surfaced from the historic base tree.
    #[error(transparent)]
    Tree(#[from] SparseMerkleError),
}
