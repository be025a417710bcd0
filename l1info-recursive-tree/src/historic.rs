//! Capability contract between the recursive engine and its base tree.
//!
//! The engine never reaches into base-tree internals; it only appends,
//! reads the root, and requests proofs. Any conforming incremental Merkle
//! tree can back the engine by implementing [`HistoricTree`].

use l1info_merkle_tree::SparseMerkleTree;

use crate::RecursiveTreeError;

/// Operations the recursive engine requires from its historic base tree.
pub trait HistoricTree {
    /// Append `value` at `index`. Indices must be contiguous from 0.
    /// Returns the new root.
    fn append(&mut self, index: u32, value: [u8; 32]) -> Result<[u8; 32], RecursiveTreeError>;

    /// Current root. Must be the well-defined empty-tree root before any
    /// append.
    fn root(&self) -> [u8; 32];

    /// Merkle inclusion proof for `index` against an explicit ordered leaf
    /// set. Returns the sibling hashes bottom-up and the recomputed root.
    fn prove(
        &self,
        index: u32,
        leaves: &[[u8; 32]],
    ) -> Result<(Vec<[u8; 32]>, [u8; 32]), RecursiveTreeError>;
}

impl HistoricTree for SparseMerkleTree {
    fn append(&mut self, index: u32, value: [u8; 32]) -> Result<[u8; 32], RecursiveTreeError> {
        Ok(self.insert(index, value)?)
    }

    fn root(&self) -> [u8; 32] {
        SparseMerkleTree::root(self)
    }

    fn prove(
        &self,
        index: u32,
        leaves: &[[u8; 32]],
    ) -> Result<(Vec<[u8; 32]>, [u8; 32]), RecursiveTreeError> {
        Ok(self.compute_proof(index, leaves)?)
    }
}
