//! Append-only fixed-height sparse Merkle tree using Keccak-256.
//!
//! Leaves are inserted sequentially by index. Only one cached left sibling
//! per level is kept (the "branch"), so insertion is O(height) in both time
//! and memory regardless of leaf count. Empty subtrees hash to precomputed
//! zero hashes: `z[0] = [0; 32]`, `z[h+1] = keccak256(z[h] || z[h])`.
//!
//! The root of an empty tree of height `h` is `z[h]`.

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
pub(crate) mod proof;
mod tree;
mod verify;


pub use error::SparseMerkleError;
pub use hash::{keccak256, node_hash};
pub use tree::SparseMerkleTree;
pub use verify::fold_proof;
