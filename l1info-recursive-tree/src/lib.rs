//! Recursive commitment tree over an append-only historic Merkle tree.
//!
//! Each step folds one external-chain observation (exit root, block hash,
//! timestamp) into a running commitment: the previous top root is appended
//! to the historic tree, and the new historic root is re-combined with the
//! raw observation leaf to produce the next top root. Every published root
//! therefore depends on all prior roots and the newest data.
//!
//! # Architecture
//!
//! - [`hash_leaf_data`] derives the 32-byte observation leaf
//! - [`HistoricTree`] is the capability contract the engine requires from
//!   its base tree (append / root / prove); [`SparseMerkleTree`] is the
//!   stock implementation
//! - [`RecursiveTree`] owns one base tree instance plus the current
//!   [`Snapshot`] and is the sole writer of both
//!
//! The engine is a plain in-memory value: single logical writer, no
//! interior mutability, no persistence. Callers that share one engine
//! across threads must serialize access themselves.

#![warn(missing_docs)]

mod error;
mod historic;
mod leaf;
mod tree;


pub use error::RecursiveTreeError;
pub use historic::HistoricTree;
// Re-export the base tree and hash primitives so downstream users need only
// this crate.
pub use l1info_merkle_tree::{
    SparseMerkleError, SparseMerkleTree, fold_proof, keccak256, node_hash,
};
pub use leaf::hash_leaf_data;
pub use tree::{RecursiveTree, Snapshot};
