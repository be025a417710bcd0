use sha3::{Digest, Keccak256};

use crate::SparseMerkleError;

/// Validate that height is in the allowed range [1, 32].
pub(crate) fn validate_height(height: u8) -> Result<(), SparseMerkleError> {
    if !(1..=32).contains(&height) {
        return Err(SparseMerkleError::InvalidHeight(height));
    }
    Ok(())
}

/// Keccak-256 (legacy padding, as used on Ethereum) of an arbitrary byte
/// string.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash of an internal node: `keccak256(left || right)`.
pub fn node_hash(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Precompute the zero-subtree hashes for each level, bottom-up.
///
/// Returns `height + 1` entries; `z[h]` is the root of an empty subtree of
/// height `h`, so `z[height]` is the empty tree's root.
pub(crate) fn zero_hashes(height: u8) -> Vec<[u8; 32]> {
    let mut hashes = Vec::with_capacity(height as usize + 1);
    hashes.push([0u8; 32]);
    for h in 0..height as usize {
        hashes.push(node_hash(&hashes[h], &hashes[h]));
    }
    hashes
}
