use l1info_merkle_tree::keccak256;

/// Derive the observation leaf committed at one step of the recursive tree.
///
/// `keccak256(exit_root || block_hash || min_timestamp as 8-byte
/// big-endian)`. The preimage is a fixed 72 bytes, so the three fields stay
/// positionally distinguishable; no input can shift bytes into a
/// neighboring field. Pure and total.
pub fn hash_leaf_data(
    exit_root: &[u8; 32],
    block_hash: &[u8; 32],
    min_timestamp: u64,
) -> [u8; 32] {
    let mut data = [0u8; 72];
    data[..32].copy_from_slice(exit_root);
    data[32..64].copy_from_slice(block_hash);
    data[64..].copy_from_slice(&min_timestamp.to_be_bytes());
    keccak256(&data)
}
