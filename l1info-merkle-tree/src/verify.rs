//! Proof verification. Pure function, no tree state required.

use crate::hash::node_hash;

/// Fold a sibling path bottom-up from `leaf` at `index` and return the
/// resulting root.
///
/// The bit of `index` at each level selects whether the running hash is the
/// left or right child. Matching the returned value against a trusted root
/// verifies inclusion.
pub fn fold_proof(leaf: &[u8; 32], index: u32, siblings: &[[u8; 32]]) -> [u8; 32] {
    let mut cur = *leaf;
    for (h, sibling) in siblings.iter().enumerate() {
        if index >> h & 1 == 1 {
            cur = node_hash(sibling, &cur);
        } else {
            cur = node_hash(&cur, sibling);
        }
    }
    cur
}
