//! Proof computation by level-wise tree reconstruction.
//!
//! Unlike insertion, which only tracks one cached sibling per level, proof
//! generation needs sibling hashes along the whole path, so it rebuilds the
//! tree from an explicit leaf set supplied by the caller.

use crate::hash::node_hash;

/// Rebuild the tree level by level and collect the sibling at each level
/// for `index`.
///
/// Each level is padded to even length with that level's zero hash; when
/// `index` falls beyond the padded level, the sibling is the zero hash (the
/// whole subtree on that side is empty). Returns `(siblings bottom-up,
/// recomputed root)`.
pub(crate) fn compute_proof_from_leaves(
    height: u8,
    zero_hashes: &[[u8; 32]],
    index: u32,
    leaves: &[[u8; 32]],
) -> (Vec<[u8; 32]>, [u8; 32]) {
    let mut level: Vec<[u8; 32]> = leaves.to_vec();
    if level.is_empty() {
        level.push(zero_hashes[0]);
    }

    let mut siblings = Vec::with_capacity(height as usize);
    let mut idx = index as usize;
    for h in 0..height as usize {
        if level.len() % 2 == 1 {
            level.push(zero_hashes[h]);
        }
        if idx >= level.len() {
            siblings.push(zero_hashes[h]);
        } else if idx % 2 == 1 {
            siblings.push(level[idx - 1]);
        } else {
            siblings.push(level[idx + 1]);
        }

        let mut next = Vec::with_capacity(level.len() / 2);
        for pair in level.chunks_exact(2) {
            next.push(node_hash(&pair[0], &pair[1]));
        }
        level = next;
        idx /= 2;
    }

    (siblings, level[0])
}
