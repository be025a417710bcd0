use crate::{
    SparseMerkleError,
    hash::{node_hash, validate_height, zero_hashes},
    proof::compute_proof_from_leaves,
};

/// An append-only sparse Merkle tree of fixed height (1..=32).
///
/// Capacity is `2^height` leaves. Leaves must be inserted at strictly
/// increasing indices starting from 0; the tree keeps one cached left
/// sibling per level, so it cannot repair gaps or rewrites.
#[derive(Debug, Clone)]
pub struct SparseMerkleTree {
    height: u8,
    count: u64,
    zero_hashes: Vec<[u8; 32]>,
    branch: Vec<[u8; 32]>,
    root: [u8; 32],
}

impl SparseMerkleTree {
    /// Create a new empty tree with the given height.
    ///
    /// Height must be between 1 and 32 inclusive. The empty tree's root is
    /// the height-level zero hash.
    pub fn new(height: u8) -> Result<Self, SparseMerkleError> {
        validate_height(height)?;
        let zero_hashes = zero_hashes(height);
        let root = zero_hashes[height as usize];
        Ok(Self {
            height,
            count: 0,
            zero_hashes,
            branch: vec![[0u8; 32]; height as usize],
            root,
        })
    }

    /// Height of the tree.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of leaves inserted so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Maximum number of leaves this tree can hold, `2^height`.
    pub fn capacity(&self) -> u64 {
        1u64 << self.height
    }

    /// Current root. Equals the empty-tree zero hash before any insertion.
    pub fn root(&self) -> [u8; 32] {
        self.root
    }

    /// Insert a leaf at `index` and return the new root.
    ///
    /// `index` must equal the current leaf count (append-only) and be below
    /// capacity. All checks happen before any state is written, so a failed
    /// insert leaves the tree untouched.
    pub fn insert(&mut self, index: u32, leaf: [u8; 32]) -> Result<[u8; 32], SparseMerkleError> {
        if u64::from(index) >= self.capacity() {
            return Err(SparseMerkleError::CapacityExceeded {
                index,
                capacity: self.capacity(),
            });
        }
        if u64::from(index) != self.count {
            return Err(SparseMerkleError::IndexMismatch {
                index,
                expected: self.count,
            });
        }

        let mut cur = leaf;
        // The first level where the path turns left is where `cur` becomes
        // the cached sibling for future right-side insertions.
        let mut subtree_filled = true;
        for h in 0..self.height as usize {
            if index >> h & 1 == 1 {
                cur = node_hash(&self.branch[h], &cur);
            } else {
                if subtree_filled {
                    self.branch[h] = cur;
                    subtree_filled = false;
                }
                cur = node_hash(&cur, &self.zero_hashes[h]);
            }
        }
        self.root = cur;
        self.count += 1;
        Ok(cur)
    }

    /// Compute the Merkle inclusion proof for `index` against an explicit
    /// ordered leaf set.
    ///
    /// The leaf set must be consistent with prior insertions for the
    /// recomputed root to match [`root`](Self::root). Returns the sibling
    /// hashes bottom-up (length = height) and the recomputed root. `index`
    /// may point past the supplied leaves (e.g. the next empty slot), in
    /// which case the siblings on the empty side are zero hashes.
    pub fn compute_proof(
        &self,
        index: u32,
        leaves: &[[u8; 32]],
    ) -> Result<(Vec<[u8; 32]>, [u8; 32]), SparseMerkleError> {
        if u64::from(index) >= self.capacity() {
            return Err(SparseMerkleError::ProofError(format!(
                "index {} out of range for capacity {}",
                index,
                self.capacity()
            )));
        }
        if leaves.len() as u64 > self.capacity() {
            return Err(SparseMerkleError::ProofError(format!(
                "{} leaves exceed capacity {}",
                leaves.len(),
                self.capacity()
            )));
        }
        Ok(compute_proof_from_leaves(
            self.height,
            &self.zero_hashes,
            index,
            leaves,
        ))
    }
}
