use l1info_merkle_tree::{SparseMerkleTree, node_hash};

use crate::{HistoricTree, RecursiveTreeError};

/// The three roots produced by the most recent insertion.
///
/// Returned by value from [`RecursiveTree::add_leaf`]; each step depends
/// only on the snapshot returned by the previous step, which keeps the
/// chaining rule explicit and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Root of the historic tree after appending the previous top root.
    pub historic_root: [u8; 32],
    /// The raw observation leaf committed at this step, stored verbatim.
    pub leaf_data: [u8; 32],
    /// `keccak256(historic_root || leaf_data)`, the published commitment.
    pub top_root: [u8; 32],
}

/// Recursive commitment engine.
///
/// Owns one historic base tree plus the current [`Snapshot`].
/// [`add_leaf`](Self::add_leaf) is the sole writer of both: it appends the
/// previous top root to the historic tree, then recombines the new historic
/// root with the supplied leaf into the next top root. A failed insertion
/// leaves the engine untouched.
#[derive(Debug, Clone)]
pub struct RecursiveTree<T = SparseMerkleTree> {
    historic: T,
    snapshot: Snapshot,
    /// The top root to feed into the historic tree on the next insertion.
    /// Starts as the zero hash: the first append places `[0; 32]` at leaf 0,
    /// which pins the known-answer root for a single-leaf tree.
    prev_top_root: [u8; 32],
}

impl RecursiveTree<SparseMerkleTree> {
    /// Create an empty engine backed by a [`SparseMerkleTree`] of the given
    /// height. Fails only if the height is invalid.
    pub fn new(height: u8) -> Result<Self, RecursiveTreeError> {
        Ok(Self::with_historic(SparseMerkleTree::new(height)?))
    }

    /// Rebuild an engine from an ordered list of raw observation leaves by
    /// replaying insertion.
    ///
    /// Indices are implied by list position. The first base-tree error
    /// propagates immediately; the partially built engine is dropped. On
    /// success the resulting root equals the one produced by the same
    /// sequence of [`add_leaf`](Self::add_leaf) calls.
    pub fn from_leaves(height: u8, leaves: &[[u8; 32]]) -> Result<Self, RecursiveTreeError> {
        let mut tree = Self::new(height)?;
        for (i, leaf) in leaves.iter().enumerate() {
            tree.add_leaf(i as u32, *leaf)?;
        }
        Ok(tree)
    }
}

impl<T: HistoricTree> RecursiveTree<T> {
    /// Create an engine on top of an existing, empty base tree.
    ///
    /// The base tree must not have had any leaves appended; the engine
    /// assumes the next insertion lands at index 0.
    pub fn with_historic(historic: T) -> Self {
        let empty_root = historic.root();
        Self {
            historic,
            snapshot: Snapshot {
                historic_root: empty_root,
                leaf_data: [0u8; 32],
                top_root: empty_root,
            },
            prev_top_root: [0u8; 32],
        }
    }

    /// Fold one observation leaf into the commitment chain.
    ///
    /// Appends the previous top root to the historic tree at `index`, reads
    /// back the new historic root, stores `leaf` verbatim (callers derive
    /// it via [`hash_leaf_data`](crate::hash_leaf_data) when committing raw
    /// observations), and publishes `keccak256(historic_root || leaf)` as
    /// the new top root. Returns the new snapshot.
    ///
    /// On a base-tree error (capacity exceeded, non-contiguous index) the
    /// stored snapshot is unchanged.
    pub fn add_leaf(
        &mut self,
        index: u32,
        leaf: [u8; 32],
    ) -> Result<Snapshot, RecursiveTreeError> {
        self.historic.append(index, self.prev_top_root)?;

        let historic_root = self.historic.root();
        let snapshot = Snapshot {
            historic_root,
            leaf_data: leaf,
            top_root: node_hash(&historic_root, &leaf),
        };
        self.snapshot = snapshot;
        self.prev_top_root = snapshot.top_root;

        Ok(snapshot)
    }

    /// The current top root. Equals the historic tree's empty root before
    /// any insertion.
    pub fn root(&self) -> [u8; 32] {
        self.snapshot.top_root
    }

    /// The historic tree's current root.
    pub fn historic_root(&self) -> [u8; 32] {
        self.historic.root()
    }

    /// The snapshot produced by the most recent insertion.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot
    }

    /// Merkle inclusion proof for `index` in the historic tree.
    ///
    /// Forwards to the base tree; no extra hashing happens here. The
    /// `leaves` are historic-tree leaves, i.e. previously inserted top
    /// roots (the zero hash first), which the caller tracks — the engine
    /// does not retain full leaf history.
    pub fn compute_merkle_proof(
        &self,
        index: u32,
        leaves: &[[u8; 32]],
    ) -> Result<(Vec<[u8; 32]>, [u8; 32]), RecursiveTreeError> {
        self.historic.prove(index, leaves)
    }
}
