mod node;
mod ops;

use crate::{BuildStats, CodeInt};

/// Implementation of a BK-tree over binary codes.
///
/// Each internal node holds one center code and an ordered run of children,
/// one per occupied Hamming distance from the center; each leaf holds a small
/// bucket of codes scanned exhaustively. The tree is built once and queried
/// immutably.
pub struct BkTree<T: CodeInt> {
    root: node::BkNode<T>,
    leaf_capacity: usize,
    stats: BuildStats,
}
