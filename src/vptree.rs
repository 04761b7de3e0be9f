mod node;
mod ops;

use crate::{BuildStats, CodeInt};

/// Implementation of a VP-tree over binary codes.
///
/// Each internal node holds one vantage code and a threshold radius: the
/// near child covers the closed ball of that radius around the vantage, the
/// far child covers everything outside it. Leaves hold small buckets of
/// codes scanned exhaustively. The tree is built once and queried immutably.
pub struct VpTree<T: CodeInt> {
    root: node::VpNode<T>,
    leaf_capacity: usize,
    stats: BuildStats,
}
