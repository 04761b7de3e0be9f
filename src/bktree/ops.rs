use anyhow::{anyhow, Result};

use crate::bktree::node::BkNode;
use crate::bktree::BkTree;
use crate::{BuildStats, CodeInt, DEFAULT_LEAF_CAPACITY};

impl<T: CodeInt> BkTree<T> {
    /// Constructs the tree from binary codes with the default leaf capacity.
    /// If codes is empty, an error is returned.
    pub fn new(codes: &[T]) -> Result<Self> {
        Self::with_leaf_capacity(codes, DEFAULT_LEAF_CAPACITY)
    }

    /// Constructs the tree from binary codes, stopping the recursion at
    /// buckets of at most leaf_capacity codes.
    /// If codes is empty, an error is returned.
    pub fn with_leaf_capacity(codes: &[T], leaf_capacity: usize) -> Result<Self> {
        if codes.is_empty() {
            return Err(anyhow!("codes must not be empty."));
        }
        let mut stats = BuildStats::default();
        let root = BkNode::build(codes, leaf_capacity, &mut stats);
        Ok(Self {
            root,
            leaf_capacity,
            stats,
        })
    }

    /// Finds the codes whose Hamming distances to qcode are within radius.
    /// Returns the matched codes and the number of nodes and bucketed codes
    /// visited by the traversal.
    ///
    /// The radius must be within `0..=T::dimensions()`; larger values are
    /// meaningless for this metric and are the caller's responsibility to
    /// reject.
    pub fn range_search(&self, qcode: T, radius: usize) -> (Vec<T>, usize) {
        let mut answers = Vec::with_capacity(1 << 8);
        let visited = self.range_search_with_buf(qcode, radius, &mut answers);
        (answers, visited)
    }

    /// Finds the codes whose Hamming distances to qcode are within radius.
    /// The matched codes are stored in answers, in traversal order; the
    /// visit count is returned.
    pub fn range_search_with_buf(&self, qcode: T, radius: usize, answers: &mut Vec<T>) -> usize {
        debug_assert!(radius <= T::dimensions());
        answers.clear();
        self.root.search_into(qcode, radius, answers)
    }

    /// Gets the construction statistics.
    pub fn get_stats(&self) -> BuildStats {
        self.stats
    }

    /// Gets the configured leaf capacity.
    pub fn get_leaf_capacity(&self) -> usize {
        self.leaf_capacity
    }
}
