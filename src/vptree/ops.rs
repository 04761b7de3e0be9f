use anyhow::{anyhow, Result};

use crate::vptree::node::VpNode;
use crate::vptree::VpTree;
use crate::{BuildStats, CodeInt, DEFAULT_LEAF_CAPACITY};

impl<T: CodeInt> VpTree<T> {
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
        let root = VpNode::build(codes, leaf_capacity, &mut stats);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ls::LinearSearch;
    use rand::distributions::{Distribution, Standard};
    use rand::{thread_rng, Rng};

    fn gen_random_codes<T>(size: usize) -> Vec<T>
    where
        Standard: Distribution<T>,
    {
        let mut rng = thread_rng();
        let mut codes: Vec<T> = Vec::with_capacity(size);
        for _ in 0..size {
            codes.push(rng.gen::<T>());
        }
        codes
    }

    fn do_range_search<T: CodeInt + std::fmt::Debug>(codes: &[T]) {
        let ls = LinearSearch::new(codes).unwrap();
        for &cap in &[1, 4, 64, 1024] {
            let tree = VpTree::with_leaf_capacity(codes, cap).unwrap();
            assert_eq!(tree.get_stats().stored_codes, codes.len());
            for radius in 0..7 {
                for qi in (0..codes.len()).step_by(97) {
                    let qcode = codes[qi];
                    let (mut ans1, _) = ls.range_search(qcode, radius);
                    let (mut ans2, visited) = tree.range_search(qcode, radius);
                    ans1.sort_unstable();
                    ans2.sort_unstable();
                    assert_eq!(ans1, ans2);
                    assert!(visited <= tree.get_stats().stored_codes);
                }
            }
        }
    }

    #[test]
    fn range_search_u8_works() {
        let codes = gen_random_codes::<u8>(2000);
        do_range_search(&codes);
    }

    #[test]
    fn range_search_u32_works() {
        let codes = gen_random_codes::<u32>(2000);
        do_range_search(&codes);
    }

    #[test]
    fn range_search_u64_works() {
        let codes = gen_random_codes::<u64>(2000);
        do_range_search(&codes);
    }

    #[test]
    fn degenerate_capacity_matches_linear_exactly() {
        let codes = gen_random_codes::<u32>(500);
        let ls = LinearSearch::new(&codes).unwrap();
        let tree = VpTree::with_leaf_capacity(&codes, codes.len()).unwrap();
        assert_eq!(tree.get_stats().nodes, 1);
        for radius in &[0, 3, 16, 32] {
            let qcode = codes[0];
            // A single leaf bucket scans in database order, so the results
            // agree with the linear baseline element for element.
            assert_eq!(ls.range_search(qcode, *radius), tree.range_search(qcode, *radius));
        }
    }

    #[test]
    fn rebuilds_are_structurally_identical() {
        let codes = gen_random_codes::<u32>(1000);
        let tree1 = VpTree::with_leaf_capacity(&codes, 4).unwrap();
        let tree2 = VpTree::with_leaf_capacity(&codes, 4).unwrap();
        assert_eq!(tree1.root, tree2.root);
        assert_eq!(tree1.get_stats(), tree2.get_stats());
    }

    #[test]
    fn empty_database_is_rejected() {
        assert!(VpTree::<u32>::new(&[]).is_err());
    }

    #[test]
    fn small_neighborhood_scenario() {
        let codes: [u32; 4] = [0b000, 0b001, 0b011, 0b111];
        for &cap in &[1, 4] {
            let tree = VpTree::with_leaf_capacity(&codes, cap).unwrap();
            let (mut matches, _) = tree.range_search(0b000, 1);
            matches.sort_unstable();
            assert_eq!(matches, vec![0b000, 0b001]);
        }
    }

    #[test]
    fn duplicate_codes_are_all_reported() {
        let codes: [u32; 3] = [5, 5, 5];
        let tree = VpTree::with_leaf_capacity(&codes, 1).unwrap();
        let (matches, _) = tree.range_search(5, 0);
        assert_eq!(matches, vec![5, 5, 5]);
    }

    #[test]
    fn equidistant_codes_scenario() {
        // hamdist(0, 3) == 2 and hamdist(0, 12) == 2, so both fall inside
        // radius 2 along with the query itself.
        let codes: [u32; 3] = [0, 3, 12];
        let tree = VpTree::with_leaf_capacity(&codes, 1).unwrap();
        let (mut matches, _) = tree.range_search(0, 2);
        matches.sort_unstable();
        assert_eq!(matches, vec![0, 3, 12]);
    }

    #[test]
    fn trees_agree_with_each_other() {
        let codes = gen_random_codes::<u32>(1500);
        let bk = crate::BkTree::with_leaf_capacity(&codes, 8).unwrap();
        let vp = VpTree::with_leaf_capacity(&codes, 8).unwrap();
        for qi in (0..codes.len()).step_by(131) {
            let qcode = codes[qi];
            let (mut ans1, _) = bk.range_search(qcode, 4);
            let (mut ans2, _) = vp.range_search(qcode, 4);
            ans1.sort_unstable();
            ans2.sort_unstable();
            assert_eq!(ans1, ans2);
        }
    }
}
