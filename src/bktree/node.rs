use crate::{hamdist, ls, BuildStats, CodeInt};

/// Node of a BK-tree.
///
/// Children of an internal node are kept in ascending order of their
/// distance tag, and every code anywhere in the child tagged `d` is at
/// exactly `d` bits from the center. Codes bitwise equal to the center are
/// kept in a child tagged 0 so that duplicated database entries survive.
#[derive(Debug, PartialEq, Eq)]
pub enum BkNode<T> {
    Leaf(Vec<T>),
    Internal {
        center: T,
        children: Vec<(usize, BkNode<T>)>,
    },
}

impl<T: CodeInt> BkNode<T> {
    /// Builds the subtree over codes, stopping at buckets of at most
    /// leaf_capacity codes. The first code becomes the center, which keeps
    /// construction deterministic for a fixed input order.
    pub fn build(codes: &[T], leaf_capacity: usize, stats: &mut BuildStats) -> Self {
        debug_assert!(!codes.is_empty());

        stats.nodes += 1;

        let n = codes.len();
        if n <= leaf_capacity || n <= 1 {
            stats.stored_codes += n;
            return BkNode::Leaf(codes.to_vec());
        }

        let center = codes[0];
        let rest = &codes[1..];
        stats.stored_codes += 1;

        // Stable bounded-distance partition of the remaining codes.
        let dims = T::dimensions();
        let mut buckets: Vec<Vec<T>> = vec![Vec::new(); dims + 1];
        for &code in rest {
            buckets[hamdist(center, code)].push(code);
        }

        let mut children = Vec::new();
        for (dist, bucket) in buckets.into_iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            let child = if dist == 0 {
                // Distance 0 means bitwise equality with the center, so this
                // bucket cannot be partitioned any further.
                stats.nodes += 1;
                stats.stored_codes += bucket.len();
                BkNode::Leaf(bucket)
            } else {
                BkNode::build(&bucket, leaf_capacity, stats)
            };
            children.push((dist, child));
        }

        BkNode::Internal { center, children }
    }

    /// Appends to answers the codes in the subtree within radius of qcode.
    /// Returns the number of nodes and bucketed codes visited.
    pub fn search_into(&self, qcode: T, radius: usize, answers: &mut Vec<T>) -> usize {
        match self {
            BkNode::Leaf(codes) => ls::scan_into(codes, qcode, radius, answers),
            BkNode::Internal { center, children } => {
                let d = hamdist(*center, qcode);
                let mut visited = 1;
                if d <= radius {
                    answers.push(*center);
                }
                // A code in the child tagged dist is at exactly dist bits
                // from the center, so by the triangle inequality it can be
                // within radius of qcode only if |dist - d| <= radius.
                for (dist, child) in children {
                    if dist + radius < d {
                        continue;
                    }
                    if *dist > d + radius {
                        break;
                    }
                    visited += child.search_into(qcode, radius, answers);
                }
                visited
            }
        }
    }
}
