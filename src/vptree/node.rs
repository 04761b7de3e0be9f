use crate::{hamdist, ls, BuildStats, CodeInt};

/// Node of a VP-tree.
///
/// The near ball is closed: a code at distance exactly `threshold` from the
/// vantage lives in the near child. Either child may be absent when its side
/// of the split received no codes.
#[derive(Debug, PartialEq, Eq)]
pub enum VpNode<T> {
    Leaf(Vec<T>),
    Internal {
        vantage: T,
        threshold: usize,
        near: Option<Box<VpNode<T>>>,
        far: Option<Box<VpNode<T>>>,
    },
}

impl<T: CodeInt> VpNode<T> {
    /// Builds the subtree over codes, stopping at buckets of at most
    /// leaf_capacity codes. The first code becomes the vantage, which keeps
    /// construction deterministic for a fixed input order.
    pub fn build(codes: &[T], leaf_capacity: usize, stats: &mut BuildStats) -> Self {
        debug_assert!(!codes.is_empty());

        stats.nodes += 1;

        let n = codes.len();
        if n <= leaf_capacity || n <= 1 {
            stats.stored_codes += n;
            return VpNode::Leaf(codes.to_vec());
        }

        let vantage = codes[0];
        let rest = &codes[1..];
        stats.stored_codes += 1;

        let dims = T::dimensions();
        let mut dcnt = vec![0usize; dims + 1];
        for &code in rest {
            dcnt[hamdist(vantage, code)] += 1;
        }
        for d in 1..=dims {
            dcnt[d] += dcnt[d - 1];
        }

        if dcnt[0] == rest.len() {
            // Every remaining code equals the vantage; no threshold can
            // separate them, so they become the near bucket of a zero ball.
            stats.nodes += 1;
            stats.stored_codes += rest.len();
            let near = VpNode::Leaf(rest.to_vec());
            return VpNode::Internal {
                vantage,
                threshold: 0,
                near: Some(Box::new(near)),
                far: None,
            };
        }

        let threshold = split_radius(&dcnt, rest.len());

        let mut near_codes = Vec::with_capacity(dcnt[threshold]);
        let mut far_codes = Vec::with_capacity(rest.len() - dcnt[threshold]);
        for &code in rest {
            if hamdist(vantage, code) <= threshold {
                near_codes.push(code);
            } else {
                far_codes.push(code);
            }
        }

        let near = if near_codes.is_empty() {
            None
        } else {
            Some(Box::new(VpNode::build(&near_codes, leaf_capacity, stats)))
        };
        let far = if far_codes.is_empty() {
            None
        } else {
            Some(Box::new(VpNode::build(&far_codes, leaf_capacity, stats)))
        };

        VpNode::Internal {
            vantage,
            threshold,
            near,
            far,
        }
    }

    /// Appends to answers the codes in the subtree within radius of qcode.
    /// Returns the number of nodes and bucketed codes visited.
    pub fn search_into(&self, qcode: T, radius: usize, answers: &mut Vec<T>) -> usize {
        match self {
            VpNode::Leaf(codes) => ls::scan_into(codes, qcode, radius, answers),
            VpNode::Internal {
                vantage,
                threshold,
                near,
                far,
            } => {
                let d = hamdist(*vantage, qcode);
                let mut visited = 1;
                // The query ball reaches inside the near ball only if
                // d <= radius + threshold; it pokes outside the near ball
                // only if d + radius > threshold. Both can hold at once.
                if d <= radius + *threshold {
                    if let Some(child) = near {
                        visited += child.search_into(qcode, radius, answers);
                    }
                    if d <= radius {
                        answers.push(*vantage);
                    }
                }
                if d + radius > *threshold {
                    if let Some(child) = far {
                        visited += child.search_into(qcode, radius, answers);
                    }
                }
                visited
            }
        }
    }
}

/// Chooses the split radius from the cumulative distance counts over n
/// codes: the smallest distance whose cumulative count exceeds the median
/// position, where codes at distance 0 (duplicates of the vantage) sit on
/// the near side unconditionally and are excluded from the position.
/// When the two candidate radii are equally close to the median position,
/// the smaller one wins, which biases toward a tighter near ball.
pub fn split_radius(dcnt: &[usize], n: usize) -> usize {
    debug_assert!(n > 0);
    debug_assert!(dcnt[0] < n);

    let dims = dcnt.len() - 1;
    let median = dcnt[0] + (n - dcnt[0]) / 2;

    let mut k = 1;
    while k < dims && dcnt[k] <= median {
        k += 1;
    }
    if k != 1 && median - dcnt[k - 1] <= dcnt[k] - median {
        k -= 1;
    }
    k
}
