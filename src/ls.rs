//! Implements a simple exhaustive search algorithm for comparison with the trees.

use anyhow::{anyhow, Result};

use crate::{hamdist, BuildStats, CodeInt};

/// Brute-force baseline with the same search interface as the trees.
/// Both trees also delegate to [`scan_into`] inside their leaf buckets.
pub struct LinearSearch<T: CodeInt> {
    codes: Vec<T>,
}

impl<T: CodeInt> LinearSearch<T> {
    /// Constructs the index by copying the given codes.
    /// If codes is empty, an error is returned.
    pub fn new(codes: &[T]) -> Result<Self> {
        if codes.is_empty() {
            return Err(anyhow!("codes must not be empty."));
        }
        Ok(Self {
            codes: codes.to_vec(),
        })
    }

    /// Finds the codes whose Hamming distances to qcode are within radius.
    /// Returns the matched codes and the number of codes scanned.
    pub fn range_search(&self, qcode: T, radius: usize) -> (Vec<T>, usize) {
        let mut answers = Vec::with_capacity(1 << 8);
        let visited = self.range_search_with_buf(qcode, radius, &mut answers);
        (answers, visited)
    }

    /// Finds the codes whose Hamming distances to qcode are within radius.
    /// The matched codes are stored in answers, in database order; the
    /// number of codes scanned is returned.
    pub fn range_search_with_buf(&self, qcode: T, radius: usize, answers: &mut Vec<T>) -> usize {
        answers.clear();
        scan_into(&self.codes, qcode, radius, answers)
    }

    /// Gets the construction statistics.
    pub fn get_stats(&self) -> BuildStats {
        BuildStats {
            nodes: 1,
            stored_codes: self.codes.len(),
        }
    }
}

/// Appends to answers the codes whose Hamming distances to qcode are within
/// radius. Returns the number of codes scanned, i.e., codes.len().
pub fn scan_into<T: CodeInt>(codes: &[T], qcode: T, radius: usize, answers: &mut Vec<T>) -> usize {
    for &code in codes {
        if hamdist(code, qcode) <= radius {
            answers.push(code);
        }
    }
    codes.len()
}
