//! The n-tuple overlap comparator.
//!
//! ```text
//! score(a, b) = |{ s ∈ shingles(a) : s ∈ shingles(b) }| / |shingles(a)|
//! ```
//!
//! Both shingle sets are deduplicated before counting. When `a` has no
//! windows of the configured size the ratio is undefined and
//! [`TuplesimError::EmptyShingleSet`] is returned.

use log::debug;

use crate::analysis::synonym::GeneralizedElement;
use crate::error::{Result, TuplesimError};
use crate::similarity::shingle::ShingleSet;

/// Default window size.
pub const DEFAULT_TUPLE_SIZE: usize = 3;

/// Compares generalized sequences by the overlap of their n-tuples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NTupleComparator {
    tuple_size: usize,
}

impl NTupleComparator {
    /// Create a comparator for windows of `tuple_size` elements.
    pub fn new(tuple_size: usize) -> Result<Self> {
        if tuple_size == 0 {
            return Err(TuplesimError::invalid_argument(
                "tuple size must be at least 1",
            ));
        }
        Ok(NTupleComparator { tuple_size })
    }

    /// The window size.
    pub fn tuple_size(&self) -> usize {
        self.tuple_size
    }

    /// Fraction of the distinct shingles of `a` that also occur in `b`.
    ///
    /// The lengths of `a` and `b` are not checked here.
    pub fn compare(&self, a: &[GeneralizedElement], b: &[GeneralizedElement]) -> Result<f64> {
        let set_a = ShingleSet::build(a, self.tuple_size)?;
        let set_b = ShingleSet::build(b, self.tuple_size)?;

        self.compare_sets(&set_a, &set_b)
    }

    /// Score two prebuilt shingle sets.
    ///
    /// Both sets must have been built with this comparator's tuple size.
    pub fn compare_sets(&self, set_a: &ShingleSet, set_b: &ShingleSet) -> Result<f64> {
        if set_a.tuple_size() != self.tuple_size || set_b.tuple_size() != self.tuple_size {
            return Err(TuplesimError::invalid_argument(format!(
                "shingle sets built with tuple sizes {} and {}, expected {}",
                set_a.tuple_size(),
                set_b.tuple_size(),
                self.tuple_size
            )));
        }
        if set_a.is_empty() {
            return Err(TuplesimError::EmptyShingleSet {
                tuple_size: self.tuple_size,
                length: set_a.sequence_len(),
            });
        }

        let matches = set_a.intersection_count(set_b);
        debug!(
            "n={}: {} of {} distinct shingles matched ({} windows in first sequence)",
            set_a.tuple_size(),
            matches,
            set_a.len(),
            set_a.window_count()
        );

        Ok(matches as f64 / set_a.len() as f64)
    }
}

impl Default for NTupleComparator {
    fn default() -> Self {
        NTupleComparator {
            tuple_size: DEFAULT_TUPLE_SIZE,
        }
    }
}

/// Compare `a` against `b` with windows of `n` elements.
pub fn compare(a: &[GeneralizedElement], b: &[GeneralizedElement], n: usize) -> Result<f64> {
    NTupleComparator::new(n)?.compare(a, b)
}
