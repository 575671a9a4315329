//! Shingles (n-tuples) and shingle sets.
//!
//! A shingle is the contents of `n` consecutive positions of a generalized
//! sequence. A [`ShingleSet`] holds every *distinct* shingle of a sequence:
//! a window that repeats is stored once and counted once.
//!
//! # Examples
//!
//! ```
//! use tuplesim::analysis::synonym::GeneralizedElement;
//! use tuplesim::similarity::shingle::ShingleSet;
//!
//! let seq: Vec<_> = ["a", "b", "a", "b", "a"]
//!     .iter()
//!     .map(|t| GeneralizedElement::Term(t.to_string()))
//!     .collect();
//!
//! let set = ShingleSet::build(&seq, 2).unwrap();
//! assert_eq!(set.window_count(), 4);
//! assert_eq!(set.len(), 2); // (a, b) and (b, a)
//! ```

use std::fmt;

use ahash::AHashSet;

use crate::analysis::synonym::GeneralizedElement;
use crate::error::{Result, TuplesimError};

/// An ordered window of `n` generalized elements.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shingle(Vec<GeneralizedElement>);

impl Shingle {
    /// Create a shingle from its elements.
    pub fn new(elements: Vec<GeneralizedElement>) -> Self {
        Shingle(elements)
    }

    /// The elements of this shingle, in order.
    pub fn elements(&self) -> &[GeneralizedElement] {
        &self.0
    }

    /// Window width.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-width window.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[GeneralizedElement]> for Shingle {
    fn from(window: &[GeneralizedElement]) -> Self {
        Shingle(window.to_vec())
    }
}

impl fmt::Display for Shingle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

/// The distinct shingles of one sequence for a fixed window size.
///
/// Immutable once built.
#[derive(Clone, Debug)]
pub struct ShingleSet {
    shingles: AHashSet<Shingle>,
    tuple_size: usize,
    sequence_len: usize,
}

impl ShingleSet {
    /// Slide a window of width `n` over `elements` one position at a time
    /// and collect the distinct windows.
    ///
    /// A sequence shorter than `n` yields an empty set. `n == 0` is rejected.
    pub fn build(elements: &[GeneralizedElement], n: usize) -> Result<Self> {
        if n == 0 {
            return Err(TuplesimError::invalid_argument(
                "tuple size must be at least 1",
            ));
        }

        let shingles: AHashSet<Shingle> = elements.windows(n).map(Shingle::from).collect();

        Ok(ShingleSet {
            shingles,
            tuple_size: n,
            sequence_len: elements.len(),
        })
    }

    /// Number of distinct shingles.
    pub fn len(&self) -> usize {
        self.shingles.len()
    }

    /// True when no window fit in the sequence.
    pub fn is_empty(&self) -> bool {
        self.shingles.is_empty()
    }

    /// Number of windows before deduplication.
    pub fn window_count(&self) -> usize {
        self.sequence_len.saturating_sub(self.tuple_size - 1)
    }

    /// Length of the sequence this set was built from.
    pub fn sequence_len(&self) -> usize {
        self.sequence_len
    }

    /// The window width this set was built with.
    pub fn tuple_size(&self) -> usize {
        self.tuple_size
    }

    /// Exact membership test.
    pub fn contains(&self, shingle: &Shingle) -> bool {
        self.shingles.contains(shingle)
    }

    /// Iterate over the distinct shingles (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Shingle> {
        self.shingles.iter()
    }

    /// Count the shingles of `self` that also occur in `other`.
    pub fn intersection_count(&self, other: &ShingleSet) -> usize {
        self.shingles.iter().filter(|s| other.contains(s)).count()
    }
}
