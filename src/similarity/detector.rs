//! Text-level comparison of two documents.
//!
//! [`PlagiarismDetector`] tokenizes and generalizes both documents and only
//! runs the comparator when the generalized sequences have the same length.
//! A length mismatch is a regular outcome, reported as
//! [`Detection::LengthMismatch`], not an error.

use std::sync::Arc;

use log::warn;

use crate::analysis::synonym::{GeneralizedElement, SynonymDictionary, SynonymGeneralizer};
use crate::config::ComparisonConfig;
use crate::error::{Result, TuplesimError};
use crate::similarity::ntuple::NTupleComparator;

/// Score reported for a length mismatch by [`Detection::sentinel`].
pub const LENGTH_MISMATCH_SENTINEL: f64 = -1.0;

/// Outcome of comparing two documents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Detection {
    /// Fraction in `[0, 1]` of the first document's distinct tuples found in the second
    Similarity(f64),
    /// The generalized documents have different lengths; nothing was compared
    LengthMismatch { left: usize, right: usize },
}

impl Detection {
    /// The similarity, if one was computed.
    pub fn score(&self) -> Option<f64> {
        match self {
            Detection::Similarity(score) => Some(*score),
            Detection::LengthMismatch { .. } => None,
        }
    }

    /// The similarity, or `-1.0` for a length mismatch.
    pub fn sentinel(&self) -> f64 {
        self.score().unwrap_or(LENGTH_MISMATCH_SENTINEL)
    }

    /// Convert a length mismatch into an error.
    pub fn into_result(self) -> Result<f64> {
        match self {
            Detection::Similarity(score) => Ok(score),
            Detection::LengthMismatch { left, right } => {
                Err(TuplesimError::LengthMismatch { left, right })
            }
        }
    }
}

/// Compares documents through a synonym generalizer and an n-tuple comparator.
#[derive(Clone, Debug)]
pub struct PlagiarismDetector {
    generalizer: SynonymGeneralizer,
    comparator: NTupleComparator,
}

impl PlagiarismDetector {
    /// Create a detector with windows of `tuple_size` words.
    pub fn new(dictionary: SynonymDictionary, tuple_size: usize) -> Result<Self> {
        Ok(Self::with_parts(
            SynonymGeneralizer::new(dictionary),
            NTupleComparator::new(tuple_size)?,
        ))
    }

    /// Create a detector from a validated configuration.
    pub fn from_config(dictionary: SynonymDictionary, config: &ComparisonConfig) -> Result<Self> {
        config.validate()?;
        Self::new(dictionary, config.tuple_size)
    }

    /// Create a detector sharing an existing dictionary.
    pub fn with_shared(dictionary: Arc<SynonymDictionary>, tuple_size: usize) -> Result<Self> {
        Ok(Self::with_parts(
            SynonymGeneralizer::with_shared(dictionary),
            NTupleComparator::new(tuple_size)?,
        ))
    }

    /// Create a detector from its components.
    pub fn with_parts(generalizer: SynonymGeneralizer, comparator: NTupleComparator) -> Self {
        PlagiarismDetector {
            generalizer,
            comparator,
        }
    }

    /// The generalizer applied to both documents.
    pub fn generalizer(&self) -> &SynonymGeneralizer {
        &self.generalizer
    }

    /// The comparator run on equal-length sequences.
    pub fn comparator(&self) -> &NTupleComparator {
        &self.comparator
    }

    /// Compare the full text of two documents.
    pub fn detect(&self, text_a: &str, text_b: &str) -> Result<Detection> {
        let a = self.generalizer.generalize_text(text_a)?;
        let b = self.generalizer.generalize_text(text_b)?;

        self.detect_generalized(&a, &b)
    }

    /// Compare two already generalized sequences.
    pub fn detect_generalized(
        &self,
        a: &[GeneralizedElement],
        b: &[GeneralizedElement],
    ) -> Result<Detection> {
        if a.len() != b.len() {
            warn!(
                "documents differ in length ({} vs {} words); skipping comparison",
                a.len(),
                b.len()
            );
            return Ok(Detection::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }

        let score = self.comparator.compare(a, b)?;
        Ok(Detection::Similarity(score))
    }
}
