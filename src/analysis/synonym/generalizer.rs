//! Rewriting token sequences into synonym-generalized sequences.

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::WordAnalyzer;
use crate::analysis::synonym::dictionary::{SynonymDictionary, SynonymGroup};
use crate::error::Result;

/// One position of a generalized sequence.
///
/// A bare `Term` equals another `Term` with the same text. A `Group` equals
/// another `Group` with the same contents. A term never equals a group, even
/// a group that lists it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeneralizedElement {
    /// A word with no known synonyms
    Term(String),
    /// Any member of a synonym group
    Group(SynonymGroup),
}

impl GeneralizedElement {
    /// Check whether this position was generalized to a group.
    pub fn is_group(&self) -> bool {
        matches!(self, GeneralizedElement::Group(_))
    }
}

impl fmt::Display for GeneralizedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneralizedElement::Term(term) => write!(f, "{term}"),
            GeneralizedElement::Group(group) => write!(f, "{group}"),
        }
    }
}

/// Generalizes tokens through a shared, read-only [`SynonymDictionary`].
///
/// Cloning shares the dictionary, so one generalizer can serve any number
/// of comparisons, on any number of threads.
#[derive(Clone, Debug)]
pub struct SynonymGeneralizer {
    dictionary: Arc<SynonymDictionary>,
    analyzer: WordAnalyzer,
}

impl SynonymGeneralizer {
    /// Create a generalizer over `dictionary`.
    pub fn new(dictionary: SynonymDictionary) -> Self {
        Self::with_shared(Arc::new(dictionary))
    }

    /// Create a generalizer over an already-shared dictionary.
    pub fn with_shared(dictionary: Arc<SynonymDictionary>) -> Self {
        SynonymGeneralizer {
            dictionary,
            analyzer: WordAnalyzer::new(),
        }
    }

    /// The dictionary used for lookups.
    pub fn dictionary(&self) -> &SynonymDictionary {
        &self.dictionary
    }

    /// Replace every token that belongs to a group with that group.
    ///
    /// Output has exactly one element per input token, in the same order.
    pub fn generalize<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<GeneralizedElement> {
        generalize(tokens, &self.dictionary)
    }

    /// Tokenize `text` with the word analyzer, then generalize it.
    pub fn generalize_text(&self, text: &str) -> Result<Vec<GeneralizedElement>> {
        let words = self.analyzer.words(text)?;
        Ok(self.generalize(&words))
    }
}

/// Generalize `tokens` through `dictionary`.
pub fn generalize<S: AsRef<str>>(
    tokens: &[S],
    dictionary: &SynonymDictionary,
) -> Vec<GeneralizedElement> {
    tokens
        .iter()
        .map(|token| match dictionary.group_for(token.as_ref()) {
            Some(group) => GeneralizedElement::Group(group.clone()),
            None => GeneralizedElement::Term(token.as_ref().to_string()),
        })
        .collect()
}
