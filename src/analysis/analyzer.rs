//! Analyzers combine a tokenizer with a chain of filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! [`WordAnalyzer`] is the pipeline every document and synonym list goes
//! through: maximal ASCII letter runs, lower-cased.
//!
//! # Examples
//!
//! ```
//! use tuplesim::analysis::analyzer::WordAnalyzer;
//!
//! let analyzer = WordAnalyzer::new();
//! let words = analyzer.words("Fox! fox FOX?").unwrap();
//! assert_eq!(words, vec!["fox", "fox", "fox"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::{ASCII_LETTERS, RegexTokenizer};
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
///
/// Filters run in the order they were added.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Analyzer producing case-folded ASCII words.
#[derive(Clone, Debug)]
pub struct WordAnalyzer {
    inner: PipelineAnalyzer,
}

impl WordAnalyzer {
    /// Create the ASCII-letters + lowercase pipeline.
    pub fn new() -> Self {
        let tokenizer = Arc::new(RegexTokenizer::ascii_letters());
        let inner = PipelineAnalyzer::new(tokenizer).add_filter(Arc::new(LowercaseFilter::new()));

        WordAnalyzer { inner }
    }

    /// Analyze `text` and keep only the token texts, in order.
    pub fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.inner.analyze(text)?.map(|token| token.text).collect())
    }
}

impl Default for WordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Extract the case-folded ASCII words of `text` in order of appearance.
///
/// Same rule as [`WordAnalyzer`], without building a pipeline.
pub fn tokenize(text: &str) -> Vec<String> {
    ASCII_LETTERS
        .find_iter(text)
        .map(|mat| mat.as_str().to_ascii_lowercase())
        .collect()
}
