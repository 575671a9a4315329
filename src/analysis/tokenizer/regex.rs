//! Regex-based tokenizer implementation.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Pattern matching a maximal run of ASCII letters.
pub const ASCII_LETTERS_PATTERN: &str = r"[A-Za-z]+";

lazy_static! {
    pub(crate) static ref ASCII_LETTERS: Arc<Regex> =
        Arc::new(Regex::new(ASCII_LETTERS_PATTERN).expect("ASCII letter pattern should be valid"));
}

/// A regex-based tokenizer that extracts every match of a pattern as a token.
///
/// Everything between matches is a separator and is discarded.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer extracting maximal runs of ASCII letters.
    ///
    /// Digits, punctuation, whitespace and non-ASCII characters all act as
    /// separators, so no token is ever empty.
    pub fn ascii_letters() -> Self {
        RegexTokenizer {
            pattern: Arc::clone(&*ASCII_LETTERS),
        }
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::ascii_letters()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .filter(|mat| !mat.as_str().is_empty())
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
