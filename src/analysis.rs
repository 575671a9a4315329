//! Text analysis module for Tuplesim.
//!
//! This module turns raw text into case-folded word tokens and rewrites those
//! tokens into synonym-generalized sequences ready for shingling.

pub mod analyzer;
pub mod synonym;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
