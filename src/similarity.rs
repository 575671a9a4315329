//! N-tuple similarity over generalized token sequences.
//!
//! # Components
//!
//! - [`shingle`] - Fixed-size windows and deduplicated window sets
//! - [`ntuple`] - The asymmetric overlap comparator
//! - [`detector`] - Text-level entry point enforcing the equal-length rule
//!
//! The score of `compare(a, b)` is the fraction of distinct windows of `a`
//! that also occur in `b`. The denominator is always taken from `a`, so
//! `compare(a, b)` and `compare(b, a)` can differ.

pub mod detector;
pub mod ntuple;
pub mod shingle;
