//! # Tuplesim
//!
//! Synonym-aware n-tuple similarity for plain-text documents.
//!
//! ## Features
//!
//! - ASCII word analysis (case-folded, punctuation and digits stripped)
//! - Synonym generalization from plain-text or JSON synonym lists
//! - Deduplicated shingle sets over generalized token sequences
//! - Asymmetric n-tuple overlap scoring
//!
//! ## Pipeline
//!
//! ```text
//! raw text → WordAnalyzer → tokens → SynonymGeneralizer → ShingleSet → NTupleComparator → score
//! ```
//!
//! ## Example
//!
//! ```
//! use tuplesim::analysis::synonym::SynonymDictionary;
//! use tuplesim::similarity::detector::{Detection, PlagiarismDetector};
//!
//! let dictionary = SynonymDictionary::parse("run sprint jog\n");
//! let detector = PlagiarismDetector::new(dictionary, 3).unwrap();
//!
//! let detection = detector.detect("go for a run", "go for a jog").unwrap();
//! assert_eq!(detection, Detection::Similarity(1.0));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod similarity;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
