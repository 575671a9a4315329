//! Synonym handling for similarity analysis.
//!
//! A synonym list is a sequence of groups of words that are interchangeable
//! for similarity purposes. Generalization rewrites every word that belongs
//! to a group into the group itself, so "quick" and "fast" become the same
//! element before shingling.
//!
//! # Components
//!
//! - [`dictionary`] - Synonym groups and the word → group lookup
//! - [`generalizer`] - Rewriting token sequences into generalized sequences
//!
//! # Examples
//!
//! ```
//! use tuplesim::analysis::synonym::{GeneralizedElement, SynonymDictionary, SynonymGeneralizer};
//!
//! let dictionary = SynonymDictionary::parse("quick fast rapid\nbig large huge\n");
//! let generalizer = SynonymGeneralizer::new(dictionary);
//!
//! let a = generalizer.generalize_text("the quick fox").unwrap();
//! let b = generalizer.generalize_text("the fast fox").unwrap();
//! assert_eq!(a, b);
//! assert!(matches!(a[1], GeneralizedElement::Group(_)));
//! ```

pub mod dictionary;
pub mod generalizer;

pub use dictionary::{SynonymDictionary, SynonymGroup};
pub use generalizer::{GeneralizedElement, SynonymGeneralizer};
