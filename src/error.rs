//! Error types for the Tuplesim library.
//!
//! All errors are represented by the [`TuplesimError`] enum.
//!
//! # Examples
//!
//! ```
//! use tuplesim::error::{TuplesimError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TuplesimError::invalid_argument("tuple size must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Tuplesim operations.
#[derive(Error, Debug)]
pub enum TuplesimError {
    /// I/O errors (reading synonym lists, documents, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Synonym list parsing errors
    #[error("Synonym error: {0}")]
    Synonym(String),

    /// Invalid argument (e.g. a non-positive tuple size)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The first sequence produced no shingles, so the overlap ratio is undefined.
    #[error(
        "Empty shingle set: a sequence of {length} token(s) has no windows of size {tuple_size}"
    )]
    EmptyShingleSet { tuple_size: usize, length: usize },

    /// Generalized sequences differ in length.
    #[error("Length mismatch: {left} token(s) vs {right} token(s)")]
    LengthMismatch { left: usize, right: usize },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TuplesimError.
pub type Result<T> = std::result::Result<T, TuplesimError>;

impl TuplesimError {
    /// Create a new synonym error.
    pub fn synonym<S: Into<String>>(msg: S) -> Self {
        TuplesimError::Synonym(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TuplesimError::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TuplesimError::Config(msg.into())
    }
}
