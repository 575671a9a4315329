//! Configuration for document comparison.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::synonym::SynonymDictionary;
use crate::error::{Result, TuplesimError};
use crate::similarity::ntuple::DEFAULT_TUPLE_SIZE;

/// Configuration for a comparison run.
///
/// Missing fields in a config file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Window size (n) of the compared tuples.
    pub tuple_size: usize,

    /// Format of the synonym list.
    pub synonym_format: SynonymFormat,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            tuple_size: DEFAULT_TUPLE_SIZE,
            synonym_format: SynonymFormat::Plain,
        }
    }
}

impl ComparisonConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TuplesimError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: ComparisonConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a runnable comparison.
    pub fn validate(&self) -> Result<()> {
        if self.tuple_size == 0 {
            return Err(TuplesimError::config("tuple_size must be at least 1"));
        }
        Ok(())
    }
}

/// Synonym list formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynonymFormat {
    /// One group per line, words separated by anything non-alphabetic
    Plain,
    /// A JSON array of arrays of strings
    Json,
}

impl SynonymFormat {
    /// Load a synonym dictionary in this format.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<SynonymDictionary> {
        match self {
            SynonymFormat::Plain => SynonymDictionary::load_from_file(path),
            SynonymFormat::Json => SynonymDictionary::load_from_json_file(path),
        }
    }
}
