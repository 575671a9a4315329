//! Command line argument parsing for Tuplesim CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{ComparisonConfig, SynonymFormat};
use crate::error::Result;

/// Tuplesim - synonym-aware n-tuple similarity between two documents
#[derive(Parser, Debug, Clone)]
#[command(name = "tuplesim")]
#[command(about = "Detect plagiarism between two documents using an n-tuple comparison fed by a list of synonyms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TuplesimArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TuplesimArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compare two documents and print their similarity
    Compare(CompareArgs),

    /// Show the generalized words and shingles of one document
    Shingles(ShinglesArgs),
}

/// Options shared by every command that builds shingles.
#[derive(Args, Debug, Clone, Default)]
pub struct ComparisonOptions {
    /// The tuple size for the n-tuple comparison (default 3)
    #[arg(short = 'n', long = "tuple-size", value_name = "N")]
    pub tuple_size: Option<usize>,

    /// Format of the synonym list (default plain)
    #[arg(long, value_name = "FORMAT")]
    pub synonym_format: Option<SynonymFormat>,

    /// JSON configuration file; command line flags take precedence
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

impl ComparisonOptions {
    /// Merge the config file (if any) with command line overrides.
    pub fn resolve(&self) -> Result<ComparisonConfig> {
        let mut config = match &self.config {
            Some(path) => ComparisonConfig::load(path)?,
            None => ComparisonConfig::default(),
        };

        if let Some(tuple_size) = self.tuple_size {
            config.tuple_size = tuple_size;
        }
        if let Some(format) = self.synonym_format {
            config.synonym_format = format;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for comparing two documents
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// A path to a file containing a list of synonyms
    #[arg(value_name = "SYNONYMS")]
    pub synonyms_file: PathBuf,

    /// A path to the first input file
    #[arg(value_name = "FILE_1")]
    pub file1: PathBuf,

    /// A path to the second input file
    #[arg(value_name = "FILE_2")]
    pub file2: PathBuf,

    #[command(flatten)]
    pub options: ComparisonOptions,
}

/// Arguments for inspecting the shingles of a document
#[derive(Parser, Debug, Clone)]
pub struct ShinglesArgs {
    /// A path to a file containing a list of synonyms
    #[arg(value_name = "SYNONYMS")]
    pub synonyms_file: PathBuf,

    /// A path to the document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// List every distinct shingle
    #[arg(short, long)]
    pub list: bool,

    #[command(flatten)]
    pub options: ComparisonOptions,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
