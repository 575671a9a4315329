//! Command implementations for Tuplesim CLI.

use std::fs;
use std::path::Path;

use log::info;

use crate::analysis::synonym::{SynonymDictionary, SynonymGeneralizer};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SynonymFormat;
use crate::error::{Result, TuplesimError};
use crate::similarity::detector::PlagiarismDetector;
use crate::similarity::shingle::ShingleSet;

/// Execute a CLI command.
pub fn execute_command(args: TuplesimArgs) -> Result<()> {
    match &args.command {
        Command::Compare(compare_args) => {
            let result = run_compare(compare_args)?;
            output_result("Comparison finished", &result, &args)
        }
        Command::Shingles(shingles_args) => {
            let report = run_shingles(shingles_args)?;
            output_result("Shingle report", &report, &args)
        }
    }
}

/// Compare two documents.
pub fn run_compare(args: &CompareArgs) -> Result<ComparisonResult> {
    let config = args.options.resolve()?;
    let dictionary = load_synonyms(&args.synonyms_file, config.synonym_format)?;
    let detector = PlagiarismDetector::from_config(dictionary, &config)?;

    let text_a = read_document(&args.file1)?;
    let text_b = read_document(&args.file2)?;

    let generalizer = detector.generalizer();
    let a = generalizer.generalize_text(&text_a)?;
    let b = generalizer.generalize_text(&text_b)?;

    let detection = detector.detect_generalized(&a, &b)?;
    info!(
        "compared {} ({} words) with {} ({} words)",
        args.file1.display(),
        a.len(),
        args.file2.display(),
        b.len()
    );

    Ok(ComparisonResult::new(
        detection,
        config.tuple_size,
        a.len(),
        b.len(),
    ))
}

/// Build the shingle set of a single document.
pub fn run_shingles(args: &ShinglesArgs) -> Result<ShingleReport> {
    let config = args.options.resolve()?;
    let dictionary = load_synonyms(&args.synonyms_file, config.synonym_format)?;
    let generalizer = SynonymGeneralizer::new(dictionary);

    let text = read_document(&args.file)?;
    let generalized = generalizer.generalize_text(&text)?;
    let set = ShingleSet::build(&generalized, config.tuple_size)?;

    let shingles = args.list.then(|| {
        let mut listed: Vec<String> = set.iter().map(|s| s.to_string()).collect();
        listed.sort();
        listed
    });

    Ok(ShingleReport {
        words: generalized.len(),
        generalized_words: generalized.iter().filter(|e| e.is_group()).count(),
        tuple_size: set.tuple_size(),
        windows: set.window_count(),
        distinct_shingles: set.len(),
        shingles,
    })
}

fn load_synonyms(path: &Path, format: SynonymFormat) -> Result<SynonymDictionary> {
    info!("loading synonyms from {} ({:?})", path.display(), format);
    format.load(path)
}

/// Read a whole document. Line breaks are ordinary separators.
///
/// The content is not required to be UTF-8: invalid bytes are replaced and
/// then discarded by the word tokenizer like any other non-letter.
fn read_document(path: &Path) -> Result<String> {
    info!("reading {}", path.display());
    let bytes = fs::read(path).map_err(|e| {
        TuplesimError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read '{}': {}", path.display(), e),
        ))
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
