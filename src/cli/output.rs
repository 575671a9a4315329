//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TuplesimArgs};
use crate::error::Result;
use crate::similarity::detector::Detection;

/// Result structure for a document comparison.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// `"similarity"` or `"length_mismatch"`
    pub outcome: String,
    pub score: Option<f64>,
    /// Score as a percentage; `-100` for a length mismatch
    pub percentage: f64,
    pub tuple_size: usize,
    pub words_a: usize,
    pub words_b: usize,
}

impl ComparisonResult {
    pub fn new(detection: Detection, tuple_size: usize, words_a: usize, words_b: usize) -> Self {
        let outcome = match detection {
            Detection::Similarity(_) => "similarity",
            Detection::LengthMismatch { .. } => "length_mismatch",
        };

        ComparisonResult {
            outcome: outcome.to_string(),
            score: detection.score(),
            percentage: detection.sentinel() * 100.0,
            tuple_size,
            words_a,
            words_b,
        }
    }
}

/// Result structure for shingle inspection.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShingleReport {
    pub words: usize,
    pub generalized_words: usize,
    pub tuple_size: usize,
    pub windows: usize,
    pub distinct_shingles: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shingles: Option<Vec<String>>,
}

/// Results that know how to print themselves for humans.
pub trait HumanReadable {
    /// Lines printed in human mode at normal verbosity.
    fn summary(&self) -> Vec<String>;

    /// Extra lines printed in verbose mode.
    fn details(&self) -> Vec<String> {
        Vec::new()
    }
}

impl ComparisonResult {
    /// The percentage as printed in human mode.
    ///
    /// A score always keeps its decimal point (`50.0%`, `33.33333333333333%`);
    /// the length mismatch sentinel is printed as the integer `-100%`.
    pub fn percentage_label(&self) -> String {
        match self.score {
            Some(score) => format!("{:?}%", score * 100.0),
            None => format!("{}%", self.percentage as i64),
        }
    }
}

impl HumanReadable for ComparisonResult {
    fn summary(&self) -> Vec<String> {
        vec![self.percentage_label()]
    }

    fn details(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Tuple size: {}", self.tuple_size),
            format!("Words: {} / {}", self.words_a, self.words_b),
        ];
        if self.outcome == "length_mismatch" {
            lines.push("Documents differ in length; no comparison was made".to_string());
        }
        lines
    }
}

impl HumanReadable for ShingleReport {
    fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Words: {} ({} generalized to synonym groups)",
                self.words, self.generalized_words
            ),
            format!(
                "Shingles (n={}): {} distinct of {} windows",
                self.tuple_size, self.distinct_shingles, self.windows
            ),
        ];
        if let Some(shingles) = &self.shingles {
            lines.extend(shingles.iter().map(|s| format!("  {s}")));
        }
        lines
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &TuplesimArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanReadable>(message: &str, result: &T, args: &TuplesimArgs) -> Result<()> {
    for line in render_human(message, result, args.verbosity()) {
        println!("{line}");
    }
    Ok(())
}

/// Lines printed in human mode for a given verbosity.
pub fn render_human<T: HumanReadable>(message: &str, result: &T, verbosity: u8) -> Vec<String> {
    let mut lines = Vec::new();
    if verbosity > 1 {
        lines.push(message.to_string());
        lines.push(String::new());
    }
    lines.extend(result.summary());
    if verbosity > 1 {
        lines.extend(result.details());
    }
    lines
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TuplesimArgs) -> Result<()> {
    println!("{}", render_json(result, args.pretty)?);
    Ok(())
}

/// Serialize a result as JSON.
pub fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
