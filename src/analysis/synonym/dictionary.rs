//! Synonym dictionary mapping words to their synonym group.
//!
//! Groups are read one per line (plain text) or as a JSON array of arrays.
//! Lines end at `\n`, `\r\n` or a lone `\r`.
//! Either way every entry is run through the word tokenizer, so a line such
//! as `Quick, fast; RAPID` yields the group `["quick", "fast", "rapid"]`.
//!
//! When a word is listed in more than one group, the group listed last wins.
//! Groups are not merged.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::analysis::analyzer::tokenize;
use crate::error::{Result, TuplesimError};

lazy_static! {
    static ref LINE_BREAK: Regex =
        Regex::new(r"\r\n|\r|\n").expect("line break pattern should be valid");
}

/// Split `text` into lines, accepting any mix of `\n`, `\r\n` and `\r`.
///
/// A final line terminator does not start an extra empty line.
fn records(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// An immutable, ordered group of interchangeable words.
///
/// Cloning is cheap; clones share storage. Two groups are equal when their
/// full contents are equal, in order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SynonymGroup {
    terms: Arc<[String]>,
}

impl SynonymGroup {
    /// Create a group from already-normalized words.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SynonymGroup {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a group from a raw record (one line of a synonym list).
    pub fn from_record(record: &str) -> Self {
        Self::new(tokenize(record))
    }

    /// The words of this group, in listed order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of words in the group.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// An empty group never matches any word.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check whether `term` is listed in this group.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }
}

impl fmt::Debug for SynonymGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SynonymGroup").field(&self.terms()).finish()
    }
}

impl fmt::Display for SynonymGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.terms.join("|"))
    }
}

/// Word → synonym group lookup, built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    /// word -> the last group that listed it
    term_to_group: AHashMap<String, SynonymGroup>,
    /// all groups in source order, including empty ones
    groups: Vec<SynonymGroup>,
}

impl SynonymDictionary {
    /// Create an empty dictionary. Generalizing with it is the identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from groups, in order. Later groups override
    /// earlier ones for a shared word.
    pub fn from_synonym_groups<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = SynonymGroup>,
    {
        let mut term_to_group: AHashMap<String, SynonymGroup> = AHashMap::new();
        let mut all_groups = Vec::new();
        let mut overrides = 0usize;

        for group in groups {
            for term in group.terms() {
                if let Some(previous) = term_to_group.insert(term.clone(), group.clone())
                    && previous != group
                {
                    trace!("synonym group {group} overrides {previous} for '{term}'");
                    overrides += 1;
                }
            }
            all_groups.push(group);
        }

        debug!(
            "built synonym dictionary: {} groups, {} words, {} overrides",
            all_groups.len(),
            term_to_group.len(),
            overrides
        );

        SynonymDictionary {
            term_to_group,
            groups: all_groups,
        }
    }

    /// Parse a plain-text synonym list, one group per line.
    ///
    /// Blank lines produce empty groups.
    pub fn parse(text: &str) -> Self {
        Self::from_synonym_groups(records(text).into_iter().map(SynonymGroup::from_record))
    }

    /// Read a plain-text synonym list from any reader.
    ///
    /// Bytes that are not valid UTF-8 are replaced; they can never be part
    /// of a word anyway.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// Load a plain-text synonym list from a file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TuplesimError::synonym(format!(
                "Failed to read synonym file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_reader(file)
    }

    /// Parse a JSON synonym list: an array of groups, each an array of strings.
    ///
    /// ```json
    /// [
    ///   ["quick", "fast", "rapid"],
    ///   ["big", "large"]
    /// ]
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw_groups: Vec<Vec<String>> = serde_json::from_str(json)
            .map_err(|e| TuplesimError::synonym(format!("Failed to parse synonym JSON: {e}")))?;

        let groups = raw_groups
            .into_iter()
            .map(|entries| SynonymGroup::new(entries.iter().flat_map(|entry| tokenize(entry))));

        Ok(Self::from_synonym_groups(groups))
    }

    /// Load a JSON synonym list from a file.
    pub fn load_from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TuplesimError::synonym(format!(
                "Failed to read synonym file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json_str(&content)
    }

    /// Get the synonym group a word generalizes to, if any.
    pub fn group_for(&self, term: &str) -> Option<&SynonymGroup> {
        self.term_to_group.get(term)
    }

    /// Check whether `term` belongs to any group.
    pub fn contains(&self, term: &str) -> bool {
        self.term_to_group.contains_key(term)
    }

    /// Number of distinct words that map to a group.
    pub fn len(&self) -> usize {
        self.term_to_group.len()
    }

    /// True when no word maps to a group.
    pub fn is_empty(&self) -> bool {
        self.term_to_group.is_empty()
    }

    /// Number of groups read, including empty and fully-overridden ones.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// All groups in source order.
    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_synonym_dictionary_basic() {
        let dict = SynonymDictionary::parse("big large huge\nquick fast\n");

        let group = dict.group_for("large").unwrap();
        assert_eq!(group.terms(), &["big", "large", "huge"]);
        assert_eq!(dict.group_for("big"), dict.group_for("huge"));
        assert_ne!(dict.group_for("big"), dict.group_for("fast"));
        assert!(dict.group_for("small").is_none());
        assert_eq!(dict.len(), 5);
        assert_eq!(dict.group_count(), 2);
    }

    #[test]
    fn test_last_group_wins() {
        let dict = SynonymDictionary::from_synonym_groups(vec![
            SynonymGroup::new(["a", "b"]),
            SynonymGroup::new(["a", "c"]),
        ]);

        assert_eq!(dict.group_for("a"), Some(&SynonymGroup::new(["a", "c"])));
        assert_eq!(dict.group_for("b"), Some(&SynonymGroup::new(["a", "b"])));
        assert_eq!(dict.group_for("c"), Some(&SynonymGroup::new(["a", "c"])));
    }

    #[test]
    fn test_records_are_tokenized() {
        let dict = SynonymDictionary::parse("Quick, FAST; rapid42\n\n  \n");

        assert_eq!(
            dict.group_for("rapid").unwrap().terms(),
            &["quick", "fast", "rapid"]
        );
        // blank lines are kept as empty groups
        assert_eq!(dict.group_count(), 3);
        assert!(dict.groups()[1].is_empty());
        assert!(dict.groups()[2].is_empty());
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let dict = SynonymDictionary::parse("quick fast\rbig large\r");

        assert_eq!(dict.group_count(), 2);
        assert_eq!(dict.group_for("quick").unwrap().terms(), &["quick", "fast"]);
        assert_eq!(dict.group_for("big").unwrap().terms(), &["big", "large"]);

        let from_reader =
            SynonymDictionary::from_reader("quick fast\rbig large\r".as_bytes()).unwrap();
        assert_eq!(from_reader.group_count(), 2);
        assert_ne!(from_reader.group_for("quick"), from_reader.group_for("big"));
    }

    #[test]
    fn test_mixed_line_endings() {
        let dict = SynonymDictionary::parse("a b\r\nc d\n\re f\n");

        // \r\n is one break; \n followed by \r is two
        assert_eq!(dict.group_count(), 4);
        assert!(dict.groups()[2].is_empty());
        assert_eq!(dict.group_for("e").unwrap().terms(), &["e", "f"]);
        assert_eq!(SynonymDictionary::parse("").group_count(), 0);
    }

    #[test]
    fn test_from_reader_accepts_invalid_utf8() {
        let bytes: &[u8] = b"caf\xe9 coffee\nquick fast\n";
        let dict = SynonymDictionary::from_reader(bytes).unwrap();

        assert_eq!(dict.group_count(), 2);
        assert_eq!(dict.group_for("coffee").unwrap().terms(), &["caf", "coffee"]);
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = SynonymDictionary::new();
        assert!(dict.is_empty());
        assert_eq!(dict.group_count(), 0);
        assert!(!dict.contains("anything"));
    }

    #[test]
    fn test_group_equality_is_structural() {
        let a = SynonymGroup::new(["run", "jog"]);
        let b = SynonymGroup::from_record("Run, jog.");
        let c = SynonymGroup::new(["jog", "run"]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.contains("jog"));
        assert_eq!(format!("{a}"), "(run|jog)");
    }

    #[test]
    fn test_from_json_str() {
        let dict = SynonymDictionary::from_json_str(r#"[["Quick", "fast"], ["big", "very large"]]"#)
            .unwrap();

        assert_eq!(dict.group_for("quick").unwrap().terms(), &["quick", "fast"]);
        assert_eq!(
            dict.group_for("very").unwrap().terms(),
            &["big", "very", "large"]
        );
    }

    #[test]
    fn test_from_json_str_invalid() {
        let err = SynonymDictionary::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, TuplesimError::Synonym(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "run sprint jog").unwrap();
        writeln!(file, "house home").unwrap();

        let dict = SynonymDictionary::load_from_file(file.path()).unwrap();
        assert_eq!(dict.group_count(), 2);
        assert!(dict.contains("sprint"));
        assert!(dict.contains("home"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = SynonymDictionary::load_from_file("/nonexistent/synonyms.txt").unwrap_err();
        assert!(matches!(err, TuplesimError::Synonym(_)));
    }
}
