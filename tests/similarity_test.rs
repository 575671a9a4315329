//! Integration tests for synonym-aware n-tuple similarity.

use tuplesim::analysis::analyzer::tokenize;
use tuplesim::analysis::synonym::generalizer::generalize;
use tuplesim::analysis::synonym::{GeneralizedElement, SynonymDictionary, SynonymGroup};
use tuplesim::error::{Result, TuplesimError};
use tuplesim::similarity::detector::{Detection, PlagiarismDetector};
use tuplesim::similarity::ntuple::compare;
use tuplesim::similarity::shingle::ShingleSet;

fn generalized(text: &str, dictionary: &SynonymDictionary) -> Vec<GeneralizedElement> {
    generalize(&tokenize(text), dictionary)
}

#[test]
fn test_identity() -> Result<()> {
    let dictionary = SynonymDictionary::parse("quick fast\nbig large huge\n");
    let a = generalized(
        "The quick brown fox jumps over the big lazy dog, the quick fox!",
        &dictionary,
    );

    for n in 1..=a.len() {
        assert_eq!(compare(&a, &a, n)?, 1.0, "n = {n}");
    }

    Ok(())
}

#[test]
fn test_no_overlap() -> Result<()> {
    let dictionary = SynonymDictionary::new();
    let a = generalized("alpha beta gamma delta", &dictionary);
    let b = generalized("delta gamma beta alpha", &dictionary);

    assert_eq!(compare(&a, &b, 2)?, 0.0);
    assert_eq!(compare(&a, &b, 3)?, 0.0);

    Ok(())
}

#[test]
fn test_asymmetry() -> Result<()> {
    let dictionary = SynonymDictionary::new();
    // 5 windows of "la la la" collapse to one shingle, which b contains
    let a = generalized("la la la la la la la", &dictionary);
    let b = generalized("la la la and then it ends", &dictionary);

    let ab = compare(&a, &b, 3)?;
    let ba = compare(&b, &a, 3)?;

    assert_eq!(ab, 1.0);
    // b has 5 distinct shingles, only (la la la) is in a
    assert!((ba - 0.2).abs() < 1e-12);

    Ok(())
}

#[test]
fn test_synonym_collapsing() -> Result<()> {
    let dictionary = SynonymDictionary::from_synonym_groups(vec![SynonymGroup::new([
        "quick", "fast",
    ])]);
    let a = generalize(&["the", "quick", "fox"], &dictionary);
    let b = generalize(&["the", "fast", "fox"], &dictionary);

    assert_eq!(compare(&a, &b, 3)?, 1.0);

    // without the synonym list the same texts do not match
    let plain = SynonymDictionary::new();
    let a = generalize(&["the", "quick", "fox"], &plain);
    let b = generalize(&["the", "fast", "fox"], &plain);
    assert_eq!(compare(&a, &b, 3)?, 0.0);

    Ok(())
}

#[test]
fn test_window_too_short() -> Result<()> {
    let a = generalized("only two", &SynonymDictionary::new());

    assert!(ShingleSet::build(&a, 3)?.is_empty());
    assert!(matches!(
        compare(&a, &a, 3),
        Err(TuplesimError::EmptyShingleSet {
            tuple_size: 3,
            length: 2
        })
    ));

    Ok(())
}

#[test]
fn test_case_and_punctuation_insensitivity() {
    assert_eq!(tokenize("Fox! fox FOX?"), vec!["fox", "fox", "fox"]);
}

#[test]
fn test_last_group_wins() {
    let dictionary = SynonymDictionary::parse("a b\na c\n");

    assert_eq!(
        dictionary.group_for("a"),
        Some(&SynonymGroup::new(["a", "c"]))
    );
}

#[test]
fn test_detector_end_to_end() -> Result<()> {
    let synonyms = "run sprint jog\nwalk stroll\n";
    let detector = PlagiarismDetector::new(SynonymDictionary::parse(synonyms), 3)?;

    let detection = detector.detect(
        "I went for a run, then a walk.",
        "I went for a JOG then a stroll!",
    )?;
    assert_eq!(detection, Detection::Similarity(1.0));

    let detection = detector.detect("go for a run", "go for a run now")?;
    assert_eq!(detection.sentinel(), -1.0);

    Ok(())
}

#[test]
fn test_detector_is_shareable_across_threads() -> Result<()> {
    let detector = PlagiarismDetector::new(SynonymDictionary::parse("big large\n"), 2)?;
    let pairs = [
        ("a big dog", "a large dog"),
        ("a big dog", "a small dog"),
        ("one two three", "one two four"),
    ];

    let scores: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = pairs
            .iter()
            .map(|(a, b)| {
                let detector = &detector;
                scope.spawn(move || detector.detect(a, b).map(|d| d.sentinel()))
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("comparison thread panicked"))
            .collect::<Result<Vec<_>>>()
    })?;

    assert_eq!(scores, vec![1.0, 0.0, 0.5]);

    Ok(())
}
