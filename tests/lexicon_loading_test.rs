// ABOUTME: Tests for loading, validating and substituting custom injury lexicons
// ABOUTME: Uses temporary JSON documents to exercise file loading and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_recovery::errors::{AppError, ErrorCode};
use pierre_recovery::intelligence::config::{ClassifierConfig, ConfigError};
use pierre_recovery::intelligence::{Lexicon, TextClassifier};
use pierre_recovery::models::{BodyPart, Severity};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn custom_lexicon_json() -> String {
    json!({
        "false_positives": ["smoked it"],
        "pain_descriptors": ["owie"],
        "discomfort": { "severe": ["yikes"] },
        "injury_types": [
            { "category": "muscle", "terms": ["tweaky hammy"] }
        ],
        "injury_type_canonical": { "tweaky hammy": "muscle_strain" },
        "body_parts": [
            { "key": "hamstring", "primary": ["hammy"] },
            { "key": "knee", "primary": ["knee"], "synonyms": ["patella"] }
        ],
        "body_part_aliases": { "hamstring": "hamstrings" }
    })
    .to_string()
}

#[test]
fn test_custom_lexicon_replaces_builtin_vocabulary() {
    let lexicon = Lexicon::from_json(&custom_lexicon_json()).unwrap();
    let classifier = TextClassifier::new(lexicon, ClassifierConfig::default()).unwrap();

    // built-in terms are unknown to the custom dictionary
    assert!(!classifier.analyze("sharp pain in my knee").injury_detected);

    let result = classifier.analyze("Owie, tweaky hammy again");
    assert!(result.injury_detected);
    assert_eq!(result.body_part, Some(BodyPart::Hamstrings));
    assert_eq!(result.injury_type.as_deref(), Some("muscle_strain"));

    let result = classifier.analyze("Yikes, my patella");
    assert_eq!(result.severity, Some(Severity::Severe));
    assert_eq!(result.body_part, Some(BodyPart::Knee));

    assert!(!classifier.analyze("Smoked it, owie").injury_detected);
}

#[test]
fn test_lexicon_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(custom_lexicon_json().as_bytes()).unwrap();

    let lexicon = Lexicon::from_file(file.path()).unwrap();
    assert_eq!(lexicon.pain_descriptors, vec!["owie".to_owned()]);
    assert_eq!(lexicon.resolve_body_part("hamstring"), Some(BodyPart::Hamstrings));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Lexicon::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_malformed_json_is_rejected() {
    let err = Lexicon::from_json("{ \"pain_descriptors\": [ ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_lexicon_without_indicators_is_rejected() {
    let err = Lexicon::from_json(r#"{ "false_positives": ["killed it"] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLexicon(_)));
}

#[test]
fn test_unknown_body_part_key_is_rejected() {
    let document = json!({
        "pain_descriptors": ["pain"],
        "body_parts": [{ "key": "tail", "primary": ["tail"] }]
    })
    .to_string();

    let err = Lexicon::from_json(&document).unwrap_err();
    assert!(err.to_string().contains("tail"));

    let app_error = AppError::from(err);
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_unmapped_injury_type_falls_back_to_snake_case() {
    let lexicon = Lexicon::default();
    assert_eq!(lexicon.canonical_injury_type("herniated disc"), "herniated_disc");
    assert_eq!(lexicon.canonical_injury_type("turf toe"), "turf_toe");
}

#[test]
fn test_builtin_lexicon_round_trips_through_json() {
    let document = serde_json::to_string(&Lexicon::default()).unwrap();
    let reloaded = Lexicon::from_json(&document).unwrap();
    let classifier = TextClassifier::new(reloaded, ClassifierConfig::default()).unwrap();

    let result = classifier.analyze("Sharp pain in my lower back");
    assert_eq!(result.body_part, Some(BodyPart::LowerBack));
}
