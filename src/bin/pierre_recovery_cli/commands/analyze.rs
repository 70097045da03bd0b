// ABOUTME: Wellness-note commands for pierre-recovery-cli
// ABOUTME: Runs the classifier alone or through the engine with an in-memory record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use pierre_recovery::constants::env_config::LEXICON_PATH;
use pierre_recovery::database::InMemoryInjuryRepository;
use pierre_recovery::intelligence::{EngineConfig, Lexicon, TextClassifier};
use pierre_recovery::providers::{InMemoryReadiness, InMemoryWorkoutHistory};
use pierre_recovery::RecoveryEngine;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::helpers::output::print_json;

/// Classify a note and print the detection
pub fn analyze(notes: &str, lexicon: Option<PathBuf>) -> Result<()> {
    let lexicon = load_lexicon(lexicon)?;
    let classifier = TextClassifier::new(lexicon, EngineConfig::global().classifier.clone())
        .context("Failed to build classifier")?;
    print_json(&classifier.analyze(notes))
}

/// Classify a note through the engine and print the detection with any created record
pub async fn report(notes: &str, lexicon: Option<PathBuf>) -> Result<()> {
    let lexicon = load_lexicon(lexicon)?;
    let engine = RecoveryEngine::new(
        EngineConfig::global(),
        lexicon,
        Arc::new(InMemoryInjuryRepository::new()),
        Arc::new(InMemoryWorkoutHistory::new()),
        Arc::new(InMemoryReadiness::new()),
    )?;
    let report = engine.report_from_notes(Uuid::new_v4(), notes).await?;
    print_json(&report)
}

fn load_lexicon(path: Option<PathBuf>) -> Result<Lexicon> {
    let path = path.or_else(|| env::var(LEXICON_PATH).ok().map(PathBuf::from));
    match path {
        Some(path) => {
            info!("Loading lexicon from {}", path.display());
            Lexicon::from_file(&path)
                .with_context(|| format!("Failed to load lexicon from {}", path.display()))
        }
        None => Ok(Lexicon::default()),
    }
}
