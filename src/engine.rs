// ABOUTME: Recovery engine facade wiring classifier, record store and services from explicit collaborators
// ABOUTME: Turns positive wellness-note detections into active injury records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recovery Engine
//!
//! One engine is constructed per process (or per request) from an
//! [`EngineConfig`], a [`Lexicon`] and the three external collaborators. Nothing
//! here is global; tests substitute their own lexicon and in-memory stores.

use crate::database::{InjuryRecordStore, InjuryRepository};
use crate::errors::AppResult;
use crate::intelligence::{
    DetectionResult, EngineConfig, FatigueAnalyzer, Lexicon, RecoveryAssessor, TextClassifier,
};
use crate::logging::EngineLogger;
use crate::models::{InjuryRecord, NewInjuryRecord, Severity};
use crate::providers::{ReadinessProvider, WorkoutHistoryProvider};
use crate::services::{FatigueService, RecoveryService};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Outcome of reporting a wellness note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteReport {
    /// Classifier output for the note
    pub detection: DetectionResult,
    /// Record created from a positive detection with a resolved body part
    pub injury: Option<InjuryRecord>,
}

/// Injury and recovery engine
#[derive(Clone)]
pub struct RecoveryEngine {
    classifier: Arc<TextClassifier>,
    store: InjuryRecordStore,
    recovery: RecoveryService,
    fatigue: FatigueService,
}

impl RecoveryEngine {
    /// Build an engine from configuration and collaborators
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration or lexicon fails validation
    pub fn new(
        config: &EngineConfig,
        lexicon: Lexicon,
        repository: Arc<dyn InjuryRepository>,
        workouts: Arc<dyn WorkoutHistoryProvider>,
        readiness: Arc<dyn ReadinessProvider>,
    ) -> AppResult<Self> {
        config.validate()?;
        let classifier = Arc::new(TextClassifier::new(lexicon, config.classifier.clone())?);
        let store = InjuryRecordStore::new(repository, config.recovery.schedule.interval_days);
        let recovery =
            RecoveryService::new(store.clone(), RecoveryAssessor::new(config.recovery.clone()));
        let fatigue = FatigueService::new(
            workouts,
            readiness,
            FatigueAnalyzer::new(config.fatigue.clone()),
        );

        Ok(Self {
            classifier,
            store,
            recovery,
            fatigue,
        })
    }

    /// Classify a wellness note without touching any record
    #[must_use]
    pub fn analyze(&self, notes: &str) -> DetectionResult {
        self.classifier.analyze(notes)
    }

    /// Classify a note and record a detected injury now
    ///
    /// # Errors
    ///
    /// Returns the store error unchanged if the record cannot be created
    pub async fn report_from_notes(&self, user_id: Uuid, notes: &str) -> AppResult<NoteReport> {
        self.report_from_notes_at(user_id, notes, Utc::now()).await
    }

    /// Classify a note and record a detected injury reported at `now`
    ///
    /// A record is created only when an injury is detected and a body part was
    /// resolved; the detection is returned either way.
    ///
    /// # Errors
    ///
    /// Returns the store error unchanged if the record cannot be created
    pub async fn report_from_notes_at(
        &self,
        user_id: Uuid,
        notes: &str,
        now: DateTime<Utc>,
    ) -> AppResult<NoteReport> {
        let detection = self.classifier.analyze(notes);
        EngineLogger::log_detection(user_id, notes.len(), &detection);

        let body_part = match (detection.injury_detected, detection.body_part) {
            (true, Some(body_part)) => body_part,
            (true, None) => {
                debug!(user.id = %user_id, "Injury detected without body part, no record created");
                return Ok(NoteReport {
                    detection,
                    injury: None,
                });
            }
            (false, _) => {
                return Ok(NoteReport {
                    detection,
                    injury: None,
                })
            }
        };

        let fields = NewInjuryRecord::new(
            user_id,
            body_part,
            detection.severity.unwrap_or(Severity::Mild),
        )
        .with_description(detection.description.clone())
        .reported_at(now);
        let injury = self.store.create_at(fields, now).await?;

        Ok(NoteReport {
            detection,
            injury: Some(injury),
        })
    }

    /// The wellness-note classifier
    #[must_use]
    pub fn classifier(&self) -> &TextClassifier {
        &self.classifier
    }

    /// Injury record store
    #[must_use]
    pub const fn store(&self) -> &InjuryRecordStore {
        &self.store
    }

    /// Weekly recovery check-ins
    #[must_use]
    pub const fn recovery(&self) -> &RecoveryService {
        &self.recovery
    }

    /// Fatigue and deload recommendations
    #[must_use]
    pub const fn fatigue(&self) -> &FatigueService {
        &self.fatigue
    }
}
