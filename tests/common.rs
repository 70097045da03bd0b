// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, fixed clocks, in-memory collaborators and record fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pierre_recovery`

use chrono::{DateTime, Duration, TimeZone, Utc};
use pierre_recovery::database::{InMemoryInjuryRepository, InjuryRecordStore};
use pierre_recovery::intelligence::{EngineConfig, Lexicon};
use pierre_recovery::models::{BodyPart, InjuryRecord, NewInjuryRecord, Severity, Workout, WorkoutSet};
use pierre_recovery::providers::{InMemoryReadiness, InMemoryWorkoutHistory};
use pierre_recovery::RecoveryEngine;
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference instant so day arithmetic is deterministic
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap()
}

/// `t0` shifted by whole days
pub fn days_after(days: i64) -> DateTime<Utc> {
    t0() + Duration::days(days)
}

/// Store over a fresh in-memory repository with the default 7-day check-in interval
pub fn test_store() -> (Arc<InMemoryInjuryRepository>, InjuryRecordStore) {
    init_test_logging();
    let repository = Arc::new(InMemoryInjuryRepository::new());
    let store = InjuryRecordStore::new(repository.clone(), 7);
    (repository, store)
}

/// Create a record reported at `reported_at`
pub async fn create_injury(
    store: &InjuryRecordStore,
    user_id: Uuid,
    body_part: BodyPart,
    severity: Severity,
    reported_at: DateTime<Utc>,
) -> InjuryRecord {
    store
        .create_at(
            NewInjuryRecord::new(user_id, body_part, severity).reported_at(reported_at),
            reported_at,
        )
        .await
        .unwrap()
}

/// Engine wired to in-memory collaborators
pub struct TestEngine {
    pub engine: RecoveryEngine,
    pub repository: Arc<InMemoryInjuryRepository>,
    pub workouts: Arc<InMemoryWorkoutHistory>,
    pub readiness: Arc<InMemoryReadiness>,
}

/// Engine with default configuration and the built-in lexicon
pub fn test_engine() -> TestEngine {
    init_test_logging();
    let repository = Arc::new(InMemoryInjuryRepository::new());
    let workouts = Arc::new(InMemoryWorkoutHistory::new());
    let readiness = Arc::new(InMemoryReadiness::new());
    let engine = RecoveryEngine::new(
        &EngineConfig::default(),
        Lexicon::default(),
        repository.clone(),
        workouts.clone(),
        readiness.clone(),
    )
    .unwrap();

    TestEngine {
        engine,
        repository,
        workouts,
        readiness,
    }
}

/// Log a workout of identical sets
pub fn add_workout(
    history: &InMemoryWorkoutHistory,
    user_id: Uuid,
    start_time: DateTime<Utc>,
    sets: &[(f64, u32, Option<f64>)],
) -> Uuid {
    let workout = Workout {
        id: Uuid::new_v4(),
        user_id,
        start_time,
    };
    let id = workout.id;
    let sets = sets
        .iter()
        .map(|&(weight, reps, rpe)| WorkoutSet {
            workout_id: id,
            weight,
            reps,
            rpe,
        })
        .collect();
    history.add_workout(workout, sets);
    id
}
