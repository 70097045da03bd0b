// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service identity, time arithmetic and environment variable names for the recovery engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable thresholds do not live here;
//! they belong to the engine configuration so deployments can override them.

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the logging layer
    pub const PIERRE_RECOVERY_ENGINE: &str = "pierre-recovery-engine";
    /// Workout history collaborator
    pub const WORKOUT_HISTORY: &str = "workout-history";
    /// Readiness collaborator
    pub const READINESS: &str = "readiness";
}

/// Calendar arithmetic
pub mod time {
    /// Seconds in a day
    pub const SECONDS_PER_DAY: i64 = 86_400;
    /// Days in a week
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Environment variable names read by the configuration loaders
pub mod env_config {
    /// Path to a custom lexicon JSON document
    pub const LEXICON_PATH: &str = "PIERRE_RECOVERY_LEXICON_PATH";
}

/// Entity names used in error messages
pub mod entities {
    /// Injury record entity
    pub const INJURY_RECORD: &str = "Injury record";
}
