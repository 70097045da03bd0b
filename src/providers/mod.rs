// ABOUTME: Workout-history and readiness collaborator contracts consumed by fatigue assessment
// ABOUTME: Async traits for external data sources plus in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Providers
//!
//! Fatigue assessment reads training history and readiness from collaborators the
//! engine does not own. Reads are sequential and non-transactional; a workout
//! written between reads may be missed, which is acceptable for advisory output.

mod memory;

pub use memory::{InMemoryReadiness, InMemoryWorkoutHistory};

use crate::errors::AppResult;
use crate::models::{ReadinessScore, Workout, WorkoutSet};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of logged strength workouts
#[async_trait]
pub trait WorkoutHistoryProvider: Send + Sync {
    /// A user's workouts starting in `[start, end)`
    async fn workouts_in_range(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Workout>>;

    /// A user's most recent workouts starting at or before `before`, newest first
    async fn recent_workouts(
        &self,
        user_id: Uuid,
        before: DateTime<Utc>,
        limit: usize,
    ) -> AppResult<Vec<Workout>>;

    /// Every set belonging to the given workouts
    async fn sets_for_workouts(&self, workout_ids: &[Uuid]) -> AppResult<Vec<WorkoutSet>>;
}

/// Source of daily readiness signals
#[async_trait]
pub trait ReadinessProvider: Send + Sync {
    /// Today's readiness score, if one was recorded
    async fn today_readiness_score(&self, user_id: Uuid) -> AppResult<Option<ReadinessScore>>;

    /// Whether readiness has been trending down
    async fn is_readiness_declining(&self, user_id: Uuid) -> AppResult<bool>;
}
