// ABOUTME: In-memory workout history and readiness providers
// ABOUTME: Backs tests and embedders that push data in rather than query a backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ReadinessProvider, WorkoutHistoryProvider};
use crate::errors::AppResult;
use crate::models::{ReadinessScore, Workout, WorkoutSet};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// Workout history held in memory
#[derive(Debug, Default)]
pub struct InMemoryWorkoutHistory {
    workouts: DashMap<Uuid, Workout>,
    sets: DashMap<Uuid, Vec<WorkoutSet>>,
}

impl InMemoryWorkoutHistory {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a workout with its sets
    pub fn add_workout(&self, workout: Workout, sets: Vec<WorkoutSet>) {
        let id = workout.id;
        self.workouts.insert(id, workout);
        self.sets.entry(id).or_default().extend(sets);
    }
}

#[async_trait]
impl WorkoutHistoryProvider for InMemoryWorkoutHistory {
    async fn workouts_in_range(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Workout>> {
        let mut workouts: Vec<Workout> = self
            .workouts
            .iter()
            .filter(|w| w.user_id == user_id && w.start_time >= start && w.start_time < end)
            .map(|w| w.value().clone())
            .collect();
        workouts.sort_by_key(|w| w.start_time);
        Ok(workouts)
    }

    async fn recent_workouts(
        &self,
        user_id: Uuid,
        before: DateTime<Utc>,
        limit: usize,
    ) -> AppResult<Vec<Workout>> {
        let mut workouts: Vec<Workout> = self
            .workouts
            .iter()
            .filter(|w| w.user_id == user_id && w.start_time <= before)
            .map(|w| w.value().clone())
            .collect();
        workouts.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        workouts.truncate(limit);
        Ok(workouts)
    }

    async fn sets_for_workouts(&self, workout_ids: &[Uuid]) -> AppResult<Vec<WorkoutSet>> {
        Ok(workout_ids
            .iter()
            .filter_map(|id| self.sets.get(id).map(|sets| sets.value().clone()))
            .flatten()
            .collect())
    }
}

/// Readiness signals held in memory
#[derive(Debug, Default)]
pub struct InMemoryReadiness {
    scores: DashMap<Uuid, ReadinessScore>,
    declining: DashMap<Uuid, bool>,
}

impl InMemoryReadiness {
    /// Create an empty readiness source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set today's readiness score for a user
    pub fn set_score(&self, user_id: Uuid, score: f64) {
        self.scores.insert(user_id, ReadinessScore { score });
    }

    /// Set the readiness-trend flag for a user
    pub fn set_declining(&self, user_id: Uuid, declining: bool) {
        self.declining.insert(user_id, declining);
    }
}

#[async_trait]
impl ReadinessProvider for InMemoryReadiness {
    async fn today_readiness_score(&self, user_id: Uuid) -> AppResult<Option<ReadinessScore>> {
        Ok(self.scores.get(&user_id).map(|score| *score))
    }

    async fn is_readiness_declining(&self, user_id: Uuid) -> AppResult<bool> {
        Ok(self.declining.get(&user_id).is_some_and(|flag| *flag))
    }
}
