// ABOUTME: Strength workout and readiness types consumed by fatigue assessment
// ABOUTME: Workouts and sets come from the workout-history collaborator, readiness from wellness data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Workout identifier
    pub id: Uuid,
    /// Owner of the workout
    pub user_id: Uuid,
    /// When the session started
    pub start_time: DateTime<Utc>,
}

/// A single set performed within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Workout the set belongs to
    pub workout_id: Uuid,
    /// Load lifted (any consistent unit)
    pub weight: f64,
    /// Repetitions completed
    pub reps: u32,
    /// Rate of perceived exertion (0-10), if logged
    pub rpe: Option<f64>,
}

impl WorkoutSet {
    /// Tonnage contributed by this set (weight x reps)
    #[must_use]
    pub fn tonnage(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// Daily composite readiness score (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessScore {
    /// Score value
    pub score: f64,
}
