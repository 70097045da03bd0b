// ABOUTME: Core data models re-exported from pierre-core
// ABOUTME: Injury records, body parts, severities, workouts and readiness scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `InjuryRecord` / `NewInjuryRecord`: persisted injury and its creation fields
//! - `BodyPart`, `Severity`, `InjuryStatus`: classification values
//! - `Workout`, `WorkoutSet`, `ReadinessScore`: fatigue inputs

pub use pierre_core::models::*;
