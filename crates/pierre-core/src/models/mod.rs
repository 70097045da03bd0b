// ABOUTME: Core data models for the injury and recovery engine
// ABOUTME: Re-exports injury records, body parts, severities and training history types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain serializable types shared by the intelligence crate and the
//! orchestration layer.
//!
//! - `InjuryRecord`: persisted injury with lifecycle status
//! - `BodyPart` / `Severity` / `InjuryStatus`: strongly typed classification values
//! - `Workout` / `WorkoutSet` / `ReadinessScore`: training history inputs for fatigue analysis

mod injury;
mod workout;

pub use injury::{BodyPart, InjuryRecord, InjuryStatus, NewInjuryRecord, Severity};
pub use workout::{ReadinessScore, Workout, WorkoutSet};
