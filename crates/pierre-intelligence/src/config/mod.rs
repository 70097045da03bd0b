// ABOUTME: Configuration module for pierre-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (classifier confidence, recovery windows, fatigue thresholds)
pub mod intelligence;

pub use intelligence::{
    CheckInSchedule, ClassifierConfig, ConfigError, DeloadConfig, EngineConfig,
    EscalationThresholds, FatigueConfig, FatigueLevelThresholds, ProgressScoringConfig,
    RecoveryBaselines, RecoveryConfig, SeverityTable, StatusThresholds,
};
