// ABOUTME: Recovery assessment configuration for weekly injury check-ins
// ABOUTME: Configures severity baselines, progress weights, status thresholds and escalation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recovery Assessment Configuration
//!
//! Baselines are keyed by severity: the pain level a fresh injury of that tier is
//! assumed to start from, and the number of days it is expected to take to heal.
//! Escalation thresholds decide when a check-in recommends seeing a professional.

use pierre_core::models::Severity;
use serde::{Deserialize, Serialize};

/// A value per severity tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityTable<T> {
    /// Value for mild injuries
    pub mild: T,
    /// Value for moderate injuries
    pub moderate: T,
    /// Value for severe injuries
    pub severe: T,
}

impl<T: Copy> SeverityTable<T> {
    /// Look up the value for a severity tier
    #[must_use]
    pub fn get(&self, severity: Severity) -> T {
        match severity {
            Severity::Mild => self.mild,
            Severity::Moderate => self.moderate,
            Severity::Severe => self.severe,
        }
    }
}

/// Recovery assessment configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Per-severity starting pain and expected healing time
    pub baselines: RecoveryBaselines,
    /// Progress score component weights
    pub scoring: ProgressScoringConfig,
    /// Status transition thresholds
    pub status: StatusThresholds,
    /// Medical escalation thresholds
    pub escalation: EscalationThresholds,
    /// Check-in cadence and recovery phase boundaries
    pub schedule: CheckInSchedule,
}

/// Severity-keyed recovery baselines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryBaselines {
    /// Pain level (0-10) assumed at report time
    pub initial_pain: SeverityTable<u8>,
    /// Days a typical injury of this tier takes to heal
    pub expected_recovery_days: SeverityTable<u32>,
}

/// Weights of the four progress score components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressScoringConfig {
    /// Weight of pain reduction relative to the baseline
    pub pain_weight: f64,
    /// Weight of range-of-motion quality
    pub rom_weight: f64,
    /// Weight of activity tolerance
    pub activity_weight: f64,
    /// Weight of elapsed time relative to the expected window
    pub time_weight: f64,
}

/// Thresholds used when classifying a check-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusThresholds {
    /// Highest pain level still compatible with a resolved injury
    pub resolved_max_pain: u8,
    /// Progress scores below this are candidates for a plateau
    pub plateau_max_score: f64,
    /// Minimum days in recovery before a plateau can be declared
    pub plateau_min_days: i64,
}

/// Thresholds that trigger a recommendation to seek medical attention
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationThresholds {
    /// Pain at or above this level always escalates
    pub pain_level: u8,
    /// A plateau lasting at least this many days escalates
    pub plateau_days: i64,
    /// Severe injuries not improving after this many days escalate
    pub severe_days: i64,
    /// Moderate injuries not improving after this many days escalate
    pub moderate_days: i64,
}

/// Check-in cadence and recovery phase boundaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInSchedule {
    /// Days between expected check-ins
    pub interval_days: i64,
    /// Last day of the acute phase
    pub acute_max_days: i64,
    /// Last day of the early-stage phase
    pub early_stage_max_days: i64,
}

impl Default for RecoveryBaselines {
    fn default() -> Self {
        Self {
            initial_pain: SeverityTable {
                mild: 5,
                moderate: 7,
                severe: 9,
            },
            expected_recovery_days: SeverityTable {
                mild: 7,
                moderate: 21,
                severe: 60,
            },
        }
    }
}

impl Default for ProgressScoringConfig {
    fn default() -> Self {
        Self {
            pain_weight: 0.4,
            rom_weight: 0.3,
            activity_weight: 0.2,
            time_weight: 0.1,
        }
    }
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            resolved_max_pain: 1,
            plateau_max_score: 0.3,
            plateau_min_days: 14,
        }
    }
}

impl Default for EscalationThresholds {
    fn default() -> Self {
        Self {
            pain_level: 8,
            plateau_days: 21,
            severe_days: 14,
            moderate_days: 28,
        }
    }
}

impl Default for CheckInSchedule {
    fn default() -> Self {
        Self {
            interval_days: 7,
            acute_max_days: 5,
            early_stage_max_days: 21,
        }
    }
}
