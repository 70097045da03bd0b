// ABOUTME: Fatigue assessment and deload prescription configuration
// ABOUTME: Configures volume, RPE and readiness triggers plus deload volume and cadence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Fatigue trigger thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueConfig {
    /// Length of each tonnage comparison window (days)
    pub volume_window_days: i64,
    /// Relative tonnage increase that counts as a spike
    pub volume_increase_threshold: f64,
    /// Number of most recent workouts averaged for RPE
    pub rpe_workout_count: usize,
    /// Average RPE above this fires the high-RPE trigger
    pub high_rpe_threshold: f64,
    /// Readiness below this fires the low-readiness trigger
    pub low_readiness_threshold: f64,
    /// Number of fired triggers required before a deload is recommended
    pub min_reasons_for_deload: usize,
    /// Reason counts mapping to fatigue levels
    pub levels: FatigueLevelThresholds,
    /// Deload prescription parameters
    pub deload: DeloadConfig,
}

/// Reason counts mapping to fatigue levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueLevelThresholds {
    /// Reasons needed for a moderate level
    pub moderate_min_reasons: usize,
    /// Reasons needed for a high level
    pub high_min_reasons: usize,
}

/// Deload week parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeloadConfig {
    /// Fraction of normal volume kept at high fatigue
    pub high_fatigue_volume: f64,
    /// Fraction of normal volume kept at moderate fatigue
    pub moderate_fatigue_volume: f64,
    /// Fraction of normal volume kept at low fatigue
    pub low_fatigue_volume: f64,
    /// Fraction of normal load kept on the bar
    pub intensity_maintenance: f64,
    /// Deload length in days
    pub duration_days: u32,
    /// Programmed deload every N weeks of training
    pub programmed_cadence_weeks: i64,
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self {
            volume_window_days: 14,
            volume_increase_threshold: 0.20,
            rpe_workout_count: 3,
            high_rpe_threshold: 8.5,
            low_readiness_threshold: 70.0,
            min_reasons_for_deload: 2,
            levels: FatigueLevelThresholds::default(),
            deload: DeloadConfig::default(),
        }
    }
}

impl Default for FatigueLevelThresholds {
    fn default() -> Self {
        Self {
            moderate_min_reasons: 2,
            high_min_reasons: 3,
        }
    }
}

impl Default for DeloadConfig {
    fn default() -> Self {
        Self {
            high_fatigue_volume: 0.40,
            moderate_fatigue_volume: 0.50,
            low_fatigue_volume: 0.60,
            intensity_maintenance: 0.85,
            duration_days: 7,
            programmed_cadence_weeks: 4,
        }
    }
}
