// ABOUTME: Training fatigue assessment from volume, RPE and readiness signals
// ABOUTME: Maps fatigue to deload prescriptions and applies them to planned workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fatigue Analyzer Module
//!
//! Four independent triggers each add a reason when they fire:
//!
//! - tonnage spike between two consecutive comparison windows
//! - high average RPE over the most recent workouts
//! - readiness trending down (external signal)
//! - today's readiness score below threshold (external signal)
//!
//! One reason marks the athlete as fatigued; a deload is only recommended once
//! enough reasons stack up. Gathering the signals is the fatigue service's job,
//! this module only evaluates them.

use crate::config::FatigueConfig;
use chrono::{DateTime, Duration, Utc};
use pierre_core::constants::time::DAYS_PER_WEEK;
use pierre_core::models::WorkoutSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fatigue level derived from the number of fired triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FatigueLevel {
    /// Zero or one trigger
    Low,
    /// Two triggers
    Moderate,
    /// Three or more triggers
    High,
}

impl FatigueLevel {
    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for FatigueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FatigueLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            other => Err(format!("Unknown fatigue level: {other}")),
        }
    }
}

/// Raw inputs to a fatigue assessment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FatigueSignals {
    /// Relative tonnage change between windows, absent when the earlier window is empty
    pub volume_increase: Option<f64>,
    /// Mean RPE over the most recent workouts, absent when no set has an RPE
    pub average_rpe: Option<f64>,
    /// External readiness-trend flag
    pub readiness_declining: bool,
    /// External readiness score for today (0-100)
    pub readiness_score: Option<f64>,
}

/// Outcome of evaluating fatigue triggers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueAssessment {
    /// At least one trigger fired
    pub is_fatigued: bool,
    /// One entry per fired trigger
    pub reasons: Vec<String>,
    /// Relative tonnage change, when computable
    pub volume_increase: Option<f64>,
    /// Recent mean RPE, when available
    pub average_rpe: Option<f64>,
    /// Today's readiness score, when available
    pub readiness_score: Option<f64>,
    /// Enough triggers fired to warrant a deload
    pub recommend_deload: bool,
}

/// Deload week parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeloadPrescription {
    /// Fraction of normal volume to keep
    pub volume_reduction: f64,
    /// Fraction of normal load to keep on the bar
    pub intensity_maintenance: f64,
    /// Deload length in days
    pub duration_days: u32,
    /// Why this prescription was chosen
    pub reason: String,
}

/// A planned exercise after applying a deload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedWorkout {
    /// Working sets, never below one
    pub sets: u32,
    /// Load rounded to a whole unit
    pub weight: f64,
}

/// Sum of weight x reps
#[must_use]
pub fn tonnage(sets: &[WorkoutSet]) -> f64 {
    sets.iter().map(WorkoutSet::tonnage).sum()
}

/// Relative change from `previous` to `current`, `None` if `previous` is not positive
#[must_use]
pub fn volume_increase(current: f64, previous: f64) -> Option<f64> {
    (previous > 0.0).then(|| (current - previous) / previous)
}

/// Mean RPE over sets that recorded one
#[must_use]
pub fn average_rpe(sets: &[WorkoutSet]) -> Option<f64> {
    let rpes: Vec<f64> = sets.iter().filter_map(|s| s.rpe).collect();
    if rpes.is_empty() {
        return None;
    }
    let mean = rpes.iter().sum::<f64>() / rpes.len() as f64;
    Some(mean)
}

/// Apply a deload prescription to a planned exercise
#[must_use]
pub fn apply_deload_to_workout(
    sets: u32,
    weight: f64,
    prescription: &DeloadPrescription,
) -> AdjustedWorkout {
    let scaled_sets = (f64::from(sets) * prescription.volume_reduction).round();
    let sets = scaled_sets.clamp(1.0, f64::from(u32::MAX)) as u32;
    AdjustedWorkout {
        sets,
        weight: (weight * prescription.intensity_maintenance).round(),
    }
}

/// Fatigue trigger evaluation and deload prescription
#[derive(Debug, Clone, Default)]
pub struct FatigueAnalyzer {
    config: FatigueConfig,
}

impl FatigueAnalyzer {
    /// Create an analyzer with the given thresholds
    #[must_use]
    pub const fn new(config: FatigueConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &FatigueConfig {
        &self.config
    }

    /// Boundaries of the two tonnage windows ending at `now`: `(previous_start, current_start)`
    #[must_use]
    pub fn volume_windows(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let window = Duration::days(self.config.volume_window_days);
        let current_start = now - window;
        (current_start - window, current_start)
    }

    /// Evaluate the four triggers
    #[must_use]
    pub fn assess(&self, signals: &FatigueSignals) -> FatigueAssessment {
        let c = &self.config;
        let mut reasons = Vec::new();

        if let Some(increase) = signals.volume_increase {
            if increase > c.volume_increase_threshold {
                reasons.push(format!(
                    "Training volume up {:.0}% over the last {} days",
                    increase * 100.0,
                    c.volume_window_days
                ));
            }
        }

        if let Some(rpe) = signals.average_rpe {
            if rpe > c.high_rpe_threshold {
                reasons.push(format!(
                    "Average RPE {rpe:.1} across the last {} workouts",
                    c.rpe_workout_count
                ));
            }
        }

        if signals.readiness_declining {
            reasons.push("Readiness has been trending down".to_owned());
        }

        if let Some(score) = signals.readiness_score {
            if score < c.low_readiness_threshold {
                reasons.push(format!(
                    "Readiness score {score:.0} is below {:.0}",
                    c.low_readiness_threshold
                ));
            }
        }

        let is_fatigued = !reasons.is_empty();
        let recommend_deload = is_fatigued && reasons.len() >= c.min_reasons_for_deload;

        FatigueAssessment {
            is_fatigued,
            reasons,
            volume_increase: signals.volume_increase,
            average_rpe: signals.average_rpe,
            readiness_score: signals.readiness_score,
            recommend_deload,
        }
    }

    /// Fatigue level from the number of fired triggers
    #[must_use]
    pub const fn determine_fatigue_level(&self, reason_count: usize) -> FatigueLevel {
        let levels = &self.config.levels;
        if reason_count >= levels.high_min_reasons {
            FatigueLevel::High
        } else if reason_count >= levels.moderate_min_reasons {
            FatigueLevel::Moderate
        } else {
            FatigueLevel::Low
        }
    }

    /// Deload prescription for a fatigue level
    #[must_use]
    pub fn calculate_deload_volume(&self, level: FatigueLevel) -> DeloadPrescription {
        let d = &self.config.deload;
        let volume_reduction = match level {
            FatigueLevel::High => d.high_fatigue_volume,
            FatigueLevel::Moderate => d.moderate_fatigue_volume,
            FatigueLevel::Low => d.low_fatigue_volume,
        };
        DeloadPrescription {
            volume_reduction,
            intensity_maintenance: d.intensity_maintenance,
            duration_days: d.duration_days,
            reason: format!(
                "{level} fatigue: train at {:.0}% of normal volume and {:.0}% of normal load for {} days",
                volume_reduction * 100.0,
                d.intensity_maintenance * 100.0,
                d.duration_days
            ),
        }
    }

    /// Whether `now` falls on a programmed deload week counted from `program_start`
    #[must_use]
    pub fn is_programmed_deload_week(
        &self,
        program_start: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> bool {
        let weeks = (now - program_start).num_days() / DAYS_PER_WEEK;
        weeks > 0 && weeks % self.config.deload.programmed_cadence_weeks == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn set(weight: f64, reps: u32, rpe: Option<f64>) -> WorkoutSet {
        WorkoutSet {
            workout_id: Uuid::nil(),
            weight,
            reps,
            rpe,
        }
    }

    #[test]
    fn test_volume_increase_guards_empty_window() {
        assert_eq!(volume_increase(1000.0, 0.0), None);
        let increase = volume_increase(1250.0, 1000.0).unwrap();
        assert!((increase - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_rpe_ignores_sets_without_rpe() {
        let sets = [set(100.0, 5, Some(9.0)), set(100.0, 5, None), set(100.0, 5, Some(8.0))];
        let rpe = average_rpe(&sets).unwrap();
        assert!((rpe - 8.5).abs() < f64::EPSILON);
        assert_eq!(average_rpe(&[set(60.0, 10, None)]), None);
    }

    #[test]
    fn test_tonnage_sums_weight_times_reps() {
        let sets = [set(100.0, 5, None), set(50.0, 10, None)];
        assert!((tonnage(&sets) - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deload_never_drops_below_one_set() {
        let analyzer = FatigueAnalyzer::default();
        let prescription = analyzer.calculate_deload_volume(FatigueLevel::High);
        let adjusted = apply_deload_to_workout(1, 60.0, &prescription);
        assert_eq!(adjusted.sets, 1);
        assert!((adjusted.weight - 51.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deload_volume_per_level() {
        let analyzer = FatigueAnalyzer::default();
        let expected = [
            (FatigueLevel::High, 0.40),
            (FatigueLevel::Moderate, 0.50),
            (FatigueLevel::Low, 0.60),
        ];
        for (level, volume) in expected {
            let prescription = analyzer.calculate_deload_volume(level);
            assert!((prescription.volume_reduction - volume).abs() < f64::EPSILON);
            assert!((prescription.intensity_maintenance - 0.85).abs() < f64::EPSILON);
            assert_eq!(prescription.duration_days, 7);
        }
    }

    #[test]
    fn test_fatigue_level_parsing() {
        assert_eq!("HIGH".parse::<FatigueLevel>(), Ok(FatigueLevel::High));
        assert!("extreme".parse::<FatigueLevel>().is_err());
    }
}
