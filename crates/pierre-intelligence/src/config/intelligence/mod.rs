// ABOUTME: Engine configuration for injury detection, recovery assessment and deload prescription
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Every threshold and baseline the engine uses is a configurable parameter.
//! Defaults reproduce the reference behavior; deployments override them through
//! `PIERRE_RECOVERY_*` environment variables.
//!
//! # Module Structure
//!
//! - `classifier` - Confidence scoring weights for the wellness-note classifier
//! - `recovery` - Severity baselines, progress weights, status and escalation thresholds
//! - `fatigue` - Fatigue triggers, fatigue levels and deload prescriptions

pub mod classifier;
pub mod error;
pub mod fatigue;
pub mod recovery;

pub use classifier::ClassifierConfig;
pub use error::ConfigError;
pub use fatigue::{DeloadConfig, FatigueConfig, FatigueLevelThresholds};
pub use recovery::{
    CheckInSchedule, EscalationThresholds, ProgressScoringConfig, RecoveryBaselines,
    RecoveryConfig, SeverityTable, StatusThresholds,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton for callers that do not inject their own
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Wellness-note classifier confidence weights
    pub classifier: ClassifierConfig,
    /// Weekly recovery check-in assessment
    pub recovery: RecoveryConfig,
    /// Training fatigue and deload prescription
    pub fatigue: FatigueConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_classifier()?;
        self.validate_recovery()?;
        self.validate_fatigue()
    }

    fn validate_classifier(&self) -> Result<(), ConfigError> {
        let c = &self.classifier;
        let weights = [
            c.base_indicator_confidence,
            c.body_part_bonus,
            c.severe_bonus,
            c.moderate_bonus,
            c.mild_bonus,
            c.per_keyword_bonus,
            c.max_keyword_bonus,
        ];
        if weights.iter().any(|w| !(0.0..=1.0).contains(w)) {
            return Err(ConfigError::ValueOutOfRange(
                "classifier weights must be between 0.0 and 1.0",
            ));
        }
        if !(c.mild_bonus <= c.moderate_bonus && c.moderate_bonus <= c.severe_bonus) {
            return Err(ConfigError::InvalidRange(
                "classifier: mild_bonus <= moderate_bonus <= severe_bonus",
            ));
        }
        Ok(())
    }

    fn validate_recovery(&self) -> Result<(), ConfigError> {
        let r = &self.recovery;

        let pain = r.baselines.initial_pain;
        if pain.mild == 0 || pain.severe > 10 {
            return Err(ConfigError::ValueOutOfRange(
                "initial pain baselines must be between 1 and 10",
            ));
        }
        if !(pain.mild <= pain.moderate && pain.moderate <= pain.severe) {
            return Err(ConfigError::InvalidRange(
                "initial pain baselines must ascend with severity",
            ));
        }

        let days = r.baselines.expected_recovery_days;
        if days.mild == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "expected recovery days must be at least 1",
            ));
        }
        if !(days.mild <= days.moderate && days.moderate <= days.severe) {
            return Err(ConfigError::InvalidRange(
                "expected recovery days must ascend with severity",
            ));
        }

        let s = &r.scoring;
        let weight_sum = s.pain_weight + s.rom_weight + s.activity_weight + s.time_weight;
        if (weight_sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "progress score weights must sum to 1.0",
            ));
        }

        if !(0.0..=1.0).contains(&r.status.plateau_max_score) {
            return Err(ConfigError::ValueOutOfRange(
                "plateau_max_score must be between 0.0 and 1.0",
            ));
        }
        if r.escalation.pain_level > 10 || r.status.resolved_max_pain > 10 {
            return Err(ConfigError::ValueOutOfRange(
                "pain thresholds must be between 0 and 10",
            ));
        }

        let schedule = &r.schedule;
        if schedule.interval_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "check-in interval must be at least 1 day",
            ));
        }
        if schedule.acute_max_days >= schedule.early_stage_max_days {
            return Err(ConfigError::InvalidRange(
                "acute_max_days must be < early_stage_max_days",
            ));
        }
        Ok(())
    }

    fn validate_fatigue(&self) -> Result<(), ConfigError> {
        let f = &self.fatigue;
        if f.volume_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "volume window must be at least 1 day",
            ));
        }
        if f.rpe_workout_count == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "RPE must average at least one workout",
            ));
        }
        if !(0.0..=10.0).contains(&f.high_rpe_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "high RPE threshold must be between 0 and 10",
            ));
        }
        if !(0.0..=100.0).contains(&f.low_readiness_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "readiness threshold must be between 0 and 100",
            ));
        }
        if f.levels.moderate_min_reasons >= f.levels.high_min_reasons {
            return Err(ConfigError::InvalidRange(
                "moderate_min_reasons must be < high_min_reasons",
            ));
        }

        let d = &f.deload;
        let fractions = [
            d.high_fatigue_volume,
            d.moderate_fatigue_volume,
            d.low_fatigue_volume,
            d.intensity_maintenance,
        ];
        if fractions.iter().any(|v| *v <= 0.0 || *v > 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "deload fractions must be in (0.0, 1.0]",
            ));
        }
        if !(d.high_fatigue_volume <= d.moderate_fatigue_volume
            && d.moderate_fatigue_volume <= d.low_fatigue_volume)
        {
            return Err(ConfigError::InvalidRange(
                "deload volume must not increase with fatigue level",
            ));
        }
        if d.duration_days == 0 || d.programmed_cadence_weeks <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "deload duration and cadence must be positive",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let recovery = &mut self.recovery;
        Self::apply_env_var(
            "PIERRE_RECOVERY_EXPECTED_DAYS_MILD",
            &mut recovery.baselines.expected_recovery_days.mild,
        )?;
        Self::apply_env_var(
            "PIERRE_RECOVERY_EXPECTED_DAYS_MODERATE",
            &mut recovery.baselines.expected_recovery_days.moderate,
        )?;
        Self::apply_env_var(
            "PIERRE_RECOVERY_EXPECTED_DAYS_SEVERE",
            &mut recovery.baselines.expected_recovery_days.severe,
        )?;
        Self::apply_env_var(
            "PIERRE_RECOVERY_MEDICAL_PAIN_THRESHOLD",
            &mut recovery.escalation.pain_level,
        )?;
        Self::apply_env_var(
            "PIERRE_RECOVERY_CHECK_IN_INTERVAL_DAYS",
            &mut recovery.schedule.interval_days,
        )?;

        let fatigue = &mut self.fatigue;
        Self::apply_env_var(
            "PIERRE_RECOVERY_VOLUME_WINDOW_DAYS",
            &mut fatigue.volume_window_days,
        )?;
        Self::apply_env_var(
            "PIERRE_RECOVERY_VOLUME_INCREASE_THRESHOLD",
            &mut fatigue.volume_increase_threshold,
        )?;
        Self::apply_env_var(
            "PIERRE_RECOVERY_HIGH_RPE_THRESHOLD",
            &mut fatigue.high_rpe_threshold,
        )?;
        Self::apply_env_var(
            "PIERRE_RECOVERY_LOW_READINESS_THRESHOLD",
            &mut fatigue.low_readiness_threshold,
        )?;
        Self::apply_env_var(
            "PIERRE_RECOVERY_MIN_DELOAD_REASONS",
            &mut fatigue.min_reasons_for_deload,
        )?;
        Self::apply_env_var(
            "PIERRE_RECOVERY_DELOAD_CADENCE_WEEKS",
            &mut fatigue.deload.programmed_cadence_weeks,
        )?;
        Self::apply_env_var(
            "PIERRE_RECOVERY_INTENSITY_MAINTENANCE",
            &mut fatigue.deload.intensity_maintenance,
        )?;

        Ok(self)
    }
}
