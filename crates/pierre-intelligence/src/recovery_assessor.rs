// ABOUTME: Weekly injury check-in assessment producing progress score, status and medical escalation
// ABOUTME: Ordered status and escalation rules, recovery phases and return-to-activity readiness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recovery Assessor Module
//!
//! Turns a weekly check-in into a progress score and a status decision for one
//! injury record. The score blends four components, each clamped to `[0, 1]`:
//!
//! - pain reduction relative to the severity's assumed starting pain
//! - range-of-motion quality (better / same / worse)
//! - activity tolerance (improving / plateau / declining)
//! - elapsed time relative to the severity's expected healing window
//!
//! Status and medical-escalation decisions are ordered rule lists evaluated top to
//! bottom. This module is pure; persistence of the resulting status lives in the
//! recovery service.

use crate::config::RecoveryConfig;
use chrono::{DateTime, Utc};
use pierre_core::models::{InjuryRecord, InjuryStatus, Severity};
use serde::{Deserialize, Serialize};

/// Self-reported range of motion compared to last week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RomQuality {
    /// Moves more freely than last week
    Better,
    /// No noticeable change
    Same,
    /// More restricted than last week
    Worse,
}

impl RomQuality {
    /// Score contribution in `[0, 1]`
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Better => 1.0,
            Self::Same => 0.5,
            Self::Worse => 0.0,
        }
    }
}

/// Self-reported tolerance for everyday and training activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityTolerance {
    /// Can do more than last week
    Improving,
    /// Same as last week
    Plateau,
    /// Can do less than last week
    Declining,
}

impl ActivityTolerance {
    /// Score contribution in `[0, 1]`
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Improving => 1.0,
            Self::Plateau => 0.5,
            Self::Declining => 0.0,
        }
    }
}

/// One weekly check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInInput {
    /// Current pain, nominally 0-10; out-of-range values are accepted and their effect clamped
    pub pain_level: u8,
    /// Range of motion trend
    pub rom_quality: RomQuality,
    /// Activity tolerance trend
    pub activity_tolerance: ActivityTolerance,
    /// Free-text description of any new symptoms
    #[serde(default)]
    pub new_symptoms: Option<String>,
}

/// Assessed recovery trajectory for one check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Healing is progressing
    Improving,
    /// Little progress after the minimum observation window
    Plateau,
    /// Mobility or tolerance is going backwards
    Worsening,
    /// Pain-free with full function
    Resolved,
}

impl RecoveryStatus {
    /// Stored record status implied by this assessment
    ///
    /// Worsening and plateau assessments leave the stored status untouched.
    #[must_use]
    pub const fn stored_status(self) -> Option<InjuryStatus> {
        match self {
            Self::Resolved => Some(InjuryStatus::Resolved),
            Self::Improving => Some(InjuryStatus::Recovering),
            Self::Plateau | Self::Worsening => None,
        }
    }
}

/// Result of processing a weekly check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryProgressResult {
    /// Weighted progress score in `[0, 1]`
    pub progress_score: f64,
    /// Assessed trajectory
    pub status: RecoveryStatus,
    /// Fixed guidance message
    pub recommendation: String,
    /// Whether the athlete should see a professional
    pub requires_medical_attention: bool,
    /// Whole days since the injury was reported
    pub days_in_recovery: i64,
}

/// Everything the status and escalation rules look at
#[derive(Debug, Clone, Copy)]
pub struct CheckInContext {
    /// Reported pain level
    pub pain_level: u8,
    /// Range of motion trend
    pub rom_quality: RomQuality,
    /// Activity tolerance trend
    pub activity_tolerance: ActivityTolerance,
    /// Severity of the injury being assessed
    pub severity: Severity,
    /// Computed progress score
    pub progress_score: f64,
    /// Whole days since the injury was reported
    pub days_in_recovery: i64,
}

/// One entry of the ordered status decision list
#[derive(Debug, Clone, Copy)]
pub struct StatusRule {
    /// Short identifier
    pub name: &'static str,
    /// Status assigned when the predicate holds
    pub status: RecoveryStatus,
    /// Predicate over the check-in
    pub applies: fn(&CheckInContext, &RecoveryConfig) -> bool,
}

fn is_resolved(ctx: &CheckInContext, config: &RecoveryConfig) -> bool {
    ctx.pain_level <= config.status.resolved_max_pain
        && ctx.rom_quality == RomQuality::Better
        && ctx.activity_tolerance == ActivityTolerance::Improving
}

fn is_worsening(ctx: &CheckInContext, _config: &RecoveryConfig) -> bool {
    ctx.rom_quality == RomQuality::Worse || ctx.activity_tolerance == ActivityTolerance::Declining
}

fn is_plateau(ctx: &CheckInContext, config: &RecoveryConfig) -> bool {
    ctx.progress_score < config.status.plateau_max_score
        && ctx.days_in_recovery >= config.status.plateau_min_days
}

/// Status rules in priority order; no match means improving
pub const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        name: "resolved",
        status: RecoveryStatus::Resolved,
        applies: is_resolved,
    },
    StatusRule {
        name: "worsening",
        status: RecoveryStatus::Worsening,
        applies: is_worsening,
    },
    StatusRule {
        name: "plateau",
        status: RecoveryStatus::Plateau,
        applies: is_plateau,
    },
];

/// A condition that escalates a check-in to medical attention
#[derive(Debug, Clone, Copy)]
pub struct MedicalRule {
    /// Short identifier
    pub name: &'static str,
    /// Predicate over the check-in and its assessed status
    pub applies: fn(&CheckInContext, RecoveryStatus, &RecoveryConfig) -> bool,
}

fn high_pain(ctx: &CheckInContext, _status: RecoveryStatus, config: &RecoveryConfig) -> bool {
    ctx.pain_level >= config.escalation.pain_level
}

fn worsening(_ctx: &CheckInContext, status: RecoveryStatus, _config: &RecoveryConfig) -> bool {
    status == RecoveryStatus::Worsening
}

fn prolonged_plateau(ctx: &CheckInContext, status: RecoveryStatus, config: &RecoveryConfig) -> bool {
    status == RecoveryStatus::Plateau && ctx.days_in_recovery >= config.escalation.plateau_days
}

fn severe_not_improving(
    ctx: &CheckInContext,
    status: RecoveryStatus,
    config: &RecoveryConfig,
) -> bool {
    ctx.severity == Severity::Severe
        && ctx.days_in_recovery >= config.escalation.severe_days
        && status != RecoveryStatus::Improving
}

fn moderate_not_improving(
    ctx: &CheckInContext,
    status: RecoveryStatus,
    config: &RecoveryConfig,
) -> bool {
    ctx.severity == Severity::Moderate
        && ctx.days_in_recovery >= config.escalation.moderate_days
        && status != RecoveryStatus::Improving
}

/// Any of these firing recommends medical attention
pub const MEDICAL_RULES: &[MedicalRule] = &[
    MedicalRule {
        name: "high_pain",
        applies: high_pain,
    },
    MedicalRule {
        name: "worsening",
        applies: worsening,
    },
    MedicalRule {
        name: "prolonged_plateau",
        applies: prolonged_plateau,
    },
    MedicalRule {
        name: "severe_not_improving",
        applies: severe_not_improving,
    },
    MedicalRule {
        name: "moderate_not_improving",
        applies: moderate_not_improving,
    },
];

const MEDICAL_MESSAGE: &str = "Your symptoms suggest this needs a professional opinion. Please see a doctor or physical therapist before training the affected area again.";
const RESOLVED_MESSAGE: &str = "Your injury looks resolved. Ease back into full training gradually and back off if symptoms return.";
const IMPROVING_MESSAGE: &str = "You're making good progress. Keep up your rehab routine and increase load gradually.";
const WORSENING_MESSAGE: &str = "Symptoms are heading the wrong way. Reduce load on the affected area and prioritize rest until it settles.";
const PLATEAU_STALLED_MESSAGE: &str = "Recovery has stalled. Consider changing your rehab approach or getting a physical therapist's input.";
const PLATEAU_EARLY_MESSAGE: &str = "Progress is slow, but it's still early. Stay consistent with rest and gentle mobility work.";

/// Coarse stage of healing, used to suggest a check-in cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryPhase {
    /// First days after the injury
    Acute,
    /// Tissue repair is under way
    EarlyStage,
    /// Remodeling and return to load
    Advanced,
}

impl RecoveryPhase {
    /// Short description of the phase
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Acute => "Acute phase: protect the area, manage pain and swelling",
            Self::EarlyStage => "Early recovery: restore range of motion with gentle loading",
            Self::Advanced => "Advanced recovery: rebuild strength and progress toward full training",
        }
    }

    /// Suggested days between check-ins
    #[must_use]
    pub const fn check_in_frequency_days(self) -> u32 {
        match self {
            Self::Acute => 3,
            Self::EarlyStage => 7,
            Self::Advanced => 14,
        }
    }
}

/// Informational view of a recovery phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryPhaseInfo {
    /// Phase identifier
    pub phase: RecoveryPhase,
    /// What the phase means
    pub description: String,
    /// Suggested days between check-ins
    pub check_in_frequency_days: u32,
}

/// Readiness to return to unrestricted training
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnToActivityAssessment {
    /// Cleared for full activity
    pub ready: bool,
    /// Pain-free criterion
    pub pain_free: bool,
    /// Full range of motion criterion
    pub full_range_of_motion: bool,
    /// Full activity tolerance criterion
    pub full_activity_tolerance: bool,
    /// Guidance message
    pub message: String,
}

/// Weekly check-in assessor
#[derive(Debug, Clone, Default)]
pub struct RecoveryAssessor {
    config: RecoveryConfig,
}

impl RecoveryAssessor {
    /// Create an assessor with the given thresholds
    #[must_use]
    pub const fn new(config: RecoveryConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &RecoveryConfig {
        &self.config
    }

    /// Assess a check-in against a stored record
    #[must_use]
    pub fn assess(
        &self,
        record: &InjuryRecord,
        input: &CheckInInput,
        now: DateTime<Utc>,
    ) -> RecoveryProgressResult {
        let days_in_recovery = record.days_since_reported(now);
        let progress_score = self.progress_score(record.severity, input, days_in_recovery);
        let ctx = CheckInContext {
            pain_level: input.pain_level,
            rom_quality: input.rom_quality,
            activity_tolerance: input.activity_tolerance,
            severity: record.severity,
            progress_score,
            days_in_recovery,
        };

        let status = self.classify_status(&ctx);
        let requires_medical_attention = self.requires_medical_attention(&ctx, status);
        let recommendation = self
            .recommendation(status, requires_medical_attention, days_in_recovery)
            .to_owned();

        RecoveryProgressResult {
            progress_score,
            status,
            recommendation,
            requires_medical_attention,
            days_in_recovery,
        }
    }

    /// Weighted progress score in `[0, 1]`
    #[must_use]
    pub fn progress_score(&self, severity: Severity, input: &CheckInInput, days: i64) -> f64 {
        let weights = &self.config.scoring;
        let baselines = &self.config.baselines;

        let initial_pain = f64::from(baselines.initial_pain.get(severity));
        let pain_reduction =
            ((initial_pain - f64::from(input.pain_level)) / initial_pain).clamp(0.0, 1.0);

        let expected_days = f64::from(baselines.expected_recovery_days.get(severity));
        let time_progress = (days.max(0) as f64 / expected_days).clamp(0.0, 1.0);

        let score = weights.pain_weight * pain_reduction
            + weights.rom_weight * input.rom_quality.score()
            + weights.activity_weight * input.activity_tolerance.score()
            + weights.time_weight * time_progress;
        score.clamp(0.0, 1.0)
    }

    /// First status rule that applies, otherwise improving
    #[must_use]
    pub fn classify_status(&self, ctx: &CheckInContext) -> RecoveryStatus {
        STATUS_RULES
            .iter()
            .find(|rule| (rule.applies)(ctx, &self.config))
            .map_or(RecoveryStatus::Improving, |rule| rule.status)
    }

    /// Whether any escalation rule fires
    #[must_use]
    pub fn requires_medical_attention(&self, ctx: &CheckInContext, status: RecoveryStatus) -> bool {
        MEDICAL_RULES
            .iter()
            .any(|rule| (rule.applies)(ctx, status, &self.config))
    }

    /// Names of the escalation rules that fire, for logging
    #[must_use]
    pub fn escalation_reasons(&self, ctx: &CheckInContext, status: RecoveryStatus) -> Vec<&'static str> {
        MEDICAL_RULES
            .iter()
            .filter(|rule| (rule.applies)(ctx, status, &self.config))
            .map(|rule| rule.name)
            .collect()
    }

    /// Fixed guidance message for an assessment
    #[must_use]
    pub const fn recommendation(
        &self,
        status: RecoveryStatus,
        requires_medical_attention: bool,
        days_in_recovery: i64,
    ) -> &'static str {
        if requires_medical_attention {
            return MEDICAL_MESSAGE;
        }
        match status {
            RecoveryStatus::Resolved => RESOLVED_MESSAGE,
            RecoveryStatus::Improving => IMPROVING_MESSAGE,
            RecoveryStatus::Worsening => WORSENING_MESSAGE,
            RecoveryStatus::Plateau => {
                if days_in_recovery >= self.config.status.plateau_min_days {
                    PLATEAU_STALLED_MESSAGE
                } else {
                    PLATEAU_EARLY_MESSAGE
                }
            }
        }
    }

    /// Recovery phase for a number of days since the injury
    #[must_use]
    pub fn recovery_phase(&self, days_in_recovery: i64) -> RecoveryPhaseInfo {
        let schedule = &self.config.schedule;
        let phase = if days_in_recovery <= schedule.acute_max_days {
            RecoveryPhase::Acute
        } else if days_in_recovery <= schedule.early_stage_max_days {
            RecoveryPhase::EarlyStage
        } else {
            RecoveryPhase::Advanced
        };
        RecoveryPhaseInfo {
            phase,
            description: phase.description().to_owned(),
            check_in_frequency_days: phase.check_in_frequency_days(),
        }
    }

    /// Return-to-activity readiness from the stored record status
    #[must_use]
    pub fn return_to_activity(record: &InjuryRecord) -> ReturnToActivityAssessment {
        let ready = record.status == InjuryStatus::Resolved;
        let message = if ready {
            "Cleared to return to full activity. Build back up over a week or two."
        } else {
            "Not ready yet. Keep checking in weekly until the injury is resolved."
        };
        ReturnToActivityAssessment {
            ready,
            pain_free: ready,
            full_range_of_motion: ready,
            full_activity_tolerance: ready,
            message: message.to_owned(),
        }
    }
}
