// ABOUTME: Injury record domain types for the recovery engine
// ABOUTME: Defines body parts, severity, lifecycle status and the persisted InjuryRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::time::SECONDS_PER_DAY;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Anatomical region an injury is attributed to
///
/// Keys are `snake_case` and match the body-part keys used by the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    /// Neck / cervical spine
    Neck,
    /// Shoulder joint and rotator cuff
    Shoulder,
    /// Upper back / thoracic spine
    UpperBack,
    /// Lower back / lumbar spine
    LowerBack,
    /// Chest and pectorals
    Chest,
    /// Abdominals and core
    Abdomen,
    /// Upper arm (biceps, triceps)
    Arm,
    /// Elbow joint
    Elbow,
    /// Forearm
    Forearm,
    /// Wrist joint
    Wrist,
    /// Hand and fingers
    Hand,
    /// Hip joint and hip flexors
    Hip,
    /// Groin and adductors
    Groin,
    /// Glutes
    Glutes,
    /// Hamstrings
    Hamstrings,
    /// Quadriceps
    Quadriceps,
    /// Knee joint
    Knee,
    /// Shin
    Shin,
    /// Calf
    Calf,
    /// Achilles tendon
    Achilles,
    /// Ankle joint
    Ankle,
    /// Foot, heel and toes
    Foot,
}

impl BodyPart {
    /// Every known body part, in anatomical order (head to toe)
    pub const ALL: [Self; 22] = [
        Self::Neck,
        Self::Shoulder,
        Self::UpperBack,
        Self::LowerBack,
        Self::Chest,
        Self::Abdomen,
        Self::Arm,
        Self::Elbow,
        Self::Forearm,
        Self::Wrist,
        Self::Hand,
        Self::Hip,
        Self::Groin,
        Self::Glutes,
        Self::Hamstrings,
        Self::Quadriceps,
        Self::Knee,
        Self::Shin,
        Self::Calf,
        Self::Achilles,
        Self::Ankle,
        Self::Foot,
    ];

    /// Canonical `snake_case` key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neck => "neck",
            Self::Shoulder => "shoulder",
            Self::UpperBack => "upper_back",
            Self::LowerBack => "lower_back",
            Self::Chest => "chest",
            Self::Abdomen => "abdomen",
            Self::Arm => "arm",
            Self::Elbow => "elbow",
            Self::Forearm => "forearm",
            Self::Wrist => "wrist",
            Self::Hand => "hand",
            Self::Hip => "hip",
            Self::Groin => "groin",
            Self::Glutes => "glutes",
            Self::Hamstrings => "hamstrings",
            Self::Quadriceps => "quadriceps",
            Self::Knee => "knee",
            Self::Shin => "shin",
            Self::Calf => "calf",
            Self::Achilles => "achilles",
            Self::Ankle => "ankle",
            Self::Foot => "foot",
        }
    }

    /// Human-readable name (underscores replaced with spaces)
    #[must_use]
    pub fn display_name(self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyPart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|part| part.as_str() == s)
            .ok_or_else(|| format!("Unknown body part: {s}"))
    }
}

/// Injury severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Minor discomfort, training can usually continue with care
    Mild,
    /// Noticeable pain or limitation
    Moderate,
    /// Significant pain, loss of function or objective signs
    Severe,
}

impl Severity {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mild" => Ok(Self::Mild),
            "moderate" => Ok(Self::Moderate),
            "severe" => Ok(Self::Severe),
            other => Err(format!("Unknown severity: {other}")),
        }
    }
}

/// Lifecycle status of a stored injury record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjuryStatus {
    /// Newly reported, no improving check-in yet
    Active,
    /// At least one improving check-in recorded
    Recovering,
    /// Healed
    Resolved,
}

impl InjuryStatus {
    /// Whether the injury still needs monitoring
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Active | Self::Recovering)
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Recovering => "recovering",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted injury record
///
/// `resolved_at` is set if and only if `status` is [`InjuryStatus::Resolved`], and
/// `last_check_in_at` never moves backwards. Both invariants are enforced by the
/// injury record store, not by this plain data type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryRecord {
    /// Record identifier
    pub id: Uuid,
    /// Owner of the record
    pub user_id: Uuid,
    /// Injured body part
    pub body_part: BodyPart,
    /// Severity at report time
    pub severity: Severity,
    /// Free-text description
    pub description: Option<String>,
    /// Lifecycle status
    pub status: InjuryStatus,
    /// When the injury was reported
    pub reported_at: DateTime<Utc>,
    /// When the injury was resolved
    pub resolved_at: Option<DateTime<Utc>>,
    /// Most recent weekly check-in
    pub last_check_in_at: Option<DateTime<Utc>>,
}

impl InjuryRecord {
    /// Reference point for check-in scheduling: last check-in, else report time
    #[must_use]
    pub fn check_in_anchor(&self) -> DateTime<Utc> {
        self.last_check_in_at.unwrap_or(self.reported_at)
    }

    /// Whole days elapsed between the report and `now` (never negative)
    #[must_use]
    pub fn days_since_reported(&self, now: DateTime<Utc>) -> i64 {
        (now - self.reported_at).num_days().max(0)
    }

    /// Days from report to resolution, if resolved
    #[must_use]
    pub fn recovery_duration_days(&self) -> Option<f64> {
        self.resolved_at.map(|resolved| {
            let seconds = (resolved - self.reported_at).num_seconds().max(0);
            seconds as f64 / SECONDS_PER_DAY as f64
        })
    }
}

/// Fields for creating an injury record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInjuryRecord {
    /// Owner of the record
    pub user_id: Uuid,
    /// Injured body part
    pub body_part: BodyPart,
    /// Severity at report time
    pub severity: Severity,
    /// Free-text description
    pub description: Option<String>,
    /// Initial status, defaults to [`InjuryStatus::Active`]
    #[serde(default)]
    pub status: Option<InjuryStatus>,
    /// Report time, defaults to now
    #[serde(default)]
    pub reported_at: Option<DateTime<Utc>>,
}

impl NewInjuryRecord {
    /// New active injury reported now
    #[must_use]
    pub const fn new(user_id: Uuid, body_part: BodyPart, severity: Severity) -> Self {
        Self {
            user_id,
            body_part,
            severity,
            description: None,
            status: None,
            reported_at: None,
        }
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the report time (backfilled or imported injuries)
    #[must_use]
    pub fn reported_at(mut self, reported_at: DateTime<Utc>) -> Self {
        self.reported_at = Some(reported_at);
        self
    }

    /// Override the initial status
    #[must_use]
    pub fn with_status(mut self, status: InjuryStatus) -> Self {
        self.status = Some(status);
        self
    }
}
