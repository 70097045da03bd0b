// ABOUTME: Text classifier configuration for injury detection confidence scoring
// ABOUTME: Configures the base indicator weight, body-part bonus, severity bonuses and keyword bonus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::Severity;
use serde::{Deserialize, Serialize};

/// Confidence scoring weights for the wellness-note classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Confidence granted as soon as any injury indicator matches
    pub base_indicator_confidence: f64,
    /// Bonus when a body part was resolved
    pub body_part_bonus: f64,
    /// Bonus for a severe classification
    pub severe_bonus: f64,
    /// Bonus for a moderate classification
    pub moderate_bonus: f64,
    /// Bonus for a mild classification
    pub mild_bonus: f64,
    /// Bonus per matched keyword
    pub per_keyword_bonus: f64,
    /// Ceiling on the total keyword bonus
    pub max_keyword_bonus: f64,
}

impl ClassifierConfig {
    /// Severity bonus for the given tier
    #[must_use]
    pub const fn severity_bonus(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Severe => self.severe_bonus,
            Severity::Moderate => self.moderate_bonus,
            Severity::Mild => self.mild_bonus,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_indicator_confidence: 0.4,
            body_part_bonus: 0.2,
            severe_bonus: 0.25,
            moderate_bonus: 0.15,
            mild_bonus: 0.05,
            per_keyword_bonus: 0.03,
            max_keyword_bonus: 0.1,
        }
    }
}
