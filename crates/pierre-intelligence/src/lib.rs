// ABOUTME: Pure decision logic for the injury and recovery engine
// ABOUTME: Wellness-note classifier, weekly recovery assessor, fatigue analyzer and their configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Deterministic, synchronous rule engines extracted from the main crate so they
//! can be tested without any storage or async runtime.
//!
//! ## Modules
//!
//! - **config**: `EngineConfig` with classifier, recovery and fatigue thresholds
//! - **lexicon**: categorized injury term dictionary and compiled matchers
//! - **`text_classifier`**: wellness-note injury detection
//! - **`recovery_assessor`**: weekly check-in scoring, status and escalation rules
//! - **fatigue**: fatigue triggers and deload prescriptions

/// Engine thresholds, baselines and environment overrides
pub mod config;

/// Injury term dictionary
pub mod lexicon;

/// Wellness-note injury classifier
pub mod text_classifier;

/// Weekly recovery check-in assessment
pub mod recovery_assessor;

/// Training fatigue and deload prescription
pub mod fatigue;

pub use config::{ConfigError, EngineConfig};
pub use fatigue::{
    apply_deload_to_workout, AdjustedWorkout, DeloadPrescription, FatigueAnalyzer,
    FatigueAssessment, FatigueLevel, FatigueSignals,
};
pub use lexicon::Lexicon;
pub use recovery_assessor::{
    ActivityTolerance, CheckInInput, RecoveryAssessor, RecoveryPhase, RecoveryPhaseInfo,
    RecoveryProgressResult, RecoveryStatus, ReturnToActivityAssessment, RomQuality,
};
pub use text_classifier::{DetectionResult, TextClassifier};
