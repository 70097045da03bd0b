// ABOUTME: Main library entry point for the Pierre injury and recovery engine
// ABOUTME: Orchestrates wellness-note detection, injury records, recovery check-ins and deload advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy, same as the workspace crates
#![deny(unsafe_code)]

//! # Pierre Recovery
//!
//! A deterministic, auditable rule engine that detects potential injuries in
//! free-text wellness notes, tracks weekly recovery check-ins, and recommends
//! deload weeks from training load. It is not a medical diagnostic system.
//!
//! ## Architecture
//!
//! - **Intelligence**: pure classifier, recovery assessor and fatigue analyzer
//!   (re-exported from `pierre-intelligence`)
//! - **Database**: the record-store contract and the `InjuryRecordStore`
//! - **Providers**: workout-history and readiness collaborator contracts
//! - **Services**: async recovery and fatigue orchestration
//! - **Engine**: facade wiring everything from explicit collaborators
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_recovery::intelligence::TextClassifier;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = TextClassifier::with_defaults()?;
//! let detection = classifier.analyze("Sharp pain in my lower back when I bend");
//! println!("injury detected: {}", detection.injury_detected);
//! # Ok(())
//! # }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the binary (src/bin/) and integration tests (tests/).

/// Application constants re-exported from `pierre-core`
pub mod constants;

/// Record-store contract, in-memory backend and injury record store
pub mod database;

/// Engine facade
pub mod engine;

/// Unified error handling re-exported from `pierre-core`
pub mod errors;

/// Classifier, recovery and fatigue rule engines
pub mod intelligence;

/// Structured logging setup and engine events
pub mod logging;

/// Domain models re-exported from `pierre-core`
pub mod models;

/// Workout-history and readiness collaborator contracts
pub mod providers;

/// Async recovery and fatigue services
pub mod services;

pub use engine::{NoteReport, RecoveryEngine};
