// ABOUTME: Domain service layer orchestrating the rule engines over external collaborators
// ABOUTME: Recovery check-ins against the injury store and fatigue assessment over training history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services gather inputs from collaborators, run the pure decision logic from the
//! intelligence crate, and write results back. Every operation is scoped to one
//! user or one injury record.

/// Weekly check-ins, return-to-activity and recovery phases
pub mod recovery;

/// Fatigue assessment and deload recommendations
pub mod fatigue;

pub use fatigue::{DeloadRecommendation, FatigueService};
pub use recovery::RecoveryService;
