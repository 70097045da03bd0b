// ABOUTME: Recovery and deload planning commands for pierre-recovery-cli
// ABOUTME: Prints recovery phases, deload prescriptions and the effective engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use pierre_recovery::intelligence::{
    apply_deload_to_workout, EngineConfig, FatigueAnalyzer, FatigueLevel, RecoveryAssessor,
};
use serde_json::json;

use crate::helpers::output::print_json;

/// Print the recovery phase for a day count
pub fn phase(days: i64) -> Result<()> {
    let assessor = RecoveryAssessor::new(EngineConfig::global().recovery.clone());
    print_json(&assessor.recovery_phase(days))
}

/// Print the deload prescription for a level, optionally applied to a planned exercise
pub fn deload(level: FatigueLevel, planned: Option<(u32, f64)>) -> Result<()> {
    let analyzer = FatigueAnalyzer::new(EngineConfig::global().fatigue.clone());
    let prescription = analyzer.calculate_deload_volume(level);

    let Some((sets, weight)) = planned else {
        return print_json(&prescription);
    };
    let adjusted = apply_deload_to_workout(sets, weight, &prescription);
    print_json(&json!({
        "prescription": prescription,
        "adjusted_workout": adjusted,
    }))
}

/// Print the effective configuration
pub fn config() -> Result<()> {
    print_json(EngineConfig::global())
}
