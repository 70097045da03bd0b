// ABOUTME: Integration tests for weekly injury check-ins through the recovery service
// ABOUTME: Verifies status write-back, medical escalation, return-to-activity and phase lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{create_injury, days_after, t0, test_engine};
use pierre_recovery::errors::ErrorCode;
use pierre_recovery::intelligence::{
    ActivityTolerance, CheckInInput, RecoveryPhase, RecoveryStatus, RomQuality,
};
use pierre_recovery::models::{BodyPart, InjuryStatus, Severity};
use uuid::Uuid;

fn check_in(pain_level: u8, rom: RomQuality, activity: ActivityTolerance) -> CheckInInput {
    CheckInInput {
        pain_level,
        rom_quality: rom,
        activity_tolerance: activity,
        new_symptoms: None,
    }
}

#[tokio::test]
async fn test_pain_free_check_in_resolves_record() {
    let env = test_engine();
    let recovery = env.engine.recovery();
    let record = create_injury(
        recovery.store(),
        Uuid::new_v4(),
        BodyPart::Knee,
        Severity::Moderate,
        t0(),
    )
    .await;

    let result = recovery
        .process_check_in_at(
            record.id,
            &check_in(0, RomQuality::Better, ActivityTolerance::Improving),
            days_after(7),
        )
        .await
        .unwrap();

    assert_eq!(result.status, RecoveryStatus::Resolved);
    assert!(!result.requires_medical_attention);
    assert_eq!(result.days_in_recovery, 7);
    // 0.4 pain + 0.3 rom + 0.2 activity + 0.1 * 7/21 time
    assert!((result.progress_score - (0.9 + 0.1 / 3.0)).abs() < 1e-9);

    let stored = recovery.store().find(record.id).await.unwrap();
    assert_eq!(stored.status, InjuryStatus::Resolved);
    assert_eq!(stored.resolved_at, Some(days_after(7)));
    assert_eq!(stored.last_check_in_at, Some(days_after(7)));
}

#[tokio::test]
async fn test_improving_check_in_moves_record_to_recovering() {
    let env = test_engine();
    let recovery = env.engine.recovery();
    let record = create_injury(
        recovery.store(),
        Uuid::new_v4(),
        BodyPart::Shoulder,
        Severity::Mild,
        t0(),
    )
    .await;

    let result = recovery
        .process_check_in_at(
            record.id,
            &check_in(3, RomQuality::Better, ActivityTolerance::Improving),
            days_after(4),
        )
        .await
        .unwrap();

    assert_eq!(result.status, RecoveryStatus::Improving);
    assert!(!result.requires_medical_attention);

    let stored = recovery.store().find(record.id).await.unwrap();
    assert_eq!(stored.status, InjuryStatus::Recovering);
    assert!(stored.resolved_at.is_none());
}

#[tokio::test]
async fn test_high_pain_escalates_to_medical_attention() {
    let env = test_engine();
    let recovery = env.engine.recovery();
    let record = create_injury(
        recovery.store(),
        Uuid::new_v4(),
        BodyPart::LowerBack,
        Severity::Moderate,
        t0(),
    )
    .await;

    let result = recovery
        .process_check_in_at(
            record.id,
            &check_in(9, RomQuality::Same, ActivityTolerance::Plateau),
            days_after(7),
        )
        .await
        .unwrap();

    assert!(result.requires_medical_attention);
    assert!(result.recommendation.contains("doctor"));
}

#[tokio::test]
async fn test_worsening_keeps_stored_status() {
    let env = test_engine();
    let recovery = env.engine.recovery();
    let record = create_injury(
        recovery.store(),
        Uuid::new_v4(),
        BodyPart::Ankle,
        Severity::Mild,
        t0(),
    )
    .await;

    let result = recovery
        .process_check_in_at(
            record.id,
            &check_in(4, RomQuality::Worse, ActivityTolerance::Plateau),
            days_after(7),
        )
        .await
        .unwrap();

    assert_eq!(result.status, RecoveryStatus::Worsening);
    assert!(result.requires_medical_attention);

    let stored = recovery.store().find(record.id).await.unwrap();
    assert_eq!(stored.status, InjuryStatus::Active);
    assert_eq!(stored.last_check_in_at, Some(days_after(7)));
}

#[tokio::test]
async fn test_pain_free_with_worse_range_of_motion_is_worsening() {
    let env = test_engine();
    let recovery = env.engine.recovery();
    let record = create_injury(
        recovery.store(),
        Uuid::new_v4(),
        BodyPart::Shoulder,
        Severity::Mild,
        t0(),
    )
    .await;

    let result = recovery
        .process_check_in_at(
            record.id,
            &check_in(0, RomQuality::Worse, ActivityTolerance::Improving),
            days_after(7),
        )
        .await
        .unwrap();

    assert_eq!(result.status, RecoveryStatus::Worsening);
    assert!(result.requires_medical_attention);

    let stored = recovery.store().find(record.id).await.unwrap();
    assert_eq!(stored.status, InjuryStatus::Active);
    assert!(stored.resolved_at.is_none());
}

#[tokio::test]
async fn test_prolonged_plateau_on_severe_injury() {
    let env = test_engine();
    let recovery = env.engine.recovery();
    let record = create_injury(
        recovery.store(),
        Uuid::new_v4(),
        BodyPart::Hip,
        Severity::Severe,
        t0(),
    )
    .await;

    let result = recovery
        .process_check_in_at(
            record.id,
            &check_in(9, RomQuality::Same, ActivityTolerance::Plateau),
            days_after(21),
        )
        .await
        .unwrap();

    assert_eq!(result.status, RecoveryStatus::Plateau);
    assert!(result.progress_score < 0.3);
    assert!(result.requires_medical_attention);

    let stored = recovery.store().find(record.id).await.unwrap();
    assert_eq!(stored.status, InjuryStatus::Active);
}

#[tokio::test]
async fn test_check_in_for_unknown_injury_is_not_found() {
    let env = test_engine();
    let err = env
        .engine
        .recovery()
        .process_check_in(
            Uuid::new_v4(),
            &check_in(2, RomQuality::Same, ActivityTolerance::Plateau),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_return_to_activity_follows_stored_status() {
    let env = test_engine();
    let recovery = env.engine.recovery();
    let record = create_injury(
        recovery.store(),
        Uuid::new_v4(),
        BodyPart::Wrist,
        Severity::Mild,
        t0(),
    )
    .await;

    let before = recovery.assess_return_to_activity(record.id).await.unwrap();
    assert!(!before.ready);
    assert!(!before.pain_free);

    recovery.store().resolve_at(record.id, days_after(9)).await.unwrap();

    let after = recovery.assess_return_to_activity(record.id).await.unwrap();
    assert!(after.ready);
    assert!(after.full_range_of_motion);
    assert!(after.full_activity_tolerance);

    let missing = recovery
        .assess_return_to_activity(Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(missing.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_recovery_phase_boundaries() {
    let env = test_engine();
    let recovery = env.engine.recovery();

    let cases = [
        (0, RecoveryPhase::Acute, 3),
        (5, RecoveryPhase::Acute, 3),
        (6, RecoveryPhase::EarlyStage, 7),
        (21, RecoveryPhase::EarlyStage, 7),
        (22, RecoveryPhase::Advanced, 14),
        (120, RecoveryPhase::Advanced, 14),
    ];
    for (days, phase, frequency) in cases {
        let info = recovery.get_recovery_phase(days);
        assert_eq!(info.phase, phase, "day {days}");
        assert_eq!(info.check_in_frequency_days, frequency);
        assert!(!info.description.is_empty());
    }
}
