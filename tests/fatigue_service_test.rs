// ABOUTME: Integration tests for fatigue assessment and deload recommendations
// ABOUTME: Drives the fatigue service with in-memory workout history and readiness data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use common::{add_workout, days_after, test_engine};
use pierre_recovery::constants::service_names;
use pierre_recovery::errors::{AppError, AppResult, ErrorCode};
use pierre_recovery::intelligence::{FatigueAnalyzer, FatigueLevel};
use pierre_recovery::models::ReadinessScore;
use pierre_recovery::providers::{InMemoryWorkoutHistory, ReadinessProvider};
use pierre_recovery::services::FatigueService;
use std::sync::Arc;
use uuid::Uuid;

/// Readiness source whose backend is offline
struct OfflineReadiness;

#[async_trait]
impl ReadinessProvider for OfflineReadiness {
    async fn today_readiness_score(&self, _user_id: Uuid) -> AppResult<Option<ReadinessScore>> {
        Err(AppError::new(ErrorCode::ResourceUnavailable, "readiness backend offline"))
    }

    async fn is_readiness_declining(&self, _user_id: Uuid) -> AppResult<bool> {
        Err(AppError::new(ErrorCode::ResourceUnavailable, "readiness backend offline"))
    }
}

const HEAVY_SET: (f64, u32, Option<f64>) = (100.0, 10, Some(9.0));
const EASY_SET: (f64, u32, Option<f64>) = (100.0, 10, Some(7.0));

#[tokio::test]
async fn test_no_history_is_not_fatigue() {
    let env = test_engine();
    let user_id = Uuid::new_v4();

    let assessment = env
        .engine
        .fatigue()
        .assess_fatigue_at(user_id, days_after(28))
        .await
        .unwrap();

    assert!(!assessment.is_fatigued);
    assert!(assessment.reasons.is_empty());
    assert!(assessment.volume_increase.is_none());
    assert!(assessment.average_rpe.is_none());
    assert!(!assessment.recommend_deload);
}

#[tokio::test]
async fn test_single_trigger_is_fatigue_without_deload() {
    let env = test_engine();
    let user_id = Uuid::new_v4();
    // 3000 in the previous window, 4000 in the current one
    add_workout(&env.workouts, user_id, days_after(3), &[EASY_SET; 3]);
    add_workout(&env.workouts, user_id, days_after(20), &[EASY_SET; 4]);

    let recommendation = env
        .engine
        .fatigue()
        .get_deload_recommendation_at(user_id, None, days_after(28))
        .await
        .unwrap();

    let assessment = &recommendation.assessment;
    assert!(assessment.is_fatigued);
    assert_eq!(assessment.reasons.len(), 1);
    assert!((assessment.volume_increase.unwrap() - 1.0 / 3.0).abs() < 1e-9);
    assert!(!recommendation.should_deload);
    assert!(recommendation.fatigue_level.is_none());
    assert!(recommendation.prescription.is_none());
    assert!(!recommendation.programmed_deload_week);
}

#[tokio::test]
async fn test_volume_spike_and_high_rpe_recommend_moderate_deload() {
    let env = test_engine();
    let user_id = Uuid::new_v4();
    add_workout(&env.workouts, user_id, days_after(5), &[EASY_SET; 3]);
    for day in [18, 22, 26] {
        add_workout(&env.workouts, user_id, days_after(day), &[HEAVY_SET; 2]);
    }
    // another athlete's history stays out of the windows
    add_workout(&env.workouts, Uuid::new_v4(), days_after(20), &[HEAVY_SET; 20]);

    let recommendation = env
        .engine
        .fatigue()
        .get_deload_recommendation_at(user_id, None, days_after(28))
        .await
        .unwrap();

    assert!((recommendation.assessment.volume_increase.unwrap() - 1.0).abs() < 1e-9);
    assert!((recommendation.assessment.average_rpe.unwrap() - 9.0).abs() < 1e-9);
    assert!(recommendation.should_deload);
    assert_eq!(recommendation.fatigue_level, Some(FatigueLevel::Moderate));

    let prescription = recommendation.prescription.unwrap();
    assert!((prescription.volume_reduction - 0.5).abs() < f64::EPSILON);
    assert!((prescription.intensity_maintenance - 0.85).abs() < f64::EPSILON);
    assert_eq!(prescription.duration_days, 7);
}

#[tokio::test]
async fn test_every_trigger_gives_high_fatigue() {
    let env = test_engine();
    let user_id = Uuid::new_v4();
    add_workout(&env.workouts, user_id, days_after(5), &[EASY_SET; 3]);
    for day in [18, 22, 26] {
        add_workout(&env.workouts, user_id, days_after(day), &[HEAVY_SET; 2]);
    }
    env.readiness.set_declining(user_id, true);
    env.readiness.set_score(user_id, 55.0);

    let recommendation = env
        .engine
        .fatigue()
        .get_deload_recommendation_at(user_id, None, days_after(28))
        .await
        .unwrap();

    assert_eq!(recommendation.assessment.reasons.len(), 4);
    assert_eq!(recommendation.fatigue_level, Some(FatigueLevel::High));
    let prescription = recommendation.prescription.unwrap();
    assert!((prescription.volume_reduction - 0.4).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_readiness_alone_can_trigger_deload() {
    let env = test_engine();
    let user_id = Uuid::new_v4();
    env.readiness.set_declining(user_id, true);
    env.readiness.set_score(user_id, 62.0);

    let recommendation = env
        .engine
        .fatigue()
        .get_deload_recommendation_at(user_id, None, days_after(28))
        .await
        .unwrap();

    assert!(recommendation.should_deload);
    assert_eq!(recommendation.assessment.readiness_score, Some(62.0));
}

#[tokio::test]
async fn test_healthy_readiness_score_is_not_a_trigger() {
    let env = test_engine();
    let user_id = Uuid::new_v4();
    env.readiness.set_score(user_id, 85.0);

    let assessment = env
        .engine
        .fatigue()
        .assess_fatigue_at(user_id, days_after(28))
        .await
        .unwrap();
    assert!(!assessment.is_fatigued);
}

#[tokio::test]
async fn test_programmed_deload_week_is_reported_independently() {
    let env = test_engine();
    let user_id = Uuid::new_v4();

    let on_week = env
        .engine
        .fatigue()
        .get_deload_recommendation_at(user_id, Some(days_after(0)), days_after(29))
        .await
        .unwrap();
    assert!(on_week.programmed_deload_week);
    assert!(!on_week.should_deload);

    let off_week = env
        .engine
        .fatigue()
        .get_deload_recommendation_at(user_id, Some(days_after(0)), days_after(36))
        .await
        .unwrap();
    assert!(!off_week.programmed_deload_week);

    let first_week = env
        .engine
        .fatigue()
        .get_deload_recommendation_at(user_id, Some(days_after(0)), days_after(2))
        .await
        .unwrap();
    assert!(!first_week.programmed_deload_week);
}

#[test]
fn test_apply_deload_scales_sets_and_load() {
    let env = test_engine();
    let prescription = env
        .engine
        .fatigue()
        .analyzer()
        .calculate_deload_volume(FatigueLevel::Moderate);

    let adjusted = FatigueService::apply_deload_to_workout(10, 100.0, &prescription);
    assert_eq!(adjusted.sets, 5);
    assert!((adjusted.weight - 85.0).abs() < f64::EPSILON);

    // a single set is never deloaded to zero
    let adjusted = FatigueService::apply_deload_to_workout(1, 60.0, &prescription);
    assert_eq!(adjusted.sets, 1);
    assert!((adjusted.weight - 51.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_collaborator_failure_surfaces_as_external_service_error() {
    let service = FatigueService::new(
        Arc::new(InMemoryWorkoutHistory::new()),
        Arc::new(OfflineReadiness),
        FatigueAnalyzer::default(),
    );
    let user_id = Uuid::new_v4();

    let err = service
        .assess_fatigue_at(user_id, days_after(28))
        .await
        .err()
        .unwrap();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(err.http_status(), 502);
    assert_eq!(err.context.user_id, Some(user_id));
    assert!(err.message.starts_with(service_names::READINESS));
    assert_eq!(err.context.details["service"], service_names::READINESS);
    assert_eq!(err.context.details["cause"], "RESOURCE_UNAVAILABLE");
    assert!(std::error::Error::source(&err).is_some());
}
