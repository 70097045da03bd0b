// ABOUTME: Fatigue service gathering training-load and readiness signals for deload decisions
// ABOUTME: Compares tonnage windows, averages recent RPE and composes deload recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use crate::intelligence::fatigue::{average_rpe, tonnage, volume_increase};
use crate::intelligence::{
    apply_deload_to_workout, AdjustedWorkout, DeloadPrescription, FatigueAnalyzer,
    FatigueAssessment, FatigueLevel, FatigueSignals,
};
use crate::logging::EngineLogger;
use crate::models::WorkoutSet;
use crate::providers::{ReadinessProvider, WorkoutHistoryProvider};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Deload decision for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeloadRecommendation {
    /// A fatigue-driven deload is recommended
    pub should_deload: bool,
    /// Fatigue level, present when a deload is recommended
    pub fatigue_level: Option<FatigueLevel>,
    /// Prescription, present when a deload is recommended
    pub prescription: Option<DeloadPrescription>,
    /// The calendar puts the user on a programmed deload week
    pub programmed_deload_week: bool,
    /// Underlying fatigue assessment
    pub assessment: FatigueAssessment,
}

/// Training fatigue assessment over external workout and readiness data
#[derive(Clone)]
pub struct FatigueService {
    workouts: Arc<dyn WorkoutHistoryProvider>,
    readiness: Arc<dyn ReadinessProvider>,
    analyzer: FatigueAnalyzer,
}

impl FatigueService {
    /// Create a service over the given collaborators
    #[must_use]
    pub fn new(
        workouts: Arc<dyn WorkoutHistoryProvider>,
        readiness: Arc<dyn ReadinessProvider>,
        analyzer: FatigueAnalyzer,
    ) -> Self {
        Self {
            workouts,
            readiness,
            analyzer,
        }
    }

    /// The analyzer in use
    #[must_use]
    pub const fn analyzer(&self) -> &FatigueAnalyzer {
        &self.analyzer
    }

    /// Read every fatigue signal for a user as of `now`
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` if a workout-history or readiness read fails
    pub async fn gather_signals_at(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<FatigueSignals> {
        let (previous_start, current_start) = self.analyzer.volume_windows(now);
        let current = self.window_tonnage(user_id, current_start, now).await?;
        let previous = self
            .window_tonnage(user_id, previous_start, current_start)
            .await?;

        let recent = self
            .workouts
            .recent_workouts(user_id, now, self.analyzer.config().rpe_workout_count)
            .await
            .map_err(collaborator_error(service_names::WORKOUT_HISTORY, user_id))?;
        let recent_ids: Vec<Uuid> = recent.iter().map(|w| w.id).collect();
        let recent_sets = self.sets_for(user_id, &recent_ids).await?;

        let readiness_declining = self
            .readiness
            .is_readiness_declining(user_id)
            .await
            .map_err(collaborator_error(service_names::READINESS, user_id))?;
        let readiness_score = self
            .readiness
            .today_readiness_score(user_id)
            .await
            .map_err(collaborator_error(service_names::READINESS, user_id))?
            .map(|r| r.score);

        debug!(
            user.id = %user_id,
            tonnage.current = current,
            tonnage.previous = previous,
            recent_workouts = recent.len(),
            "Fatigue signals gathered"
        );

        Ok(FatigueSignals {
            volume_increase: volume_increase(current, previous),
            average_rpe: average_rpe(&recent_sets),
            readiness_declining,
            readiness_score,
        })
    }

    /// Assess fatigue now
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` if a workout-history or readiness read fails
    pub async fn assess_fatigue(&self, user_id: Uuid) -> AppResult<FatigueAssessment> {
        self.assess_fatigue_at(user_id, Utc::now()).await
    }

    /// Assess fatigue as of `now`
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` if a workout-history or readiness read fails
    pub async fn assess_fatigue_at(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<FatigueAssessment> {
        let signals = self.gather_signals_at(user_id, now).await?;
        let assessment = self.analyzer.assess(&signals);
        EngineLogger::log_fatigue_assessment(user_id, &assessment);
        Ok(assessment)
    }

    /// Deload recommendation now
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` if a workout-history or readiness read fails
    pub async fn get_deload_recommendation(
        &self,
        user_id: Uuid,
        program_start: Option<DateTime<Utc>>,
    ) -> AppResult<DeloadRecommendation> {
        self.get_deload_recommendation_at(user_id, program_start, Utc::now())
            .await
    }

    /// Deload recommendation as of `now`
    ///
    /// The programmed-week flag is calendar based and reported independently of
    /// the fatigue signals.
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` if a workout-history or readiness read fails
    pub async fn get_deload_recommendation_at(
        &self,
        user_id: Uuid,
        program_start: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> AppResult<DeloadRecommendation> {
        let assessment = self.assess_fatigue_at(user_id, now).await?;
        let programmed_deload_week = program_start
            .is_some_and(|start| self.analyzer.is_programmed_deload_week(start, now));

        if !assessment.recommend_deload {
            return Ok(DeloadRecommendation {
                should_deload: false,
                fatigue_level: None,
                prescription: None,
                programmed_deload_week,
                assessment,
            });
        }

        let level = self
            .analyzer
            .determine_fatigue_level(assessment.reasons.len());
        let prescription = self.analyzer.calculate_deload_volume(level);
        info!(
            user.id = %user_id,
            fatigue.level = %level,
            deload.volume = prescription.volume_reduction,
            deload.days = prescription.duration_days,
            "Deload recommended"
        );

        Ok(DeloadRecommendation {
            should_deload: true,
            fatigue_level: Some(level),
            prescription: Some(prescription),
            programmed_deload_week,
            assessment,
        })
    }

    /// Scale a planned exercise by a deload prescription
    #[must_use]
    pub fn apply_deload_to_workout(
        sets: u32,
        weight: f64,
        prescription: &DeloadPrescription,
    ) -> AdjustedWorkout {
        apply_deload_to_workout(sets, weight, prescription)
    }

    async fn window_tonnage(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<f64> {
        let workouts = self
            .workouts
            .workouts_in_range(user_id, start, end)
            .await
            .map_err(collaborator_error(service_names::WORKOUT_HISTORY, user_id))?;
        let ids: Vec<Uuid> = workouts.iter().map(|w| w.id).collect();
        Ok(tonnage(&self.sets_for(user_id, &ids).await?))
    }

    async fn sets_for(&self, user_id: Uuid, workout_ids: &[Uuid]) -> AppResult<Vec<WorkoutSet>> {
        if workout_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.workouts
            .sets_for_workouts(workout_ids)
            .await
            .map_err(collaborator_error(service_names::WORKOUT_HISTORY, user_id))
    }
}

/// Wrap a collaborator failure as an external service error for the user
fn collaborator_error(service: &'static str, user_id: Uuid) -> impl FnOnce(AppError) -> AppError {
    move |error| {
        AppError::external_service(service, error.message.clone())
            .with_user_id(user_id)
            .with_details(json!({ "service": service, "cause": error.code }))
            .with_source(error)
    }
}
