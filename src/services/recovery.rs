// ABOUTME: Recovery service processing weekly injury check-ins against the record store
// ABOUTME: Stamps check-ins, applies assessed status transitions and escalates to medical advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database::InjuryRecordStore;
use crate::errors::AppResult;
use crate::intelligence::recovery_assessor::CheckInContext;
use crate::intelligence::{
    CheckInInput, RecoveryAssessor, RecoveryPhaseInfo, RecoveryProgressResult, RecoveryStatus,
    ReturnToActivityAssessment,
};
use crate::logging::EngineLogger;
use crate::models::InjuryStatus;
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

/// Weekly recovery tracking over stored injury records
///
/// Concurrent check-ins against the same record are not coordinated; the caller
/// is expected to keep at most one in flight per record.
#[derive(Clone)]
pub struct RecoveryService {
    store: InjuryRecordStore,
    assessor: RecoveryAssessor,
}

impl RecoveryService {
    /// Create a service over a store and assessor
    #[must_use]
    pub const fn new(store: InjuryRecordStore, assessor: RecoveryAssessor) -> Self {
        Self { store, assessor }
    }

    /// The injury record store
    #[must_use]
    pub const fn store(&self) -> &InjuryRecordStore {
        &self.store
    }

    /// Process a weekly check-in now
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the injury id is unknown, or the store error
    /// unchanged if a write fails
    pub async fn process_check_in(
        &self,
        injury_id: Uuid,
        input: &CheckInInput,
    ) -> AppResult<RecoveryProgressResult> {
        self.process_check_in_at(injury_id, input, Utc::now()).await
    }

    /// Process a weekly check-in at `now`
    ///
    /// Resolved assessments resolve the record, improving ones move it to
    /// recovering; worsening and plateau assessments leave the stored status as is.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the injury id is unknown, or the store error
    /// unchanged if a write fails
    pub async fn process_check_in_at(
        &self,
        injury_id: Uuid,
        input: &CheckInInput,
        now: DateTime<Utc>,
    ) -> AppResult<RecoveryProgressResult> {
        let record = self.store.update_last_check_in_at(injury_id, now).await?;
        let result = self.assessor.assess(&record, input, now);

        match result.status.stored_status() {
            Some(InjuryStatus::Resolved) if record.status != InjuryStatus::Resolved => {
                self.store.resolve_at(injury_id, now).await?;
            }
            Some(status) if status != record.status => {
                self.store.update_status(injury_id, status, None).await?;
                info!(
                    injury.id = %injury_id,
                    from = %record.status,
                    to = %status,
                    "Injury status updated from check-in"
                );
            }
            _ => {}
        }

        if result.requires_medical_attention {
            let ctx = CheckInContext {
                pain_level: input.pain_level,
                rom_quality: input.rom_quality,
                activity_tolerance: input.activity_tolerance,
                severity: record.severity,
                progress_score: result.progress_score,
                days_in_recovery: result.days_in_recovery,
            };
            let reasons = self.assessor.escalation_reasons(&ctx, result.status);
            EngineLogger::log_medical_escalation(injury_id, &reasons, result.days_in_recovery);
        }
        if matches!(result.status, RecoveryStatus::Worsening | RecoveryStatus::Plateau) {
            info!(
                injury.id = %injury_id,
                recovery.status = ?result.status,
                stored.status = %record.status,
                "Assessment does not change stored status"
            );
        }

        EngineLogger::log_check_in(injury_id, &result);
        Ok(result)
    }

    /// Whether an injury is cleared for full activity
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the injury id is unknown
    pub async fn assess_return_to_activity(
        &self,
        injury_id: Uuid,
    ) -> AppResult<ReturnToActivityAssessment> {
        let record = self.store.find(injury_id).await?;
        Ok(RecoveryAssessor::return_to_activity(&record))
    }

    /// Informational recovery phase for a number of days since the injury
    #[must_use]
    pub fn get_recovery_phase(&self, days_in_recovery: i64) -> RecoveryPhaseInfo {
        self.assessor.recovery_phase(days_in_recovery)
    }
}
