// ABOUTME: Injury record store enforcing record invariants over the record-store collaborator
// ABOUTME: CRUD, open-injury and check-in queries, and severity/body-part/recovery-time aggregates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::repository::{InjuryFilter, InjuryRepository, InjurySort};
use crate::logging::EngineLogger;
use crate::models::{BodyPart, InjuryRecord, InjuryStatus, NewInjuryRecord, Severity};
use chrono::{DateTime, Duration, Utc};
use pierre_core::errors::DatabaseError;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Injury record store
///
/// Invariants maintained on every write:
/// - `resolved_at` is set if and only if the status is resolved
/// - `last_check_in_at` never moves backwards
#[derive(Clone)]
pub struct InjuryRecordStore {
    repository: Arc<dyn InjuryRepository>,
    check_in_interval_days: i64,
}

impl InjuryRecordStore {
    /// Create a store over a repository with the given check-in cadence
    #[must_use]
    pub fn new(repository: Arc<dyn InjuryRepository>, check_in_interval_days: i64) -> Self {
        Self {
            repository,
            check_in_interval_days,
        }
    }

    /// Underlying repository
    #[must_use]
    pub fn repository(&self) -> &Arc<dyn InjuryRepository> {
        &self.repository
    }

    /// Create a record, defaulting status to active and report time to now
    ///
    /// # Errors
    ///
    /// Returns an error if the repository rejects the insert
    pub async fn create(&self, fields: NewInjuryRecord) -> Result<InjuryRecord, DatabaseError> {
        self.create_at(fields, Utc::now()).await
    }

    /// Create a record using `now` as the default report time
    ///
    /// # Errors
    ///
    /// Returns an error if the repository rejects the insert
    pub async fn create_at(
        &self,
        fields: NewInjuryRecord,
        now: DateTime<Utc>,
    ) -> Result<InjuryRecord, DatabaseError> {
        let status = fields.status.unwrap_or(InjuryStatus::Active);
        let reported_at = fields.reported_at.unwrap_or(now);
        let record = InjuryRecord {
            id: Uuid::new_v4(),
            user_id: fields.user_id,
            body_part: fields.body_part,
            severity: fields.severity,
            description: fields.description,
            status,
            reported_at,
            resolved_at: (status == InjuryStatus::Resolved).then_some(now),
            last_check_in_at: None,
        };

        let created = self.repository.create(record).await?;
        info!(
            injury.id = %created.id,
            user.id = %created.user_id,
            injury.body_part = %created.body_part,
            injury.severity = %created.severity,
            "Injury record created"
        );
        Ok(created)
    }

    /// Fetch a record
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown
    pub async fn find(&self, id: Uuid) -> Result<InjuryRecord, DatabaseError> {
        self.repository.find(id).await
    }

    /// Filtered, ordered and optionally truncated records
    ///
    /// # Errors
    ///
    /// Returns an error if the repository query fails
    pub async fn query(
        &self,
        filter: &InjuryFilter,
        sort: InjurySort,
        limit: Option<usize>,
    ) -> Result<Vec<InjuryRecord>, DatabaseError> {
        self.repository.query(filter, sort, limit).await
    }

    /// Set the status, keeping `resolved_at` consistent with it
    ///
    /// A resolved status uses the given resolution time, or keeps an existing one,
    /// or falls back to now. Any other status clears the resolution time.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown
    pub async fn update_status(
        &self,
        id: Uuid,
        status: InjuryStatus,
        resolved_at: Option<DateTime<Utc>>,
    ) -> Result<InjuryRecord, DatabaseError> {
        let now = Utc::now();
        let result = self
            .repository
            .update(
                id,
                Box::new(move |record| {
                    record.status = status;
                    record.resolved_at = if status == InjuryStatus::Resolved {
                        Some(resolved_at.or(record.resolved_at).unwrap_or(now))
                    } else {
                        None
                    };
                }),
            )
            .await;
        EngineLogger::log_store_operation("update_status", id, result.is_ok());
        result
    }

    /// Mark a record resolved now
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown
    pub async fn resolve(&self, id: Uuid) -> Result<InjuryRecord, DatabaseError> {
        self.resolve_at(id, Utc::now()).await
    }

    /// Mark a record resolved at `now`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown
    pub async fn resolve_at(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<InjuryRecord, DatabaseError> {
        let record = self
            .update_status(id, InjuryStatus::Resolved, Some(now))
            .await?;
        info!(injury.id = %id, "Injury resolved");
        Ok(record)
    }

    /// Stamp a check-in now
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown
    pub async fn update_last_check_in(&self, id: Uuid) -> Result<InjuryRecord, DatabaseError> {
        self.update_last_check_in_at(id, Utc::now()).await
    }

    /// Stamp a check-in at `now`; an older stamp than the stored one is ignored
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown
    pub async fn update_last_check_in_at(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<InjuryRecord, DatabaseError> {
        let result = self
            .repository
            .update(
                id,
                Box::new(move |record| {
                    match record.last_check_in_at {
                        Some(last) if last >= now => {}
                        _ => record.last_check_in_at = Some(now),
                    }
                }),
            )
            .await;
        EngineLogger::log_store_operation("update_last_check_in", id, result.is_ok());
        result
    }

    /// Open (active or recovering) records for a user, most recent first
    ///
    /// # Errors
    ///
    /// Returns an error if the repository query fails
    pub async fn get_active(&self, user_id: Uuid) -> Result<Vec<InjuryRecord>, DatabaseError> {
        self.query(
            &InjuryFilter::for_user(user_id).open(),
            InjurySort::ReportedAtDesc,
            None,
        )
        .await
    }

    /// Open records whose last check-in (or report) is older than the check-in interval
    ///
    /// # Errors
    ///
    /// Returns an error if the repository query fails
    pub async fn get_records_needing_check_in(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<InjuryRecord>, DatabaseError> {
        self.get_records_needing_check_in_at(user_id, Utc::now())
            .await
    }

    /// Same as [`Self::get_records_needing_check_in`] evaluated at `now`
    ///
    /// # Errors
    ///
    /// Returns an error if the repository query fails
    pub async fn get_records_needing_check_in_at(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<InjuryRecord>, DatabaseError> {
        let cutoff = now - Duration::days(self.check_in_interval_days);
        let mut due: Vec<InjuryRecord> = self
            .get_active(user_id)
            .await?
            .into_iter()
            .filter(|record| record.check_in_anchor() < cutoff)
            .collect();
        due.sort_by_key(InjuryRecord::check_in_anchor);
        Ok(due)
    }

    /// Number of a user's records per severity
    ///
    /// # Errors
    ///
    /// Returns an error if the repository query fails
    pub async fn count_by_severity(
        &self,
        user_id: Uuid,
    ) -> Result<BTreeMap<Severity, usize>, DatabaseError> {
        let mut counts = BTreeMap::new();
        for record in self.all_for_user(user_id).await? {
            *counts.entry(record.severity).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Number of a user's records per body part
    ///
    /// # Errors
    ///
    /// Returns an error if the repository query fails
    pub async fn count_by_body_part(
        &self,
        user_id: Uuid,
    ) -> Result<BTreeMap<BodyPart, usize>, DatabaseError> {
        let mut counts = BTreeMap::new();
        for record in self.all_for_user(user_id).await? {
            *counts.entry(record.body_part).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Mean days from report to resolution over a user's resolved records
    ///
    /// # Errors
    ///
    /// Returns an error if the repository query fails
    pub async fn average_recovery_days(&self, user_id: Uuid) -> Result<Option<f64>, DatabaseError> {
        let durations: Vec<f64> = self
            .query(
                &InjuryFilter::for_user(user_id).resolved(),
                InjurySort::ReportedAtAsc,
                None,
            )
            .await?
            .iter()
            .filter_map(InjuryRecord::recovery_duration_days)
            .collect();

        if durations.is_empty() {
            return Ok(None);
        }
        Ok(Some(durations.iter().sum::<f64>() / durations.len() as f64))
    }

    /// Soft-delete a record; exceptional, records are normally resolved instead
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is unknown, `Deleted` if already deleted
    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let result = self.repository.mark_deleted(id).await;
        EngineLogger::log_store_operation("delete", id, result.is_ok());
        result
    }

    async fn all_for_user(&self, user_id: Uuid) -> Result<Vec<InjuryRecord>, DatabaseError> {
        self.query(
            &InjuryFilter::for_user(user_id),
            InjurySort::ReportedAtAsc,
            None,
        )
        .await
    }
}
