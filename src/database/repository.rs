// ABOUTME: Record-store collaborator contract for injury records
// ABOUTME: Defines filters, sort order and the async repository trait backends implement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{BodyPart, InjuryRecord, InjuryStatus, Severity};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pierre_core::errors::DatabaseError;
use uuid::Uuid;

/// In-place record mutation applied by [`InjuryRepository::update`]
pub type RecordMutator = Box<dyn FnOnce(&mut InjuryRecord) + Send>;

/// Conjunction of optional record filters
///
/// Supports equality (user, severity, body part), set membership (statuses),
/// ranges (report time) and not-null (resolved) predicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InjuryFilter {
    /// Owner equality
    pub user_id: Option<Uuid>,
    /// Status set membership
    pub statuses: Option<Vec<InjuryStatus>>,
    /// Severity equality
    pub severity: Option<Severity>,
    /// Body part equality
    pub body_part: Option<BodyPart>,
    /// Reported at or after
    pub reported_after: Option<DateTime<Utc>>,
    /// Reported strictly before
    pub reported_before: Option<DateTime<Utc>>,
    /// Only records with a resolution time
    pub resolved_only: bool,
}

impl InjuryFilter {
    /// Records owned by one user
    #[must_use]
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Restrict to a set of statuses
    #[must_use]
    pub fn with_statuses(mut self, statuses: &[InjuryStatus]) -> Self {
        self.statuses = Some(statuses.to_vec());
        self
    }

    /// Restrict to open (active or recovering) records
    #[must_use]
    pub fn open(self) -> Self {
        self.with_statuses(&[InjuryStatus::Active, InjuryStatus::Recovering])
    }

    /// Restrict to one severity
    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Restrict to one body part
    #[must_use]
    pub const fn with_body_part(mut self, body_part: BodyPart) -> Self {
        self.body_part = Some(body_part);
        self
    }

    /// Restrict to a report-time window `[after, before)`
    #[must_use]
    pub const fn reported_between(
        mut self,
        after: Option<DateTime<Utc>>,
        before: Option<DateTime<Utc>>,
    ) -> Self {
        self.reported_after = after;
        self.reported_before = before;
        self
    }

    /// Restrict to records with a resolution time
    #[must_use]
    pub const fn resolved(mut self) -> Self {
        self.resolved_only = true;
        self
    }

    /// Whether a record satisfies every set predicate
    #[must_use]
    pub fn matches(&self, record: &InjuryRecord) -> bool {
        fn accepts<T: PartialEq>(expected: Option<&T>, actual: &T) -> bool {
            expected.is_none() || expected == Some(actual)
        }

        let status_ok = match &self.statuses {
            Some(statuses) => statuses.contains(&record.status),
            None => true,
        };
        let after_ok = match self.reported_after {
            Some(after) => record.reported_at >= after,
            None => true,
        };
        let before_ok = match self.reported_before {
            Some(before) => record.reported_at < before,
            None => true,
        };

        accepts(self.user_id.as_ref(), &record.user_id)
            && status_ok
            && accepts(self.severity.as_ref(), &record.severity)
            && accepts(self.body_part.as_ref(), &record.body_part)
            && after_ok
            && before_ok
            && (!self.resolved_only || record.resolved_at.is_some())
    }
}

/// Result ordering for queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InjurySort {
    /// Most recently reported first
    #[default]
    ReportedAtDesc,
    /// Oldest report first
    ReportedAtAsc,
}

impl InjurySort {
    /// Sort records in place
    pub fn apply(self, records: &mut [InjuryRecord]) {
        match self {
            Self::ReportedAtDesc => records.sort_by(|a, b| b.reported_at.cmp(&a.reported_at)),
            Self::ReportedAtAsc => records.sort_by(|a, b| a.reported_at.cmp(&b.reported_at)),
        }
    }
}

/// External record-store collaborator for injury records
///
/// Every successful `create`, `update` and `mark_deleted` flags the record as
/// unsynced until the sync layer acknowledges it with `mark_synced`.
#[async_trait]
pub trait InjuryRepository: Send + Sync {
    /// Insert a fully built record
    async fn create(&self, record: InjuryRecord) -> Result<InjuryRecord, DatabaseError>;

    /// Fetch a live record by id
    async fn find(&self, id: Uuid) -> Result<InjuryRecord, DatabaseError>;

    /// Filter, order and optionally truncate live records
    async fn query(
        &self,
        filter: &InjuryFilter,
        sort: InjurySort,
        limit: Option<usize>,
    ) -> Result<Vec<InjuryRecord>, DatabaseError>;

    /// Apply a mutation to a live record and return the updated copy
    async fn update(&self, id: Uuid, mutator: RecordMutator)
        -> Result<InjuryRecord, DatabaseError>;

    /// Soft-delete a record
    async fn mark_deleted(&self, id: Uuid) -> Result<(), DatabaseError>;

    /// Ids of records changed since the last sync acknowledgement
    async fn unsynced(&self) -> Result<Vec<Uuid>, DatabaseError>;

    /// Acknowledge that a record has been synced
    async fn mark_synced(&self, id: Uuid) -> Result<(), DatabaseError>;
}
