// ABOUTME: In-memory injury record store backed by a concurrent hash map
// ABOUTME: Tracks dirty and soft-deleted flags the way an external sync-backed store would
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::repository::{InjuryFilter, InjuryRepository, InjurySort, RecordMutator};
use crate::models::InjuryRecord;
use async_trait::async_trait;
use dashmap::DashMap;
use pierre_core::errors::DatabaseError;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredRecord {
    record: InjuryRecord,
    dirty: bool,
    deleted: bool,
}

/// Injury repository held entirely in process memory
///
/// Used by tests, the CLI, and embedders that keep records elsewhere. Soft-deleted
/// records are retained for sync but hidden from `find` and `query`.
#[derive(Debug, Default)]
pub struct InMemoryInjuryRepository {
    records: DashMap<Uuid, StoredRecord>,
}

impl InMemoryInjuryRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (not deleted) records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.iter().filter(|entry| !entry.deleted).count()
    }

    /// Whether there are no live records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl InjuryRepository for InMemoryInjuryRepository {
    async fn create(&self, record: InjuryRecord) -> Result<InjuryRecord, DatabaseError> {
        if self.records.contains_key(&record.id) {
            return Err(DatabaseError::QueryError {
                context: format!("Injury record '{}' already exists", record.id),
            });
        }
        self.records.insert(
            record.id,
            StoredRecord {
                record: record.clone(),
                dirty: true,
                deleted: false,
            },
        );
        Ok(record)
    }

    async fn find(&self, id: Uuid) -> Result<InjuryRecord, DatabaseError> {
        self.records
            .get(&id)
            .filter(|entry| !entry.deleted)
            .map(|entry| entry.record.clone())
            .ok_or_else(|| DatabaseError::injury_not_found(id))
    }

    async fn query(
        &self,
        filter: &InjuryFilter,
        sort: InjurySort,
        limit: Option<usize>,
    ) -> Result<Vec<InjuryRecord>, DatabaseError> {
        let mut records: Vec<InjuryRecord> = self
            .records
            .iter()
            .filter(|entry| !entry.deleted && filter.matches(&entry.record))
            .map(|entry| entry.record.clone())
            .collect();
        sort.apply(&mut records);
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        Ok(records)
    }

    async fn update(
        &self,
        id: Uuid,
        mutator: RecordMutator,
    ) -> Result<InjuryRecord, DatabaseError> {
        let mut entry = self
            .records
            .get_mut(&id)
            .filter(|entry| !entry.deleted)
            .ok_or_else(|| DatabaseError::injury_not_found(id))?;
        mutator(&mut entry.record);
        entry.record.id = id;
        entry.dirty = true;
        Ok(entry.record.clone())
    }

    async fn mark_deleted(&self, id: Uuid) -> Result<(), DatabaseError> {
        let mut entry = self
            .records
            .get_mut(&id)
            .ok_or_else(|| DatabaseError::injury_not_found(id))?;
        if entry.deleted {
            return Err(DatabaseError::Deleted {
                entity_id: id.to_string(),
            });
        }
        entry.deleted = true;
        entry.dirty = true;
        Ok(())
    }

    async fn unsynced(&self) -> Result<Vec<Uuid>, DatabaseError> {
        Ok(self
            .records
            .iter()
            .filter(|entry| entry.dirty)
            .map(|entry| *entry.key())
            .collect())
    }

    async fn mark_synced(&self, id: Uuid) -> Result<(), DatabaseError> {
        let mut entry = self
            .records
            .get_mut(&id)
            .ok_or_else(|| DatabaseError::injury_not_found(id))?;
        entry.dirty = false;
        Ok(())
    }
}
