// ABOUTME: Structured error types for record store operations
// ABOUTME: Maps missing records and backend failures onto the unified AppError taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use crate::constants::entities::INJURY_RECORD;
use thiserror::Error;

/// Errors raised by the external record store collaborator
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The referenced record does not exist
    #[error("{entity_type} '{entity_id}' not found")]
    NotFound {
        /// Kind of record (e.g. "Injury record")
        entity_type: &'static str,
        /// Identifier that was looked up
        entity_id: String,
    },

    /// The record exists but has been soft-deleted
    #[error("Record '{entity_id}' has been deleted")]
    Deleted {
        /// Identifier of the deleted record
        entity_id: String,
    },

    /// The backing store failed to execute the operation
    #[error("Query failed: {context}")]
    QueryError {
        /// Backend-specific failure context
        context: String,
    },
}

impl DatabaseError {
    /// Shorthand for a missing injury record
    #[must_use]
    pub fn injury_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: INJURY_RECORD,
            entity_id: id.to_string(),
        }
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        match &error {
            DatabaseError::NotFound { entity_id, .. } => {
                let resource_id = entity_id.clone();
                Self::new(ErrorCode::ResourceNotFound, error.to_string())
                    .with_resource_id(resource_id)
            }
            DatabaseError::Deleted { entity_id } => {
                let resource_id = entity_id.clone();
                Self::new(ErrorCode::ResourceUnavailable, error.to_string())
                    .with_resource_id(resource_id)
            }
            DatabaseError::QueryError { .. } => {
                Self::new(ErrorCode::DatabaseError, error.to_string()).with_source(error)
            }
        }
    }
}
