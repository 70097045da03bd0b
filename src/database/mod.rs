// ABOUTME: Injury record storage: record-store collaborator trait, in-memory backend and invariant-enforcing store
// ABOUTME: All mutations flow through InjuryRecordStore so resolved_at and check-in invariants hold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Injury Record Storage
//!
//! Persistence and sync mechanics live outside the engine. This module defines the
//! record-store contract the engine consumes ([`InjuryRepository`]), an in-memory
//! implementation for tests and embedders without a backend, and the
//! [`InjuryRecordStore`] that layers the record invariants and queries on top.

mod injury_store;
mod memory;
mod repository;

pub use injury_store::InjuryRecordStore;
pub use memory::InMemoryInjuryRepository;
pub use pierre_core::errors::DatabaseError;
pub use repository::{InjuryFilter, InjuryRepository, InjurySort, RecordMutator};
