// ABOUTME: Intelligence module re-exports from pierre-intelligence crate
// ABOUTME: Exposes the classifier, recovery assessor and fatigue analyzer under crate::intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Synchronous rule engines for injury detection, recovery assessment and
//! deload prescription. Everything here is re-exported from the
//! `pierre-intelligence` crate.

// Re-export all public items from pierre-intelligence
pub use pierre_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::fatigue::tonnage)
pub use pierre_intelligence::{config, fatigue, lexicon, recovery_assessor, text_classifier};
