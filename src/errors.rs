// ABOUTME: Unified error handling re-exported from pierre-core
// ABOUTME: Keeps crate::errors paths stable for services, the engine facade and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! All error types live in `pierre-core` so the intelligence crate and this
//! crate share one taxonomy. Record-store failures convert into [`AppError`]
//! through `From<DatabaseError>`, configuration failures through
//! `From<ConfigError>`.

pub use pierre_core::errors::*;
