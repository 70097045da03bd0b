// ABOUTME: Configuration error types for engine configuration and lexicon validation
// ABOUTME: Defines error variants for invalid ranges, bad overrides and malformed lexicon documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for engine configuration and lexicon validation.

use pierre_core::errors::{AppError, ErrorCode};
use std::io;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., fraction not in (0, 1])
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights don't sum to required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Lexicon document is structurally valid JSON but unusable
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// Lexicon document could not be read
    #[error("Failed to read lexicon: {0}")]
    Io(#[from] io::Error),

    /// Lexicon document is not valid JSON for the expected schema
    #[error("Malformed lexicon document: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
