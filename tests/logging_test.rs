// ABOUTME: Tests for logging configuration and environment variable handling
// ABOUTME: Validates format selection, production defaults and service naming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_recovery::constants::service_names;
use pierre_recovery::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_VARS: &[&str] = &[
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "LOG_INCLUDE_SPANS",
];

fn clear_logging_env() {
    for key in LOGGING_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "recovery-worker");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "recovery-worker");
    // production turns on location and thread details
    assert!(config.include_location);
    assert!(config.include_thread);
    assert!(!config.include_spans);

    clear_logging_env();
}

#[test]
#[serial]
fn test_compact_format_and_spans_from_env() {
    env::set_var("LOG_FORMAT", "compact");
    env::set_var("LOG_INCLUDE_SPANS", "1");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Compact);
    assert!(config.include_spans);
    assert!(!config.include_location);

    clear_logging_env();
}

#[test]
#[serial]
fn test_unknown_format_falls_back_to_pretty() {
    env::set_var("LOG_FORMAT", "xml");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Pretty);
    clear_logging_env();
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, service_names::PIERRE_RECOVERY_ENGINE);
    assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
    assert!(!config.include_location);
}
