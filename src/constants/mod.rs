// ABOUTME: Constants module re-exported from pierre-core
// ABOUTME: Service identity, time arithmetic and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_core::constants::*;
