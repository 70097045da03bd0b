// ABOUTME: Re-exports command modules for pierre-recovery-cli
// ABOUTME: Note analysis commands and recovery/deload planning commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod plan;
