// ABOUTME: Pierre recovery CLI - command-line access to the injury and recovery engine
// ABOUTME: Analyzes wellness notes, reports recovery phases, prescribes deloads and prints configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Classify a wellness note
//! pierre-recovery-cli analyze "sharp pain in my lower back when I bend"
//!
//! # Classify with a custom lexicon and show the record it would create
//! pierre-recovery-cli report "knee is swollen after the run" --lexicon lexicon.json
//!
//! # Recovery phase after 10 days
//! pierre-recovery-cli phase 10
//!
//! # Deload prescription applied to a planned 5x100 exercise
//! pierre-recovery-cli deload --level high --sets 5 --weight 100
//!
//! # Effective engine configuration
//! pierre-recovery-cli config
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pierre_recovery::intelligence::FatigueLevel;
use pierre_recovery::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pierre-recovery-cli",
    about = "Pierre injury and recovery engine CLI",
    long_about = "Command-line access to wellness-note injury detection, recovery phases and deload prescriptions. Results are printed as JSON on stdout."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Classify a wellness note
    Analyze {
        /// Free-text wellness note
        notes: String,

        /// Custom lexicon JSON document (defaults to `PIERRE_RECOVERY_LEXICON_PATH`, then the built-in lexicon)
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },

    /// Classify a note and show the injury record a positive detection creates
    Report {
        /// Free-text wellness note
        notes: String,

        /// Custom lexicon JSON document
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },

    /// Recovery phase for a number of days since the injury was reported
    Phase {
        /// Days in recovery
        days: i64,
    },

    /// Deload prescription for a fatigue level
    Deload {
        /// Fatigue level (low, moderate, high)
        #[arg(long)]
        level: FatigueLevel,

        /// Planned sets to scale
        #[arg(long, requires = "weight")]
        sets: Option<u32>,

        /// Planned weight to scale
        #[arg(long, requires = "sets")]
        weight: Option<f64>,
    },

    /// Print the effective engine configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Results go to stdout, logs to stderr; stay quiet unless asked
    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::from_env().with_level(log_level).init()?;
    debug!("Pierre recovery CLI");

    match cli.command {
        Command::Analyze { notes, lexicon } => commands::analyze::analyze(&notes, lexicon),
        Command::Report { notes, lexicon } => commands::analyze::report(&notes, lexicon).await,
        Command::Phase { days } => commands::plan::phase(days),
        Command::Deload {
            level,
            sets,
            weight,
        } => commands::plan::deload(level, sets.zip(weight)),
        Command::Config => commands::plan::config(),
    }
}
