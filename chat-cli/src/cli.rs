//! CLI parser and config loading.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chat_store::StatsConfig;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chatstats")]
#[command(about = "Group chat statistics CLI: demo, report", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seed the sample groups and print their statistics.
    Demo {
        /// Use name-based matching and shortest-line ordering.
        #[arg(long)]
        legacy: bool,
    },
    /// Replay a JSON message file and print per-group statistics as JSON.
    Report {
        #[arg(short, long)]
        input: PathBuf,
        /// Only report this group.
        #[arg(short, long)]
        group: Option<String>,
        #[arg(long)]
        legacy: bool,
    },
}

/// Loads the statistics policy from env (CHAT_STATS_MATCH_MODE, CHAT_STATS_FREQUENCY_ORDER).
/// `legacy` overrides both settings.
pub fn load_config(legacy: bool) -> Result<StatsConfig> {
    if legacy {
        return Ok(StatsConfig::legacy());
    }
    StatsConfig::load().context("Load statistics policy from env")
}

/// Log file path from LOG_FILE, defaulting to `logs/chatstats.log`.
pub fn log_file() -> String {
    std::env::var("LOG_FILE").unwrap_or_else(|_| "logs/chatstats.log".to_string())
}
