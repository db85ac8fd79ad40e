//! chatstats CLI: seed the sample groups or replay a message file, then print statistics.
//! Config from env (.env supported) and optional CLI flags.

use anyhow::{Context, Result};
use chat_cli::cli::log_file;
use chat_cli::demo::{demo_report, seed_sample};
use chat_cli::input::{collect_stats, load_messages, replay};
use chat_cli::{load_config, Cli, Commands};
use chat_core::init_tracing;
use chat_store::MessagingStore;
use clap::Parser;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&log_file()).context("Initialize tracing")?;

    match cli.command {
        Commands::Demo { legacy } => {
            let mut store = MessagingStore::with_config(load_config(legacy)?);
            seed_sample(&mut store)?;
            for line in demo_report(&store) {
                println!("{}", line);
            }
        }
        Commands::Report {
            input,
            group,
            legacy,
        } => {
            let mut store = MessagingStore::with_config(load_config(legacy)?);
            let messages = load_messages(&input)?;
            replay(&mut store, &messages)?;
            let stats = collect_stats(&store, group.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
