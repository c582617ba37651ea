use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use ocvbot_stats_store::{LifetimeCounters, StatsStore};
use tracing::info;

use crate::cli::context::CliContext;
use crate::cli::output::OutputFormat;

#[derive(Args, Clone, Debug)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub action: StatsAction,
}

#[derive(Subcommand, Clone, Debug)]
pub enum StatsAction {
    /// Print lifetime counters
    Show {
        /// Stats file (defaults to `stats_path` from the config)
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,
    },

    /// Create a zeroed stats record
    Init {
        /// Stats file (defaults to `stats_path` from the config)
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,

        /// Overwrite an existing record
        #[arg(long)]
        force: bool,
    },
}

pub async fn cmd_stats(args: StatsArgs, ctx: &CliContext, output: OutputFormat) -> Result<()> {
    match args.action {
        StatsAction::Show { path } => {
            let store = StatsStore::at(ctx.stats_path(path));
            let counters = store
                .load()
                .with_context(|| format!("loading stats from {}", store.path().display()))?;
            print_counters(&store, &counters, output)?;
        }
        StatsAction::Init { path, force } => {
            let store = StatsStore::at(ctx.stats_path(path));
            store
                .init(force)
                .with_context(|| format!("initializing {}", store.path().display()))?;
            info!(path = %store.path().display(), force, "Stats record initialized");
            println!("Initialized stats record at {}", store.path().display());
        }
    }

    Ok(())
}

fn print_counters(
    store: &StatsStore,
    counters: &LifetimeCounters,
    output: OutputFormat,
) -> Result<()> {
    match output {
        OutputFormat::Human => {
            println!("Lifetime stats ({}):", store.path().display());
            println!("  Inventories: {}", counters.inventories);
            println!("  Items gathered: {}", counters.items_gathered);
            println!("  XP gained: {:.1}", counters.experience_gained);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(counters)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(counters)?),
    }
    Ok(())
}
