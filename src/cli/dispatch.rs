use super::config::cmd_config;
use super::env::CliArgs;
use super::stats::cmd_stats;
use super::xp::cmd_xp;
use crate::cli::commands::Commands;
use crate::cli::context::CliContext;
use anyhow::Result;

pub async fn dispatch(cli: &CliArgs, ctx: &CliContext) -> Result<()> {
    match cli.command.clone() {
        Commands::Stats(args) => cmd_stats(args, ctx, cli.output).await,
        Commands::Config(args) => cmd_config(args, ctx, cli.output).await,
        Commands::Xp => cmd_xp(cli.output),
    }
}
