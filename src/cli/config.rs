use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::cli::context::CliContext;
use crate::cli::output::OutputFormat;

#[derive(Args, Clone, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Validate configuration
    Validate,
}

pub async fn cmd_config(args: ConfigArgs, ctx: &CliContext, output: OutputFormat) -> Result<()> {
    let path = ctx.config_path();
    match args.action {
        ConfigAction::Show => match output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(ctx.config())?),
            _ => {
                if ctx.from_file() {
                    println!("# Current configuration ({}):", path.display());
                } else {
                    println!("# Defaults ({} not found):", path.display());
                }
                print!("{}", serde_yaml::to_string(ctx.config())?);
            }
        },
        ConfigAction::Validate => {
            ctx.config()
                .validate()
                .with_context(|| format!("validating {}", path.display()))?;
            if ctx.from_file() {
                println!("Configuration file {} is valid", path.display());
            } else {
                println!(
                    "No configuration file at {}; defaults are valid",
                    path.display()
                );
            }
        }
    }

    Ok(())
}
