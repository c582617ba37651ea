use clap::Subcommand;

use super::config::ConfigArgs;
use super::stats::StatsArgs;

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Inspect or create the lifetime stats record
    Stats(StatsArgs),

    /// Show or validate the configuration
    Config(ConfigArgs),

    /// List experience awarded per gathered item
    Xp,
}
