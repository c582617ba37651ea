pub mod app;
pub mod commands;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod env;
pub mod output;
pub mod runtime;
pub mod stats;
pub mod xp;

pub use config::{cmd_config, ConfigArgs};
pub use stats::{cmd_stats, StatsArgs};
pub use xp::cmd_xp;
