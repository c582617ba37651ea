//! ocvbot command-line front end
//!
//! Exposes modules for integration testing

pub mod cli;
pub mod config;

pub use config::BotConfig;
