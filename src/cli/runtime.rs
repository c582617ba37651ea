use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::BotConfig;

pub fn init_logging(level: &str, debug: bool) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(level, debug, env.as_deref())?;

    // stdout carries command output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

/// `--debug` wins over `RUST_LOG`, which wins over `--log-level`.
fn log_filter(level: &str, debug: bool, env: Option<&str>) -> Result<EnvFilter> {
    if debug {
        return Ok(EnvFilter::new("debug"));
    }
    let level: tracing::Level = level.parse().context("Invalid log level")?;
    match env.map(EnvFilter::try_new) {
        Some(Ok(filter)) => Ok(filter),
        _ => Ok(EnvFilter::new(level.to_string())),
    }
}

pub struct LoadedConfig {
    pub config: BotConfig,
    pub path: PathBuf,
    pub from_file: bool,
}

pub async fn load_config(config_path: Option<&PathBuf>) -> Result<LoadedConfig> {
    let config_path = match config_path {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .await
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config = parse_config(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;

        info!("Loaded configuration from: {}", config_path.display());
        Ok(LoadedConfig {
            config,
            path: config_path,
            from_file: true,
        })
    } else {
        warn!(
            "Config file not found, using defaults: {}",
            config_path.display()
        );
        Ok(LoadedConfig {
            config: BotConfig::default(),
            path: config_path,
            from_file: false,
        })
    }
}

/// Priority: ./config/config.yaml > <config dir>/ocvbot/config.yaml
fn default_config_path() -> Result<PathBuf> {
    let local_config = PathBuf::from("config/config.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }
    let mut path = dirs::config_dir().context("Failed to get config directory")?;
    path.push("ocvbot");
    path.push("config.yaml");
    Ok(path)
}

pub fn parse_config(content: &str) -> Result<BotConfig> {
    if content.trim().is_empty() {
        return Ok(BotConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}
