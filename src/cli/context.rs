use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::BotConfig;

/// Loaded configuration plus where it came from.
pub struct CliContext {
    config: Arc<BotConfig>,
    config_path: PathBuf,
    from_file: bool,
}

impl CliContext {
    pub fn new(config: BotConfig, config_path: PathBuf, from_file: bool) -> Self {
        Self {
            config: Arc::new(config),
            config_path,
            from_file,
        }
    }

    pub fn config(&self) -> &BotConfig {
        self.config.as_ref()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// False when no file existed and defaults are in effect
    pub fn from_file(&self) -> bool {
        self.from_file
    }

    /// Stats path from a flag, falling back to the configured one
    pub fn stats_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.unwrap_or_else(|| self.config.stats_path.clone())
    }
}
