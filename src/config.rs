//! Top-level bot configuration

use std::path::PathBuf;

use ocvbot_core_types::CoreError;
use ocvbot_skilling::SkillingConfig;
use serde::{Deserialize, Serialize};

/// Everything read from `config.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Lifetime stats record
    pub stats_path: PathBuf,

    pub skilling: SkillingConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            stats_path: PathBuf::from("stats.json"),
            skilling: SkillingConfig::default(),
        }
    }
}

impl BotConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        self.skilling.validate()
    }
}
