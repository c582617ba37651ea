//! Error types for skilling tasks

use action_primitives::ActionError;
use ocvbot_core_types::{CoreError, Pattern};
use ocvbot_stats_store::StatsError;
use perceiver_visual::VisualError;
use thiserror::Error;

/// Everything a skilling task can surface to its caller.
///
/// Soft timeouts never appear here; they are logged and absorbed.
#[derive(Debug, Error)]
pub enum SkillingError {
    /// Inventory reported full yet the gathered item is missing from it
    #[error("inventory is full but {item} could not be found to drop")]
    NothingToDrop { item: Pattern },

    #[error("unknown item category: {0}")]
    UnknownCategory(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] CoreError),

    /// Lifetime stats could not be read, parsed or written
    #[error("stats ledger failed: {0}")]
    Stats(#[from] StatsError),

    #[error("perception failed: {0}")]
    Perception(#[from] VisualError),

    #[error("input failed: {0}")]
    Input(#[from] ActionError),
}

impl SkillingError {
    pub fn is_fatal_logic(&self) -> bool {
        matches!(self, SkillingError::NothingToDrop { .. })
    }
}
