//! Skilling tasks driven by visual feedback.
//!
//! - [`DropMiner`]: two-or-more target mining loop with soft timeouts
//! - [`DisposalPolicy`]: what to drop, in which order, when the inventory fills
//! - [`SkillingConfig`]: every tunable, passed in at construction

pub mod config;
pub mod disposal;
pub mod errors;
pub mod miner;

pub use config::{DropToggles, NeedleSet, SkillingConfig};
pub use disposal::{DisposalEntry, DisposalPolicy, DisposalSummary, SecondaryItem};
pub use errors::SkillingError;
pub use miner::{DropMiner, MinerOutcome, MinerState, MiningJob};
