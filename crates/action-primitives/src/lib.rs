//! Action Primitives - input side of the perception-action loop
//!
//! This crate provides the operations the task state machine drives:
//! - click a pattern, move the pointer away, drop an item, log out
//! - tempo types describing human-like delay and movement ranges
//! - a probabilistic idle pause

pub mod errors;
mod primitives;
pub mod types;
mod waiting;

pub use errors::*;
pub use primitives::*;
pub use types::*;
pub use waiting::*;
