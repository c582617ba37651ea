//! Input driver port
//!
//! Four primitives the skilling loop needs:
//! 1. click_pattern - locate a pattern and click it with human-like tempo
//! 2. move_away - nudge the pointer off a target
//! 3. drop_item - drop every stack of an item from the inventory
//! 4. logout - leave the game session safely

use async_trait::async_trait;
use ocvbot_core_types::{Pattern, Region};

use crate::{
    errors::ActionError,
    types::{ClickOutcome, ClickTempo, DropOutcome},
};

/// Input driver trait
///
/// Implementations own their pointer curves and click randomization. The
/// caller draws move-away offsets from `MoveJitter` with its own `Jitter`.
#[async_trait]
pub trait InputDriver: Send + Sync {
    /// Click `pattern` inside `region` if it can be located
    async fn click_pattern(
        &self,
        region: Region,
        pattern: &Pattern,
        tempo: &ClickTempo,
    ) -> Result<ClickOutcome, ActionError>;

    /// Move the pointer `dx`, `dy` pixels away from where it is
    async fn move_away(&self, dx: i32, dy: i32) -> Result<(), ActionError>;

    /// Drop every inventory stack matching `item`
    async fn drop_item(&self, item: &Pattern) -> Result<DropOutcome, ActionError>;

    /// Log out of the game client
    async fn logout(&self) -> Result<(), ActionError>;
}
