//! Skilling configuration, loaded once by the caller and passed in.

use std::path::{Path, PathBuf};

use action_primitives::{ClickTempo, IdlePause, MoveJitter};
use ocvbot_core_types::{CoreError, DelayRange, Pattern, PollPolicy};
use serde::{Deserialize, Serialize};

/// Tunables for a drop-mining task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillingConfig {
    pub drop_sapphire: bool,
    pub drop_emerald: bool,
    pub drop_ruby: bool,
    pub drop_diamond: bool,
    pub drop_clue_geode: bool,

    /// Log out before surfacing a fatal inventory error
    pub logout_on_fatal: bool,

    /// Safety bound on full passes over the targets
    pub max_cycles: u32,

    /// Root of the needle image tree
    pub needles_dir: PathBuf,

    pub idle_pause: IdlePause,
    pub click_tempo: ClickTempo,
    pub move_jitter: MoveJitter,

    /// Chat confirmation that the action began
    pub start_wait: PollPolicy,

    /// Target switching to its exhausted look
    pub depletion_wait: PollPolicy,

    /// Probe for the inventory-full chat message
    pub full_check: PollPolicy,
}

impl Default for SkillingConfig {
    fn default() -> Self {
        Self {
            drop_sapphire: true,
            drop_emerald: true,
            drop_ruby: true,
            drop_diamond: true,
            drop_clue_geode: true,
            logout_on_fatal: true,
            max_cycles: 99,
            needles_dir: PathBuf::from("needles"),
            idle_pause: IdlePause::default(),
            click_tempo: ClickTempo::default(),
            move_jitter: MoveJitter::default(),
            start_wait: PollPolicy::new(5, DelayRange::new(100, 200), 0.9),
            depletion_wait: PollPolicy::new(100, DelayRange::new(100, 200), 0.85),
            full_check: PollPolicy::once(0.95),
        }
    }
}

impl SkillingConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_cycles == 0 {
            return Err(CoreError::ZeroCycles);
        }
        self.idle_pause.validate()?;
        self.click_tempo.validate()?;
        self.move_jitter.validate()?;
        self.start_wait.validate()?;
        self.depletion_wait.validate()?;
        self.full_check.validate()
    }

    pub fn drop_toggles(&self) -> DropToggles {
        DropToggles {
            sapphire: self.drop_sapphire,
            emerald: self.drop_emerald,
            ruby: self.drop_ruby,
            diamond: self.drop_diamond,
            clue_geode: self.drop_clue_geode,
        }
    }

    pub fn needles(&self) -> NeedleSet {
        NeedleSet::under(&self.needles_dir)
    }
}

/// Which secondary items get dropped alongside the ore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropToggles {
    pub sapphire: bool,
    pub emerald: bool,
    pub ruby: bool,
    pub diamond: bool,
    pub clue_geode: bool,
}

impl DropToggles {
    pub const ALL: DropToggles = DropToggles {
        sapphire: true,
        emerald: true,
        ruby: true,
        diamond: true,
        clue_geode: true,
    };

    pub const NONE: DropToggles = DropToggles {
        sapphire: false,
        emerald: false,
        ruby: false,
        diamond: false,
        clue_geode: false,
    };
}

/// Chat-box signals the state machine watches for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedleSet {
    pub mining_started: Pattern,
    pub inventory_full: Pattern,
}

impl NeedleSet {
    pub fn under(dir: &Path) -> Self {
        Self {
            mining_started: Pattern::new(dir.join("chat-menu/mining-started.png")),
            inventory_full: Pattern::new(dir.join("chat-menu/mining-inventory-full.png")),
        }
    }
}
