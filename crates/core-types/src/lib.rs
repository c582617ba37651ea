//! Shared primitives for the ocvbot perception-action loop.
//!
//! Everything here is a plain value: patterns and regions the perceiver
//! searches, timing policies the state machine hands to the ports, and the
//! static experience table used for stats.

mod experience;
mod timing;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use experience::ExperienceTable;
pub use timing::{DelayRange, Jitter, PollPolicy};

/// Validation failures for shared primitives.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid delay range: min {min_ms}ms exceeds max {max_ms}ms")]
    InvalidRange { min_ms: u64, max_ms: u64 },

    #[error("invalid offset range: min {min} exceeds max {max}")]
    InvalidOffset { min: i32, max: i32 },

    #[error("confidence {0} is outside [0, 1]")]
    InvalidConfidence(f32),

    #[error("poll policy needs at least one poll")]
    ZeroPolls,

    #[error("probability {0} is outside [0, 1]")]
    InvalidChance(f64),

    #[error("task needs at least one target")]
    NoTargets,

    #[error("task needs at least one cycle")]
    ZeroCycles,
}

/// Reference image ("needle") searched for inside a screen region.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(pub PathBuf);

impl Pattern {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Screen area a pattern is matched in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// The 3D viewport of the client.
    GameScreen,
    /// Whole chat box.
    ChatMenu,
    /// Most recent line of the chat box.
    ChatMenuRecent,
    Inventory,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::GameScreen => "game_screen",
            Region::ChatMenu => "chat_menu",
            Region::ChatMenuRecent => "chat_menu_recent",
            Region::Inventory => "inventory",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The "available" and "depleted" looks of one interactive object.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    pub active: Pattern,
    pub exhausted: Pattern,
}

impl TargetDescriptor {
    pub fn new(active: impl Into<PathBuf>, exhausted: impl Into<PathBuf>) -> Self {
        Self {
            active: Pattern::new(active),
            exhausted: Pattern::new(exhausted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_is_transparent_in_yaml() {
        let pattern: Pattern = serde_yaml::from_str("needles/rock.png").unwrap();
        assert_eq!(pattern.path(), Path::new("needles/rock.png"));
        assert_eq!(pattern.to_string(), "needles/rock.png");
    }

    #[test]
    fn region_names_are_snake_case() {
        let region: Region = serde_yaml::from_str("chat_menu_recent").unwrap();
        assert_eq!(region, Region::ChatMenuRecent);
        assert_eq!(Region::GameScreen.to_string(), "game_screen");
    }
}
