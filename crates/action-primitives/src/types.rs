//! Core data types for action primitives

use ocvbot_core_types::{CoreError, DelayRange, Jitter, PollPolicy};
use serde::{Deserialize, Serialize};

/// Timing of one click on a located pattern
///
/// - `poll`: how hard to look for the pattern before giving up
/// - `move_duration`: pointer travel time to the match
/// - `pre_click` / `post_click`: pauses around the button press
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickTempo {
    pub poll: PollPolicy,
    pub move_duration: DelayRange,
    pub pre_click: DelayRange,
    pub post_click: DelayRange,
}

impl Default for ClickTempo {
    fn default() -> Self {
        Self {
            poll: PollPolicy::new(1, DelayRange::new(0, 100), 0.8),
            move_duration: DelayRange::new(5, 500),
            pre_click: DelayRange::new(0, 100),
            post_click: DelayRange::new(0, 1),
        }
    }
}

impl ClickTempo {
    pub fn validate(&self) -> Result<(), CoreError> {
        self.poll.validate()?;
        self.move_duration.validate()?;
        self.pre_click.validate()?;
        self.post_click.validate()
    }
}

/// Relative pointer displacement bounds, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveJitter {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Default for MoveJitter {
    fn default() -> Self {
        Self {
            x_min: 15,
            x_max: 100,
            y_min: 15,
            y_max: 100,
        }
    }
}

impl MoveJitter {
    pub fn validate(&self) -> Result<(), CoreError> {
        for (min, max) in [(self.x_min, self.x_max), (self.y_min, self.y_max)] {
            if min > max {
                return Err(CoreError::InvalidOffset { min, max });
            }
        }
        Ok(())
    }

    /// Draw an `(dx, dy)` offset, inclusive on both axes
    pub fn sample(&self, jitter: &mut Jitter) -> (i32, i32) {
        (
            jitter.range_i32(self.x_min, self.x_max),
            jitter.range_i32(self.y_min, self.y_max),
        )
    }
}

/// Result of a click attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Clicked,
    /// The pattern was not on screen; nothing was clicked
    NotFound,
}

/// Result of dropping every stack of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Dropped { count: u32 },
    NotFound,
}

impl DropOutcome {
    pub fn count(&self) -> u32 {
        match self {
            DropOutcome::Dropped { count } => *count,
            DropOutcome::NotFound => 0,
        }
    }
}
