//! Timing policies: randomized delays and bounded polling.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Inclusive millisecond range a delay is drawn from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Fixed delay, mostly useful in tests.
    pub const fn fixed(ms: u64) -> Self {
        Self::new(ms, ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.min_ms > self.max_ms {
            return Err(CoreError::InvalidRange {
                min_ms: self.min_ms,
                max_ms: self.max_ms,
            });
        }
        Ok(())
    }

    pub fn sample(&self, jitter: &mut Jitter) -> Duration {
        jitter.delay(self)
    }
}

/// Bound on a wait: how many times to sample, how long to sleep between
/// samples and the match score a sample needs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PollPolicy {
    pub max_polls: u32,
    pub sleep: DelayRange,
    pub confidence: f32,
}

impl PollPolicy {
    pub const fn new(max_polls: u32, sleep: DelayRange, confidence: f32) -> Self {
        Self {
            max_polls,
            sleep,
            confidence,
        }
    }

    /// A single probe with no sleep.
    pub const fn once(confidence: f32) -> Self {
        Self::new(1, DelayRange::fixed(0), confidence)
    }

    /// Upper bound on the wall time a wait under this policy can take.
    pub fn worst_case(&self) -> Duration {
        self.sleep.max() * self.max_polls
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_polls == 0 {
            return Err(CoreError::ZeroPolls);
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(CoreError::InvalidConfidence(self.confidence));
        }
        self.sleep.validate()
    }
}

/// Source of human-like timing variance.
///
/// Owned by whoever drives the ports so a seeded instance makes a run
/// reproducible.
#[derive(Debug)]
pub struct Jitter {
    rng: StdRng,
}

impl Jitter {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn delay(&mut self, range: &DelayRange) -> Duration {
        if range.min_ms >= range.max_ms {
            return Duration::from_millis(range.min_ms);
        }
        Duration::from_millis(self.rng.gen_range(range.min_ms..=range.max_ms))
    }

    /// Returns true with probability `p`. Values outside `[0, 1]` clamp.
    pub fn chance(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.rng.gen_bool(p)
    }

    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Self::from_entropy()
    }
}
