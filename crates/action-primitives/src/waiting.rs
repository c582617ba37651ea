//! Built-in idle behavior for action sequences

use ocvbot_core_types::{CoreError, DelayRange, Jitter};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Occasional long pause, so the input stream has no fixed rhythm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdlePause {
    /// Probability of pausing at each opportunity (0.0 - 1.0)
    pub chance: f64,

    /// Pause length range
    pub duration: DelayRange,
}

impl Default for IdlePause {
    fn default() -> Self {
        Self {
            chance: 0.01,
            duration: DelayRange::new(10_000, 60_000),
        }
    }
}

impl IdlePause {
    /// Never pause
    pub const fn disabled() -> Self {
        Self {
            chance: 0.0,
            duration: DelayRange::fixed(0),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0.0..=1.0).contains(&self.chance) {
            return Err(CoreError::InvalidChance(self.chance));
        }
        self.duration.validate()
    }

    /// Roll for a pause; `Some` carries its length
    pub fn maybe_pause(&self, jitter: &mut Jitter) -> Option<Duration> {
        if jitter.chance(self.chance) {
            Some(self.duration.sample(jitter))
        } else {
            None
        }
    }

    /// Roll for a pause and sleep through it if it hits
    pub async fn idle(&self, jitter: &mut Jitter) -> Option<Duration> {
        match self.maybe_pause(jitter) {
            Some(pause) => {
                info!(pause_ms = pause.as_millis() as u64, "Idling");
                sleep(pause).await;
                Some(pause)
            }
            None => {
                debug!("no idle pause this time");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_default_idle_pause_config() {
        let pause = IdlePause::default();
        assert_eq!(pause.chance, 0.01);
        assert_eq!(pause.duration, DelayRange::new(10_000, 60_000));
        assert!(pause.validate().is_ok());
    }

    #[test]
    fn disabled_pause_never_fires() {
        let mut jitter = Jitter::seeded(11);
        let pause = IdlePause::disabled();
        assert!((0..1_000).all(|_| pause.maybe_pause(&mut jitter).is_none()));
    }

    #[test]
    fn certain_pause_stays_in_range() {
        let mut jitter = Jitter::seeded(5);
        let pause = IdlePause {
            chance: 1.0,
            duration: DelayRange::new(1_000, 2_000),
        };
        for _ in 0..100 {
            let length = pause.maybe_pause(&mut jitter).expect("always pauses");
            assert!(length >= Duration::from_millis(1_000));
            assert!(length <= Duration::from_millis(2_000));
        }
    }

    #[test]
    fn chance_above_one_is_invalid() {
        let pause = IdlePause {
            chance: 1.5,
            ..IdlePause::default()
        };
        assert_eq!(pause.validate(), Err(CoreError::InvalidChance(1.5)));
    }

    #[tokio::test(start_paused = true)]
    async fn idle_sleeps_for_the_sampled_length() {
        let mut jitter = Jitter::seeded(2);
        let pause = IdlePause {
            chance: 1.0,
            duration: DelayRange::fixed(30_000),
        };

        let started = Instant::now();
        let slept = pause.idle(&mut jitter).await;

        assert_eq!(slept, Some(Duration::from_secs(30)));
        assert!(started.elapsed() >= Duration::from_secs(30));
    }
}
