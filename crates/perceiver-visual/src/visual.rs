//! Visual perceiver port
use crate::{errors::VisualError, models::*};
use async_trait::async_trait;
use ocvbot_core_types::{Jitter, Pattern, PollPolicy, Region};
use tracing::debug;

/// Perception port.
///
/// Implementations answer one question: is `pattern` visible in `region` with
/// at least `confidence`? Waiting is built on top of that answer.
#[async_trait]
pub trait VisualPerceiver: Send + Sync {
    /// Sample the region once
    async fn locate(
        &self,
        region: Region,
        pattern: &Pattern,
        confidence: f32,
    ) -> Result<MatchOutcome, VisualError>;

    /// Poll until the pattern appears or the policy's poll bound lapses
    async fn wait_for(
        &self,
        region: Region,
        pattern: &Pattern,
        policy: &PollPolicy,
        jitter: &mut Jitter,
    ) -> Result<WaitOutcome, VisualError> {
        poll_until(self, region, pattern, policy, jitter).await
    }
}

/// Bounded poll over [`VisualPerceiver::locate`].
///
/// Sleeps a sampled `policy.sleep` between polls and never after the last
/// one, so the total wait stays under `policy.worst_case()`.
pub async fn poll_until<P>(
    perceiver: &P,
    region: Region,
    pattern: &Pattern,
    policy: &PollPolicy,
    jitter: &mut Jitter,
) -> Result<WaitOutcome, VisualError>
where
    P: VisualPerceiver + ?Sized,
{
    policy.validate()?;

    for poll in 1..=policy.max_polls {
        let outcome = perceiver
            .locate(region, pattern, policy.confidence)
            .await?;
        debug!(
            %region,
            %pattern,
            poll,
            max_polls = policy.max_polls,
            ?outcome,
            "poll sample"
        );

        if let MatchOutcome::Found { score } = outcome {
            return Ok(WaitOutcome::Found { polls: poll, score });
        }

        if poll < policy.max_polls {
            tokio::time::sleep(policy.sleep.sample(jitter)).await;
        }
    }

    Ok(WaitOutcome::TimedOut {
        polls: policy.max_polls,
    })
}
