//! Drop-mining state machine
//!
//! Alternates between targets, clicking each one that is available, waiting
//! for the chat to confirm the action began and then for the target to
//! deplete. A missed start confirmation is ambiguous: the inventory may be
//! full, or the chat line was simply missed between samples. Only a positive
//! inventory-full probe ends the task.

use std::sync::Arc;

use action_primitives::{ClickOutcome, InputDriver};
use ocvbot_core_types::{CoreError, ExperienceTable, Jitter, Pattern, Region, TargetDescriptor};
use ocvbot_stats_store::{LedgerReport, RunCounters, StatsLedger};
use perceiver_visual::VisualPerceiver;
use tracing::{debug, info};

use crate::config::{NeedleSet, SkillingConfig};
use crate::disposal::DisposalPolicy;
use crate::errors::SkillingError;

/// Where the machine is in the current cycle. `target` indexes the
/// descriptor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinerState {
    Seeking { target: usize },
    AwaitingStart { target: usize },
    AwaitingCompletion { target: usize },
    CapacityCheck { target: usize },
    Terminated,
}

/// How a run ended without error.
#[derive(Debug, Clone, PartialEq)]
pub enum MinerOutcome {
    /// Inventory filled, was emptied and stats were recorded
    InventoryFull { report: LedgerReport },
    /// The safety bound on cycles was hit
    CycleLimit { cycles: u32 },
}

impl MinerOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        0
    }
}

/// What to mine and how to recognize it.
#[derive(Debug, Clone)]
pub struct MiningJob {
    pub targets: Vec<TargetDescriptor>,
    /// Inventory icon of the gathered ore
    pub ore: Pattern,
    /// Experience table key, e.g. "iron ore"
    pub category: String,
}

pub struct DropMiner {
    perceiver: Arc<dyn VisualPerceiver>,
    input: Arc<dyn InputDriver>,
    ledger: Arc<dyn StatsLedger>,
    config: SkillingConfig,
    job: MiningJob,
    experience_per_item: f64,
    needles: NeedleSet,
    disposal: DisposalPolicy,
    jitter: Jitter,
    run: RunCounters,
    state: MinerState,
}

impl DropMiner {
    pub fn new(
        job: MiningJob,
        config: SkillingConfig,
        perceiver: Arc<dyn VisualPerceiver>,
        input: Arc<dyn InputDriver>,
        ledger: Arc<dyn StatsLedger>,
    ) -> Result<Self, SkillingError> {
        if job.targets.is_empty() {
            return Err(CoreError::NoTargets.into());
        }
        config.validate()?;
        let experience_per_item = ExperienceTable::standard()
            .get(&job.category)
            .ok_or_else(|| SkillingError::UnknownCategory(job.category.clone()))?;

        let needles = config.needles();
        let disposal = DisposalPolicy::new(
            config.drop_toggles(),
            &config.needles_dir,
            config.logout_on_fatal,
        );

        Ok(Self {
            perceiver,
            input,
            ledger,
            config,
            job,
            experience_per_item,
            needles,
            disposal,
            jitter: Jitter::from_entropy(),
            run: RunCounters::new(),
            state: MinerState::Seeking { target: 0 },
        })
    }

    /// Replace the timing RNG, e.g. with a seeded one
    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn run_counters(&self) -> &RunCounters {
        &self.run
    }

    pub fn state(&self) -> MinerState {
        self.state
    }

    pub fn disposal(&self) -> &DisposalPolicy {
        &self.disposal
    }

    /// Run until the inventory fills or the cycle bound is reached
    pub async fn run(&mut self) -> Result<MinerOutcome, SkillingError> {
        debug!(
            category = %self.job.category,
            targets = self.job.targets.len(),
            toggles = ?self.config.drop_toggles(),
            max_cycles = self.config.max_cycles,
            "Starting drop miner"
        );
        let outcome = self.run_cycles().await;
        self.transition(MinerState::Terminated);
        outcome
    }

    async fn run_cycles(&mut self) -> Result<MinerOutcome, SkillingError> {
        for cycle in 1..=self.config.max_cycles {
            for target in 0..self.job.targets.len() {
                if let Some(outcome) = self.work_target(cycle, target).await? {
                    return Ok(outcome);
                }
            }
        }

        info!(cycles = self.config.max_cycles, "Cycle limit reached");
        Ok(MinerOutcome::CycleLimit {
            cycles: self.config.max_cycles,
        })
    }

    /// One pass over one target. `Some` ends the run.
    async fn work_target(
        &mut self,
        cycle: u32,
        target: usize,
    ) -> Result<Option<MinerOutcome>, SkillingError> {
        let descriptor = self.job.targets[target].clone();

        self.transition(MinerState::Seeking { target });
        debug!(cycle, target, "Searching for ore");
        let clicked = self
            .input
            .click_pattern(
                Region::GameScreen,
                &descriptor.active,
                &self.config.click_tempo,
            )
            .await?;
        if clicked == ClickOutcome::NotFound {
            debug!(target, pattern = %descriptor.active, "target unavailable");
            return Ok(None);
        }

        self.transition(MinerState::AwaitingStart { target });
        // Keep the pointer off the target so it doesn't spoil the match
        let (dx, dy) = self.config.move_jitter.sample(&mut self.jitter);
        self.input.move_away(dx, dy).await?;
        info!("Waiting for mining to start");
        self.config.idle_pause.idle(&mut self.jitter).await;

        let started = self
            .perceiver
            .wait_for(
                Region::ChatMenuRecent,
                &self.needles.mining_started,
                &self.config.start_wait,
                &mut self.jitter,
            )
            .await?;

        if !started.is_found() {
            debug!(polls = started.polls(), "Timed out waiting for mining to start");
            return self.check_capacity(target).await;
        }

        info!("Mining started");
        self.transition(MinerState::AwaitingCompletion { target });
        let depleted = self
            .perceiver
            .wait_for(
                Region::GameScreen,
                &descriptor.exhausted,
                &self.config.depletion_wait,
                &mut self.jitter,
            )
            .await?;

        if depleted.is_found() {
            info!("Rock is empty");
            debug!(target, pattern = %descriptor.exhausted, "empty");
        } else {
            info!("Timed out waiting for mining to finish");
        }
        Ok(None)
    }

    async fn check_capacity(&mut self, target: usize) -> Result<Option<MinerOutcome>, SkillingError> {
        self.transition(MinerState::CapacityCheck { target });
        let full = self
            .perceiver
            .wait_for(
                Region::ChatMenu,
                &self.needles.inventory_full,
                &self.config.full_check,
                &mut self.jitter,
            )
            .await?;

        if !full.is_found() {
            info!(target, "No inventory-full message; resuming with next target");
            return Ok(None);
        }

        info!("Inventory is full");
        let report = self.empty_inventory().await?;
        Ok(Some(MinerOutcome::InventoryFull { report }))
    }

    async fn empty_inventory(&mut self) -> Result<LedgerReport, SkillingError> {
        let summary = self
            .disposal
            .dispose(
                self.input.as_ref(),
                &self.job.ore,
                &mut self.run,
                self.experience_per_item,
            )
            .await?;
        debug!(?summary, "inventory emptied");

        let report = self
            .ledger
            .report(&self.run, self.experience_per_item, &self.job.category)?;
        info!("\n{}", report);
        Ok(report)
    }

    fn transition(&mut self, next: MinerState) {
        if self.state != next {
            info!(from = ?self.state, to = ?next, "State transition");
            self.state = next;
        }
    }
}
