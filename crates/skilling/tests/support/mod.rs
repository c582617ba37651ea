#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

use action_primitives::{
    ActionError, ClickOutcome, ClickTempo, DropOutcome, IdlePause, InputDriver,
};
use async_trait::async_trait;
use chrono::Utc;
use ocvbot_core_types::{DelayRange, Pattern, PollPolicy, Region, TargetDescriptor};
use ocvbot_skilling::{MiningJob, SkillingConfig};
use ocvbot_stats_store::{LedgerReport, LifetimeCounters, RunCounters, StatsError, StatsLedger};
use parking_lot::Mutex;
use perceiver_visual::{MatchOutcome, VisualError, VisualPerceiver};

pub const NEEDLES: &str = "needles";

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Locate(PathBuf),
    Click(PathBuf),
    MoveAway,
    Drop(PathBuf),
    Logout,
    Report { items: u64, inventories: u64 },
}

/// Scripted game client playing all three ports.
///
/// Each pattern has a queue of answers; once a queue runs dry the pattern
/// is "not there". Every call lands in one shared event log so tests can
/// assert ordering across ports.
#[derive(Default)]
pub struct World {
    log: Mutex<Vec<Event>>,
    sightings: Mutex<HashMap<PathBuf, VecDeque<bool>>>,
    clicks: Mutex<HashMap<PathBuf, VecDeque<bool>>>,
    inventory: Mutex<HashMap<PathBuf, u32>>,
    offsets: Mutex<Vec<(i32, i32)>>,
    reports: Mutex<Vec<RunCounters>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sees(&self, pattern: &Pattern, answers: &[bool]) -> &Self {
        self.sightings
            .lock()
            .entry(pattern.path().to_path_buf())
            .or_default()
            .extend(answers.iter().copied());
        self
    }

    pub fn clickable(&self, pattern: &Pattern, answers: &[bool]) -> &Self {
        self.clicks
            .lock()
            .entry(pattern.path().to_path_buf())
            .or_default()
            .extend(answers.iter().copied());
        self
    }

    pub fn holds(&self, pattern: &Pattern, count: u32) -> &Self {
        self.inventory
            .lock()
            .insert(pattern.path().to_path_buf(), count);
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.lock().clone()
    }

    /// Pointer offsets passed to `move_away`, in call order
    pub fn offsets(&self) -> Vec<(i32, i32)> {
        self.offsets.lock().clone()
    }

    pub fn reports(&self) -> Vec<RunCounters> {
        self.reports.lock().clone()
    }

    pub fn dropped(&self) -> Vec<PathBuf> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Drop(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: Event) {
        self.log.lock().push(event);
    }
}

fn next_answer(queues: &Mutex<HashMap<PathBuf, VecDeque<bool>>>, path: &Path) -> bool {
    queues
        .lock()
        .get_mut(path)
        .and_then(|queue| queue.pop_front())
        .unwrap_or(false)
}

#[async_trait]
impl VisualPerceiver for World {
    async fn locate(
        &self,
        _region: Region,
        pattern: &Pattern,
        _confidence: f32,
    ) -> Result<MatchOutcome, VisualError> {
        self.record(Event::Locate(pattern.path().to_path_buf()));
        if next_answer(&self.sightings, pattern.path()) {
            Ok(MatchOutcome::Found { score: 0.97 })
        } else {
            Ok(MatchOutcome::NotFound)
        }
    }
}

#[async_trait]
impl InputDriver for World {
    async fn click_pattern(
        &self,
        _region: Region,
        pattern: &Pattern,
        _tempo: &ClickTempo,
    ) -> Result<ClickOutcome, ActionError> {
        self.record(Event::Click(pattern.path().to_path_buf()));
        if next_answer(&self.clicks, pattern.path()) {
            Ok(ClickOutcome::Clicked)
        } else {
            Ok(ClickOutcome::NotFound)
        }
    }

    async fn move_away(&self, dx: i32, dy: i32) -> Result<(), ActionError> {
        self.offsets.lock().push((dx, dy));
        self.record(Event::MoveAway);
        Ok(())
    }

    async fn drop_item(&self, item: &Pattern) -> Result<DropOutcome, ActionError> {
        self.record(Event::Drop(item.path().to_path_buf()));
        match self.inventory.lock().remove(item.path()) {
            Some(count) => Ok(DropOutcome::Dropped { count }),
            None => Ok(DropOutcome::NotFound),
        }
    }

    async fn logout(&self) -> Result<(), ActionError> {
        self.record(Event::Logout);
        Ok(())
    }
}

impl StatsLedger for World {
    fn report(
        &self,
        run: &RunCounters,
        experience_per_item: f64,
        category: &str,
    ) -> Result<LedgerReport, StatsError> {
        self.record(Event::Report {
            items: run.items_gathered(),
            inventories: run.inventories(),
        });
        self.reports.lock().push(run.clone());
        let lifetime = LifetimeCounters::default().merged(run);
        Ok(LedgerReport::new(
            category,
            experience_per_item,
            run.clone(),
            lifetime,
            Utc::now(),
        ))
    }
}

pub fn needle(rel: &str) -> Pattern {
    Pattern::new(Path::new(NEEDLES).join(rel))
}

pub fn rock(n: u8) -> TargetDescriptor {
    TargetDescriptor::new(
        Path::new(NEEDLES).join(format!("game-screen/rock{n}-full.png")),
        Path::new(NEEDLES).join(format!("game-screen/rock{n}-empty.png")),
    )
}

pub fn ore() -> Pattern {
    needle("items/iron-ore.png")
}

pub fn started() -> Pattern {
    needle("chat-menu/mining-started.png")
}

pub fn inventory_full() -> Pattern {
    needle("chat-menu/mining-inventory-full.png")
}

pub fn gem(file: &str) -> Pattern {
    needle(&format!("items/{file}.png"))
}

pub fn two_rock_job() -> MiningJob {
    MiningJob {
        targets: vec![rock(1), rock(2)],
        ore: ore(),
        category: "iron ore".to_string(),
    }
}

/// Short waits, no idle pauses.
pub fn fast_config() -> SkillingConfig {
    SkillingConfig {
        max_cycles: 3,
        needles_dir: PathBuf::from(NEEDLES),
        idle_pause: IdlePause::disabled(),
        start_wait: PollPolicy::new(2, DelayRange::new(100, 200), 0.9),
        depletion_wait: PollPolicy::new(3, DelayRange::new(100, 200), 0.85),
        full_check: PollPolicy::once(0.9),
        ..SkillingConfig::default()
    }
}
