use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::StatsError;

/// Schema version written into every record.
pub const RECORD_VERSION: u32 = 1;

/// Tallies for the current task invocation.
///
/// Starts at zero and is only ever advanced by [`RunCounters::record_inventory`];
/// it is never seeded from the durable record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunCounters {
    items_gathered: u64,
    experience_gained: f64,
    inventories: u64,
    started_at: DateTime<Utc>,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    pub fn starting_at(started_at: DateTime<Utc>) -> Self {
        Self {
            items_gathered: 0,
            experience_gained: 0.0,
            inventories: 0,
            started_at,
        }
    }

    /// Account for one emptied inventory holding `items` gathered items.
    pub fn record_inventory(&mut self, items: u32, experience_per_item: f64) {
        let items = u64::from(items);
        self.items_gathered = self.items_gathered.saturating_add(items);
        self.experience_gained += items as f64 * experience_per_item.max(0.0);
        self.inventories = self.inventories.saturating_add(1);
    }

    pub fn items_gathered(&self) -> u64 {
        self.items_gathered
    }

    pub fn experience_gained(&self) -> f64 {
        self.experience_gained
    }

    pub fn inventories(&self) -> u64 {
        self.inventories
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn is_zero(&self) -> bool {
        self.items_gathered == 0 && self.experience_gained == 0.0 && self.inventories == 0
    }
}

impl Default for RunCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Cumulative totals across every run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LifetimeCounters {
    pub items_gathered: u64,
    pub experience_gained: f64,
    pub inventories: u64,
}

impl LifetimeCounters {
    /// Field-wise sum with a run's tallies.
    pub fn merged(&self, run: &RunCounters) -> Self {
        Self {
            items_gathered: self.items_gathered.saturating_add(run.items_gathered),
            experience_gained: self.experience_gained + run.experience_gained,
            inventories: self.inventories.saturating_add(run.inventories),
        }
    }
}

#[derive(Deserialize)]
struct RecordHeader {
    version: u32,
}

/// On-disk shape of the lifetime record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsRecord {
    pub version: u32,
    pub items_gathered: u64,
    pub experience_gained: f64,
    pub inventories: u64,
}

impl StatsRecord {
    pub fn from_counters(counters: &LifetimeCounters) -> Self {
        Self {
            version: RECORD_VERSION,
            items_gathered: counters.items_gathered,
            experience_gained: counters.experience_gained,
            inventories: counters.inventories,
        }
    }

    pub fn counters(&self) -> LifetimeCounters {
        LifetimeCounters {
            items_gathered: self.items_gathered,
            experience_gained: self.experience_gained,
            inventories: self.inventories,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, StatsError> {
        serde_json::to_vec_pretty(self).map_err(|err| StatsError::Corrupt(err.to_string()))
    }

    /// Parse and validate a record; any shape mismatch is `Corrupt`.
    pub fn decode(bytes: &[u8]) -> Result<Self, StatsError> {
        let header: RecordHeader = serde_json::from_slice(bytes)
            .map_err(|err| StatsError::Corrupt(format!("unreadable header: {err}")))?;
        if header.version != RECORD_VERSION {
            return Err(StatsError::UnsupportedVersion {
                found: header.version,
                expected: RECORD_VERSION,
            });
        }

        let record: StatsRecord = serde_json::from_slice(bytes)
            .map_err(|err| StatsError::Corrupt(err.to_string()))?;
        if !record.experience_gained.is_finite() || record.experience_gained < 0.0 {
            return Err(StatsError::Corrupt(format!(
                "experience_gained must be a non-negative number, got {}",
                record.experience_gained
            )));
        }
        Ok(record)
    }
}
