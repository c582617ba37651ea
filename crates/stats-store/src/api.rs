use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use crate::errors::StatsError;
use crate::fs::{read_record, write_record};
use crate::model::{LifetimeCounters, RunCounters, StatsRecord};
use crate::report::LedgerReport;

/// Durable lifetime counters backed by one JSON file.
///
/// Writes replace the file atomically, so a crash mid-write leaves the old
/// record intact. Load-merge-save is not locked: run one task per file.
#[derive(Clone, Debug)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<LifetimeCounters, StatsError> {
        let record = read_record(&self.path)?;
        debug!(path = %self.path.display(), ?record, "stats record loaded");
        Ok(record.counters())
    }

    pub fn save(&self, counters: &LifetimeCounters) -> Result<(), StatsError> {
        write_record(&self.path, &StatsRecord::from_counters(counters))?;
        debug!(path = %self.path.display(), ?counters, "stats record written");
        Ok(())
    }

    /// Create a zeroed record. Refuses to clobber an existing one unless `force`.
    pub fn init(&self, force: bool) -> Result<LifetimeCounters, StatsError> {
        if self.exists() && !force {
            return Err(StatsError::AlreadyExists(self.path.clone()));
        }
        let counters = LifetimeCounters::default();
        self.save(&counters)?;
        info!(path = %self.path.display(), "Initialized stats record");
        Ok(counters)
    }
}

/// Merge-and-persist step run once per emptied inventory.
pub trait StatsLedger: Send + Sync {
    fn report(
        &self,
        run: &RunCounters,
        experience_per_item: f64,
        category: &str,
    ) -> Result<LedgerReport, StatsError>;
}

/// [`StatsLedger`] over a [`StatsStore`].
#[derive(Clone, Debug)]
pub struct FileLedger {
    store: StatsStore,
}

impl FileLedger {
    pub fn new(store: StatsStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &StatsStore {
        &self.store
    }
}

impl StatsLedger for FileLedger {
    fn report(
        &self,
        run: &RunCounters,
        experience_per_item: f64,
        category: &str,
    ) -> Result<LedgerReport, StatsError> {
        let previous = self.store.load()?;
        let merged = previous.merged(run);
        self.store.save(&merged)?;

        let persisted = self.store.load()?;
        if persisted != merged {
            return Err(StatsError::Corrupt(format!(
                "read back {:?} after writing {:?}",
                persisted, merged
            )));
        }

        let report = LedgerReport::new(
            category,
            experience_per_item,
            run.clone(),
            persisted,
            Utc::now(),
        );
        info!(
            category,
            run_items = run.items_gathered(),
            lifetime_items = persisted.items_gathered,
            lifetime_inventories = persisted.inventories,
            "Lifetime stats updated"
        );
        Ok(report)
    }
}
