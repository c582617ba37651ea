//! Skilling counters: per-run tallies merged into a durable lifetime record.
//!
//! The lifetime record is a single JSON file rewritten with an atomic
//! replace. There is no cross-process lock: only one task may run against a
//! given file at a time, otherwise concurrent merges lose updates.

pub mod api;
pub mod errors;
pub mod fs;
pub mod model;
pub mod report;

pub use api::{FileLedger, StatsLedger, StatsStore};
pub use errors::StatsError;
pub use model::{LifetimeCounters, RunCounters, StatsRecord, RECORD_VERSION};
pub use report::LedgerReport;
