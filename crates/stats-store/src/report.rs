use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{LifetimeCounters, RunCounters};

const RULE: &str = "##################################################################";

/// Merged totals after a successful report, plus what the summary needs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LedgerReport {
    pub category: String,
    pub experience_per_item: f64,
    pub run: RunCounters,
    pub lifetime: LifetimeCounters,
    pub experience_per_hour: f64,
}

impl LedgerReport {
    pub fn new(
        category: impl Into<String>,
        experience_per_item: f64,
        run: RunCounters,
        lifetime: LifetimeCounters,
        now: DateTime<Utc>,
    ) -> Self {
        let experience_per_hour = experience_rate(&run, now);
        Self {
            category: category.into(),
            experience_per_item,
            run,
            lifetime,
            experience_per_hour,
        }
    }

    /// "Mined <ore>" for ore categories, "Gathered items" otherwise. The
    /// experience table only lists ores today, so the second form is reached
    /// only by reports built directly rather than by a mining run.
    fn labels(&self) -> (&'static str, &str) {
        if self.category.ends_with(" ore") {
            ("Mined", self.category.as_str())
        } else {
            ("Gathered", "items")
        }
    }
}

/// Run experience per hour of wall time; zero for runs under a second.
pub fn experience_rate(run: &RunCounters, now: DateTime<Utc>) -> f64 {
    let elapsed_ms = (now - run.started_at()).num_milliseconds();
    if elapsed_ms < 1_000 {
        return 0.0;
    }
    run.experience_gained() * 3_600_000.0 / elapsed_ms as f64
}

impl fmt::Display for LedgerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (action, item) = self.labels();
        writeln!(f, "{RULE}")?;
        writeln!(f, "Inventories (run): {}", self.run.inventories())?;
        writeln!(f, "Inventories (lifetime): {}", self.lifetime.inventories)?;
        writeln!(f, "{action} (run): {} {item}", self.run.items_gathered())?;
        writeln!(
            f,
            "{action} (lifetime): {} {item}",
            self.lifetime.items_gathered
        )?;
        writeln!(
            f,
            "XP gained (run): {:.1} ({:.0}/h)",
            self.run.experience_gained(),
            self.experience_per_hour
        )?;
        writeln!(
            f,
            "XP gained (lifetime): {:.1}",
            self.lifetime.experience_gained
        )?;
        write!(f, "{RULE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn run_started(at: DateTime<Utc>) -> RunCounters {
        let mut run = RunCounters::starting_at(at);
        run.record_inventory(28, 35.5);
        run
    }

    #[test]
    fn rate_over_half_an_hour() {
        let start = Utc::now();
        let run = run_started(start);
        let rate = experience_rate(&run, start + Duration::minutes(30));
        assert_eq!(rate, 994.0 * 2.0);
    }

    #[test]
    fn rate_is_zero_for_instant_runs() {
        let start = Utc::now();
        let run = run_started(start);
        assert_eq!(experience_rate(&run, start), 0.0);
    }

    #[test]
    fn summary_for_ore() {
        let start = Utc::now();
        let lifetime = LifetimeCounters {
            items_gathered: 56,
            experience_gained: 1988.0,
            inventories: 2,
        };
        let report = LedgerReport::new("iron ore", 35.5, run_started(start), lifetime, start);
        let text = report.to_string();

        assert!(text.contains("Inventories (run): 1"));
        assert!(text.contains("Inventories (lifetime): 2"));
        assert!(text.contains("Mined (run): 28 iron ore"));
        assert!(text.contains("Mined (lifetime): 56 iron ore"));
        assert!(text.contains("XP gained (run): 994.0 (0/h)"));
        assert!(text.contains("XP gained (lifetime): 1988.0"));
    }

    #[test]
    fn summary_for_other_items() {
        let start = Utc::now();
        let report = LedgerReport::new(
            "logs",
            25.0,
            run_started(start),
            LifetimeCounters::default(),
            start,
        );
        assert!(report.to_string().contains("Gathered (run): 28 items"));
    }
}
