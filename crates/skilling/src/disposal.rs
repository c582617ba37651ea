//! Inventory disposal when the container is full.

use std::fmt;
use std::path::Path;

use action_primitives::{DropOutcome, InputDriver};
use ocvbot_core_types::Pattern;
use ocvbot_stats_store::RunCounters;
use tracing::{debug, error, info, warn};

use crate::config::DropToggles;
use crate::errors::SkillingError;

/// Secondary drops from mining, in disposal priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryItem {
    Sapphire,
    Emerald,
    Ruby,
    Diamond,
    ClueGeode,
}

impl SecondaryItem {
    pub const ORDER: [SecondaryItem; 5] = [
        SecondaryItem::Sapphire,
        SecondaryItem::Emerald,
        SecondaryItem::Ruby,
        SecondaryItem::Diamond,
        SecondaryItem::ClueGeode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SecondaryItem::Sapphire => "uncut sapphire",
            SecondaryItem::Emerald => "uncut emerald",
            SecondaryItem::Ruby => "uncut ruby",
            SecondaryItem::Diamond => "uncut diamond",
            SecondaryItem::ClueGeode => "clue geode",
        }
    }

    /// Needle path relative to the needle root
    pub fn needle(&self) -> &'static str {
        match self {
            SecondaryItem::Sapphire => "items/uncut-sapphire.png",
            SecondaryItem::Emerald => "items/uncut-emerald.png",
            SecondaryItem::Ruby => "items/uncut-ruby.png",
            SecondaryItem::Diamond => "items/uncut-diamond.png",
            SecondaryItem::ClueGeode => "items/clue-geode.png",
        }
    }

    fn enabled_in(&self, toggles: &DropToggles) -> bool {
        match self {
            SecondaryItem::Sapphire => toggles.sapphire,
            SecondaryItem::Emerald => toggles.emerald,
            SecondaryItem::Ruby => toggles.ruby,
            SecondaryItem::Diamond => toggles.diamond,
            SecondaryItem::ClueGeode => toggles.clue_geode,
        }
    }
}

impl fmt::Display for SecondaryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisposalEntry {
    pub item: SecondaryItem,
    pub pattern: Pattern,
    pub enabled: bool,
}

/// What a successful disposal got rid of.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisposalSummary {
    pub primary_dropped: u32,
    pub secondary_dropped: Vec<(SecondaryItem, u32)>,
}

/// Fixed-order drop list. Only the enabled flags vary.
#[derive(Debug, Clone)]
pub struct DisposalPolicy {
    entries: Vec<DisposalEntry>,
    logout_on_fatal: bool,
}

impl DisposalPolicy {
    pub fn new(toggles: DropToggles, needles_dir: &Path, logout_on_fatal: bool) -> Self {
        let entries = SecondaryItem::ORDER
            .iter()
            .map(|item| DisposalEntry {
                item: *item,
                pattern: Pattern::new(needles_dir.join(item.needle())),
                enabled: item.enabled_in(&toggles),
            })
            .collect();
        Self {
            entries,
            logout_on_fatal,
        }
    }

    pub fn entries(&self) -> &[DisposalEntry] {
        &self.entries
    }

    /// Drop the primary item, then each enabled secondary in order.
    ///
    /// A missing primary item is fatal: nothing else is dropped and the run
    /// counters are left untouched.
    pub async fn dispose(
        &self,
        input: &dyn InputDriver,
        primary: &Pattern,
        run: &mut RunCounters,
        experience_per_item: f64,
    ) -> Result<DisposalSummary, SkillingError> {
        let primary_dropped = match input.drop_item(primary).await? {
            DropOutcome::Dropped { count } => count,
            DropOutcome::NotFound => {
                error!(item = %primary, "Inventory is full but there is nothing to drop");
                if self.logout_on_fatal {
                    if let Err(err) = input.logout().await {
                        warn!(%err, "safety logout failed");
                    }
                }
                return Err(SkillingError::NothingToDrop {
                    item: primary.clone(),
                });
            }
        };
        run.record_inventory(primary_dropped, experience_per_item);
        info!(item = %primary, count = primary_dropped, "Dropped gathered items");

        let mut secondary_dropped = Vec::new();
        for entry in self.entries.iter().filter(|entry| entry.enabled) {
            match input.drop_item(&entry.pattern).await? {
                DropOutcome::Dropped { count } => {
                    debug!(item = %entry.item, count, "dropped");
                    secondary_dropped.push((entry.item, count));
                }
                DropOutcome::NotFound => debug!(item = %entry.item, "none in inventory"),
            }
        }

        Ok(DisposalSummary {
            primary_dropped,
            secondary_dropped,
        })
    }
}
