//! Watcher, rank table and search configuration.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::app::watcher::PollTiming;
use crate::domain::rank::{builtin_items, RankTable, DEFAULT_MAX_RANK};
use crate::domain::ItemId;

/// Polling cadence and request defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    /// Time between the starts of two polls of one item (seconds).
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Granularity at which a sleeping watcher checks for cancellation.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    /// Price ceiling used when a request does not specify one.
    #[serde(default = "default_max_price")]
    pub default_max_price: i64,
}

const fn default_poll_interval_secs() -> u64 {
    10
}

const fn default_tick_millis() -> u64 {
    1000
}

const fn default_max_price() -> i64 {
    999_999
}

impl WatchConfig {
    #[must_use]
    pub fn timing(&self) -> PollTiming {
        PollTiming::new(
            Duration::from_secs(self.poll_interval_secs),
            Duration::from_millis(self.tick_millis),
        )
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            tick_millis: default_tick_millis(),
            default_max_price: default_max_price(),
        }
    }
}

/// Max-rank table configuration.
///
/// Entries under `[ranks.items]` extend the built-in table and replace
/// built-in entries with the same item ID.
#[derive(Debug, Clone, Deserialize)]
pub struct RankConfig {
    #[serde(default = "default_max_rank")]
    pub default_max_rank: i64,
    #[serde(default)]
    pub items: HashMap<String, i64>,
}

const fn default_max_rank() -> i64 {
    DEFAULT_MAX_RANK
}

impl RankConfig {
    /// Build the resolver table from the built-in entries plus overrides.
    #[must_use]
    pub fn table(&self) -> RankTable {
        let mut items = builtin_items();
        items.extend(
            self.items
                .iter()
                .map(|(item, rank)| (ItemId::new(item.as_str()), *rank)),
        );
        RankTable::new(self.default_max_rank, items)
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            default_max_rank: default_max_rank(),
            items: HashMap::new(),
        }
    }
}

/// One-shot offer search configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of offers returned.
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

const fn default_search_limit() -> usize {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_search_limit(),
        }
    }
}
