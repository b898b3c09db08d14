//! Match events published by watchers.
//!
//! Delivery is best-effort: events go out on a broadcast channel and a
//! receiver that falls behind loses the oldest ones. The match store stays
//! the source of truth.

use serde::Serialize;

use crate::domain::{ItemId, Match};

/// Capacity of the match event channel.
pub const EVENT_CAPACITY: usize = 1024;

/// Change in the set of known matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    /// A new offer satisfies a watch.
    Added(Match),
    /// Offers for the item disappeared from the marketplace.
    Retracted { item: ItemId, count: usize },
    /// The marketplace no longer lists the item; its matches were purged.
    ItemGone { item: ItemId },
    /// A watcher for the item exited after its signal fired.
    WatcherStopped { item: ItemId },
}
