//! Entry points for starting and stopping watchers.
//!
//! The supervisor owns the match store, the cancellation registry and the
//! event channel for the life of the process and hands them to every
//! watcher it spawns. Watchers of the same item are not deduplicated: each
//! start spawns an independent poll loop.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::cancel::CancellationRegistry;
use super::event::{MatchEvent, EVENT_CAPACITY};
use super::search;
use super::store::MatchStore;
use super::watcher::{PollTiming, WatchContext, WatchExit, Watcher};
use crate::domain::{DesiredRank, ItemId, Match, Offer, RankTable, WatchRequest};
use crate::error::Result;
use crate::port::OrderSource;

/// Acknowledgement of a started watch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedWatch {
    pub item_id: ItemId,
    pub max_price: i64,
    pub desired_rank: DesiredRank,
    pub rank_override: Option<String>,
    /// Matches discarded from a previous watch of the same item.
    pub cleared: usize,
}

/// Starts, stops and observes watchers.
pub struct Supervisor {
    ctx: WatchContext,
    search_limit: usize,
    tasks: Mutex<Vec<JoinHandle<WatchExit>>>,
}

impl Supervisor {
    /// Create a supervisor with an empty store and registry.
    pub fn new(source: Arc<dyn OrderSource>, ranks: RankTable, timing: PollTiming) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            ctx: WatchContext {
                source,
                store: Arc::new(MatchStore::new()),
                registry: Arc::new(CancellationRegistry::new()),
                ranks: Arc::new(ranks),
                timing,
                events,
            },
            search_limit: search::DEFAULT_LIMIT,
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Cap the number of offers returned by [`search_offers`](Self::search_offers).
    #[must_use]
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    /// Shared match store.
    #[must_use]
    pub fn store(&self) -> &Arc<MatchStore> {
        &self.ctx.store
    }

    /// Shared cancellation registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<CancellationRegistry> {
        &self.ctx.registry
    }

    /// Receive match events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<MatchEvent> {
        self.ctx.events.subscribe()
    }

    /// Start watching an item.
    ///
    /// Clears the item's existing matches, registers a new signal and spawns
    /// the watcher without waiting for its first poll. Watchers already
    /// polling the same item keep running and may repopulate the store.
    /// Must be called from within a Tokio runtime.
    pub fn start_watch(&self, request: WatchRequest) -> StartedWatch {
        let item = request.item_id.clone();
        let cleared = self.ctx.store.clear_item(&item);
        let signal = self.ctx.registry.register(&item);

        let started = StartedWatch {
            item_id: item.clone(),
            max_price: request.max_price,
            desired_rank: request.desired_rank,
            rank_override: request.rank_override.clone(),
            cleared,
        };

        let watcher = Watcher::new(request, signal, self.ctx.clone());
        let handle = tokio::spawn(watcher.run());

        let mut tasks = self.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);

        info!(item = %item, cleared, "Watch started");
        started
    }

    /// Start one watcher per request, returning how many were started.
    pub fn start_watch_many(&self, requests: impl IntoIterator<Item = WatchRequest>) -> usize {
        requests
            .into_iter()
            .map(|request| self.start_watch(request))
            .count()
    }

    /// Signal every live watcher of `item`, returning how many were signaled.
    ///
    /// Leaves the match store untouched; watchers exit at their next check.
    pub fn stop_watch(&self, item: &ItemId) -> usize {
        let count = self.ctx.registry.signal_all(item);
        info!(item = %item, count, "Watch stop requested");
        count
    }

    /// Signal every live watcher of every item.
    pub fn stop_all(&self) -> usize {
        let count = self.ctx.registry.signal_everything();
        info!(count, "Stop requested for all watchers");
        count
    }

    /// Remove every match for `item`, returning how many were removed.
    pub fn clear_matches(&self, item: &ItemId) -> usize {
        let removed = self.ctx.store.clear_item(item);
        info!(item = %item, removed, "Matches cleared");
        removed
    }

    /// Snapshot of all current matches.
    #[must_use]
    pub fn list_matches(&self) -> Vec<Match> {
        self.ctx.store.snapshot()
    }

    /// Number of live watchers for `item`.
    #[must_use]
    pub fn live_watchers(&self, item: &ItemId) -> usize {
        self.ctx.registry.live_count(item)
    }

    /// One-shot search for the cheapest in-game sellers of an item.
    pub async fn search_offers(
        &self,
        item: &ItemId,
        desired_rank: DesiredRank,
        rank_override: Option<&str>,
    ) -> Result<Vec<Offer>> {
        let max_rank = self.ctx.ranks.effective_max_rank(item, rank_override);
        search::search_offers(
            self.ctx.source.as_ref(),
            item,
            desired_rank,
            max_rank,
            self.search_limit,
        )
        .await
    }

    /// Stop every watcher and wait for all of them to exit.
    pub async fn shutdown(&self) {
        self.stop_all();
        let tasks: Vec<JoinHandle<WatchExit>> = std::mem::take(&mut *self.tasks.lock());
        for task in tasks {
            if let Err(e) = task.await {
                warn!(error = %e, "Watcher task failed");
            }
        }
        info!("All watchers stopped");
    }
}
