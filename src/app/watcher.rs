//! Per-request polling loop.
//!
//! A watcher repeatedly fetches the orders of its item, reduces them to the
//! eligible set and reconciles that set into the shared [`MatchStore`]. It
//! stops when its [`CancellationSignal`] fires or when the marketplace
//! reports the item gone, and always deregisters its signal on the way out.
//!
//! ```text
//! Running ──signal──► Stopping ──► Terminated
//!    │
//!    └──item gone──► ItemGone ──► Terminated
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::cancel::{CancellationRegistry, CancellationSignal};
use super::event::MatchEvent;
use super::store::{MatchStore, Reconciliation};
use crate::domain::{eligible, Match, RankTable, RawOrder, WatchRequest};
use crate::port::{OrderBatch, OrderSource};

/// Poll interval split into cancellation-check ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTiming {
    interval: Duration,
    tick: Duration,
}

impl PollTiming {
    /// A zero tick, or one longer than the interval, collapses to a single
    /// tick spanning the whole interval.
    pub fn new(interval: Duration, tick: Duration) -> Self {
        let tick = if tick.is_zero() || tick > interval {
            interval
        } else {
            tick
        };
        Self { interval, tick }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Number of ticks slept between two polls, rounded up.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        let tick = self.tick.as_nanos();
        if tick == 0 {
            return 1;
        }
        let ticks = self.interval.as_nanos().div_ceil(tick).max(1);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }
}

impl Default for PollTiming {
    fn default() -> Self {
        Self::new(Duration::from_secs(10), Duration::from_secs(1))
    }
}

/// Why a watcher terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchExit {
    /// Its cancellation signal fired.
    Cancelled,
    /// The marketplace reported the item gone.
    ItemGone,
}

/// Result of a single poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Orders were fetched and reconciled into the store.
    Reconciled(Reconciliation),
    /// The item is gone; its matches were purged.
    ItemGone,
    /// Transient failure; the store was left untouched.
    Failed,
}

/// Collaborators shared by every watcher of a supervisor.
#[derive(Clone)]
pub struct WatchContext {
    pub source: Arc<dyn OrderSource>,
    pub store: Arc<MatchStore>,
    pub registry: Arc<CancellationRegistry>,
    pub ranks: Arc<RankTable>,
    pub timing: PollTiming,
    pub events: broadcast::Sender<MatchEvent>,
}

/// One running poll loop bound to one request.
pub struct Watcher {
    request: WatchRequest,
    effective_max_rank: i64,
    signal: CancellationSignal,
    ctx: WatchContext,
}

impl Watcher {
    /// Bind a request to an already-registered signal.
    pub fn new(request: WatchRequest, signal: CancellationSignal, ctx: WatchContext) -> Self {
        let effective_max_rank = ctx
            .ranks
            .effective_max_rank(&request.item_id, request.rank_override.as_deref());
        Self {
            request,
            effective_max_rank,
            signal,
            ctx,
        }
    }

    #[must_use]
    pub fn request(&self) -> &WatchRequest {
        &self.request
    }

    #[must_use]
    pub fn effective_max_rank(&self) -> i64 {
        self.effective_max_rank
    }

    /// Poll until cancelled or the item is gone, then deregister.
    pub async fn run(self) -> WatchExit {
        let item = &self.request.item_id;
        info!(
            item = %item,
            max_price = self.request.max_price,
            desired_rank = %self.request.desired_rank,
            effective_max_rank = self.effective_max_rank,
            signal = self.signal.id(),
            "Watcher started"
        );

        let exit = loop {
            if self.signal.is_fired() {
                break WatchExit::Cancelled;
            }
            if self.poll_once().await == PollOutcome::ItemGone {
                break WatchExit::ItemGone;
            }
            if !self.pause().await {
                break WatchExit::Cancelled;
            }
        };

        self.ctx.registry.deregister(item, &self.signal);

        match exit {
            WatchExit::Cancelled => {
                info!(item = %item, signal = self.signal.id(), "Watcher stopped");
                let _ = self
                    .ctx
                    .events
                    .send(MatchEvent::WatcherStopped { item: item.clone() });
            }
            WatchExit::ItemGone => {
                info!(item = %item, signal = self.signal.id(), "Watcher terminated, item gone");
                let _ = self
                    .ctx
                    .events
                    .send(MatchEvent::ItemGone { item: item.clone() });
            }
        }
        exit
    }

    /// Run one fetch-filter-reconcile cycle.
    pub async fn poll_once(&self) -> PollOutcome {
        let item = &self.request.item_id;

        let orders = match self.ctx.source.fetch_orders(item).await {
            Ok(OrderBatch::Orders(orders)) => orders,
            Ok(OrderBatch::ItemGone { status }) => {
                let purged = self.ctx.store.clear_item(item);
                info!(item = %item, status, purged, "Item removed from market, cleaning matches");
                return PollOutcome::ItemGone;
            }
            Err(e) => {
                warn!(
                    item = %item,
                    source = self.ctx.source.name(),
                    error = %e,
                    "Failed to refresh orders, keeping current matches"
                );
                return PollOutcome::Failed;
            }
        };

        let current = self.eligible_matches(&orders);
        let result = self.ctx.store.reconcile(item, &current);

        debug!(
            item = %item,
            orders = orders.len(),
            eligible = current.len(),
            added = result.added.len(),
            removed = result.removed,
            "Poll cycle complete"
        );

        for found in &result.added {
            info!(
                item = %item,
                seller = found.seller.as_deref().unwrap_or_default(),
                price = ?found.price,
                rank = ?found.rank,
                "New offer found"
            );
            let _ = self.ctx.events.send(MatchEvent::Added(found.clone()));
        }
        if result.removed > 0 {
            info!(item = %item, removed = result.removed, "Removed offers no longer present");
            let _ = self.ctx.events.send(MatchEvent::Retracted {
                item: item.clone(),
                count: result.removed,
            });
        }

        PollOutcome::Reconciled(result)
    }

    /// One match per eligible order, in the order the marketplace sent them.
    fn eligible_matches(&self, orders: &[RawOrder]) -> Vec<Match> {
        orders
            .iter()
            .filter(|order| {
                eligible(
                    order,
                    self.request.max_price,
                    self.request.desired_rank,
                    self.effective_max_rank,
                )
            })
            .map(|order| Match::from_order(&self.request, order, self.effective_max_rank))
            .collect()
    }

    /// Sleep one poll interval in ticks. Returns false if the signal fired.
    async fn pause(&self) -> bool {
        for _ in 0..self.ctx.timing.ticks() {
            if self.signal.is_fired() {
                return false;
            }
            sleep(self.ctx.timing.tick()).await;
        }
        !self.signal.is_fired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_round_up() {
        let timing = PollTiming::new(Duration::from_millis(2500), Duration::from_secs(1));
        assert_eq!(timing.ticks(), 3);
    }

    #[test]
    fn default_timing_is_ten_one_second_ticks() {
        let timing = PollTiming::default();
        assert_eq!(timing.interval(), Duration::from_secs(10));
        assert_eq!(timing.ticks(), 10);
    }

    #[test]
    fn oversized_or_zero_tick_collapses_to_interval() {
        let timing = PollTiming::new(Duration::from_secs(2), Duration::from_secs(5));
        assert_eq!(timing.tick(), Duration::from_secs(2));
        assert_eq!(timing.ticks(), 1);

        let timing = PollTiming::new(Duration::from_secs(2), Duration::ZERO);
        assert_eq!(timing.ticks(), 1);
    }

    #[test]
    fn zero_interval_still_ticks_once() {
        let timing = PollTiming::new(Duration::ZERO, Duration::ZERO);
        assert_eq!(timing.ticks(), 1);
    }
}
