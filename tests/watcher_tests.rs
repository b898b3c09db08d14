//! Watcher poll-cycle tests.
//!
//! These drive a single [`Watcher`] against a scripted order source, either
//! one poll at a time or through its full run loop on paused Tokio time.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;

use orderwatch::app::{
    CancellationRegistry, MatchEvent, MatchStore, PollOutcome, WatchContext, WatchExit, Watcher,
};
use orderwatch::domain::{ItemId, RankTable};
use orderwatch::testkit;
use orderwatch::testkit::orders::{buy, maxed_request, ranked_sell, request, sell};
use orderwatch::testkit::source::{ScriptedSource, Step};

const VOLT: &str = "volt_prime_set";

fn context(source: Arc<ScriptedSource>) -> WatchContext {
    let (events, _) = broadcast::channel(64);
    WatchContext {
        source,
        store: Arc::new(MatchStore::new()),
        registry: Arc::new(CancellationRegistry::new()),
        ranks: Arc::new(RankTable::builtin()),
        timing: testkit::config::timing(),
        events,
    }
}

fn reconciled(outcome: PollOutcome) -> orderwatch::app::Reconciliation {
    match outcome {
        PollOutcome::Reconciled(result) => result,
        other => panic!("expected a reconciled poll, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Poll-by-poll diffing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn offers_appear_and_disappear_across_polls() {
    let source = Arc::new(ScriptedSource::new());
    source
        .push_orders(VOLT, vec![sell("nova", 40, "ingame")])
        .push_orders(VOLT, vec![sell("nova", 40, "ingame"), sell("eris", 45, "online")])
        .push_orders(VOLT, vec![sell("eris", 45, "online")]);

    let ctx = context(source.clone());
    let item = ItemId::new(VOLT);
    let signal = ctx.registry.register(&item);
    let watcher = Watcher::new(request(VOLT, 50), signal, ctx.clone());

    let first = reconciled(watcher.poll_once().await);
    assert_eq!(first.added.len(), 1);
    assert_eq!(first.added[0].seller.as_deref(), Some("nova"));
    assert_eq!(first.removed, 0);

    let second = reconciled(watcher.poll_once().await);
    assert_eq!(second.added.len(), 1);
    assert_eq!(second.added[0].seller.as_deref(), Some("eris"));
    assert_eq!(second.removed, 0);
    assert_eq!(ctx.store.len(), 2);

    let third = reconciled(watcher.poll_once().await);
    assert!(third.added.is_empty());
    assert_eq!(third.removed, 1);

    let left = ctx.store.snapshot();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].seller.as_deref(), Some("eris"));
    assert_eq!(left[0].display_name, "Volt Prime Set");
}

#[tokio::test]
async fn stable_market_reports_no_changes() {
    let source = Arc::new(ScriptedSource::new());
    let orders = vec![sell("nova", 40, "ingame"), sell("eris", 45, "online")];
    source.push_orders(VOLT, orders.clone()).push_orders(VOLT, orders);

    let ctx = context(source);
    let signal = ctx.registry.register(&ItemId::new(VOLT));
    let watcher = Watcher::new(request(VOLT, 50), signal, ctx.clone());

    reconciled(watcher.poll_once().await);
    let second = reconciled(watcher.poll_once().await);

    assert!(second.is_unchanged());
    assert_eq!(ctx.store.len(), 2);
}

#[tokio::test]
async fn ineligible_orders_are_never_stored() {
    let source = Arc::new(ScriptedSource::new());
    source.push_orders(
        VOLT,
        vec![
            buy("nova", 10),
            sell("eris", 60, "ingame"),
            sell("lotus", 30, "offline"),
            sell("ordis", 30, "online"),
        ],
    );

    let ctx = context(source);
    let signal = ctx.registry.register(&ItemId::new(VOLT));
    let watcher = Watcher::new(request(VOLT, 50), signal, ctx.clone());

    let result = reconciled(watcher.poll_once().await);

    assert_eq!(result.added.len(), 1);
    assert_eq!(result.added[0].seller.as_deref(), Some("ordis"));
}

#[tokio::test]
async fn maxed_watch_uses_rank_threshold() {
    let source = Arc::new(ScriptedSource::new());
    source.push_orders("serration", vec![ranked_sell("nova", 20, 8), ranked_sell("eris", 25, 10)]);

    let ctx = context(source);
    let signal = ctx.registry.register(&ItemId::new("serration"));
    let watcher = Watcher::new(maxed_request("serration", 30), signal, ctx.clone());
    assert_eq!(watcher.effective_max_rank(), 10);

    let result = reconciled(watcher.poll_once().await);

    assert_eq!(result.added.len(), 1);
    assert_eq!(result.added[0].seller.as_deref(), Some("eris"));
    assert_eq!(result.added[0].effective_max_rank, 10);
}

#[tokio::test]
async fn rank_override_replaces_table_entry() {
    let source = Arc::new(ScriptedSource::new());
    source.push_orders("serration", vec![ranked_sell("nova", 20, 8)]);

    let ctx = context(source);
    let signal = ctx.registry.register(&ItemId::new("serration"));
    let watcher = Watcher::new(
        maxed_request("serration", 30).with_rank_override("8"),
        signal,
        ctx.clone(),
    );

    let result = reconciled(watcher.poll_once().await);

    assert_eq!(watcher.effective_max_rank(), 8);
    assert_eq!(result.added.len(), 1);
}

#[tokio::test]
async fn transient_failure_keeps_matches() {
    let source = Arc::new(ScriptedSource::new());
    source
        .push_orders(VOLT, vec![sell("nova", 40, "ingame")])
        .push(VOLT, Step::Fail);

    let ctx = context(source);
    let signal = ctx.registry.register(&ItemId::new(VOLT));
    let watcher = Watcher::new(request(VOLT, 50), signal, ctx.clone());

    reconciled(watcher.poll_once().await);
    assert_eq!(watcher.poll_once().await, PollOutcome::Failed);
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test]
async fn item_gone_purges_matches() {
    let source = Arc::new(ScriptedSource::new());
    source
        .push_orders(VOLT, vec![sell("nova", 40, "ingame")])
        .push(VOLT, Step::Gone);

    let ctx = context(source);
    let signal = ctx.registry.register(&ItemId::new(VOLT));
    let watcher = Watcher::new(request(VOLT, 50), signal, ctx.clone());

    reconciled(watcher.poll_once().await);
    assert_eq!(watcher.poll_once().await, PollOutcome::ItemGone);
    assert!(ctx.store.matches_for(&ItemId::new(VOLT)).is_empty());
}

// ---------------------------------------------------------------------------
// Full run loop
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn run_exits_on_item_gone_and_deregisters() {
    let source = Arc::new(ScriptedSource::new());
    source
        .push_orders(VOLT, vec![sell("nova", 40, "ingame")])
        .push(VOLT, Step::Gone);

    let ctx = context(source.clone());
    let mut events = ctx.events.subscribe();
    let item = ItemId::new(VOLT);
    let signal = ctx.registry.register(&item);
    let watcher = Watcher::new(request(VOLT, 50), signal, ctx.clone());

    let exit = watcher.run().await;

    assert_eq!(exit, WatchExit::ItemGone);
    assert_eq!(source.fetches(VOLT), 2);
    assert!(ctx.store.is_empty());
    assert_eq!(ctx.registry.live_count(&item), 0);

    assert!(matches!(events.recv().await, Ok(MatchEvent::Added(_))));
    assert_eq!(
        events.recv().await.unwrap(),
        MatchEvent::ItemGone { item: item.clone() }
    );
}

#[tokio::test(start_paused = true)]
async fn run_keeps_polling_through_failures() {
    let source = Arc::new(ScriptedSource::new());
    source
        .push(VOLT, Step::Fail)
        .push(VOLT, Step::Fail)
        .push(VOLT, Step::Gone);

    let ctx = context(source.clone());
    let signal = ctx.registry.register(&ItemId::new(VOLT));
    let watcher = Watcher::new(request(VOLT, 50), signal, ctx);

    assert_eq!(watcher.run().await, WatchExit::ItemGone);
    assert_eq!(source.fetches(VOLT), 3);
}

#[tokio::test(start_paused = true)]
async fn fired_signal_stops_within_one_tick() {
    let source = Arc::new(ScriptedSource::new());
    source.push_orders(VOLT, vec![sell("nova", 40, "ingame")]);

    let ctx = context(source.clone());
    let item = ItemId::new(VOLT);
    let signal = ctx.registry.register(&item);
    let watcher = Watcher::new(request(VOLT, 50), signal.clone(), ctx.clone());
    let handle = tokio::spawn(watcher.run());

    tokio::time::sleep(Duration::from_millis(250)).await;
    signal.fire();
    let stopped_at = tokio::time::Instant::now();

    let exit = handle.await.unwrap();

    assert_eq!(exit, WatchExit::Cancelled);
    assert!(stopped_at.elapsed() <= testkit::config::tick());
    assert_eq!(source.fetches(VOLT), 1);
    assert_eq!(ctx.registry.live_count(&item), 0);
    // Stopping leaves the store as it was.
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn signal_fired_before_start_skips_polling() {
    let source = Arc::new(ScriptedSource::new());
    let ctx = context(source.clone());
    let item = ItemId::new(VOLT);
    let signal = ctx.registry.register(&item);
    signal.fire();

    let exit = Watcher::new(request(VOLT, 50), signal, ctx.clone()).run().await;

    assert_eq!(exit, WatchExit::Cancelled);
    assert_eq!(source.fetches(VOLT), 0);
    assert!(ctx.registry.is_empty());
}
