//! Handler for the `watch` command.

use tokio::signal;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::app::{build_supervisor, MatchEvent};
use crate::cli::{load_config, output, parse_item, Cli, WatchArgs};
use crate::domain::WatchRequest;
use crate::error::Result;

/// Start watchers for every requested item and print offers as they appear.
///
/// Runs until Ctrl-C or until no watcher is left, then stops all watchers
/// and prints the final match list.
pub async fn execute(cli: &Cli, args: &WatchArgs) -> Result<()> {
    let config = load_config(cli)?;
    config.init_logging();

    let supervisor = build_supervisor(&config)?;
    let mut events = supervisor.subscribe();

    let max_price = args.max_price.unwrap_or(config.watch.default_max_price);
    let requests: Vec<WatchRequest> = args
        .items
        .iter()
        .map(|input| {
            let (item, display_name) = parse_item(input);
            let request = WatchRequest::new(item, display_name, max_price).with_desired_rank(args.rank);
            match &args.max_rank_override {
                Some(rank) => request.with_rank_override(rank.clone()),
                None => request,
            }
        })
        .collect();

    let started = supervisor.start_watch_many(requests);
    info!(count = started, max_price, rank = %args.rank, "orderwatch running");
    output::note(&format!(
        "Watching {started} item(s) at ≤{max_price}p, rank {}. Press Ctrl+C to stop.",
        args.rank
    ));

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(MatchEvent::Added(found)) => output::new_match(&found),
                Ok(MatchEvent::Retracted { item, count }) => {
                    output::note(&format!("  {count} offer(s) for {} withdrawn", item.display_name()));
                }
                Ok(MatchEvent::ItemGone { item }) => {
                    output::warn(&format!("{} is no longer listed", item.display_name()));
                    if supervisor.registry().is_empty() {
                        break;
                    }
                }
                Ok(MatchEvent::WatcherStopped { .. }) => {
                    if supervisor.registry().is_empty() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Match events dropped, output may be incomplete");
                }
                Err(RecvError::Closed) => break,
            },
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    supervisor.shutdown().await;

    let remaining = supervisor.list_matches();
    output::section("Current matches");
    if remaining.is_empty() {
        output::note("  none");
    } else {
        output::matches(&remaining);
    }
    Ok(())
}
