//! Application layer - the order-watch engine, its configuration and wiring.
//!
//! - [`store`] - shared match store and the reconcile diff
//! - [`cancel`] - cancellation signals and their registry
//! - [`watcher`] - the per-request poll loop
//! - [`supervisor`] - start/stop entry points
//! - [`search`] - one-shot offer search
//! - [`event`] - best-effort match events

mod builder;
pub mod cancel;
mod config;
pub mod event;
pub mod search;
pub mod store;
pub mod supervisor;
pub mod watcher;

pub use builder::build_supervisor;
pub use cancel::{CancellationRegistry, CancellationSignal};
pub use config::{
    Config, LoggingConfig, MarketplaceConfig, RankConfig, SearchConfig, WatchConfig,
};
pub use event::MatchEvent;
pub use store::{MatchStore, Reconciliation};
pub use supervisor::{StartedWatch, Supervisor};
pub use watcher::{PollOutcome, PollTiming, WatchContext, WatchExit, Watcher};
