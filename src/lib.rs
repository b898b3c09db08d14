//! Orderwatch - surface new warframe.market sell offers as they appear.
//!
//! The crate is built around an order-watch engine: one polling task per
//! watch request, a shared match store those tasks reconcile into, and a
//! cancellation registry that lets an operator stop every watcher of an item
//! without disturbing the others.
//!
//! # Modules
//!
//! - [`domain`] - Item IDs, raw orders, matches and the pure filter/rank rules
//! - [`port`] - The [`OrderSource`](port::OrderSource) trait the engine fetches through
//! - [`adapter`] - warframe.market REST implementation of `OrderSource`
//! - [`app`] - Match store, cancellation registry, watchers, supervisor, config
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use orderwatch::app::{build_supervisor, Config};
//! use orderwatch::domain::WatchRequest;
//!
//! # async fn run() -> orderwatch::error::Result<()> {
//! let config = Config::default();
//! let supervisor = build_supervisor(&config)?;
//! supervisor.start_watch(WatchRequest::new("volt_prime_set", "", 50));
//! // ... later
//! let matches = supervisor.list_matches();
//! supervisor.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
