//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - [`ScriptedSource`](source::ScriptedSource), an
//!   [`OrderSource`](crate::port::OrderSource) that replays per-item scripts.
//! - [`orders`] - Builders for raw orders and watch requests.
//! - [`config`] - Canonical test timings.

pub mod config;
pub mod orders;
pub mod source;
