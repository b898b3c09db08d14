//! warframe.market REST adapter.
//!
//! Implements [`OrderSource`](crate::port::OrderSource) on top of the public
//! v1 API. Wire types live in [`dto`] and never leave this module.

mod client;
pub mod dto;

pub use client::WarframeMarketClient;
