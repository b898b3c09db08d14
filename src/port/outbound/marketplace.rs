//! Marketplace port for fetching the current orders of an item.

use async_trait::async_trait;

use crate::domain::{ItemId, RawOrder};
use crate::error::Error;

/// Outcome of a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBatch {
    /// The item exists; these are its current orders.
    Orders(Vec<RawOrder>),
    /// The marketplace reports the item no longer exists.
    ItemGone {
        /// HTTP status (or equivalent) that reported the removal.
        status: u16,
    },
}

/// Source of order snapshots keyed by item.
///
/// `Err` means a transient failure (transport, timeout, unexpected payload)
/// and must never be read as "no offers". Implementations bound each call
/// with their own timeout.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch the current orders for an item.
    async fn fetch_orders(&self, item: &ItemId) -> Result<OrderBatch, Error>;

    /// Marketplace name for logging/debugging.
    fn name(&self) -> &'static str;
}
