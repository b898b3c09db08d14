//! One-shot offer search results.

use serde::Serialize;

use super::id::ItemId;
use super::order::RawOrder;

/// A sell offer returned by an ad-hoc search, not tracked by any watcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offer {
    pub item_id: ItemId,
    pub display_name: String,
    pub price: Option<i64>,
    pub seller: Option<String>,
    pub seller_status: Option<String>,
    pub rank: Option<i64>,
}

impl Offer {
    pub fn from_order(item_id: &ItemId, order: &RawOrder) -> Self {
        Self {
            item_id: item_id.clone(),
            display_name: item_id.display_name(),
            price: order.price,
            seller: order.seller_name.clone(),
            seller_status: order.seller_status.clone(),
            rank: order.rank,
        }
    }
}
