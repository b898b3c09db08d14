//! Raw marketplace order records.

use serde::{Deserialize, Serialize};

/// Order type string the marketplace uses for sell listings.
pub const SELL: &str = "sell";

/// Seller statuses that count as reachable for a trade.
pub const REACHABLE_STATUSES: [&str; 2] = ["ingame", "online"];

/// One order record as returned by a single poll.
///
/// Every field besides `order_type` may be missing on the wire; numeric
/// fields that were present but not numeric arrive here as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOrder {
    /// `"sell"` or `"buy"`.
    pub order_type: String,
    /// Asking price in platinum.
    pub price: Option<i64>,
    /// In-game name of the seller.
    pub seller_name: Option<String>,
    /// Seller presence: `"ingame"`, `"online"`, `"offline"`.
    pub seller_status: Option<String>,
    /// Upgrade rank of the listed item, if it has ranks.
    pub rank: Option<i64>,
}

impl RawOrder {
    /// True if this is a sell listing.
    #[must_use]
    pub fn is_sell(&self) -> bool {
        self.order_type == SELL
    }

    /// True if the seller is in game or online.
    #[must_use]
    pub fn seller_reachable(&self) -> bool {
        self.seller_status
            .as_deref()
            .is_some_and(|status| REACHABLE_STATUSES.contains(&status))
    }

    /// Seller name, or the empty string when the record has none.
    #[must_use]
    pub fn seller(&self) -> &str {
        self.seller_name.as_deref().unwrap_or_default()
    }
}
