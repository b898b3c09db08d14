//! One-shot offer search, independent of any watcher.

use tracing::{debug, info};

use crate::domain::filter::rank_accepted;
use crate::domain::{DesiredRank, ItemId, Offer};
use crate::error::Result;
use crate::port::{OrderBatch, OrderSource};

/// Default number of offers returned.
pub const DEFAULT_LIMIT: usize = 10;

/// Seller status required for a search hit.
const IN_GAME: &str = "ingame";

/// Fetch an item's orders once and return the cheapest in-game sell offers.
///
/// Offers are sorted by ascending price with unpriced offers last, and cut
/// to `limit`. An item the marketplace no longer lists yields no offers;
/// transport failures are returned as errors.
pub async fn search_offers(
    source: &dyn OrderSource,
    item: &ItemId,
    desired_rank: DesiredRank,
    effective_max_rank: i64,
    limit: usize,
) -> Result<Vec<Offer>> {
    let orders = match source.fetch_orders(item).await? {
        OrderBatch::Orders(orders) => orders,
        OrderBatch::ItemGone { status } => {
            info!(item = %item, status, "Item not listed, no offers");
            return Ok(Vec::new());
        }
    };

    let mut hits: Vec<_> = orders
        .iter()
        .filter(|order| order.is_sell())
        .filter(|order| order.seller_status.as_deref() == Some(IN_GAME))
        .filter(|order| rank_accepted(order, desired_rank, effective_max_rank))
        .collect();

    hits.sort_by_key(|order| order.price.unwrap_or(i64::MAX));

    let offers: Vec<Offer> = hits
        .into_iter()
        .take(limit)
        .map(|order| Offer::from_order(item, order))
        .collect();

    debug!(
        item = %item,
        orders = orders.len(),
        offers = offers.len(),
        "Offer search complete"
    );
    Ok(offers)
}
