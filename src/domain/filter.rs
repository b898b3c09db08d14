//! Order eligibility predicate.

use super::order::RawOrder;
use super::watch::DesiredRank;

/// Decide whether an order should be surfaced for a watch.
///
/// Checks run in order and short-circuit: sell side, price present and
/// within `max_price`, seller reachable, then the rank policy.
#[must_use]
pub fn eligible(
    order: &RawOrder,
    max_price: i64,
    desired_rank: DesiredRank,
    effective_max_rank: i64,
) -> bool {
    if !order.is_sell() {
        return false;
    }
    match order.price {
        Some(price) if price <= max_price => {}
        _ => return false,
    }
    if !order.seller_reachable() {
        return false;
    }
    rank_accepted(order, desired_rank, effective_max_rank)
}

/// Rank policy alone: `Maxed` needs a rank at or above the threshold.
#[must_use]
pub fn rank_accepted(order: &RawOrder, desired_rank: DesiredRank, effective_max_rank: i64) -> bool {
    match desired_rank {
        DesiredRank::All => true,
        DesiredRank::Maxed => order.rank.is_some_and(|rank| rank >= effective_max_rank),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sell(price: i64, status: &str) -> RawOrder {
        RawOrder {
            order_type: "sell".into(),
            price: Some(price),
            seller_name: Some("nova".into()),
            seller_status: Some(status.into()),
            rank: None,
        }
    }

    #[test]
    fn accepts_reachable_sell_under_ceiling() {
        assert!(eligible(&sell(40, "ingame"), 50, DesiredRank::All, 10));
        assert!(eligible(&sell(50, "online"), 50, DesiredRank::All, 10));
    }

    #[test]
    fn rejects_buy_orders() {
        let mut order = sell(40, "ingame");
        order.order_type = "buy".into();
        assert!(!eligible(&order, 50, DesiredRank::All, 10));
    }

    #[test]
    fn rejects_price_above_ceiling_or_missing() {
        assert!(!eligible(&sell(51, "ingame"), 50, DesiredRank::All, 10));
        let mut order = sell(40, "ingame");
        order.price = None;
        assert!(!eligible(&order, 50, DesiredRank::All, 10));
    }

    #[test]
    fn rejects_offline_or_unknown_status() {
        assert!(!eligible(&sell(40, "offline"), 50, DesiredRank::All, 10));
        let mut order = sell(40, "ingame");
        order.seller_status = None;
        assert!(!eligible(&order, 50, DesiredRank::All, 10));
    }

    #[test]
    fn maxed_requires_rank_at_threshold() {
        let mut order = sell(40, "ingame");
        order.rank = Some(8);
        assert!(!eligible(&order, 50, DesiredRank::Maxed, 10));
        order.rank = Some(10);
        assert!(eligible(&order, 50, DesiredRank::Maxed, 10));
        order.rank = None;
        assert!(!eligible(&order, 50, DesiredRank::Maxed, 10));
    }

    #[test]
    fn all_accepts_missing_rank() {
        let order = sell(40, "ingame");
        assert!(eligible(&order, 50, DesiredRank::All, 10));
    }
}
