//! Builders for raw orders and watch requests.

use crate::domain::{DesiredRank, RawOrder, WatchRequest};

/// A sell order with the given seller, price and status, and no rank.
pub fn sell(seller: &str, price: i64, status: &str) -> RawOrder {
    RawOrder {
        order_type: "sell".into(),
        price: Some(price),
        seller_name: Some(seller.into()),
        seller_status: Some(status.into()),
        rank: None,
    }
}

/// A ranked sell order from an in-game seller.
pub fn ranked_sell(seller: &str, price: i64, rank: i64) -> RawOrder {
    RawOrder {
        rank: Some(rank),
        ..sell(seller, price, "ingame")
    }
}

/// A buy order, never eligible.
pub fn buy(seller: &str, price: i64) -> RawOrder {
    RawOrder {
        order_type: "buy".into(),
        ..sell(seller, price, "ingame")
    }
}

/// A request accepting every rank.
pub fn request(item: &str, max_price: i64) -> WatchRequest {
    WatchRequest::new(item, "", max_price)
}

/// A request accepting only maxed orders.
pub fn maxed_request(item: &str, max_price: i64) -> WatchRequest {
    request(item, max_price).with_desired_rank(DesiredRank::Maxed)
}
