//! Tracked matches and their identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::ItemId;
use super::order::RawOrder;
use super::watch::{DesiredRank, WatchRequest};

/// Deduplication key for matches: item, seller and price.
///
/// Rank is deliberately absent, so a seller changing only the rank of a
/// listing at the same price is not seen as a new match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchIdentity {
    pub item_id: ItemId,
    pub seller: String,
    pub price: Option<i64>,
}

impl MatchIdentity {
    pub fn new(item_id: ItemId, seller: impl Into<String>, price: Option<i64>) -> Self {
        Self {
            item_id,
            seller: seller.into(),
            price,
        }
    }

    /// Identity of an order for the given item.
    pub fn of_order(item_id: &ItemId, order: &RawOrder) -> Self {
        Self::new(item_id.clone(), order.seller(), order.price)
    }
}

impl fmt::Display for MatchIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.price {
            Some(price) => write!(f, "{}_{}_{}", self.item_id, self.seller, price),
            None => write!(f, "{}_{}_", self.item_id, self.seller),
        }
    }
}

/// An order that currently satisfies a watch's filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub item_id: ItemId,
    pub display_name: String,
    pub price: Option<i64>,
    pub seller: Option<String>,
    pub seller_status: Option<String>,
    pub rank: Option<i64>,
    pub desired_rank: DesiredRank,
    pub effective_max_rank: i64,
}

impl Match {
    /// Build a match from an eligible order.
    pub fn from_order(request: &WatchRequest, order: &RawOrder, effective_max_rank: i64) -> Self {
        Self {
            item_id: request.item_id.clone(),
            display_name: request.display_name.clone(),
            price: order.price,
            seller: order.seller_name.clone(),
            seller_status: order.seller_status.clone(),
            rank: order.rank,
            desired_rank: request.desired_rank,
            effective_max_rank,
        }
    }

    /// Deduplication key of this match.
    #[must_use]
    pub fn identity(&self) -> MatchIdentity {
        MatchIdentity::new(
            self.item_id.clone(),
            self.seller.as_deref().unwrap_or_default(),
            self.price,
        )
    }
}
