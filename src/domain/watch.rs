//! Watch requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id::ItemId;

/// Which upgrade ranks a watch accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesiredRank {
    /// Any rank, including orders that carry no rank.
    #[default]
    All,
    /// Only orders at or above the effective max rank.
    Maxed,
}

impl fmt::Display for DesiredRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Maxed => write!(f, "Maxed"),
        }
    }
}

impl FromStr for DesiredRank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "maxed" => Ok(Self::Maxed),
            other => Err(format!("unknown rank choice '{other}' (expected all or maxed)")),
        }
    }
}

/// Parameters for one watcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchRequest {
    pub item_id: ItemId,
    pub display_name: String,
    /// Inclusive price ceiling.
    pub max_price: i64,
    pub desired_rank: DesiredRank,
    /// Caller-supplied max rank, kept as text; unparsable values are ignored.
    pub rank_override: Option<String>,
}

impl WatchRequest {
    /// Create a request accepting every rank with no override.
    ///
    /// An empty display name is replaced by one derived from the item ID.
    pub fn new(item_id: impl Into<ItemId>, display_name: impl Into<String>, max_price: i64) -> Self {
        let item_id = item_id.into();
        let display_name = display_name.into();
        let display_name = if display_name.trim().is_empty() {
            item_id.display_name()
        } else {
            display_name
        };
        Self {
            item_id,
            display_name,
            max_price,
            desired_rank: DesiredRank::All,
            rank_override: None,
        }
    }

    #[must_use]
    pub fn with_desired_rank(mut self, desired_rank: DesiredRank) -> Self {
        self.desired_rank = desired_rank;
        self
    }

    #[must_use]
    pub fn with_rank_override(mut self, rank_override: impl Into<String>) -> Self {
        self.rank_override = Some(rank_override.into());
        self
    }
}
