//! Effective max rank resolution.

use std::collections::HashMap;

use super::id::ItemId;

/// Max rank used when neither an override nor a table entry applies.
pub const DEFAULT_MAX_RANK: i64 = 10;

/// Static per-item max-rank table with a global fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    default_max_rank: i64,
    items: HashMap<ItemId, i64>,
}

impl RankTable {
    pub fn new(default_max_rank: i64, items: HashMap<ItemId, i64>) -> Self {
        Self {
            default_max_rank,
            items,
        }
    }

    /// The built-in table of well-known mods.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_MAX_RANK, builtin_items())
    }

    #[must_use]
    pub fn default_max_rank(&self) -> i64 {
        self.default_max_rank
    }

    /// Resolve the rank threshold for "maxed" eligibility.
    ///
    /// A parsable override wins without any bounds check, then the table
    /// entry, then the default. Malformed overrides fall through silently.
    #[must_use]
    pub fn effective_max_rank(&self, item: &ItemId, rank_override: Option<&str>) -> i64 {
        if let Some(rank) = rank_override.and_then(|raw| raw.trim().parse::<i64>().ok()) {
            return rank;
        }
        self.items
            .get(item)
            .copied()
            .unwrap_or(self.default_max_rank)
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Known max ranks keyed by item ID.
pub fn builtin_items() -> HashMap<ItemId, i64> {
    [
        ("serration", 10),
        ("point_strike", 10),
        ("vitality", 10),
        ("hornet_strike", 10),
        ("pressure_point", 10),
        ("redirection", 10),
        ("streamline", 5),
        ("intensify", 5),
        ("continuity", 5),
        ("stretch", 5),
        ("flow", 5),
    ]
    .into_iter()
    .map(|(item, rank)| (ItemId::new(item), rank))
    .collect()
}
