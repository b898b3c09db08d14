//! Shared store of currently-known matches.
//!
//! Every operation takes the store's single lock for its whole duration, so
//! a reconcile is atomic with respect to every other watcher and to
//! explicit clears.

use std::collections::HashSet;

use parking_lot::Mutex;

use crate::domain::{ItemId, Match, MatchIdentity};

/// Result of reconciling one poll against the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Matches that were not in the store before this poll, in poll order.
    pub added: Vec<Match>,
    /// Number of stored matches for the item that the poll no longer shows.
    pub removed: usize,
}

impl Reconciliation {
    /// True if the poll changed nothing.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed == 0
    }
}

/// Ordered collection of matches with no duplicate identity.
#[derive(Debug, Default)]
pub struct MatchStore {
    matches: Mutex<Vec<Match>>,
}

impl MatchStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current contents, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Match> {
        self.matches.lock().clone()
    }

    /// Current matches for one item, in insertion order.
    #[must_use]
    pub fn matches_for(&self, item: &ItemId) -> Vec<Match> {
        self.matches
            .lock()
            .iter()
            .filter(|m| &m.item_id == item)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.lock().is_empty()
    }

    /// Remove every match for `item`, returning how many were removed.
    pub fn clear_item(&self, item: &ItemId) -> usize {
        let mut matches = self.matches.lock();
        let before = matches.len();
        matches.retain(|m| &m.item_id != item);
        before - matches.len()
    }

    /// Bring the item's matches in line with the eligible set of one poll.
    ///
    /// `current` holds one match per eligible order; when several orders
    /// share an identity the first one wins. Identities not yet stored are
    /// appended, stored identities absent from `current` are dropped, and
    /// matches of other items are never touched.
    pub fn reconcile(&self, item: &ItemId, current: &[Match]) -> Reconciliation {
        let current_ids: HashSet<MatchIdentity> = current.iter().map(Match::identity).collect();

        let mut matches = self.matches.lock();

        let existing: HashSet<MatchIdentity> = matches
            .iter()
            .filter(|m| &m.item_id == item)
            .map(Match::identity)
            .collect();

        let mut added = Vec::new();
        let mut queued: HashSet<MatchIdentity> = HashSet::new();
        for candidate in current.iter().filter(|m| &m.item_id == item) {
            let identity = candidate.identity();
            if existing.contains(&identity) || !queued.insert(identity) {
                continue;
            }
            if matches.contains(candidate) {
                continue;
            }
            matches.push(candidate.clone());
            added.push(candidate.clone());
        }

        let before = matches.len();
        matches.retain(|m| &m.item_id != item || current_ids.contains(&m.identity()));
        let removed = before - matches.len();

        Reconciliation { added, removed }
    }
}
