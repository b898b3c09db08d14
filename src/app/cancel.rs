//! Cooperative cancellation for watchers.
//!
//! Each watcher holds one [`CancellationSignal`]. The registry maps items to
//! the signals of their live watchers so that stopping an item reaches every
//! watcher polling it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::ItemId;

/// One-shot, idempotent stop flag observed by a single watcher.
///
/// Clones share the flag; equality is by identity, not by state.
#[derive(Debug, Clone)]
pub struct CancellationSignal {
    id: u64,
    fired: Arc<AtomicBool>,
}

impl CancellationSignal {
    fn new(id: u64) -> Self {
        Self {
            id,
            fired: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request the watcher to stop. Firing twice has no further effect.
    pub fn fire(&self) {
        self.fired.store(true, Ordering::SeqCst);
    }

    /// Check whether a stop was requested.
    #[must_use]
    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Registry-unique identifier, for logging.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl PartialEq for CancellationSignal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CancellationSignal {}

/// Item ID to the live signals of that item's watchers.
#[derive(Debug, Default)]
pub struct CancellationRegistry {
    signals: Mutex<HashMap<ItemId, Vec<CancellationSignal>>>,
    next_id: AtomicU64,
}

impl CancellationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh signal and record it as live for `item`.
    pub fn register(&self, item: &ItemId) -> CancellationSignal {
        let signal = CancellationSignal::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.signals
            .lock()
            .entry(item.clone())
            .or_default()
            .push(signal.clone());
        signal
    }

    /// Forget a signal. The item entry goes away with its last signal.
    pub fn deregister(&self, item: &ItemId, signal: &CancellationSignal) {
        let mut signals = self.signals.lock();
        if let Some(live) = signals.get_mut(item) {
            live.retain(|s| s != signal);
            if live.is_empty() {
                signals.remove(item);
            }
        }
    }

    /// Fire every signal currently live for `item`, returning how many.
    ///
    /// The set is copied under the lock and fired after releasing it, so
    /// watchers registered afterwards are unaffected.
    pub fn signal_all(&self, item: &ItemId) -> usize {
        let targets = self.signals.lock().get(item).cloned().unwrap_or_default();
        for signal in &targets {
            signal.fire();
        }
        targets.len()
    }

    /// Fire every live signal of every item, returning how many.
    pub fn signal_everything(&self) -> usize {
        let targets: Vec<CancellationSignal> =
            self.signals.lock().values().flatten().cloned().collect();
        for signal in &targets {
            signal.fire();
        }
        targets.len()
    }

    /// Number of live signals for `item`.
    #[must_use]
    pub fn live_count(&self, item: &ItemId) -> usize {
        self.signals.lock().get(item).map_or(0, Vec::len)
    }

    /// Items that currently have at least one live watcher, sorted.
    #[must_use]
    pub fn watched_items(&self) -> Vec<ItemId> {
        let mut items: Vec<ItemId> = self.signals.lock().keys().cloned().collect();
        items.sort();
        items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signals.lock().is_empty()
    }
}
