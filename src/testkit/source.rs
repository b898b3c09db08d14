//! Scripted [`OrderSource`] for driving watchers in tests.
//!
//! Each item has a queue of steps consumed one per fetch. When the queue
//! runs dry the last step repeats, so a watcher keeps seeing a stable
//! market until the test scripts a change. Items with no script return an
//! empty order list.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{ItemId, RawOrder};
use crate::error::{Error, FetchError};
use crate::port::{OrderBatch, OrderSource};

/// One scripted fetch response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Orders(Vec<RawOrder>),
    Gone,
    Fail,
}

#[derive(Debug, Default)]
struct Script {
    queue: VecDeque<Step>,
    last: Option<Step>,
    fetches: usize,
}

/// Replays scripted responses per item and counts fetches.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    scripts: Mutex<HashMap<ItemId, Script>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step for `item`.
    pub fn push(&self, item: &str, step: Step) -> &Self {
        self.scripts
            .lock()
            .entry(ItemId::new(item))
            .or_default()
            .queue
            .push_back(step);
        self
    }

    /// Append an order-list step for `item`.
    pub fn push_orders(&self, item: &str, orders: Vec<RawOrder>) -> &Self {
        self.push(item, Step::Orders(orders))
    }

    /// Number of fetches made for `item` so far.
    pub fn fetches(&self, item: &str) -> usize {
        self.scripts
            .lock()
            .get(&ItemId::new(item))
            .map_or(0, |script| script.fetches)
    }

    fn next_step(&self, item: &ItemId) -> Step {
        let mut scripts = self.scripts.lock();
        let script = scripts.entry(item.clone()).or_default();
        script.fetches += 1;
        if let Some(step) = script.queue.pop_front() {
            script.last = Some(step.clone());
            return step;
        }
        script.last.clone().unwrap_or(Step::Orders(Vec::new()))
    }
}

#[async_trait]
impl OrderSource for ScriptedSource {
    async fn fetch_orders(&self, item: &ItemId) -> Result<OrderBatch, Error> {
        match self.next_step(item) {
            Step::Orders(orders) => Ok(OrderBatch::Orders(orders)),
            Step::Gone => Ok(OrderBatch::ItemGone { status: 404 }),
            Step::Fail => Err(FetchError::Status {
                item: item.to_string(),
                status: 503,
            }
            .into()),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
