//! Canonical test timings.
//!
//! Single source of truth for poll cadences used across tests.

use std::time::Duration;

use crate::app::PollTiming;

/// One-second polls checked every 100ms; pair with paused Tokio time.
pub fn timing() -> PollTiming {
    PollTiming::new(Duration::from_secs(1), Duration::from_millis(100))
}

/// Interval between polls of [`timing`].
pub fn poll_interval() -> Duration {
    timing().interval()
}

/// Cancellation check granularity of [`timing`].
pub fn tick() -> Duration {
    timing().tick()
}
