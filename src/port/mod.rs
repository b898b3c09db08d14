//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams the engine talks through. Adapters implement them to
//! integrate with the real marketplace; the testkit implements them with
//! scripted responses.
//!
//! ```text
//!     ┌──────────────────────────┐
//!     │  Supervisor / Watchers   │
//!     └────────────┬─────────────┘
//!                  │ OrderSource
//!                  ▼
//!     ┌──────────────────────────┐
//!     │ warframe.market adapter  │
//!     └──────────────────────────┘
//! ```

pub mod outbound;

pub use outbound::marketplace::{OrderBatch, OrderSource};
