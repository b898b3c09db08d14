//! Marketplace-agnostic types and pure rules.
//!
//! Nothing in this module performs I/O or takes locks:
//!
//! - [`id`] - item identifier newtype
//! - [`order`] - raw order records as produced by a poll
//! - [`watch`] - watch requests and the rank policy
//! - [`rank`] - effective max rank resolution
//! - [`filter`] - the order eligibility predicate
//! - [`matching`] - tracked matches and their identity
//! - [`offer`] - ad-hoc search results

pub mod filter;
pub mod id;
pub mod matching;
pub mod offer;
pub mod order;
pub mod rank;
pub mod watch;

pub use filter::eligible;
pub use id::ItemId;
pub use matching::{Match, MatchIdentity};
pub use offer::Offer;
pub use order::RawOrder;
pub use rank::{RankTable, DEFAULT_MAX_RANK};
pub use watch::{DesiredRank, WatchRequest};
