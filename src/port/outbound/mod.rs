//! Outbound ports: capabilities the engine consumes.

pub mod marketplace;
