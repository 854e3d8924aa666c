//! Service layer: stateful orchestration over the pure domain operations.

pub mod scorekeeper;

pub use scorekeeper::{Scorekeeper, SharedScorekeeper};
