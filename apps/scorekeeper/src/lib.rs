#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod detect;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;

// Re-exports for public API
pub use config::feed::FeedConfig;
pub use detect::{CardDetector, DebounceFilter, Detection};
pub use domain::{Card, DealPhase, DealState, Rank, Seat, Suit};
pub use error::AppError;
pub use errors::domain::DomainError;
pub use services::scorekeeper::{Scorekeeper, SharedScorekeeper};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorekeeper_test_support::logging::init();
}
