//! Environment-driven configuration.

pub mod feed;

pub use feed::FeedConfig;
