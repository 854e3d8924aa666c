//! Shared helpers for scorekeeper tests.

pub mod logging;
