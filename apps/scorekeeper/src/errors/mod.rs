//! Error handling for the scorekeeper.

pub mod domain;

pub use domain::{ConflictKind, DomainError, ValidationKind};
