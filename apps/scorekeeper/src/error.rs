use thiserror::Error;

use crate::errors::domain::DomainError;

/// Application-level error surfaced by services, configuration and the
/// replay binary. Domain failures are reported immediately, never
/// swallowed or logged-and-ignored.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { detail: String },
    #[error("Conflict: {detail}")]
    Conflict { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Input error: {detail}")]
    Input { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn input(detail: impl Into<String>) -> Self {
        Self::Input {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::Validation(..) => AppError::Validation {
                detail: err.to_string(),
            },
            DomainError::Conflict(..) => AppError::Conflict {
                detail: err.to_string(),
            },
        }
    }
}
