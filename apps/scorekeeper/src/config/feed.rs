use std::env;

use crate::error::AppError;

/// Frames a card must be seen in consecutively before it counts as played.
pub const DEFAULT_DEBOUNCE_WINDOW: usize = 3;
/// Minimum model confidence for a detection to enter the feed.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.7;

/// Detection-feed tuning, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub debounce_window: usize,
    pub min_confidence: f32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            debounce_window: DEFAULT_DEBOUNCE_WINDOW,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl FeedConfig {
    /// Build the config from `SCOREKEEPER_DEBOUNCE_WINDOW` and
    /// `SCOREKEEPER_MIN_CONFIDENCE`, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let debounce_window = match env::var("SCOREKEEPER_DEBOUNCE_WINDOW") {
            Ok(raw) => raw.parse::<usize>().map_err(|_| {
                AppError::config(format!(
                    "SCOREKEEPER_DEBOUNCE_WINDOW must be a positive integer, got '{raw}'"
                ))
            })?,
            Err(_) => DEFAULT_DEBOUNCE_WINDOW,
        };
        let min_confidence = match env::var("SCOREKEEPER_MIN_CONFIDENCE") {
            Ok(raw) => raw.parse::<f32>().map_err(|_| {
                AppError::config(format!(
                    "SCOREKEEPER_MIN_CONFIDENCE must be a number, got '{raw}'"
                ))
            })?,
            Err(_) => DEFAULT_MIN_CONFIDENCE,
        };
        Self {
            debounce_window,
            min_confidence,
        }
        .validated()
    }

    /// Enforce value ranges regardless of where the settings came from.
    pub fn validated(self) -> Result<Self, AppError> {
        if self.debounce_window == 0 {
            return Err(AppError::config(
                "debounce window must be at least 1 frame",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(AppError::config(format!(
                "minimum confidence must be within [0, 1], got {}",
                self.min_confidence
            )));
        }
        Ok(self)
    }
}
