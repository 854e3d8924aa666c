use std::collections::{HashSet, VecDeque};

use crate::domain::Card;

/// Temporal debounce over detection frames.
///
/// A card is *stable* once it has appeared in every one of the last
/// `window` consecutive frame sets. Nothing is stable until a full window
/// of frames has been observed, so a card glimpsed in a single frame never
/// counts as played.
#[derive(Debug, Clone)]
pub struct DebounceFilter {
    window: usize,
    recent: VecDeque<HashSet<Card>>,
}

impl DebounceFilter {
    /// Panics if `window` is zero; [`crate::config::FeedConfig::validated`]
    /// rejects that before a filter is built from configuration.
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "debounce window must be at least one frame");
        Self {
            window,
            recent: VecDeque::with_capacity(window),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Record one frame's detections and return the cards stable across
    /// the full window.
    pub fn observe(&mut self, frame: HashSet<Card>) -> HashSet<Card> {
        if self.recent.len() == self.window {
            self.recent.pop_front();
        }
        self.recent.push_back(frame);
        if self.recent.len() < self.window {
            return HashSet::new();
        }
        let mut stable = self.recent[0].clone();
        for seen in self.recent.iter().skip(1) {
            stable.retain(|card| seen.contains(card));
        }
        stable
    }

    /// Drop all frame history (deal start or reset).
    pub fn clear(&mut self) {
        self.recent.clear();
    }
}
