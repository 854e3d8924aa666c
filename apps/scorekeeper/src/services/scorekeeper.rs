use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::config::feed::FeedConfig;
use crate::detect::{DebounceFilter, Detection};
use crate::domain::deal::{self, PlayResult};
use crate::domain::scoring;
use crate::domain::state::{DealPhase, DealState, Seat};
use crate::domain::{Card, Suit};
use crate::error::AppError;

/// Scorekeeping service for one table.
///
/// Owns the deal state and the detection debounce. The mutation API is a
/// single-writer critical section: callers must serialize access, either by
/// feeding events from one loop or by going through [`SharedScorekeeper`].
pub struct Scorekeeper {
    state: DealState,
    filter: DebounceFilter,
    config: FeedConfig,
}

impl Scorekeeper {
    pub fn new(config: FeedConfig) -> Self {
        let filter = DebounceFilter::new(config.debounce_window);
        Self {
            state: DealState::new(),
            filter,
            config,
        }
    }

    /// Fix trump and table size, zero the scores, seat 0 leads.
    pub fn start_deal(&mut self, player_count: usize, trump: Suit) -> Result<(), AppError> {
        deal::start_deal(&mut self.state, player_count, trump)?;
        self.filter.clear();
        info!(player_count, ?trump, "deal started");
        Ok(())
    }

    /// Abandon the current deal and clear the frame history.
    pub fn reset(&mut self) {
        deal::reset(&mut self.state);
        self.filter.clear();
        info!("deal reset");
    }

    /// Record a single "card played" event, resolving the trick when it
    /// completes.
    pub fn record_card_played(&mut self, card: Card) -> Result<PlayResult, AppError> {
        let result = deal::record_card_played(&mut self.state, card)?;
        info!(card = %card, trick_len = self.state.current_trick.len(), "card recorded");
        if let Some(winner) = result.trick_winner {
            info!(
                winner = %scoring::seat_label(winner),
                points = result.trick_points,
                "trick resolved"
            );
        }
        if result.deal_completed {
            let leaders: Vec<String> = self
                .leading_scorers()
                .into_iter()
                .map(scoring::seat_label)
                .collect();
            info!(?leaders, "deal complete");
        }
        Ok(result)
    }

    /// Feed one camera frame's detections through the confidence threshold
    /// and the debounce filter, recording every newly stable card.
    ///
    /// Returns one [`PlayResult`] per card recorded from this frame.
    pub fn ingest_frame(&mut self, detections: &[Detection]) -> Result<Vec<PlayResult>, AppError> {
        let frame: HashSet<Card> = detections
            .iter()
            .filter(|d| d.confidence >= self.config.min_confidence)
            .map(|d| d.card)
            .collect();
        debug!(
            detections = detections.len(),
            confident = frame.len(),
            "frame ingested"
        );
        let stable = self.filter.observe(frame);
        let mut fresh: Vec<Card> = stable
            .into_iter()
            .filter(|card| !self.state.played.contains(card))
            .collect();
        // Deterministic order when several cards stabilize in the same frame.
        fresh.sort();

        let mut results = Vec::with_capacity(fresh.len());
        for card in fresh {
            let result = self.record_card_played(card)?;
            let done = result.deal_completed;
            results.push(result);
            if done {
                break;
            }
        }
        Ok(results)
    }

    pub fn phase(&self) -> DealPhase {
        self.state.phase
    }

    pub fn scores(&self) -> &[i32] {
        &self.state.scores
    }

    /// Seat label to accumulated points, for display after each event.
    pub fn score_table(&self) -> BTreeMap<String, i32> {
        scoring::score_table(&self.state)
    }

    pub fn is_deal_over(&self) -> bool {
        deal::is_deal_over(&self.state)
    }

    /// Seat(s) currently holding the maximum score; ties are reported.
    pub fn leading_scorers(&self) -> Vec<Seat> {
        scoring::leading_scorers(&self.state.scores)
    }
}

/// Clonable handle serializing access for multi-threaded feeders.
#[derive(Clone)]
pub struct SharedScorekeeper {
    inner: Arc<Mutex<Scorekeeper>>,
}

impl SharedScorekeeper {
    pub fn new(config: FeedConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Scorekeeper::new(config))),
        }
    }

    pub fn start_deal(&self, player_count: usize, trump: Suit) -> Result<(), AppError> {
        self.inner.lock().start_deal(player_count, trump)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn record_card_played(&self, card: Card) -> Result<PlayResult, AppError> {
        self.inner.lock().record_card_played(card)
    }

    pub fn ingest_frame(&self, detections: &[Detection]) -> Result<Vec<PlayResult>, AppError> {
        self.inner.lock().ingest_frame(detections)
    }

    pub fn score_table(&self) -> BTreeMap<String, i32> {
        self.inner.lock().score_table()
    }

    pub fn is_deal_over(&self) -> bool {
        self.inner.lock().is_deal_over()
    }

    pub fn leading_scorers(&self) -> Vec<Seat> {
        self.inner.lock().leading_scorers()
    }
}
