use std::collections::HashSet;

use super::cards_types::{Card, Suit};
use crate::errors::domain::DomainError;

pub type Seat = u8;

/// Deal progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DealPhase {
    /// No deal started yet (or the table was reset).
    NotStarted,
    /// Cards are being collected into tricks.
    InProgress,
    /// All playable cards recorded; no further plays accepted.
    Complete,
}

/// Entire per-deal container, sufficient for the pure accumulator operations.
///
/// The camera application's process-wide globals (played set, current play,
/// beginning player) live here instead, one instance per deal.
#[derive(Debug, Clone)]
pub struct DealState {
    /// Current phase of the deal.
    pub phase: DealPhase,
    /// Seats at the table; fixed at deal start.
    /// - None in NotStarted where the table size is not meaningful.
    pub player_count: Option<usize>,
    /// Trump suit for this deal; fixed at deal start.
    pub trump: Option<Suit>,
    /// Every card recorded this deal (at most 36, each at most once).
    pub played: HashSet<Card>,
    /// Cards of the trick being assembled, in play order from the leader.
    pub current_trick: Vec<Card>,
    /// Seat that leads the current trick.
    pub leader: Seat,
    /// Accumulated points per seat; only ever incremented.
    pub scores: Vec<i32>,
}

impl DealState {
    pub fn new() -> Self {
        Self {
            phase: DealPhase::NotStarted,
            player_count: None,
            trump: None,
            played: HashSet::new(),
            current_trick: Vec::new(),
            leader: 0,
            scores: Vec::new(),
        }
    }

    pub fn cards_remaining(&self) -> usize {
        super::rules::DECK_SIZE.saturating_sub(self.played.len())
    }
}

impl Default for DealState {
    fn default() -> Self {
        Self::new()
    }
}

/// Seat `offset` steps after `start`, wrapping at the table size.
#[inline]
pub fn seat_offset(start: Seat, offset: usize, player_count: usize) -> Seat {
    debug_assert!(player_count > 0, "table must have at least one seat");
    ((start as usize + offset) % player_count) as Seat
}

pub fn require_player_count(state: &DealState, ctx: &'static str) -> Result<usize, DomainError> {
    state.player_count.ok_or_else(|| {
        DomainError::validation_other(format!(
            "Invariant violated: player_count must be set ({ctx})"
        ))
    })
}

pub fn require_trump(state: &DealState, ctx: &'static str) -> Result<Suit, DomainError> {
    state.trump.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: trump must be set ({ctx})"))
    })
}
