//! The deal accumulator: buffers played cards into tricks, scores them,
//! and rotates the leader across a full 36-card deal.

use super::cards_types::{Card, Suit};
use super::rules::{self, PLAYER_COUNTS};
use super::state::{require_player_count, require_trump, DealPhase, DealState, Seat};
use super::tricks::{resolve_trick, winner_seat};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Result of recording a played card, describing what state changes occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayResult {
    /// Whether this card completed a trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Points awarded for the completed trick (0 otherwise).
    pub trick_points: i32,
    /// Whether the deal transitioned to Complete.
    pub deal_completed: bool,
}

/// Start a fresh deal: empty played set and trick, leader = seat 0, all
/// scores zero. Only legal from NotStarted or Complete; use [`reset`] to
/// abandon a deal in progress.
pub fn start_deal(
    state: &mut DealState,
    player_count: usize,
    trump: Suit,
) -> Result<(), DomainError> {
    if !PLAYER_COUNTS.contains(&player_count) {
        return Err(DomainError::validation(
            ValidationKind::PlayerCountOutOfRange,
            format!(
                "Player count {player_count} outside {}..={}",
                PLAYER_COUNTS.start(),
                PLAYER_COUNTS.end()
            ),
        ));
    }
    match state.phase {
        DealPhase::NotStarted | DealPhase::Complete => {}
        DealPhase::InProgress => {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Deal already in progress",
            ))
        }
    }
    *state = DealState::new();
    state.phase = DealPhase::InProgress;
    state.player_count = Some(player_count);
    state.trump = Some(trump);
    state.current_trick = Vec::with_capacity(player_count);
    state.scores = vec![0; player_count];
    Ok(())
}

/// Abandon whatever is on the table and return to NotStarted.
pub fn reset(state: &mut DealState) {
    *state = DealState::new();
}

/// Record one played card.
///
/// Appends the card to the current trick and the played set. When the trick
/// reaches the table size it is resolved immediately: points go to the
/// winning seat, the winner leads the next trick, and the buffer is cleared.
/// Every error leaves the state unchanged.
pub fn record_card_played(state: &mut DealState, card: Card) -> Result<PlayResult, DomainError> {
    match state.phase {
        DealPhase::InProgress => {}
        DealPhase::NotStarted => {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "No deal in progress",
            ))
        }
        DealPhase::Complete => {
            return Err(DomainError::conflict(
                ConflictKind::DealComplete,
                "Deal is complete; start a new deal first",
            ))
        }
    }
    if state.played.contains(&card) {
        return Err(DomainError::conflict(
            ConflictKind::DuplicateCard,
            format!("Card {card} was already played this deal"),
        ));
    }
    let player_count = require_player_count(state, "record_card_played")?;
    let trump = require_trump(state, "record_card_played")?;

    state.played.insert(card);
    state.current_trick.push(card);

    let mut result = PlayResult {
        trick_completed: false,
        trick_winner: None,
        trick_points: 0,
        deal_completed: false,
    };
    if state.current_trick.len() < player_count {
        return Ok(result);
    }

    // Trick complete. The resolver sees the played-set size at resolution
    // time (this trick's cards included), which is what makes the final
    // trick of the deal carry the 5-point bonus.
    let outcome = resolve_trick(&state.current_trick, trump, state.played.len(), player_count)?;
    let winner = winner_seat(outcome.winner_offset, state.leader, player_count);
    state.scores[winner as usize] += outcome.points;
    state.leader = winner;
    state.current_trick.clear();

    result.trick_completed = true;
    result.trick_winner = Some(winner);
    result.trick_points = outcome.points;

    if is_deal_over(state) {
        state.phase = DealPhase::Complete;
        result.deal_completed = true;
    }
    Ok(result)
}

/// True when no full trick remains to be played.
///
/// Cards buffered in the current trick do not count against the remaining
/// supply: the trick on the table can still complete.
pub fn is_deal_over(state: &DealState) -> bool {
    match state.player_count {
        Some(player_count) => {
            let committed = state.played.len() - state.current_trick.len();
            rules::DECK_SIZE.saturating_sub(committed) < player_count
        }
        None => false,
    }
}
