//! The trick resolver: point value and winning position of one trick.

use super::cards_logic::card_beats;
use super::cards_types::{Card, Suit};
use super::rules::{self, DECK_SIZE, LAST_TRICK_BONUS, PLAYER_COUNTS};
use super::state::{seat_offset, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of resolving a completed trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickOutcome {
    /// Point value of the trick, last-trick bonus included.
    pub points: i32,
    /// 0-based position of the winning card within the trick
    /// (the lead card is position 0).
    pub winner_offset: usize,
}

/// Point value of the trick: per-card lookup plus the flat bonus when the
/// deal's final trick is being scored.
pub fn trick_points(
    trick: &[Card],
    trump: Suit,
    cards_played_before: usize,
    player_count: usize,
) -> i32 {
    let mut points: i32 = trick.iter().map(|&c| rules::card_points(c, trump)).sum();
    if rules::is_last_trick(player_count, cards_played_before) {
        points += LAST_TRICK_BONUS;
    }
    points
}

/// Position of the strongest card, scanning in play order from the lead.
pub fn winning_position(trick: &[Card], trump: Suit) -> Option<usize> {
    let mut best = *trick.first()?;
    let mut best_pos = 0;
    for (pos, &card) in trick.iter().enumerate().skip(1) {
        if card_beats(card, best, trump) {
            best = card;
            best_pos = pos;
        }
    }
    Some(best_pos)
}

/// Score one completed trick.
///
/// Pure function of its inputs; rejects malformed requests instead of
/// miscomputing. `cards_played_before` is the size of the played set at the
/// moment of resolution.
pub fn resolve_trick(
    trick: &[Card],
    trump: Suit,
    cards_played_before: usize,
    player_count: usize,
) -> Result<TrickOutcome, DomainError> {
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
    if trick.len() != player_count {
        return Err(DomainError::validation(
            ValidationKind::TrickLength,
            format!(
                "Trick has {} cards, expected {player_count}",
                trick.len()
            ),
        ));
    }
    if cards_played_before > DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::PlayedCountOutOfRange,
            format!("Played count {cards_played_before} exceeds deck size {DECK_SIZE}"),
        ));
    }

    let points = trick_points(trick, trump, cards_played_before, player_count);
    let winner_offset = winning_position(trick, trump)
        .ok_or_else(|| DomainError::validation_other("Invariant violated: trick is empty"))?;
    Ok(TrickOutcome {
        points,
        winner_offset,
    })
}

/// Absolute seat of the trick winner given the leading seat.
pub fn winner_seat(winner_offset: usize, leader: Seat, player_count: usize) -> Seat {
    seat_offset(leader, winner_offset, player_count)
}
