//! Score reporting: seat labels, the UI score table, leading scorers.

use std::collections::BTreeMap;

use super::state::{DealState, Seat};

/// Display label for a seat ("Player 1" = seat 0).
pub fn seat_label(seat: Seat) -> String {
    format!("Player {}", seat + 1)
}

/// Seats holding the maximum score. Several seats when tied; never
/// collapsed to an arbitrary single winner.
pub fn leading_scorers(scores: &[i32]) -> Vec<Seat> {
    let Some(max) = scores.iter().copied().max() else {
        return Vec::new();
    };
    scores
        .iter()
        .enumerate()
        .filter(|(_, &s)| s == max)
        .map(|(seat, _)| seat as Seat)
        .collect()
}

/// The score table as shown to the UI: seat label to accumulated points.
pub fn score_table(state: &DealState) -> BTreeMap<String, i32> {
    state
        .scores
        .iter()
        .enumerate()
        .map(|(seat, &points)| (seat_label(seat as Seat), points))
        .collect()
}
