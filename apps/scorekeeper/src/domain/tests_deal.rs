use super::deal::{is_deal_over, record_card_played, reset, start_deal};
use super::rules::{self, DEAL_POINT_TOTAL, LAST_TRICK_BONUS};
use super::{Card, DealPhase, DealState, Suit};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

fn started(player_count: usize, trump: Suit) -> DealState {
    let mut state = DealState::new();
    start_deal(&mut state, player_count, trump).expect("start test deal");
    state
}

fn play(state: &mut DealState, token: &str) -> super::PlayResult {
    let card: Card = token.parse().expect("test card token");
    record_card_played(state, card).expect("record test card")
}

#[test]
fn full_deal_in_canonical_order_totals_157() {
    let mut state = started(4, Suit::Hearts);
    let mut last = None;
    for card in rules::full_deck() {
        assert!(!is_deal_over(&state));
        last = Some(record_card_played(&mut state, card).unwrap());
    }
    let last = last.unwrap();
    assert!(last.trick_completed);
    assert!(last.deal_completed);
    assert_eq!(state.phase, DealPhase::Complete);
    assert!(is_deal_over(&state));
    assert_eq!(state.scores.iter().sum::<i32>(), DEAL_POINT_TOTAL);
}

#[test]
fn the_deal_is_not_over_while_the_final_trick_is_on_the_table() {
    let mut state = started(4, Suit::Hearts);
    let deck = rules::full_deck();
    for &card in &deck[..32] {
        record_card_played(&mut state, card).unwrap();
    }
    // 32 committed, final trick still to come.
    assert!(!is_deal_over(&state));
    assert_eq!(state.cards_remaining(), 4);
    for &card in &deck[32..] {
        // Cards buffered in the ongoing trick leave the deal open.
        assert!(!is_deal_over(&state));
        record_card_played(&mut state, card).unwrap();
    }
    assert!(is_deal_over(&state));
    assert_eq!(state.cards_remaining(), 0);
    assert_eq!(state.phase, DealPhase::Complete);
}

#[test]
fn winner_takes_the_points_and_leads_the_next_trick() {
    let mut state = started(2, Suit::Hearts);

    let result = play(&mut state, "s6");
    assert!(!result.trick_completed);
    let result = play(&mut state, "s7");
    assert!(result.trick_completed);
    assert_eq!(result.trick_winner, Some(1));
    assert_eq!(result.trick_points, 0);
    assert_eq!(state.leader, 1);

    // Seat 1 leads the trump six; the off-suit ace cannot take it.
    let result = play(&mut state, "h6");
    assert!(!result.trick_completed);
    let result = play(&mut state, "sa");
    assert_eq!(result.trick_winner, Some(1));
    assert_eq!(result.trick_points, 11);
    assert_eq!(state.scores, vec![0, 11]);
    assert_eq!(state.leader, 1);
}

#[test]
fn duplicate_card_is_rejected_and_state_unchanged() {
    let mut state = started(4, Suit::Hearts);
    play(&mut state, "h9");
    let err = record_card_played(&mut state, "h9".parse().unwrap()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::DuplicateCard, _)
    ));
    assert_eq!(state.played.len(), 1);
    assert_eq!(state.current_trick.len(), 1);
    assert_eq!(state.scores, vec![0; 4]);
    assert_eq!(state.phase, DealPhase::InProgress);
}

#[test]
fn recording_before_a_deal_starts_is_rejected() {
    let mut state = DealState::new();
    let err = record_card_played(&mut state, "h9".parse().unwrap()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
    assert_eq!(state.phase, DealPhase::NotStarted);
}

#[test]
fn recording_after_the_deal_completes_is_a_conflict() {
    let mut state = started(2, Suit::Hearts);
    for card in rules::full_deck() {
        record_card_played(&mut state, card).unwrap();
    }
    assert_eq!(state.phase, DealPhase::Complete);
    let err = record_card_played(&mut state, "h9".parse().unwrap()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::DealComplete, _)
    ));
    assert_eq!(state.phase, DealPhase::Complete);
}

#[test]
fn start_deal_rejects_a_deal_in_progress() {
    let mut state = started(3, Suit::Bells);
    play(&mut state, "h9");
    let err = start_deal(&mut state, 3, Suit::Bells).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
    // The deal on the table is untouched.
    assert_eq!(state.played.len(), 1);
}

#[test]
fn start_deal_is_allowed_again_once_complete() {
    let mut state = started(2, Suit::Hearts);
    for card in rules::full_deck() {
        record_card_played(&mut state, card).unwrap();
    }
    start_deal(&mut state, 4, Suit::Leaves).unwrap();
    assert_eq!(state.phase, DealPhase::InProgress);
    assert_eq!(state.player_count, Some(4));
    assert_eq!(state.trump, Some(Suit::Leaves));
    assert!(state.played.is_empty());
    assert_eq!(state.scores, vec![0; 4]);
}

#[test]
fn start_deal_validates_player_count() {
    let mut state = DealState::new();
    for player_count in [0, 1, 7] {
        let err = start_deal(&mut state, player_count, Suit::Hearts).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::PlayerCountOutOfRange, _)
        ));
        assert_eq!(state.phase, DealPhase::NotStarted);
    }
}

#[test]
fn reset_abandons_a_deal_in_progress() {
    let mut state = started(4, Suit::Acorns);
    play(&mut state, "h9");
    play(&mut state, "s9");
    reset(&mut state);
    assert_eq!(state.phase, DealPhase::NotStarted);
    assert!(state.played.is_empty());
    assert!(state.current_trick.is_empty());
    assert_eq!(state.leader, 0);
    // A fresh deal starts cleanly afterwards.
    start_deal(&mut state, 4, Suit::Acorns).unwrap();
    play(&mut state, "h9");
}

#[test]
fn five_handed_deal_leaves_one_card_on_the_table() {
    let mut state = started(5, Suit::Hearts);
    let deck = rules::full_deck();
    for &card in &deck[..35] {
        record_card_played(&mut state, card).unwrap();
    }
    assert_eq!(state.phase, DealPhase::Complete);
    assert_eq!(state.played.len(), 35);

    let err = record_card_played(&mut state, deck[35]).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::DealComplete, _)
    ));

    let expected: i32 = deck[..35]
        .iter()
        .map(|&c| rules::card_points(c, Suit::Hearts))
        .sum::<i32>()
        + LAST_TRICK_BONUS;
    assert_eq!(state.scores.iter().sum::<i32>(), expected);
}
