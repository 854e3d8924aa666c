use super::deal::{record_card_played, start_deal};
use super::rules::{self, DEAL_POINT_TOTAL};
use super::scoring::{leading_scorers, score_table, seat_label};
use super::{DealState, Suit};

#[test]
fn seat_labels_are_one_based() {
    assert_eq!(seat_label(0), "Player 1");
    assert_eq!(seat_label(5), "Player 6");
}

#[test]
fn single_leading_scorer() {
    assert_eq!(leading_scorers(&[10, 42, 7]), vec![1]);
}

#[test]
fn tied_leaders_are_all_reported() {
    assert_eq!(leading_scorers(&[42, 10, 42, 42]), vec![0, 2, 3]);
    assert_eq!(leading_scorers(&[0, 0]), vec![0, 1]);
}

#[test]
fn no_scores_means_no_leaders() {
    assert!(leading_scorers(&[]).is_empty());
}

#[test]
fn score_table_maps_seat_labels_to_points() {
    let mut state = DealState::new();
    state.scores = vec![10, 20, 5];
    let table = score_table(&state);
    assert_eq!(table.len(), 3);
    assert_eq!(table["Player 1"], 10);
    assert_eq!(table["Player 2"], 20);
    assert_eq!(table["Player 3"], 5);
}

#[test]
fn table_sizes_dividing_the_deck_account_for_all_157_points() {
    for player_count in [2, 3, 4, 6] {
        let mut state = DealState::new();
        start_deal(&mut state, player_count, Suit::Bells).unwrap();
        for card in rules::full_deck() {
            record_card_played(&mut state, card).unwrap();
        }
        let table = score_table(&state);
        assert_eq!(table.len(), player_count);
        assert_eq!(table.values().sum::<i32>(), DEAL_POINT_TOTAL);
    }
}
