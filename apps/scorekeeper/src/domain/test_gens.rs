// Proptest generators for domain types.
// These generators ensure unique cards and valid table sizes for
// property-based testing.

use proptest::prelude::*;

use crate::domain::rules;
use crate::domain::{Card, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Bells),
        Just(Suit::Hearts),
        Just(Suit::Acorns),
        Just(Suit::Leaves),
    ]
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        Just(Rank::Six),
        Just(Rank::Seven),
        Just(Rank::Eight),
        Just(Rank::Nine),
        Just(Rank::Ten),
        Just(Rank::Jack),
        Just(Rank::Queen),
        Just(Rank::King),
        Just(Rank::Ace),
    ]
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Generate a vector of N unique cards efficiently
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    // Generate by creating a shuffled prefix of the full deck
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = rules::full_deck();
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Generate the whole deck in random play order
pub fn shuffled_deck() -> impl Strategy<Value = Vec<Card>> {
    unique_cards(rules::DECK_SIZE)
}

/// Generate a valid table size (2..=6 players)
pub fn player_count() -> impl Strategy<Value = usize> {
    2usize..=6
}

/// Generate a complete trick for a random table size
pub fn complete_trick() -> impl Strategy<Value = Vec<Card>> {
    player_count().prop_flat_map(unique_cards)
}
