//! Rank ordering and card comparison under a trump suit.

use super::cards_types::{Card, Rank, Suit};

/// Ordinary rank order, ascending strength.
pub const PLAIN_ORDER: [Rank; 9] = [
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Trump rank order, ascending strength. Nine (Nell) and Jack (Puur)
/// outrank the ace in the trump suit.
pub const TRUMP_ORDER: [Rank; 9] = [
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Ten,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
    Rank::Nine,
    Rank::Jack,
];

fn strength_in(order: &[Rank; 9], rank: Rank) -> usize {
    order
        .iter()
        .position(|&r| r == rank)
        .expect("rank tables list every rank")
}

/// Index of `rank` in the ordinary order (0 = weakest).
pub fn plain_strength(rank: Rank) -> usize {
    strength_in(&PLAIN_ORDER, rank)
}

/// Index of `rank` in the trump order (0 = weakest).
pub fn trump_strength(rank: Rank) -> usize {
    strength_in(&TRUMP_ORDER, rank)
}

/// Whether `candidate` takes the trick from the current best card.
///
/// A trump card beats any non-trump card; two trumps compare in trump
/// order. A non-trump card wins only against a best card of its own suit,
/// in ordinary order. A card of a third suit never wins.
pub fn card_beats(candidate: Card, best: Card, trump: Suit) -> bool {
    if candidate.suit == trump {
        if best.suit == trump {
            trump_strength(candidate.rank) > trump_strength(best.rank)
        } else {
            true
        }
    } else if candidate.suit == best.suit {
        plain_strength(candidate.rank) > plain_strength(best.rank)
    } else {
        false
    }
}
