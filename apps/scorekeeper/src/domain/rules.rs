use std::ops::RangeInclusive;

use super::cards_types::{Card, Rank, Suit};

pub const DECK_SIZE: usize = 36;
pub const PLAYER_COUNTS: RangeInclusive<usize> = 2..=6;
pub const LAST_TRICK_BONUS: i32 = 5;
/// Card points plus the last-trick bonus over a full deal.
pub const DEAL_POINT_TOTAL: i32 = 157;

/// Point value of a single card under the given trump suit.
pub fn card_points(card: Card, trump: Suit) -> i32 {
    match card.rank {
        Rank::Ten => 10,
        Rank::Jack => {
            if card.suit == trump {
                20
            } else {
                2
            }
        }
        Rank::Queen => 3,
        Rank::King => 4,
        Rank::Ace => 11,
        Rank::Nine => {
            if card.suit == trump {
                14
            } else {
                0
            }
        }
        Rank::Six | Rank::Seven | Rank::Eight => 0,
    }
}

/// Whether the trick being scored is the last full trick of the deal.
pub fn is_last_trick(player_count: usize, cards_played_before: usize) -> bool {
    player_count > DECK_SIZE.saturating_sub(cards_played_before)
}

/// All 36 cards in canonical order (suit-major, ranks ascending).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}
