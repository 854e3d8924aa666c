//! Core card types for the 36-card German deck used in Jass.

use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Bells,
    Hearts,
    Acorns,
    Leaves,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Bells, Suit::Hearts, Suit::Acorns, Suit::Leaves];

    /// Canonical suit letter: Schelle, Herz, Eichel, Laub.
    pub fn letter(self) -> char {
        match self {
            Suit::Bells => 's',
            Suit::Hearts => 'h',
            Suit::Acorns => 'e',
            Suit::Leaves => 'l',
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 9] = [
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

    /// Canonical rank letter: x = ten (banner), u = Under, o = Ober, k = King, a = ace.
    pub fn letter(self) -> char {
        match self {
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'x',
            Rank::Jack => 'u',
            Rank::Queen => 'o',
            Rank::King => 'k',
            Rank::Ace => 'a',
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Canonical 2-character code, suit letter then rank letter (e.g. `h9`).
    pub fn code(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.suit.letter());
        s.push(self.rank.letter());
        s
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.suit.letter(), self.rank.letter())
    }
}

// Note: Ord/Eq on Card is only for stable sorting: suit order S<H<E<L then
// natural rank order. Do not use for trick resolution, which depends on trump.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
