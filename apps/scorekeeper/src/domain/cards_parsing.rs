//! Card parsing from the detector's 2-character codes (e.g. "h9", "su")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" | "schelle" | "bells" => Ok(Suit::Bells),
            "h" | "herz" | "hearts" => Ok(Suit::Hearts),
            "e" | "eichel" | "acorns" => Ok(Suit::Acorns),
            "l" | "laub" | "leaves" => Ok(Suit::Leaves),
            _ => Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Parse suit: {s}"),
            )),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 2 {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Parse card: {s}"),
            ));
        }
        let mut chars = s.chars();
        let suit_ch = chars.next().ok_or_else(|| {
            DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
        })?;
        let rank_ch = chars.next().ok_or_else(|| {
            DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
        })?;
        let suit = match suit_ch {
            's' => Suit::Bells,
            'h' => Suit::Hearts,
            'e' => Suit::Acorns,
            'l' => Suit::Leaves,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::ParseCard,
                    format!("Parse card: {s}"),
                ))
            }
        };
        let rank = match rank_ch {
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'x' => Rank::Ten,
            'u' => Rank::Jack,
            'o' => Rank::Queen,
            'k' => Rank::King,
            'a' => Rank::Ace,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::ParseCard,
                    format!("Parse card: {s}"),
                ))
            }
        };
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens (e.g. "h9", "su") into Card instances.
/// Fails on the first invalid token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
