//! Domain layer: pure Jass scoring rules, free of I/O and detection concerns.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deal;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_deal;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, plain_strength, trump_strength};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use deal::{is_deal_over, record_card_played, reset, start_deal, PlayResult};
pub use state::{DealPhase, DealState, Seat};
pub use tricks::{resolve_trick, winner_seat, TrickOutcome};
