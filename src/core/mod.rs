//! This is the core module. It exports the non-holdem
//! related code.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value, parse_cards};

/// Error type shared by the whole crate.
mod error;
/// Export `EquityError`
pub use self::error::EquityError;

/// Code related to two card hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over groups of cards.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Deck is the ordered 52 card deck.
mod deck;
/// Export `Deck` and the set difference helper.
pub use self::deck::{Deck, minus};

/// Rank values read from the lookup table.
mod rank;
/// Export the rank and its category.
pub use self::rank::{CATEGORY_SHIFT, HandCategory, INTRA_MASK, Rank};
