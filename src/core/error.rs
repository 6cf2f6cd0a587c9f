use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// poker equity library. It uses `thiserror` to provide
/// readable error messages
///
/// Input problems and an unloaded rank table are separate variants so
/// callers can tell "bad input" apart from "not initialized".
#[derive(Error, Debug)]
pub enum EquityError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card index {0} is outside of 1..=52")]
    InvalidCardIndex(u8),
    #[error("Card {0} was used more than once")]
    DuplicateCard(Card),
    #[error("Hands are ranked with 5 to 7 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("A board has at most 5 cards, got {0}")]
    InvalidBoardSize(usize),
    #[error("Pairs can't be suited.")]
    InvalidSuitedPairs,
    #[error("Unknown hand distribution suffix {0:?}")]
    InvalidDistSuffix(char),
    #[error("Non pair hand distributions need an 's' or 'o' suffix")]
    MissingDistSuffix,
    #[error("At least two cards must remain in the deck, {0} left")]
    NotEnoughCards(usize),
    #[error("At least one worker is needed")]
    InvalidWorkerCount,
    #[error("Hand rank table has not been loaded")]
    TableNotLoaded,
    #[error("Hand rank table should have {expected} entries, found {found}")]
    TableSize { expected: usize, found: usize },
    #[error("Hand rank table entry {0} points outside of the table")]
    MalformedTable(usize),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
