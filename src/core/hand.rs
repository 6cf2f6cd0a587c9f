use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::{Card, EquityError, parse_cards};

/// Two hole cards.
///
/// The order the cards were given in is kept for display, but it never
/// matters for equality: `AhKh` and `KhAh` are the same hand.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[Card; 2]", into = "[Card; 2]")
)]
pub struct Hand {
    cards: [Card; 2],
}

impl Hand {
    /// Create a hand from two different cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_equity::core::{Card, Hand, Suit, Value};
    ///
    /// let ace = Card::new(Value::Ace, Suit::Heart);
    /// let king = Card::new(Value::King, Suit::Heart);
    /// assert!(Hand::new(ace, king).is_ok());
    /// assert!(Hand::new(ace, ace).is_err());
    /// ```
    pub fn new(first: Card, second: Card) -> Result<Self, EquityError> {
        if first == second {
            return Err(EquityError::DuplicateCard(first));
        }
        Ok(Self {
            cards: [first, second],
        })
    }

    /// For callers that already know the cards differ.
    pub(crate) fn from_distinct(first: Card, second: Card) -> Self {
        debug_assert_ne!(first, second);
        Self {
            cards: [first, second],
        }
    }

    /// Parse a hand from a string like `AhKd`.
    pub fn new_from_str(hand_string: &str) -> Result<Self, EquityError> {
        let cards = parse_cards(hand_string)?;
        match cards.as_slice() {
            [first, second] => Self::new(*first, *second),
            _ => Err(EquityError::InvalidHandSize(cards.len())),
        }
    }

    /// Both cards, in the order they were given.
    pub fn cards(&self) -> &[Card; 2] {
        &self.cards
    }

    /// Given a card, is it in the current hand?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Cards sorted by index. Used for order independent comparisons.
    fn sorted(&self) -> [Card; 2] {
        let [a, b] = self.cards;
        if a <= b { [a, b] } else { [b, a] }
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Hand {}

impl Hash for Hand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl FromStr for Hand {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl TryFrom<[Card; 2]> for Hand {
    type Error = EquityError;

    fn try_from(cards: [Card; 2]) -> Result<Self, Self::Error> {
        Self::new(cards[0], cards[1])
    }
}

impl From<Hand> for [Card; 2] {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.cards[0], self.cards[1])
    }
}
