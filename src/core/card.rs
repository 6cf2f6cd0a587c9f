use std::fmt;
use std::str::FromStr;

use super::EquityError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    /// Anything past the ace wraps around, callers only pass `0..13`.
    pub fn from_u8(v: u8) -> Self {
        VALUES[(v % 13) as usize]
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck, or
    /// generating all possible starting hands.
    pub fn values() -> [Self; 13] {
        VALUES
    }

    /// Given a character parse that char into a value.
    /// Case is ignored as long as the char is in the ascii range.
    ///
    /// ```
    /// use poker_equity::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('X'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this value to the char used in hand strings.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }
}

/// Enum for the four different suits.
///
/// The discriminant is the suit index used by the card encoding, so the
/// order here is `c`, `d`, `h`, `s` and must not change.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Self; 4] {
        SUITS
    }

    /// Translate a suit index back into a suit. Wraps past the spade.
    pub fn from_u8(s: u8) -> Self {
        SUITS[(s % 4) as usize]
    }

    /// Given a character that represents a suit try and parse that char.
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_lowercase() {
            'c' => Some(Self::Club),
            'd' => Some(Self::Diamond),
            'h' => Some(Self::Heart),
            's' => Some(Self::Spade),
            _ => None,
        }
    }

    /// Convert a suit to its char representation.
    pub fn to_char(self) -> char {
        match self {
            Self::Club => 'c',
            Self::Diamond => 'd',
            Self::Heart => 'h',
            Self::Spade => 's',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards are encoded as `1..=52` for the rank table, rank-major:
/// `value * 4 + suit + 1`.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from a value and a suit.
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// The `1..=52` index used to walk the rank table.
    ///
    /// ```
    /// use poker_equity::core::{Card, Suit, Value};
    ///
    /// assert_eq!(1, Card::new(Value::Two, Suit::Club).index());
    /// assert_eq!(52, Card::new(Value::Ace, Suit::Spade).index());
    /// ```
    #[inline]
    pub fn index(self) -> u32 {
        self.value as u32 * 4 + self.suit as u32 + 1
    }

    /// Every card in index order.
    pub fn all() -> impl Iterator<Item = Card> {
        VALUES
            .into_iter()
            .flat_map(|value| SUITS.into_iter().map(move |suit| Card { value, suit }))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.index() as u8
    }
}

impl TryFrom<u8> for Card {
    type Error = EquityError;

    /// Decode a `1..=52` card index.
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if !(1..=52).contains(&index) {
            return Err(EquityError::InvalidCardIndex(index));
        }
        let zero_based = index - 1;
        Ok(Self {
            value: Value::from_u8(zero_based / 4),
            suit: Suit::from_u8(zero_based % 4),
        })
    }
}

impl TryFrom<&str> for Card {
    type Error = EquityError;

    /// Parse a two character card like `Ah` or `Tc`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let value = chars
            .next()
            .ok_or(EquityError::TooFewChars)
            .map(Value::from_char)?
            .ok_or(EquityError::UnexpectedValueChar)?;
        let suit = chars
            .next()
            .ok_or(EquityError::TooFewChars)
            .map(Suit::from_char)?
            .ok_or(EquityError::UnexpectedSuitChar)?;
        if chars.next().is_some() {
            return Err(EquityError::UnparsedCharsRemaining);
        }
        Ok(Self { value, suit })
    }
}

impl FromStr for Card {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Parse a run of cards like `AcKdQh` into a vector.
///
/// ```
/// use poker_equity::core::parse_cards;
///
/// let board = parse_cards("AcKdQh").unwrap();
/// assert_eq!(3, board.len());
/// ```
pub fn parse_cards(cards: &str) -> Result<Vec<Card>, EquityError> {
    let chars: Vec<char> = cards.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() % 2 != 0 {
        return Err(EquityError::TooFewChars);
    }
    let mut result: Vec<Card> = Vec::with_capacity(chars.len() / 2);
    for pair in chars.chunks(2) {
        let value = Value::from_char(pair[0]).ok_or(EquityError::UnexpectedValueChar)?;
        let suit = Suit::from_char(pair[1]).ok_or(EquityError::UnexpectedSuitChar)?;
        let card = Card { value, suit };
        if result.contains(&card) {
            return Err(EquityError::DuplicateCard(card));
        }
        result.push(card);
    }
    Ok(result)
}
