use std::fmt;
use std::str::FromStr;

use crate::core::{Card, EquityError, Hand, Suit, Value};

/// Enum to represent how the suits of a hand correspond to each other.
/// `Suitedness::Suited` will mean that both cards have the same suit
/// `Suitedness::OffSuit` will mean that the cards have different suits
/// `Suitedness::Any` makes no promises, and is what pairs use.
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suitedness {
    /// Both of the cards are the same suit
    Suited,
    /// The cards are different suits
    OffSuit,
    /// No promises about suit.
    Any,
}

/// A class of two card starting hands such as `AA`, `AKs`, or `T9o`.
///
/// Tokens are two value characters, plus an `s` or `o` suffix when the
/// values differ. Pairs never carry a suffix.
///
/// ```
/// use poker_equity::holdem::HandDist;
///
/// let aces: HandDist = "AA".parse().unwrap();
/// assert_eq!(6, aces.expand().len());
/// assert_eq!(4, HandDist::new_from_str("AKs").unwrap().expand().len());
/// assert_eq!(12, HandDist::new_from_str("AKo").unwrap().expand().len());
/// ```
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct HandDist {
    /// The first value.
    value_one: Value,
    /// The second value.
    value_two: Value,
    /// `Any` exactly when this is a pair.
    suited: Suitedness,
}

impl HandDist {
    /// Build the class for two values.
    ///
    /// Equal values are always a pair. Otherwise `Suited` gives the suited
    /// class and anything else gives the off suit class.
    pub fn from_values(value_one: Value, value_two: Value, suited: Suitedness) -> Self {
        let suited = if value_one == value_two {
            Suitedness::Any
        } else if suited == Suitedness::Suited {
            Suitedness::Suited
        } else {
            Suitedness::OffSuit
        };
        Self {
            value_one,
            value_two,
            suited,
        }
    }

    /// Parse a token like `QQ` or `JTs`.
    pub fn new_from_str(token: &str) -> Result<Self, EquityError> {
        let mut chars = token.chars();
        let value_one = chars
            .next()
            .ok_or(EquityError::TooFewChars)
            .and_then(|c| Value::from_char(c).ok_or(EquityError::UnexpectedValueChar))?;
        let value_two = chars
            .next()
            .ok_or(EquityError::TooFewChars)
            .and_then(|c| Value::from_char(c).ok_or(EquityError::UnexpectedValueChar))?;

        let suited = match (chars.next(), value_one == value_two) {
            (None, true) => Suitedness::Any,
            (None, false) => return Err(EquityError::MissingDistSuffix),
            (Some(_), true) => return Err(EquityError::InvalidSuitedPairs),
            (Some(c), false) => match c.to_ascii_lowercase() {
                's' => Suitedness::Suited,
                'o' => Suitedness::OffSuit,
                _ => return Err(EquityError::InvalidDistSuffix(c)),
            },
        };

        if chars.next().is_some() {
            return Err(EquityError::UnparsedCharsRemaining);
        }
        Ok(Self {
            value_one,
            value_two,
            suited,
        })
    }

    pub fn value_one(&self) -> Value {
        self.value_one
    }

    pub fn value_two(&self) -> Value {
        self.value_two
    }

    pub fn suited(&self) -> Suitedness {
        self.suited
    }

    /// Is this class a pocket pair?
    pub fn is_pair(&self) -> bool {
        self.value_one == self.value_two
    }

    /// Every concrete hand in this class.
    ///
    /// Pairs give 6 hands, suited classes 4, and off suit classes 12. No
    /// hand appears twice.
    pub fn expand(&self) -> Vec<Hand> {
        let suits = Suit::suits();
        let one = |suit: Suit| Card::new(self.value_one, suit);
        let two = |suit: Suit| Card::new(self.value_two, suit);
        let mut hands = Vec::with_capacity(self.num_hands());

        match self.suited {
            Suitedness::Any => {
                for (i, first) in suits.iter().enumerate() {
                    for second in &suits[i + 1..] {
                        hands.push(Hand::from_distinct(one(*first), one(*second)));
                    }
                }
            }
            Suitedness::OffSuit => {
                for first in &suits {
                    for second in suits.iter().filter(|s| *s != first) {
                        hands.push(Hand::from_distinct(one(*first), two(*second)));
                    }
                }
            }
            Suitedness::Suited => {
                for suit in &suits {
                    hands.push(Hand::from_distinct(one(*suit), two(*suit)));
                }
            }
        }
        hands
    }

    /// How many hands `expand` returns.
    pub fn num_hands(&self) -> usize {
        match self.suited {
            Suitedness::Any => 6,
            Suitedness::OffSuit => 12,
            Suitedness::Suited => 4,
        }
    }

    /// Create every distinct starting hand class, 169 in all. The higher
    /// value comes first in each.
    pub fn all() -> Vec<HandDist> {
        let mut dists = Vec::with_capacity(169);
        let values = Value::values();
        for (i, value_one) in values.iter().enumerate().rev() {
            dists.push(Self::from_values(*value_one, *value_one, Suitedness::Any));
            for value_two in values[..i].iter().rev() {
                dists.push(Self::from_values(*value_one, *value_two, Suitedness::Suited));
                dists.push(Self::from_values(*value_one, *value_two, Suitedness::OffSuit));
            }
        }
        dists
    }
}

impl FromStr for HandDist {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl TryFrom<String> for HandDist {
    type Error = EquityError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::new_from_str(&token)
    }
}

impl From<HandDist> for String {
    fn from(dist: HandDist) -> Self {
        dist.to_string()
    }
}

impl fmt::Display for HandDist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value_one.to_char(), self.value_two.to_char())?;
        match self.suited {
            Suitedness::Suited => write!(f, "s"),
            Suitedness::OffSuit => write!(f, "o"),
            Suitedness::Any => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn dist(token: &str) -> HandDist {
        HandDist::new_from_str(token).unwrap()
    }

    #[test]
    fn test_aces() {
        let hands = dist("AA").expand();
        assert_eq!(6, hands.len());
        for hand in &hands {
            let [a, b] = *hand.cards();
            assert_eq!(Value::Ace, a.value);
            assert_eq!(Value::Ace, b.value);
            assert_ne!(a.suit, b.suit);
        }
        assert_eq!(6, hands.iter().collect::<HashSet<_>>().len());
    }

    #[test]
    fn test_suited_connector() {
        let hands: HashSet<Hand> = dist("AKs").expand().into_iter().collect();
        let expected: HashSet<Hand> = ["AcKc", "AdKd", "AhKh", "AsKs"]
            .iter()
            .map(|s| Hand::new_from_str(s).unwrap())
            .collect();
        assert_eq!(expected, hands);
    }

    #[test]
    fn test_unsuited_connector() {
        let hands = dist("AKo").expand();
        assert_eq!(12, hands.len());
        assert_eq!(12, hands.iter().collect::<HashSet<_>>().len());
        assert!(hands.iter().all(|h| h.cards()[0].suit != h.cards()[1].suit));
    }

    #[test]
    fn test_every_class() {
        let all = HandDist::all();
        assert_eq!(169, all.len());
        assert_eq!(169, all.iter().collect::<HashSet<_>>().len());

        let mut seen: HashSet<Hand> = HashSet::new();
        for d in &all {
            let hands = d.expand();
            assert_eq!(d.num_hands(), hands.len(), "{}", d);
            seen.extend(hands);
        }
        assert_eq!(1326, seen.len());
    }

    #[test]
    fn test_from_values() {
        assert_eq!(
            "77",
            HandDist::from_values(Value::Seven, Value::Seven, Suitedness::Suited).to_string()
        );
        assert_eq!(
            "AKs",
            HandDist::from_values(Value::Ace, Value::King, Suitedness::Suited).to_string()
        );
        assert_eq!(
            "T9o",
            HandDist::from_values(Value::Ten, Value::Nine, Suitedness::OffSuit).to_string()
        );
        assert_eq!(
            "T9o",
            HandDist::from_values(Value::Ten, Value::Nine, Suitedness::Any).to_string()
        );
    }

    #[test]
    fn test_display_round_trip() {
        for d in HandDist::all() {
            assert_eq!(d, d.to_string().parse::<HandDist>().unwrap());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_uses_tokens() {
        let suited = dist("AKs");
        assert_eq!("\"AKs\"", serde_json::to_string(&suited).unwrap());
        assert_eq!(suited, serde_json::from_str::<HandDist>("\"AKs\"").unwrap());

        // A suited pair has no hands, so it never deserializes.
        assert!(serde_json::from_str::<HandDist>("\"QQs\"").is_err());
        assert!(serde_json::from_str::<HandDist>("\"AK\"").is_err());
    }

    #[test]
    fn test_lower_case() {
        assert_eq!(dist("AKs"), dist("aks"));
        assert_eq!(dist("T9o"), dist("t9O"));
    }

    #[test]
    fn test_bad_tokens() {
        assert!(matches!(
            HandDist::new_from_str("A"),
            Err(EquityError::TooFewChars)
        ));
        assert!(matches!(
            HandDist::new_from_str("AX"),
            Err(EquityError::UnexpectedValueChar)
        ));
        assert!(matches!(
            HandDist::new_from_str("AAs"),
            Err(EquityError::InvalidSuitedPairs)
        ));
        assert!(matches!(
            HandDist::new_from_str("AKx"),
            Err(EquityError::InvalidDistSuffix('x'))
        ));
        assert!(matches!(
            HandDist::new_from_str("AK"),
            Err(EquityError::MissingDistSuffix)
        ));
        assert!(matches!(
            HandDist::new_from_str("AKs+"),
            Err(EquityError::UnparsedCharsRemaining)
        ));
    }
}
