use std::fmt;

/// The broad class of a ranked hand.
///
/// Discriminants are the values stored in the top bits of a `Rank`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard = 1,
    /// One Card matches another.
    OnePair = 2,
    /// Two diffent pair of matching cards.
    TwoPair = 3,
    /// Three of the same value.
    ThreeOfAKind = 4,
    /// Five cards in a sequence
    Straight = 5,
    /// Five cards of the same suit
    Flush = 6,
    /// Three of one value and two of another value
    FullHouse = 7,
    /// Four of the same value.
    FourOfAKind = 8,
    /// Five cards in a sequence all fo the same suit.
    StraightFlush = 9,
}

impl HandCategory {
    /// Convert the category bits of a rank back into a category.
    pub fn from_u32(category: u32) -> Option<Self> {
        match category {
            1 => Some(Self::HighCard),
            2 => Some(Self::OnePair),
            3 => Some(Self::TwoPair),
            4 => Some(Self::ThreeOfAKind),
            5 => Some(Self::Straight),
            6 => Some(Self::Flush),
            7 => Some(Self::FullHouse),
            8 => Some(Self::FourOfAKind),
            9 => Some(Self::StraightFlush),
            _ => None,
        }
    }
}

/// Number of bits used for the rank inside of a category.
pub const CATEGORY_SHIFT: u32 = 12;
/// Mask for the rank inside of a category.
pub const INTRA_MASK: u32 = 0xFFF;

/// An opaque hand strength read out of the rank table.
/// Higher always beats lower.
///
/// ```
/// use poker_equity::core::{HandCategory, Rank};
///
/// let rank = Rank::new(HandCategory::OnePair, 7);
/// assert_eq!(2, rank.category());
/// assert_eq!(7, rank.intra());
/// assert!(rank > Rank::new(HandCategory::HighCard, 1277));
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Rank(pub u32);

impl Rank {
    /// Build a rank from a category and the 1 based position inside it.
    pub fn new(category: HandCategory, intra: u32) -> Self {
        Self((category as u32) << CATEGORY_SHIFT | (intra & INTRA_MASK))
    }

    /// The category bits, `rank >> 12`.
    pub fn category(self) -> u32 {
        self.0 >> CATEGORY_SHIFT
    }

    /// The position inside of the category, `rank & 0xFFF`.
    pub fn intra(self) -> u32 {
        self.0 & INTRA_MASK
    }

    /// Both halves at once.
    pub fn split(self) -> (u32, u32) {
        (self.category(), self.intra())
    }

    /// The category as an enum. None for values that no valid hand produces.
    pub fn hand_category(self) -> Option<HandCategory> {
        HandCategory::from_u32(self.category())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hand_category() {
            Some(category) => write!(f, "{:?}({})", category, self.intra()),
            None => write!(f, "Invalid({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!((9, 10), Rank(9 << 12 | 10).split());
        assert_eq!((0, 0), Rank::default().split());
    }

    #[test]
    fn test_category_order() {
        assert!(Rank::new(HandCategory::StraightFlush, 1) > Rank::new(HandCategory::FourOfAKind, 156));
        assert!(Rank::new(HandCategory::Flush, 1) > Rank::new(HandCategory::Straight, 10));
        assert!(Rank::new(HandCategory::TwoPair, 2) > Rank::new(HandCategory::TwoPair, 1));
    }

    #[test]
    fn test_hand_category() {
        assert_eq!(
            Some(HandCategory::FullHouse),
            Rank::new(HandCategory::FullHouse, 3).hand_category()
        );
        assert_eq!(None, Rank(0).hand_category());
        assert_eq!("FullHouse(3)", Rank::new(HandCategory::FullHouse, 3).to_string());
    }
}
