use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::card::Card;

/// `Deck` is an ordered run of distinct cards that allows easy
/// indexing into the cards.
///
/// A fresh deck is in card index order. Decks are built per computation
/// and never shared between threads; each worker shuffles its own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// Create the default 52 card deck
    ///
    /// ```
    /// use poker_equity::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: Card::all().collect(),
        }
    }

    /// Create a 52 card deck with every card in `excluded` removed.
    /// The remaining cards keep their relative order.
    ///
    /// ```
    /// use poker_equity::core::{parse_cards, Deck};
    ///
    /// let seen = parse_cards("AhAd").unwrap();
    /// let deck = Deck::without(&seen);
    /// assert_eq!(50, deck.len());
    /// assert!(!deck.contains(&seen[0]));
    /// ```
    pub fn without(excluded: &[Card]) -> Self {
        let full = Self::new();
        if excluded.is_empty() {
            return full;
        }
        Self {
            cards: minus(&full.cards, excluded),
        }
    }

    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Get an iterator from this deck
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// The cards as a slice.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Randomly shuffle the deck in place.
    /// This is a full Fisher-Yates permutation driven by `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}

impl Index<usize> for Deck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeTo<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFrom<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Stable set difference: every element of `a` that is not in `b`.
///
/// This is quadratic, which is fine for anything the size of a deck.
pub fn minus<T: PartialEq + Copy>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|v| !b.contains(v)).copied().collect()
}
