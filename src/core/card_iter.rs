use crate::core::{Card, Deck};

/// Given some cards create sets of possible groups of cards.
///
/// Every `num_cards` sized subset of `possible_cards` is produced exactly
/// once, in lexicographic index order. A size of zero produces a single
/// empty group.
#[derive(Debug)]
pub struct CardIter<'a> {
    /// All the possible cards that can be dealt
    possible_cards: &'a [Card],

    /// Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    /// size of card sets requested.
    num_cards: usize,

    /// Has the first group been handed out yet.
    started: bool,

    /// Nothing left to produce.
    done: bool,
}

/// `CardIter` is a container for cards and current state.
impl CardIter<'_> {
    /// Create a new `CardIter` from a slice of cards.
    /// `num_cards` represents how many cards should be in each group.
    pub fn new(possible_cards: &[Card], num_cards: usize) -> CardIter<'_> {
        CardIter {
            possible_cards,
            idx: (0..num_cards).collect(),
            num_cards,
            started: false,
            done: num_cards > possible_cards.len(),
        }
    }

    /// Advance the offsets to the next group.
    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        if !self.started {
            self.started = true;
            return true;
        }
        let n = self.possible_cards.len();
        let k = self.num_cards;
        // Find the right most offset that can still move forward.
        let mut level = k;
        while level > 0 {
            level -= 1;
            if self.idx[level] < n - k + level {
                self.idx[level] += 1;
                for next in level + 1..k {
                    self.idx[next] = self.idx[next - 1] + 1;
                }
                return true;
            }
        }
        self.done = true;
        false
    }

    /// Write the next group into `buffer` without allocating.
    ///
    /// Returns false once every group has been produced. `buffer` must be
    /// at least `num_cards` long; only the first `num_cards` slots are
    /// written.
    pub fn next_into(&mut self, buffer: &mut [Card]) -> bool {
        if !self.advance() {
            return false;
        }
        for (slot, i) in buffer.iter_mut().zip(self.idx.iter()) {
            *slot = self.possible_cards[*i];
        }
        true
    }
}

/// The actual `Iterator` for `Card`'s.
impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;
    fn next(&mut self) -> Option<Vec<Card>> {
        if !self.advance() {
            return None;
        }
        Some(self.idx.iter().map(|i| self.possible_cards[*i]).collect())
    }
}

/// This is useful for trying every possible 5 card board
impl<'a> IntoIterator for &'a Deck {
    type Item = Vec<Card>;
    type IntoIter = CardIter<'a>;

    fn into_iter(self) -> CardIter<'a> {
        CardIter::new(&self[..], 5)
    }
}

/// How many ways there are to pick `k` things out of `n`.
///
/// ```
/// use poker_equity::core::combinations;
///
/// assert_eq!(1326, combinations(52, 2));
/// assert_eq!(1, combinations(5, 0));
/// assert_eq!(0, combinations(1, 2));
/// ```
pub fn combinations(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // Multiply before dividing so every intermediate stays an integer.
    (0..k).fold(1u64, |acc, i| acc * (n - i) as u64 / (i as u64 + 1))
}
