use std::cmp::Ordering;

use crate::core::{Card, EquityError, Hand, Rank};
use crate::table::{BoardState, HandRankTable};

/// A complete board folded into the rank table once, ready to settle any
/// number of hands.
#[derive(Debug, Clone, Copy)]
pub struct Showdown<'a> {
    table: &'a HandRankTable,
    board: BoardState,
}

impl<'a> Showdown<'a> {
    pub fn new(table: &'a HandRankTable, board: &[Card; 5]) -> Self {
        Self {
            table,
            board: table.board_state(board),
        }
    }

    /// Rank of two hole cards on this board.
    #[inline]
    pub fn rank(&self, hole: &[Card; 2]) -> Rank {
        self.table.rank_hole(self.board, hole)
    }

    /// The share of the pot `hole` takes against a single opponent:
    /// one, zero, or a half for a chop.
    #[inline]
    pub fn heads_up(&self, hole: &[Card; 2], opponent: &[Card; 2]) -> f64 {
        match self.rank(hole).cmp(&self.rank(opponent)) {
            Ordering::Greater => 1.0,
            Ordering::Less => 0.0,
            Ordering::Equal => 0.5,
        }
    }

    /// Split the pot between `hands`.
    ///
    /// Every hand holding the best rank gets `1 / winners`, everyone else
    /// gets zero. The shares sum to one for any non empty input.
    pub fn shares(&self, hands: &[Hand]) -> Vec<f64> {
        if let [first, second] = hands {
            let share = self.heads_up(first.cards(), second.cards());
            return vec![share, 1.0 - share];
        }

        let ranks: Vec<Rank> = hands.iter().map(|h| self.rank(h.cards())).collect();
        let Some(best) = ranks.iter().max().copied() else {
            return vec![];
        };
        let winners = ranks.iter().filter(|r| **r == best).count();
        let share = 1.0 / winners as f64;
        ranks
            .iter()
            .map(|r| if *r == best { share } else { 0.0 })
            .collect()
    }
}

/// Settle a pot between `hands` on a complete five card board.
///
/// ```
/// use poker_equity::core::{parse_cards, Hand};
/// use poker_equity::holdem::compare_hands;
/// use poker_equity::table::TableBuilder;
///
/// let board = parse_cards("AcKdQh2s3c").unwrap();
/// let hands = vec![Hand::new_from_str("AhAd").unwrap(), Hand::new_from_str("KsKh").unwrap()];
///
/// let mut used = board.clone();
/// used.extend(hands.iter().flat_map(|h| *h.cards()));
/// let table = TableBuilder::with_cards(used).build();
///
/// assert_eq!(vec![1.0, 0.0], compare_hands(&table, &board, &hands).unwrap());
/// ```
pub fn compare_hands(
    table: &HandRankTable,
    board: &[Card],
    hands: &[Hand],
) -> Result<Vec<f64>, EquityError> {
    let board: &[Card; 5] = board
        .try_into()
        .map_err(|_| EquityError::InvalidBoardSize(board.len()))?;

    let mut seen: Vec<Card> = board.to_vec();
    for card in hands.iter().flat_map(|h| h.cards()) {
        if seen.contains(card) {
            return Err(EquityError::DuplicateCard(*card));
        }
        seen.push(*card);
    }

    Ok(Showdown::new(table, board).shares(hands))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::core::{Deck, parse_cards};
    use crate::table::test_table;

    fn hands(hands: &[&str]) -> Vec<Hand> {
        hands.iter().map(|h| Hand::new_from_str(h).unwrap()).collect()
    }

    fn compare(board: &str, hs: &[&str]) -> Vec<f64> {
        compare_hands(&test_table(), &parse_cards(board).unwrap(), &hands(hs)).unwrap()
    }

    #[test_log::test]
    fn test_aces_beat_kings() {
        assert_eq!(vec![1.0, 0.0], compare("AcKdQh2s3c", &["AhAd", "KsKh"]));
        assert_eq!(vec![0.0, 1.0], compare("AcKdQh2s3c", &["KsKh", "AhAd"]));
    }

    #[test]
    fn test_chop() {
        assert_eq!(vec![0.5, 0.5], compare("2c3d7h9sTc", &["AhKh", "AsKs"]));
    }

    #[test]
    fn test_board_plays() {
        // Broadway on the board, nobody can improve.
        assert_eq!(
            vec![1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
            compare("AcKdQhJsTc", &["2c3d", "4h5s", "7c8d"])
        );
    }

    #[test]
    fn test_multiway_split() {
        let shares = compare("AcKdQh2s3c", &["AhKh", "AsKs", "7c8d", "4h5h"]);
        // The wheel wins outright.
        assert_eq!(vec![0.0, 0.0, 0.0, 1.0], shares);

        let shares = compare("2c3d7h9sTc", &["AhKh", "AsKs", "QcJd"]);
        assert_eq!(vec![0.5, 0.5, 0.0], shares);
    }

    #[test]
    fn test_shares_always_sum_to_one() {
        let table = test_table();
        let mut rng = StdRng::seed_from_u64(420);
        for players in 2..=8 {
            for _ in 0..200 {
                let mut deck = Deck::new();
                deck.shuffle(&mut rng);
                let board: [Card; 5] = [deck[0], deck[1], deck[2], deck[3], deck[4]];
                let hs: Vec<Hand> = (0..players)
                    .map(|p| Hand::new(deck[5 + 2 * p], deck[6 + 2 * p]).unwrap())
                    .collect();
                let shares = Showdown::new(&table, &board).shares(&hs);

                assert_eq!(players, shares.len());
                assert_relative_eq!(1.0, shares.iter().sum::<f64>(), epsilon = 1e-12);
                let winners = shares.iter().filter(|s| **s > 0.0).count();
                assert!(winners >= 1);
                for s in &shares {
                    assert!(*s == 0.0 || *s == 1.0 / winners as f64);
                }
            }
        }
    }

    #[test]
    fn test_heads_up_matches_rank() {
        let table = test_table();
        let board = parse_cards("9h9c4d4s2h").unwrap();
        let showdown = Showdown::new(&table, &[board[0], board[1], board[2], board[3], board[4]]);
        let full = parse_cards("9d2c").unwrap();
        let kicker = parse_cards("AcKc").unwrap();
        let full = [full[0], full[1]];
        let kicker = [kicker[0], kicker[1]];
        assert!(showdown.rank(&full) > showdown.rank(&kicker));
        assert_eq!(1.0, showdown.heads_up(&full, &kicker));
        assert_eq!(0.0, showdown.heads_up(&kicker, &full));
    }

    #[test]
    fn test_validation() {
        let table = test_table();
        let hs = hands(&["AhAd", "KsKh"]);
        assert!(matches!(
            compare_hands(&table, &parse_cards("AcKdQh2s").unwrap(), &hs),
            Err(EquityError::InvalidBoardSize(4))
        ));
        assert!(matches!(
            compare_hands(&table, &parse_cards("AcKdQh2sAh").unwrap(), &hs),
            Err(EquityError::DuplicateCard(_))
        ));
        assert!(
            compare_hands(&table, &parse_cards("AcKdQh2s3c").unwrap(), &[])
                .unwrap()
                .is_empty()
        );
    }
}
