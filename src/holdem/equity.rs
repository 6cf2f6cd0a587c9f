use std::sync::Arc;

use rand::Rng;
use tracing::event;

use crate::core::{Card, CardIter, Deck, EquityError, Hand, minus};
use crate::table::{self, HandRankTable};

use super::Showdown;

/// Heads up equity of a hand against one unknown opponent.
///
/// Cheap to clone; clones share the rank table.
#[derive(Debug, Clone)]
pub struct EquityCalculator {
    table: Arc<HandRankTable>,
}

/// Known cards checked and split out for a simulation.
#[derive(Debug, Clone)]
pub(super) struct Setup {
    /// Every card not in the hole or on the board.
    deck: Deck,
    /// Known board cards first, the rest is scratch space.
    board: [Card; 5],
    /// How many board cards are known.
    known: usize,
}

impl EquityCalculator {
    pub fn new(table: Arc<HandRankTable>) -> Self {
        Self { table }
    }

    /// A calculator over the installed process wide table.
    pub fn from_global() -> Result<Self, EquityError> {
        Ok(Self::new(table::global()?))
    }

    pub fn table(&self) -> &Arc<HandRankTable> {
        &self.table
    }

    /// Average pot share of `hole` against one random opponent hand.
    ///
    /// With `trials == 0` every opponent hand and every board completion
    /// is enumerated and the answer is exact. Otherwise `trials` random
    /// deals are played out using the thread local rng.
    pub fn simulate(&self, hole: &Hand, board: &[Card], trials: usize) -> Result<f64, EquityError> {
        self.simulate_with_rng(hole, board, trials, &mut rand::rng())
    }

    /// Same as [`EquityCalculator::simulate`] with a caller supplied rng.
    pub fn simulate_with_rng<R: Rng + ?Sized>(
        &self,
        hole: &Hand,
        board: &[Card],
        trials: usize,
        rng: &mut R,
    ) -> Result<f64, EquityError> {
        let setup = Self::setup(hole, board)?;
        event!(
            tracing::Level::DEBUG,
            hole = %hole,
            board = board.len(),
            deck = setup.deck.len(),
            trials,
            exhaustive = trials == 0,
            "Simulating equity"
        );
        if trials == 0 {
            Ok(self.exhaustive(hole, setup))
        } else {
            Ok(self.monte_carlo(hole, setup, trials, rng))
        }
    }

    pub(super) fn setup(hole: &Hand, board: &[Card]) -> Result<Setup, EquityError> {
        if board.len() > 5 {
            return Err(EquityError::InvalidBoardSize(board.len()));
        }
        let mut known: Vec<Card> = hole.cards().to_vec();
        for card in board {
            if known.contains(card) {
                return Err(EquityError::DuplicateCard(*card));
            }
            known.push(*card);
        }

        let deck = Deck::without(&known);
        // Scratch slots get overwritten before every showdown.
        let mut full_board = [deck[0]; 5];
        full_board[..board.len()].copy_from_slice(board);
        Ok(Setup {
            deck,
            board: full_board,
            known: board.len(),
        })
    }

    fn exhaustive(&self, hole: &Hand, setup: Setup) -> f64 {
        let Setup {
            deck,
            mut board,
            known,
        } = setup;
        let hole = hole.cards();

        let mut sum = 0.0;
        let mut count: u64 = 0;
        let mut opponent = [deck[0]; 2];
        let mut opponents = CardIter::new(deck.as_slice(), 2);
        while opponents.next_into(&mut opponent) {
            let rest = minus(deck.as_slice(), &opponent);
            let mut completions = CardIter::new(&rest, 5 - known);
            while completions.next_into(&mut board[known..]) {
                sum += Showdown::new(&self.table, &board).heads_up(hole, &opponent);
                count += 1;
            }
        }
        sum / count as f64
    }

    pub(super) fn monte_carlo<R: Rng + ?Sized>(
        &self,
        hole: &Hand,
        setup: Setup,
        trials: usize,
        rng: &mut R,
    ) -> f64 {
        let Setup {
            mut deck,
            mut board,
            known,
        } = setup;
        let hole = hole.cards();

        let mut sum = 0.0;
        for _ in 0..trials {
            deck.shuffle(rng);
            board[known..].copy_from_slice(&deck[2..7 - known]);
            let opponent = [deck[0], deck[1]];
            sum += Showdown::new(&self.table, &board).heads_up(hole, &opponent);
        }
        sum / trials as f64
    }
}
