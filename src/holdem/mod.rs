/// Starting hand classes like `AKs`, and expanding them to real hands.
mod hand_dist;
/// Export `HandDist`
pub use self::hand_dist::{HandDist, Suitedness};

/// How likely an unseen hand is to be in a class.
mod hole_odds;
/// Export the Bayes helper.
pub use self::hole_odds::conditional_probabilities;

/// Settling pots on a complete board.
mod showdown;
/// Export `Showdown`
pub use self::showdown::{Showdown, compare_hands};

/// Heads up equity, exact or sampled.
mod equity;
/// Export `EquityCalculator`
pub use self::equity::EquityCalculator;

/// Splitting monte carlo trials over threads.
mod parallel;
