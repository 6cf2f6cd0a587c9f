//! Weighted draws from a discrete distribution.

use std::fmt;

use rand::Rng;

/// A prize table built from `(prize, weight)` pairs.
///
/// Weights are kept as a running total in the order they were given and
/// are never normalized. Callers are expected to pass weights that sum to
/// one. When they sum to less, every draw past the total lands on the last
/// prize, which effectively rounds the final bucket up to 1.0.
///
/// ```
/// use poker_equity::lottery::Lottery;
///
/// let lottery = Lottery::new([("fold", 0.25), ("call", 0.0), ("raise", 0.75)]);
/// assert_eq!(2, lottery.len());
/// assert_eq!("[ fold:0.25 raise:1.00 ]", lottery.to_string());
/// assert!(lottery.draw().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lottery<T> {
    /// Running totals, one per prize.
    probs: Vec<f64>,
    prizes: Vec<T>,
}

impl<T> Lottery<T> {
    /// Build the table. Zero weight entries are skipped.
    pub fn new<I: IntoIterator<Item = (T, f64)>>(dist: I) -> Self {
        let mut sum = 0.0;
        let mut probs = Vec::new();
        let mut prizes = Vec::new();
        for (prize, weight) in dist {
            if weight == 0.0 {
                continue;
            }
            sum += weight;
            probs.push(sum);
            prizes.push(prize);
        }
        Self { probs, prizes }
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    /// Each prize with its running total.
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.prizes.iter().zip(self.probs.iter().copied())
    }

    /// Draw a prize using the thread local rng. None only when there are
    /// no prizes.
    pub fn draw(&self) -> Option<&T> {
        self.draw_with_rng(&mut rand::rng())
    }

    /// Draw a prize.
    ///
    /// The first prize whose running total is above a uniform draw from
    /// `[0, 1)` wins. If none is, the last prize wins.
    pub fn draw_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        let draw: f64 = rng.random();
        match self.probs.iter().position(|p| *p > draw) {
            Some(idx) => self.prizes.get(idx),
            None => self.prizes.last(),
        }
    }
}

impl<T> FromIterator<(T, f64)> for Lottery<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: fmt::Display> fmt::Display for Lottery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for (prize, prob) in self.iter() {
            write!(f, "{}:{:.2} ", prize, prob)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_running_totals() {
        let lottery = Lottery::new([('a', 0.5), ('b', 0.0), ('c', 0.3), ('d', 0.2)]);
        let totals: Vec<(char, f64)> = lottery.iter().map(|(p, t)| (*p, t)).collect();
        assert_eq!(3, totals.len());
        assert_eq!(('a', 0.5), totals[0]);
        assert_eq!('c', totals[1].0);
        approx::assert_relative_eq!(0.8, totals[1].1);
        approx::assert_relative_eq!(1.0, totals[2].1);
    }

    #[test]
    fn test_frequencies_match_weights() {
        let lottery: Lottery<&str> = [("fold", 0.2), ("call", 0.5), ("raise", 0.3)]
            .into_iter()
            .collect();
        let mut rng = StdRng::seed_from_u64(420);
        let draws = 100_000;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(*lottery.draw_with_rng(&mut rng).unwrap()).or_default() += 1;
        }
        for (prize, weight) in [("fold", 0.2), ("call", 0.5), ("raise", 0.3)] {
            let freq = counts[prize] as f64 / draws as f64;
            assert!((freq - weight).abs() < 0.01, "{} {}", prize, freq);
        }
    }

    #[test]
    fn test_short_weights_fall_to_last() {
        let lottery = Lottery::new([("a", 0.1), ("b", 0.1)]);
        let mut rng = StdRng::seed_from_u64(7);
        let draws = 10_000;
        let b = (0..draws)
            .filter(|_| *lottery.draw_with_rng(&mut rng).unwrap() == "b")
            .count();
        let freq = b as f64 / draws as f64;
        assert!((freq - 0.9).abs() < 0.02, "{}", freq);
    }

    #[test]
    fn test_empty() {
        let lottery: Lottery<u8> = Lottery::new([(1, 0.0)]);
        assert!(lottery.is_empty());
        assert_eq!(None, lottery.draw());
        assert_eq!("[ ]", lottery.to_string());
    }

    #[test]
    fn test_display() {
        let lottery = Lottery::new([("AA", 0.5), ("KK", 0.5)]);
        assert_eq!("[ AA:0.50 KK:1.00 ]", lottery.to_string());
    }
}
