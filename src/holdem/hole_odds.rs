use crate::core::{Card, Deck, EquityError, combinations};

use super::HandDist;

impl HandDist {
    /// The chance that an unseen two card hand falls in this class.
    ///
    /// Every card in `visible` is removed from the deck first. The result
    /// is the number of hands in the class that can still be dealt over
    /// the number of two card hands left in the deck.
    ///
    /// ```
    /// use poker_equity::holdem::HandDist;
    ///
    /// let aces = HandDist::new_from_str("AA").unwrap();
    /// let p = aces.probability(&[]).unwrap();
    /// assert!((p - 6.0 / 1326.0).abs() < 1e-12);
    /// ```
    pub fn probability(&self, visible: &[Card]) -> Result<f64, EquityError> {
        let deck = Deck::without(visible);
        if deck.len() < 2 {
            return Err(EquityError::NotEnoughCards(deck.len()));
        }
        let all_hands = combinations(deck.len(), 2);
        let live = self
            .expand()
            .iter()
            .filter(|hand| hand.cards().iter().all(|c| deck.contains(c)))
            .count();
        Ok(live as f64 / all_hands as f64)
    }
}

/// Turn `P(action | class)` into `P(class | action)` using Bayes' rule.
///
/// The prior for each class is [`HandDist::probability`] given the visible
/// cards. Classes whose posterior is zero are dropped. The result sums to
/// one unless every class is impossible, in which case it's empty.
///
/// ```
/// use poker_equity::holdem::{HandDist, conditional_probabilities};
///
/// let aces = HandDist::new_from_str("AA").unwrap();
/// let kings = HandDist::new_from_str("KK").unwrap();
/// // A player who always raises aces and raises kings half the time.
/// let posterior = conditional_probabilities(&[], [(aces, 1.0), (kings, 0.5)]).unwrap();
/// assert_eq!(2, posterior.len());
/// assert!((posterior[0].1 - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn conditional_probabilities<I>(
    visible: &[Card],
    likelihoods: I,
) -> Result<Vec<(HandDist, f64)>, EquityError>
where
    I: IntoIterator<Item = (HandDist, f64)>,
{
    let mut joint: Vec<(HandDist, f64)> = Vec::new();
    for (dist, likelihood) in likelihoods {
        let p = dist.probability(visible)? * likelihood;
        if p > 0.0 {
            joint.push((dist, p));
        }
    }
    let total: f64 = joint.iter().map(|(_, p)| p).sum();
    for (_, p) in joint.iter_mut() {
        *p /= total;
    }
    Ok(joint)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::parse_cards;

    fn dist(token: &str) -> HandDist {
        HandDist::new_from_str(token).unwrap()
    }

    #[test]
    fn test_preflop_pair() {
        assert_relative_eq!(6.0 / 1326.0, dist("AA").probability(&[]).unwrap());
        assert_relative_eq!(4.0 / 1326.0, dist("AKs").probability(&[]).unwrap());
        assert_relative_eq!(12.0 / 1326.0, dist("AKo").probability(&[]).unwrap());
    }

    #[test]
    fn test_blocked_cards() {
        // Holding one ace leaves three, so three combos out of C(50, 2).
        let visible = parse_cards("AsKd").unwrap();
        assert_relative_eq!(3.0 / 1225.0, dist("AA").probability(&visible).unwrap());

        // Both kings of the suited class that used the diamond are gone.
        assert_relative_eq!(3.0 / 1225.0, dist("QKs").probability(&visible).unwrap());
    }

    #[test]
    fn test_every_class_sums_to_one() {
        let visible = parse_cards("AhKh7c2d9s").unwrap();
        let total: f64 = HandDist::all()
            .iter()
            .map(|d| d.probability(&visible).unwrap())
            .sum();
        assert_relative_eq!(1.0, total, epsilon = 1e-9);
    }

    #[test]
    fn test_not_enough_cards() {
        let deck = Deck::new();
        let visible: Vec<Card> = deck[1..].to_vec();
        assert!(matches!(
            dist("AA").probability(&visible),
            Err(EquityError::NotEnoughCards(1))
        ));
    }

    #[test]
    fn test_conditional() {
        let visible = parse_cards("AsAd").unwrap();
        let posterior =
            conditional_probabilities(&visible, [(dist("AA"), 1.0), (dist("KK"), 1.0)]).unwrap();
        // One ace combo is left against six king combos.
        assert_eq!(dist("AA"), posterior[0].0);
        assert_relative_eq!(1.0 / 7.0, posterior[0].1);
        assert_relative_eq!(6.0 / 7.0, posterior[1].1);
    }

    #[test]
    fn test_conditional_drops_impossible() {
        let visible = parse_cards("AsAdAh").unwrap();
        let posterior =
            conditional_probabilities(&visible, [(dist("AA"), 1.0), (dist("KK"), 0.0)]).unwrap();
        assert!(posterior.is_empty());
    }
}
