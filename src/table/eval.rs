//! Direct 5 to 7 card evaluation, used to fill the terminal slots of a
//! generated rank table.
//!
//! Values follow the `category << 12 | intra` layout of the lookup table,
//! where `intra` is the 1 based position of the hand inside its category
//! counting from the weakest hand up. High card runs `1..=1277`, one pair
//! `1..=2860`, two pair and trips `1..=858`, straights `1..=10`, flushes
//! `1..=1277`, full houses and quads `1..=156`, straight flushes `1..=10`.

use crate::core::{HandCategory, Rank, combinations};

/// A card as the table builder tracks it.
/// The suit is dropped once it can no longer contribute to a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    /// `0..13`, two through ace.
    pub value: u8,
    /// `0..4` while the suit still matters.
    pub suit: Option<u8>,
}

/// A5432
const WHEEL: u16 = 0b1_0000_0000_1111;
/// Five consecutive values starting at two.
const RUN: u16 = 0b1_1111;

/// Every five card straight as a value mask.
const STRAIGHTS: [u16; 10] = [
    WHEEL,
    RUN,
    RUN << 1,
    RUN << 2,
    RUN << 3,
    RUN << 4,
    RUN << 5,
    RUN << 6,
    RUN << 7,
    RUN << 8,
];

/// Highest value of the best straight in `mask`, if any.
fn straight_top(mask: u16) -> Option<u32> {
    for low in (0..=8u32).rev() {
        let run = RUN << low;
        if mask & run == run {
            return Some(low + 4);
        }
    }
    if mask & WHEEL == WHEEL { Some(3) } else { None }
}

/// Keep only the `n` highest bits of `mask`.
fn top_bits(mask: u16, n: usize) -> u16 {
    let mut result = 0;
    let mut remaining = mask;
    for _ in 0..n {
        if remaining == 0 {
            break;
        }
        let bit = 1 << (15 - remaining.leading_zeros());
        result |= bit;
        remaining &= !bit;
    }
    result
}

/// Drop the bit positions in `excluded`, sliding the higher bits down.
fn compress(mask: u16, excluded: u16) -> u16 {
    let mut result = 0;
    let mut position = 0;
    for bit in 0..13 {
        if excluded & (1 << bit) != 0 {
            continue;
        }
        if mask & (1 << bit) != 0 {
            result |= 1 << position;
        }
        position += 1;
    }
    result
}

/// Position of `mask` among all masks with the same number of bits,
/// ordered numerically. Numeric order on value masks is poker order.
fn colex(mask: u16) -> u32 {
    let mut remaining = mask;
    let mut rank = 0;
    let mut i = 1;
    while remaining != 0 {
        let position = remaining.trailing_zeros() as usize;
        rank += combinations(position, i) as u32;
        remaining &= remaining - 1;
        i += 1;
    }
    rank
}

/// 1 based position of five distinct non straight values.
fn high_card_intra(mask: u16) -> u32 {
    let straights_below = STRAIGHTS.iter().filter(|s| **s < mask).count() as u32;
    colex(mask) + 1 - straights_below
}

fn value_bit(value: u8) -> u16 {
    1 << value
}

/// Rank the best five card hand that can be made from `slots`.
///
/// `slots` must hold between five and seven cards with no value
/// appearing more than four times.
pub(crate) fn evaluate(slots: &[Slot]) -> Rank {
    let mut counts = [0u8; 13];
    let mut values: u16 = 0;
    let mut suits = [0u16; 4];
    let mut suit_counts = [0u8; 4];

    for slot in slots {
        counts[slot.value as usize] += 1;
        values |= value_bit(slot.value);
        if let Some(suit) = slot.suit {
            suits[suit as usize] |= value_bit(slot.value);
            suit_counts[suit as usize] += 1;
        }
    }

    let mut flush = None;
    if let Some(suit) = suit_counts.iter().position(|c| *c >= 5) {
        let flush_values = suits[suit];
        if let Some(top) = straight_top(flush_values) {
            return Rank::new(HandCategory::StraightFlush, top - 2);
        }
        flush = Some(Rank::new(
            HandCategory::Flush,
            high_card_intra(top_bits(flush_values, 5)),
        ));
    }

    // Highest first. Seven cards hold at most two trips or three pairs.
    let mut quads = None;
    let mut trips = [0u8; 2];
    let mut num_trips = 0;
    let mut pairs = [0u8; 3];
    let mut num_pairs = 0;
    for value in (0..13u8).rev() {
        match counts[value as usize] {
            4 => quads = quads.or(Some(value)),
            3 if num_trips < 2 => {
                trips[num_trips] = value;
                num_trips += 1;
            }
            2 if num_pairs < 3 => {
                pairs[num_pairs] = value;
                num_pairs += 1;
            }
            _ => {}
        }
    }
    let trips = &trips[..num_trips];
    let pairs = &pairs[..num_pairs];

    if let Some(quad) = quads {
        let excluded = value_bit(quad);
        let kicker = compress(top_bits(values & !excluded, 1), excluded);
        return Rank::new(
            HandCategory::FourOfAKind,
            quad as u32 * 12 + kicker.trailing_zeros() + 1,
        );
    }

    if let Some(&three) = trips.first() {
        // A second set of trips plays as the pair.
        let two = match (trips.get(1), pairs.first()) {
            (Some(t), Some(p)) => Some(*t.max(p)),
            (Some(t), None) => Some(*t),
            (None, Some(p)) => Some(*p),
            (None, None) => None,
        };
        if let Some(two) = two {
            let excluded = value_bit(three);
            let pair = compress(value_bit(two), excluded);
            return Rank::new(
                HandCategory::FullHouse,
                three as u32 * 12 + pair.trailing_zeros() + 1,
            );
        }
    }

    if let Some(flush) = flush {
        return flush;
    }

    if let Some(top) = straight_top(values) {
        return Rank::new(HandCategory::Straight, top - 2);
    }

    if let Some(&three) = trips.first() {
        let excluded = value_bit(three);
        let kickers = compress(top_bits(values & !excluded, 2), excluded);
        return Rank::new(
            HandCategory::ThreeOfAKind,
            three as u32 * 66 + colex(kickers) + 1,
        );
    }

    if pairs.len() >= 2 {
        let pair_mask = value_bit(pairs[0]) | value_bit(pairs[1]);
        let kicker = compress(top_bits(values & !pair_mask, 1), pair_mask);
        return Rank::new(
            HandCategory::TwoPair,
            colex(pair_mask) * 11 + kicker.trailing_zeros() + 1,
        );
    }

    if let Some(&pair) = pairs.first() {
        let excluded = value_bit(pair);
        let kickers = compress(top_bits(values & !excluded, 3), excluded);
        return Rank::new(
            HandCategory::OnePair,
            pair as u32 * 220 + colex(kickers) + 1,
        );
    }

    Rank::new(HandCategory::HighCard, high_card_intra(top_bits(values, 5)))
}
