use std::collections::HashMap;

use tracing::{event, trace_span};

use super::HandRankTable;
use super::eval::{Slot, evaluate};
use super::{ROW_WIDTH, START};
use crate::core::Card;

/// Most cards a state can hold before its row becomes terminal.
const MAX_STATE_CARDS: usize = 6;

/// A partial hand packed one card per byte, highest byte value first.
///
/// Each byte is `(value + 1) << 4 | (suit + 1)`. The suit nibble is cleared
/// once that suit can no longer reach five cards by the seventh card, which
/// lets many partial hands share one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StateId(u64);

impl StateId {
    const EMPTY: StateId = StateId(0);

    fn unpack(self) -> ([u8; 7], usize) {
        let mut bytes = [0u8; 7];
        let mut len = 0;
        for (i, slot) in bytes.iter_mut().enumerate() {
            let byte = (self.0 >> (8 * i)) as u8;
            if byte == 0 {
                break;
            }
            *slot = byte;
            len += 1;
        }
        (bytes, len)
    }

    fn pack(bytes: &[u8]) -> Self {
        StateId(
            bytes
                .iter()
                .enumerate()
                .fold(0u64, |id, (i, byte)| id | (*byte as u64) << (8 * i)),
        )
    }

    /// The state reached by adding `card`, or None when the card can't be
    /// added (duplicate, a fifth card of one value, or a full state).
    fn with_card(self, card: Card) -> Option<StateId> {
        let (mut bytes, len) = self.unpack();
        if len >= 7 {
            return None;
        }
        let new_byte = ((card.value as u8 + 1) << 4) | (card.suit as u8 + 1);
        if bytes[..len].contains(&new_byte) {
            return None;
        }
        bytes[len] = new_byte;
        let len = len + 1;

        let mut value_counts = [0u8; 13];
        let mut suit_counts = [0u8; 5];
        for byte in &bytes[..len] {
            value_counts[(byte >> 4) as usize - 1] += 1;
            suit_counts[(byte & 0xF) as usize] += 1;
        }
        if value_counts.iter().any(|c| *c > 4) {
            return None;
        }

        // A suit needs `len - 2` cards now to still make five out of seven.
        if len >= 4 {
            let needed = (len - 2) as u8;
            for byte in &mut bytes[..len] {
                let suit = (*byte & 0xF) as usize;
                if suit != 0 && suit_counts[suit] < needed {
                    *byte &= 0xF0;
                }
            }
        }

        bytes[..len].sort_unstable_by(|a, b| b.cmp(a));
        Some(StateId::pack(&bytes[..len]))
    }

    fn len(self) -> usize {
        self.unpack().1
    }

    fn rank(self) -> u32 {
        let (bytes, len) = self.unpack();
        let mut slots = [Slot {
            value: 0,
            suit: None,
        }; 7];
        for (slot, byte) in slots.iter_mut().zip(&bytes[..len]) {
            let suit = byte & 0xF;
            *slot = Slot {
                value: (byte >> 4) - 1,
                suit: if suit == 0 { None } else { Some(suit - 1) },
            };
        }
        evaluate(&slots[..len]).0
    }
}

/// Generates a rank table with the `HandRanks.dat` layout.
///
/// Row `i` of the table starts at `53 * i + 53`. Walking from offset 53
/// and following `T[cursor + card]` visits one row per card. Slot zero of
/// the row reached after five or six cards holds that hand's rank, and the
/// row reached after six cards holds final seven card ranks instead of
/// offsets.
///
/// Building for the whole deck takes a few seconds in an optimized build.
/// A builder can be limited to a subset of the deck, in which case hands
/// using other cards rank as zero.
///
/// ```
/// use poker_equity::core::{parse_cards, HandCategory};
/// use poker_equity::table::TableBuilder;
///
/// let cards = parse_cards("AcAdAhAsKcKdQh").unwrap();
/// let table = TableBuilder::with_cards(cards.iter().copied()).build();
/// let rank = table.rank(&cards).unwrap();
/// assert_eq!(Some(HandCategory::FourOfAKind), rank.hand_category());
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder {
    cards: Vec<Card>,
}

impl TableBuilder {
    /// A builder covering all 52 cards.
    pub fn new() -> Self {
        Self {
            cards: Card::all().collect(),
        }
    }

    /// A builder covering only `cards`.
    pub fn with_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.sort();
        cards.dedup();
        Self { cards }
    }

    /// Walk every reachable state and write out the table.
    pub fn build(&self) -> HandRankTable {
        let span = trace_span!("build_rank_table", cards = self.cards.len());
        let _enter = span.enter();

        let mut states: Vec<StateId> = vec![StateId::EMPTY];
        let mut index: HashMap<StateId, u32> = HashMap::new();
        index.insert(StateId::EMPTY, 0);

        let mut ranks: Vec<u32> = vec![0; START as usize];
        let mut current = 0;
        while current < states.len() {
            let state = states[current];
            let row = START as usize + ROW_WIDTH as usize * current;
            ranks.resize(row + ROW_WIDTH as usize, 0);

            let len = state.len();
            if len >= 5 {
                ranks[row] = state.rank();
            }

            for card in &self.cards {
                let Some(next) = state.with_card(*card) else {
                    continue;
                };
                let slot = row + card.index() as usize;
                if len == MAX_STATE_CARDS {
                    ranks[slot] = next.rank();
                    continue;
                }
                let next_idx = match index.get(&next) {
                    Some(idx) => *idx,
                    None => {
                        let idx = states.len() as u32;
                        states.push(next);
                        index.insert(next, idx);
                        idx
                    }
                };
                ranks[slot] = START + ROW_WIDTH * next_idx;
            }
            current += 1;
        }

        event!(
            tracing::Level::INFO,
            states = states.len(),
            entries = ranks.len(),
            "Built hand rank table"
        );
        HandRankTable::from_trusted(ranks.into_boxed_slice())
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
