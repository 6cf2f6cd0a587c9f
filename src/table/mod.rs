//! The perfect hash hand rank table.
//!
//! The table is a flat run of `u32`s. Ranking a hand starts at offset 53 and
//! replaces the cursor with `T[cursor + card]` once per card. After seven
//! cards the cursor is the rank. After five or six cards the rank sits in
//! slot zero of the row the cursor points at.
//!
//! Tables are immutable once built and are shared between threads behind an
//! `Arc`. Nothing in this module locks.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use tracing::event;

use crate::core::{Card, EquityError, Rank};

/// Table generation.
mod builder;
/// Export `TableBuilder`
pub use self::builder::TableBuilder;

/// Direct evaluation used while generating a table.
mod eval;

/// Number of entries in a `HandRanks.dat` file.
pub const TABLE_LEN: usize = 32_487_834;

/// Where every walk through the table starts.
pub(crate) const START: u32 = 53;
/// Entries per row: slot zero plus one per card.
pub(crate) const ROW_WIDTH: u32 = 53;

/// The cursor after folding in five board cards.
///
/// This is a position in the table, not a rank. Finish it with
/// [`HandRankTable::rank_hole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardState(u32);

/// Immutable hand rank lookup table.
pub struct HandRankTable {
    ranks: Box<[u32]>,
}

impl std::fmt::Debug for HandRankTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandRankTable")
            .field("entries", &self.ranks.len())
            .finish()
    }
}

impl HandRankTable {
    /// Wrap a fully loaded `HandRanks.dat` table.
    ///
    /// The table must have exactly [`TABLE_LEN`] entries and every entry must
    /// keep a walk inside the table.
    pub fn from_entries(entries: Vec<u32>) -> Result<Self, EquityError> {
        if entries.len() != TABLE_LEN {
            return Err(EquityError::TableSize {
                expected: TABLE_LEN,
                found: entries.len(),
            });
        }
        Self::checked(entries)
    }

    /// Wrap a table written out from a [`TableBuilder`].
    ///
    /// A full deck build is exactly [`TABLE_LEN`] long and also passes
    /// [`HandRankTable::from_entries`]. Builds over a subset of the deck are
    /// shorter, so only the row layout and the bounds of each entry are
    /// checked.
    pub fn from_generated(entries: Vec<u32>) -> Result<Self, EquityError> {
        let rows = START + ROW_WIDTH;
        if entries.len() < rows as usize
            || (entries.len() - START as usize) % ROW_WIDTH as usize != 0
        {
            let whole_rows = entries.len().saturating_sub(START as usize) / ROW_WIDTH as usize;
            return Err(EquityError::TableSize {
                expected: START as usize + ROW_WIDTH as usize * whole_rows.max(1),
                found: entries.len(),
            });
        }
        Self::checked(entries)
    }

    fn checked(entries: Vec<u32>) -> Result<Self, EquityError> {
        let limit = entries.len() - ROW_WIDTH as usize;
        if let Some(bad) = entries.iter().position(|e| *e as usize > limit) {
            return Err(EquityError::MalformedTable(bad));
        }
        Ok(Self::from_trusted(entries.into_boxed_slice()))
    }

    /// Tables that came from `TableBuilder` are correct by construction.
    pub(crate) fn from_trusted(ranks: Box<[u32]>) -> Self {
        Self { ranks }
    }

    fn read_entries<R: Read>(mut reader: R) -> Result<Vec<u32>, EquityError> {
        let mut bytes: Vec<u8> = Vec::with_capacity(TABLE_LEN * 4);
        reader.read_to_end(&mut bytes)?;
        if bytes.len() % 4 != 0 {
            return Err(EquityError::TableSize {
                expected: bytes.len().div_ceil(4),
                found: bytes.len() / 4,
            });
        }
        let mut entries = vec![0u32; bytes.len() / 4];
        LittleEndian::read_u32_into(&bytes, &mut entries);
        Ok(entries)
    }

    /// Read a `HandRanks.dat` table of little endian `u32`s.
    pub fn load<R: Read>(reader: R) -> Result<Self, EquityError> {
        Self::from_entries(Self::read_entries(reader)?)
    }

    /// Read a table saved with [`HandRankTable::write`], including ones built
    /// over a subset of the deck.
    pub fn load_generated<R: Read>(reader: R) -> Result<Self, EquityError> {
        Self::from_generated(Self::read_entries(reader)?)
    }

    /// Open and read a `HandRanks.dat` file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, EquityError> {
        Self::open_with(path.as_ref(), Self::load)
    }

    /// Open and read a table file saved with [`HandRankTable::write`],
    /// including ones built over a subset of the deck.
    pub fn open_generated<P: AsRef<Path>>(path: P) -> Result<Self, EquityError> {
        Self::open_with(path.as_ref(), Self::load_generated)
    }

    fn open_with<F>(path: &Path, load: F) -> Result<Self, EquityError>
    where
        F: FnOnce(BufReader<File>) -> Result<Self, EquityError>,
    {
        let file = File::open(path)?;
        let table = load(BufReader::new(file))?;
        event!(
            tracing::Level::INFO,
            path = %path.display(),
            entries = table.len(),
            "Loaded hand rank table"
        );
        Ok(table)
    }

    /// Write the table as little endian `u32`s, the layout `load` reads.
    pub fn write<W: Write>(&self, writer: W) -> Result<(), EquityError> {
        let mut writer = BufWriter::new(writer);
        for entry in self.ranks.iter() {
            writer.write_u32::<LittleEndian>(*entry)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Is the table empty? Never true for a usable table.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    #[inline(always)]
    fn step(&self, cursor: u32, card: Card) -> u32 {
        self.ranks[(cursor + card.index()) as usize]
    }

    /// Rank a hand of five, six, or seven distinct cards.
    ///
    /// The order of `cards` doesn't matter.
    pub fn rank(&self, cards: &[Card]) -> Result<Rank, EquityError> {
        if !(5..=7).contains(&cards.len()) {
            return Err(EquityError::InvalidHandSize(cards.len()));
        }
        for (i, card) in cards.iter().enumerate() {
            if cards[i + 1..].contains(card) {
                return Err(EquityError::DuplicateCard(*card));
            }
        }
        let cursor = cards
            .iter()
            .fold(START, |cursor, card| self.step(cursor, *card));
        if cards.len() == 7 {
            Ok(Rank(cursor))
        } else {
            Ok(Rank(self.ranks[cursor as usize]))
        }
    }

    /// Fold in a complete board so that many hole card pairs can be ranked
    /// against it.
    #[inline]
    pub fn board_state(&self, board: &[Card; 5]) -> BoardState {
        BoardState(
            board
                .iter()
                .fold(START, |cursor, card| self.step(cursor, *card)),
        )
    }

    /// Rank two hole cards on a folded board. This is the hot path and
    /// doesn't allocate or validate.
    #[inline]
    pub fn rank_hole(&self, board: BoardState, hole: &[Card; 2]) -> Rank {
        let cursor = self.step(board.0, hole[0]);
        Rank(self.step(cursor, hole[1]))
    }
}

/// A one shot home for a process wide table.
///
/// The first install wins. Readers that arrive before any install get
/// `TableNotLoaded`.
#[derive(Debug, Default)]
pub struct TableSlot {
    table: OnceLock<Arc<HandRankTable>>,
}

impl TableSlot {
    pub const fn new() -> Self {
        Self {
            table: OnceLock::new(),
        }
    }

    /// Install `table` unless one is already present. Returns whichever
    /// table ends up installed.
    pub fn install(&self, table: Arc<HandRankTable>) -> Arc<HandRankTable> {
        Arc::clone(self.table.get_or_init(|| table))
    }

    /// The installed table.
    pub fn get(&self) -> Result<Arc<HandRankTable>, EquityError> {
        self.table.get().cloned().ok_or(EquityError::TableNotLoaded)
    }
}

static GLOBAL_TABLE: TableSlot = TableSlot::new();

/// Install the process wide table.
pub fn install_global(table: Arc<HandRankTable>) -> Arc<HandRankTable> {
    let installed = GLOBAL_TABLE.install(table);
    event!(
        tracing::Level::INFO,
        entries = installed.len(),
        "Installed global hand rank table"
    );
    installed
}

/// The process wide table, if one has been installed.
pub fn global() -> Result<Arc<HandRankTable>, EquityError> {
    GLOBAL_TABLE.get()
}

/// Shared full deck table for tests. Generated once per test binary.
#[cfg(test)]
pub(crate) fn test_table() -> Arc<HandRankTable> {
    static TABLE: OnceLock<Arc<HandRankTable>> = OnceLock::new();
    Arc::clone(TABLE.get_or_init(|| Arc::new(TableBuilder::new().build())))
}
