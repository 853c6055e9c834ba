//! Tile identification and the tile record.
//!
//! Every tile on the board has a unique `TileId`, stable only within one
//! board snapshot: a merge always produces a *new* id for any resulting tile
//! (never reusing an input id), so identity-based diffing is safe for
//! callers and a stale tile can never be re-merged by mistake.
//!
//! ## Counter threading
//!
//! Ids come from an explicit `IdAllocator` that every tile-creating function
//! receives and advances. There is no global counter; the engine stays free
//! of hidden state and trivially testable in isolation.

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile within one board snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Explicitly threaded id counter.
///
/// Passed into every operation that can create tiles and handed back (or
/// read out via `next_raw`) so callers can keep allocating without ever
/// colliding with ids the engine produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Start allocating at `next`.
    #[must_use]
    pub const fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Allocate a fresh id and advance the counter.
    pub fn allocate(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next += 1;
        id
    }

    /// The next id that `allocate` would return, without advancing.
    #[must_use]
    pub const fn next_raw(self) -> u32 {
        self.next
    }
}

/// A tile on the board.
///
/// `value` is a positive integer for live tiles; 0 is a transient
/// "removed" sentinel that the chain driver filters between rounds. No two
/// tiles with positive value ever share a cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Unique id within this board snapshot.
    pub id: TileId,

    /// Current value; 0 means removed, pending filtering.
    pub value: u64,

    /// Grid row.
    pub row: u8,

    /// Grid column.
    pub col: u8,

    /// Pre-merge value, recorded when a merge changes this tile.
    ///
    /// Scoring/animation bookkeeping for the presentation layer; engine
    /// logic never reads it.
    #[serde(default)]
    pub score_value: Option<u64>,
}

impl Tile {
    /// Create a live tile.
    #[must_use]
    pub fn new(id: TileId, value: u64, row: u8, col: u8) -> Self {
        Self {
            id,
            value,
            row,
            col,
            score_value: None,
        }
    }

    /// Is this tile still on the board (positive value)?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.value > 0
    }
}
