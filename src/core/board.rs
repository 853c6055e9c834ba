//! Board snapshots.
//!
//! A board is an ordered collection of tiles. Order carries no game meaning
//! but feeds the reducer's deterministic processing sequence, so snapshots
//! preserve it. The engine takes boards as immutable inputs and returns new
//! boards; nothing mutates a snapshot in place across an engine call.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileId};

/// An ordered collection of tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from tiles.
    ///
    /// Debug builds check the cell-uniqueness invariant: no two positive
    /// tiles on one cell.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        let board = Self { tiles };
        debug_assert!(
            !board.has_position_conflict(),
            "two active tiles share a cell"
        );
        board
    }

    /// All tiles, including removed (zero-value) ones.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tiles still on the board (positive value).
    pub fn active(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.is_active())
    }

    /// Number of active tiles.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Is the board empty of active tiles?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Add a tile.
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
        debug_assert!(
            !self.has_position_conflict(),
            "two active tiles share a cell"
        );
    }

    /// The active tile at `(row, col)`, if any.
    #[must_use]
    pub fn tile_at(&self, row: u8, col: u8) -> Option<&Tile> {
        self.active().find(|t| t.row == row && t.col == col)
    }

    /// Look up a tile by id (active or removed).
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    /// A copy with all zero-value tiles dropped.
    #[must_use]
    pub fn filtered(&self) -> Self {
        Self {
            tiles: self.tiles.iter().filter(|t| t.is_active()).cloned().collect(),
        }
    }

    /// Cells of a `rows x cols` grid not covered by an active tile,
    /// row-major order.
    #[must_use]
    pub fn empty_cells(&self, rows: u8, cols: u8) -> Vec<(u8, u8)> {
        let mut cells = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                if self.tile_at(row, col).is_none() {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Do two active tiles share a cell?
    #[must_use]
    pub fn has_position_conflict(&self) -> bool {
        let active: Vec<&Tile> = self.active().collect();
        for (i, a) in active.iter().enumerate() {
            for b in &active[i + 1..] {
                if a.row == b.row && a.col == b.col {
                    return true;
                }
            }
        }
        false
    }
}

impl FromIterator<Tile> for Board {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self::from_tiles(iter.into_iter().collect())
    }
}
