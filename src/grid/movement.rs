//! Sliding movement.
//!
//! Tiles pack toward the target edge of the grid, preserving relative order
//! within each lane. Sliding never merges: the merge engine runs on the
//! post-movement board and handles all combining. Movement creates no
//! tiles, so ids are preserved; `score_value` is cleared because a new move
//! has begun and the previous merge bookkeeping is stale.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Tile};

/// A direction to slide tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Slide all tiles in `direction` on a `rows x cols` grid.
///
/// Returns the new board and whether any tile moved.
#[must_use]
pub fn slide(board: &Board, direction: Direction, rows: u8, cols: u8) -> (Board, bool) {
    let mut tiles: Vec<Tile> = board.active().cloned().collect();
    let mut moved = false;

    let lanes = match direction {
        Direction::Left | Direction::Right => rows,
        Direction::Up | Direction::Down => cols,
    };

    for lane in 0..lanes {
        // Tiles in this lane, ordered from the target edge outward.
        let mut members: Vec<usize> = tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| match direction {
                Direction::Left | Direction::Right => t.row == lane,
                Direction::Up | Direction::Down => t.col == lane,
            })
            .map(|(i, _)| i)
            .collect();
        members.sort_by_key(|&i| match direction {
            Direction::Left => tiles[i].col as i16,
            Direction::Right => -(tiles[i].col as i16),
            Direction::Up => tiles[i].row as i16,
            Direction::Down => -(tiles[i].row as i16),
        });

        for (slot, &i) in members.iter().enumerate() {
            let slot = slot as u8;
            let (row, col) = match direction {
                Direction::Left => (lane, slot),
                Direction::Right => (lane, cols - 1 - slot),
                Direction::Up => (slot, lane),
                Direction::Down => (rows - 1 - slot, lane),
            };
            if tiles[i].row != row || tiles[i].col != col {
                moved = true;
            }
            tiles[i].row = row;
            tiles[i].col = col;
            tiles[i].score_value = None;
        }
    }

    (Board::from_tiles(tiles), moved)
}
