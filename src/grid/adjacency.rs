//! Orthogonal adjacency over sparse tile lists.
//!
//! At most one tile per direction can neighbor a cell (cell-uniqueness
//! invariant), so every query returns at most four tiles.

use smallvec::SmallVec;

use crate::core::{Board, Tile};

/// Are two tiles on orthogonally adjacent cells?
#[must_use]
pub fn are_adjacent(a: &Tile, b: &Tile) -> bool {
    (a.row == b.row && a.col.abs_diff(b.col) == 1)
        || (a.col == b.col && a.row.abs_diff(b.row) == 1)
}

/// The active tiles orthogonally adjacent to `tile`, excluding `tile`
/// itself, in board iteration order.
///
/// SmallVec avoids heap allocation for the ≤4 possible neighbors.
#[must_use]
pub fn adjacent_tiles<'a>(tile: &Tile, board: &'a Board) -> SmallVec<[&'a Tile; 4]> {
    board
        .active()
        .filter(|other| other.id != tile.id && are_adjacent(tile, other))
        .collect()
}

/// Indices of active tiles in `tiles` adjacent to the tile at `index`.
///
/// The reducer works over its own sorted tile list and tracks processed
/// tiles separately, so this variant stays exclusion-agnostic and returns
/// positions rather than references.
#[must_use]
pub fn adjacent_indices(tiles: &[Tile], index: usize) -> SmallVec<[usize; 4]> {
    let center = &tiles[index];
    tiles
        .iter()
        .enumerate()
        .filter(|(i, other)| *i != index && other.is_active() && are_adjacent(center, other))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileId;

    fn tile(id: u32, value: u64, row: u8, col: u8) -> Tile {
        Tile::new(TileId(id), value, row, col)
    }

    #[test]
    fn test_are_adjacent() {
        let center = tile(0, 6, 1, 1);
        assert!(are_adjacent(&center, &tile(1, 2, 0, 1)));
        assert!(are_adjacent(&center, &tile(2, 2, 2, 1)));
        assert!(are_adjacent(&center, &tile(3, 2, 1, 0)));
        assert!(are_adjacent(&center, &tile(4, 2, 1, 2)));

        // Diagonal and distant cells are not adjacent.
        assert!(!are_adjacent(&center, &tile(5, 2, 0, 0)));
        assert!(!are_adjacent(&center, &tile(6, 2, 1, 3)));
        assert!(!are_adjacent(&center, &tile(7, 2, 3, 1)));
    }

    #[test]
    fn test_adjacent_tiles_all_four() {
        let center = tile(0, 6, 1, 1);
        let board = Board::from_tiles(vec![
            center.clone(),
            tile(1, 2, 0, 1),
            tile(2, 3, 2, 1),
            tile(3, 5, 1, 0),
            tile(4, 7, 1, 2),
            tile(5, 11, 0, 0), // diagonal, excluded
        ]);

        let neighbors = adjacent_tiles(&center, &board);
        assert_eq!(neighbors.len(), 4);
        assert!(neighbors.iter().all(|t| t.id != center.id));
    }

    #[test]
    fn test_adjacent_tiles_skips_removed() {
        let center = tile(0, 6, 1, 1);
        let mut removed = tile(1, 0, 0, 1);
        removed.score_value = Some(3);
        let board = Board::from_tiles(vec![center.clone(), removed, tile(2, 2, 2, 1)]);

        let neighbors = adjacent_tiles(&center, &board);
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].id, TileId(2));
    }

    #[test]
    fn test_adjacent_indices_order() {
        let tiles = vec![
            tile(0, 2, 1, 0),
            tile(1, 3, 1, 1),
            tile(2, 4, 1, 2),
            tile(3, 5, 0, 1),
        ];
        // Neighbors of index 1, in list order.
        assert_eq!(adjacent_indices(&tiles, 1).to_vec(), vec![0, 2, 3]);
    }
}
