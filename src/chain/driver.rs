//! Chain driver: run the reducer to a fixed point.
//!
//! Each round doubles the score multiplier (an explicit exponential bonus
//! policy for deep chains). Termination needs no cap: every merge removes a
//! tile or replaces a value v > 1 with a strictly smaller divisor, so the
//! multiset of positive values decreases in a well-founded order and no
//! pass can cycle. `resolve_capped` exists purely as a defensive bound for
//! interactive callers.

use im::Vector;

use crate::core::{Board, IdAllocator};

use super::reducer::reduce_once;
use super::result::{ChainResult, RoundRecord};

/// Resolve a board to its stable state.
///
/// `next_id` is the first tile id the engine may allocate; the result hands
/// back the advanced counter. Deterministic: same board, multiplier and id
/// always yield the same result.
#[must_use]
pub fn resolve(board: Board, start_multiplier: u64, next_id: u32) -> ChainResult {
    resolve_capped(board, start_multiplier, next_id, None)
}

/// [`resolve`], but stop after `round_cap` rounds if a cap is given.
#[must_use]
pub fn resolve_capped(
    board: Board,
    start_multiplier: u64,
    next_id: u32,
    round_cap: Option<u32>,
) -> ChainResult {
    let mut ids = IdAllocator::starting_at(next_id);
    let mut current = board;
    let mut score = 0u64;
    let mut rounds = 0u32;
    let mut replay: Vector<RoundRecord> = Vector::new();

    loop {
        if round_cap.is_some_and(|cap| rounds >= cap) {
            break;
        }

        let multiplier = start_multiplier.saturating_mul(2u64.saturating_pow(rounds));
        let pass = reduce_once(&current, multiplier, &mut ids);
        if !pass.changed {
            break;
        }

        score = score.saturating_add(pass.score_delta);
        rounds += 1;
        replay.push_back(RoundRecord {
            board: pass.board.clone(),
            events: pass.events,
            score_delta: pass.score_delta,
            multiplier,
        });
        // Zero-value tiles are recorded for replay, then leave the board.
        current = pass.board.filtered();
    }

    ChainResult {
        board: current.filtered(),
        score,
        rounds,
        replay,
        next_id: ids.next_raw(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Tile, TileId};

    fn tile(id: u32, value: u64, row: u8, col: u8) -> Tile {
        Tile::new(TileId(id), value, row, col)
    }

    fn active_values(board: &Board) -> Vec<u64> {
        let mut v: Vec<u64> = board.active().map(|t| t.value).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_single_round_chain() {
        let board = Board::from_tiles(vec![tile(0, 3, 0, 0), tile(1, 147, 0, 1)]);
        let result = resolve(board, 1, 2);

        assert_eq!(result.rounds, 1);
        assert_eq!(active_values(&result.board), vec![49]);
        assert_eq!(result.score, 147);
    }

    #[test]
    fn test_multiplier_doubles_per_round() {
        // Round 1: 2 consumes 4 (score 4x1). Round 2: the two 2s
        // eliminate (score 4x2). Total 12.
        let board = Board::from_tiles(vec![
            tile(0, 2, 0, 0),
            tile(1, 4, 0, 1),
            tile(2, 2, 0, 2),
        ]);
        let result = resolve(board, 1, 3);

        assert_eq!(result.rounds, 2);
        assert!(result.board.is_empty());
        assert_eq!(result.score, 4 + (2 + 2) * 2);
        assert_eq!(result.replay[0].multiplier, 1);
        assert_eq!(result.replay[1].multiplier, 2);
    }

    #[test]
    fn test_start_multiplier_scales_every_round() {
        let board = Board::from_tiles(vec![
            tile(0, 2, 0, 0),
            tile(1, 4, 0, 1),
            tile(2, 2, 0, 2),
        ]);
        let result = resolve(board, 3, 3);

        assert_eq!(result.score, 3 * (4 + (2 + 2) * 2));
    }

    #[test]
    fn test_replay_keeps_zero_tiles_final_board_does_not() {
        let board = Board::from_tiles(vec![tile(0, 4, 0, 0), tile(1, 4, 0, 1)]);
        let result = resolve(board, 1, 2);

        assert_eq!(result.rounds, 1);
        assert!(result.board.tiles().is_empty());

        let recorded = &result.replay[0].board;
        assert_eq!(recorded.tiles().len(), 2);
        assert!(recorded.tiles().iter().all(|t| t.value == 0));
        assert!(recorded.tiles().iter().all(|t| t.score_value == Some(4)));
    }

    #[test]
    fn test_stable_board_resolves_to_zero_rounds() {
        let board = Board::from_tiles(vec![tile(0, 5, 0, 0), tile(1, 7, 0, 1)]);
        let result = resolve(board.clone(), 1, 2);

        assert_eq!(result.rounds, 0);
        assert_eq!(result.score, 0);
        assert!(result.replay.is_empty());
        assert_eq!(result.board, board);
        assert_eq!(result.next_id, 2);
    }

    #[test]
    fn test_fixed_point_is_idempotent() {
        let board = Board::from_tiles(vec![
            tile(0, 2, 0, 0),
            tile(1, 8, 0, 1),
            tile(2, 3, 1, 0),
        ]);
        let first = resolve(board, 1, 3);
        let again = resolve(first.board.clone(), 1, first.next_id);

        assert_eq!(again.rounds, 0);
        assert_eq!(again.board, first.board);
    }

    #[test]
    fn test_determinism() {
        let board = Board::from_tiles(vec![
            tile(0, 2, 0, 0),
            tile(1, 12, 0, 1),
            tile(2, 3, 0, 2),
            tile(3, 6, 1, 1),
        ]);
        let a = resolve(board.clone(), 1, 4);
        let b = resolve(board, 1, 4);

        assert_eq!(a, b);
    }

    #[test]
    fn test_round_cap_stops_early() {
        let board = Board::from_tiles(vec![
            tile(0, 2, 0, 0),
            tile(1, 4, 0, 1),
            tile(2, 2, 0, 2),
        ]);
        let capped = resolve_capped(board, 1, 3, Some(1));

        assert_eq!(capped.rounds, 1);
        assert_eq!(active_values(&capped.board), vec![2, 2]);
    }

    #[test]
    fn test_next_id_advances_past_all_produced_tiles() {
        let board = Board::from_tiles(vec![tile(0, 3, 0, 0), tile(1, 147, 0, 1)]);
        let result = resolve(board, 1, 2);

        for t in result.replay.iter().flat_map(|r| r.board.tiles()) {
            assert!(t.id.raw() < result.next_id);
        }
        assert!(result.next_id > 2);
    }
}
