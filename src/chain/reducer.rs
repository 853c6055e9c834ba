//! Single-pass merge reducer.
//!
//! One pass applies the three merge rules, in strict precedence across the
//! whole board: multi-tile factorization, then equal-value elimination,
//! then ordinary divisor merge. Within each rule, tiles are visited
//! smallest-value-first (stable sort), so smaller tiles are consumers that
//! act before being acted upon and simultaneous possibilities resolve
//! deterministically.
//!
//! A tile participates in at most one merge per pass: every participant is
//! marked processed and ignored by the rest of the pass. Every produced or
//! changed tile (including tiles zeroed for removal) receives a fresh id,
//! so no output tile of a merge ever carries an input id.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Board, IdAllocator, Tile, TileId};
use crate::factor::{factorize, MIN_CANDIDATES};
use crate::grid::adjacent_indices;
use crate::math::{classify_equal_pair, is_divisor};

use super::events::MergeEvent;

/// Result of one reducer pass.
#[derive(Clone, Debug)]
pub struct PassOutcome {
    /// The rewritten board, zero-value tiles included.
    pub board: Board,
    /// Did any merge occur?
    pub changed: bool,
    /// Score gained this pass (already scaled by the multiplier).
    pub score_delta: u64,
    /// The merges that occurred, in application order.
    pub events: Vec<MergeEvent>,
}

/// Apply one round of merge rules.
///
/// Pure: the input board is untouched; the outcome's board is a rewrite of
/// a value-ascending working copy. Zero-value tiles in the input are
/// carried through unchanged and never participate.
#[must_use]
pub fn reduce_once(board: &Board, multiplier: u64, ids: &mut IdAllocator) -> PassOutcome {
    let mut tiles: Vec<Tile> = board.tiles().to_vec();
    tiles.sort_by_key(|t| t.value);

    let mut processed: FxHashSet<TileId> = FxHashSet::default();
    let mut score_delta = 0u64;
    let mut events = Vec::new();

    factorization_phase(&mut tiles, &mut processed, multiplier, ids, &mut score_delta, &mut events);
    equal_value_phase(&mut tiles, &mut processed, multiplier, ids, &mut score_delta, &mut events);
    divisor_merge_phase(&mut tiles, &mut processed, multiplier, ids, &mut score_delta, &mut events);

    PassOutcome {
        board: Board::from_tiles(tiles),
        changed: !events.is_empty(),
        score_delta,
        events,
    }
}

fn eligible(tiles: &[Tile], processed: &FxHashSet<TileId>, index: usize) -> bool {
    tiles[index].is_active() && !processed.contains(&tiles[index].id)
}

/// Replace the tile at `index` with a fresh-id successor holding
/// `quotient` (a quotient of 1 leaves the board as value 0), recording the
/// pre-merge value and marking old and new ids processed.
fn rewrite(
    tiles: &mut [Tile],
    index: usize,
    quotient: u64,
    ids: &mut IdAllocator,
    processed: &mut FxHashSet<TileId>,
) {
    let old = tiles[index].clone();
    let id = ids.allocate();
    processed.insert(old.id);
    processed.insert(id);
    tiles[index] = Tile {
        id,
        value: if quotient <= 1 { 0 } else { quotient },
        row: old.row,
        col: old.col,
        score_value: Some(old.value),
    };
}

/// Rule 1: a center tile consumed by ≥2 adjacent divisor neighbors.
fn factorization_phase(
    tiles: &mut Vec<Tile>,
    processed: &mut FxHashSet<TileId>,
    multiplier: u64,
    ids: &mut IdAllocator,
    score_delta: &mut u64,
    events: &mut Vec<MergeEvent>,
) {
    for i in 0..tiles.len() {
        if !eligible(tiles, processed, i) {
            continue;
        }
        let center = tiles[i].clone();

        // Adjacent unprocessed tiles that properly divide the center,
        // discovery order = working-list (value ascending) order. Equal
        // values are reserved for the elimination rule (an equal tile is
        // a multiple of the center, and multiples never consume factors).
        let candidate_indices: SmallVec<[usize; 4]> = adjacent_indices(tiles, i)
            .into_iter()
            .filter(|&j| eligible(tiles, processed, j))
            .filter(|&j| tiles[j].value != center.value)
            .filter(|&j| is_divisor(tiles[j].value, center.value))
            .collect();
        if candidate_indices.len() < MIN_CANDIDATES {
            continue;
        }

        let candidates: SmallVec<[(TileId, u64); 4]> = candidate_indices
            .iter()
            .map(|&j| (tiles[j].id, tiles[j].value))
            .collect();
        let Some(found) = factorize(center.value, &candidates) else {
            continue;
        };

        let mut consumed_total = center.value;
        for assignment in &found.assignments {
            let j = candidate_indices
                .iter()
                .copied()
                .find(|&j| tiles[j].id == assignment.id)
                .expect("assignment refers to a candidate");
            consumed_total = consumed_total.saturating_add(tiles[j].value);
            let quotient = tiles[j].value / assignment.divisor;
            rewrite(tiles, j, quotient, ids, processed);
        }
        let center_quotient = center.value / found.product();
        rewrite(tiles, i, center_quotient, ids, processed);

        *score_delta = score_delta.saturating_add(consumed_total.saturating_mul(multiplier));
        events.push(MergeEvent::Factorization {
            center: center.id,
            center_value: center.value,
            consumed: found.assignments,
        });
    }
}

/// Rule 2: two adjacent equal-value tiles eliminate each other.
fn equal_value_phase(
    tiles: &mut Vec<Tile>,
    processed: &mut FxHashSet<TileId>,
    multiplier: u64,
    ids: &mut IdAllocator,
    score_delta: &mut u64,
    events: &mut Vec<MergeEvent>,
) {
    for i in 0..tiles.len() {
        if !eligible(tiles, processed, i) {
            continue;
        }
        let value = tiles[i].value;

        let partner = adjacent_indices(tiles, i)
            .into_iter()
            .filter(|&j| eligible(tiles, processed, j))
            .find(|&j| tiles[j].value == value);
        let Some(j) = partner else {
            continue;
        };

        let event = MergeEvent::EqualElimination {
            first: tiles[i].id,
            second: tiles[j].id,
            value,
            power: classify_equal_pair(value, tiles[j].value),
        };
        rewrite(tiles, i, 0, ids, processed);
        rewrite(tiles, j, 0, ids, processed);

        *score_delta =
            score_delta.saturating_add(value.saturating_mul(2).saturating_mul(multiplier));
        events.push(event);
    }
}

/// Rule 3: a tile consumed by the largest adjacent multiple of itself.
fn divisor_merge_phase(
    tiles: &mut Vec<Tile>,
    processed: &mut FxHashSet<TileId>,
    multiplier: u64,
    ids: &mut IdAllocator,
    score_delta: &mut u64,
    events: &mut Vec<MergeEvent>,
) {
    for i in 0..tiles.len() {
        if !eligible(tiles, processed, i) {
            continue;
        }
        let value = tiles[i].value;

        let mut neighbors: SmallVec<[usize; 4]> = adjacent_indices(tiles, i)
            .into_iter()
            .filter(|&j| eligible(tiles, processed, j))
            .collect();
        // Largest eligible neighbor first; stable, so ties keep
        // working-list order.
        neighbors.sort_by(|&a, &b| tiles[b].value.cmp(&tiles[a].value));

        let target = neighbors
            .into_iter()
            .find(|&j| tiles[j].value != value && is_divisor(value, tiles[j].value));
        let Some(j) = target else {
            continue;
        };

        let quotient = tiles[j].value / value;
        *score_delta = score_delta.saturating_add(tiles[j].value.saturating_mul(multiplier));
        events.push(MergeEvent::DivisorMerge {
            consumed: tiles[i].id,
            consumed_value: value,
            into: tiles[j].id,
            quotient,
        });
        rewrite(tiles, i, 0, ids, processed);
        rewrite(tiles, j, quotient, ids, processed);
    }
}
