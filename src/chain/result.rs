//! Chain resolution output.
//!
//! `ChainResult` is everything a caller needs after one player move: the
//! stable final board, the score gained, the chain depth, and a per-round
//! replay (full boards including zero-value tiles, plus the merges of each
//! round) for animation. The replay rides an `im::Vector`, so cloning a
//! result is O(1) no matter how deep the chain went.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Board;

use super::events::MergeEvent;

/// One resolved round of a chain reaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// The board after this round, zero-value tiles included (they mark
    /// cells where a removal animation plays).
    pub board: Board,
    /// The merges of this round, in application order.
    pub events: Vec<MergeEvent>,
    /// Score gained this round (already multiplier-scaled).
    pub score_delta: u64,
    /// The multiplier this round ran under.
    pub multiplier: u64,
}

/// The complete result of resolving a board to its fixed point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainResult {
    /// The stable final board; positive-value tiles only.
    pub board: Board,
    /// Total score gained across all rounds.
    pub score: u64,
    /// Number of rounds in which at least one merge fired (chain count).
    pub rounds: u32,
    /// Per-round replay records, oldest first.
    pub replay: Vector<RoundRecord>,
    /// The next free tile id after resolution.
    pub next_id: u32,
}

impl ChainResult {
    /// Encode to compact bytes for replay transport.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode a result previously produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
