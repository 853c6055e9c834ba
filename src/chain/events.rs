//! Merge events.
//!
//! Events describe what happened during a reducer pass, in terms of the
//! pre-merge tiles. They exist for the presentation boundary (animation,
//! effect classification); engine decisions never read them back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::TileId;
use crate::factor::Assignment;
use crate::math::PerfectPower;

/// One merge that occurred during a reducer pass.
///
/// All ids and values refer to the tiles as they were *before* the merge;
/// the resulting tiles carry fresh ids and are found on the pass's output
/// board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeEvent {
    /// A center tile was simultaneously consumed by ≥2 divisor neighbors.
    Factorization {
        /// The consumed center.
        center: TileId,
        /// The center's pre-merge value.
        center_value: u64,
        /// The consuming neighbors and the factor each took.
        consumed: SmallVec<[Assignment; 4]>,
    },

    /// Two adjacent equal-value tiles eliminated each other.
    EqualElimination {
        first: TileId,
        second: TileId,
        /// The shared value.
        value: u64,
        /// Presentation-only perfect-power classification.
        power: Option<PerfectPower>,
    },

    /// A tile was consumed by a larger multiple of itself.
    DivisorMerge {
        /// The smaller, removed tile.
        consumed: TileId,
        /// Its value (the divisor applied to the neighbor).
        consumed_value: u64,
        /// The larger neighbor that absorbed it.
        into: TileId,
        /// The neighbor's value after division.
        quotient: u64,
    },
}
