//! Multi-tile factorization search.
//!
//! Given a center value and the adjacent divisor tiles that could consume
//! it, find a way to split the center into ≥2 integer factors, each
//! assigned to a distinct candidate tile it evenly divides. The center is
//! "consumed by several smaller neighbors"; the single-neighbor case is the
//! ordinary pairwise merge and is handled by the reducer, not here.
//!
//! ## Policy
//!
//! First valid wins: factor counts ascending, then enumeration order
//! (factor tuples strictly increasing, candidates in discovery order). No
//! optimality among multiple valid factorizations is promised; the tie-break
//! is the documented enumeration order itself.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::TileId;
use crate::math::is_divisor;

/// Fewest candidates for which a factorization is meaningful.
pub const MIN_CANDIDATES: usize = 2;

/// One factor assigned to one candidate tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The candidate tile consuming this factor.
    pub id: TileId,
    /// The factor it consumes; evenly divides the candidate's value.
    pub divisor: u64,
}

/// A successful factorization of a center value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factorization {
    /// Factor-to-candidate assignments; each candidate appears at most once.
    pub assignments: SmallVec<[Assignment; 4]>,
}

impl Factorization {
    /// Product of all assigned factors.
    #[must_use]
    pub fn product(&self) -> u64 {
        self.assignments.iter().map(|a| a.divisor).product()
    }
}

/// Split `center_value` across `candidates`, or report no factorization.
///
/// Candidates must already be divisors of the center (the caller excludes
/// multiples; those are ordinary merges). Fewer than [`MIN_CANDIDATES`]
/// candidates degrades to `None` rather than an error.
#[must_use]
pub fn factorize(center_value: u64, candidates: &[(TileId, u64)]) -> Option<Factorization> {
    if candidates.len() < MIN_CANDIDATES || center_value < 2 {
        return None;
    }

    for num_factors in MIN_CANDIDATES..=candidates.len() {
        let mut factors: SmallVec<[u64; 4]> = SmallVec::new();
        if let Some(found) = search_tuples(center_value, num_factors, 2, &mut factors, candidates)
        {
            return Some(found);
        }
    }
    None
}

/// Enumerate strictly increasing factor tuples whose product is exactly the
/// original center value, restricting each factor to divisors of the
/// remaining quotient, and try to assign each complete tuple.
fn search_tuples(
    remaining: u64,
    slots: usize,
    min_factor: u64,
    factors: &mut SmallVec<[u64; 4]>,
    candidates: &[(TileId, u64)],
) -> Option<Factorization> {
    if slots == 1 {
        // The last factor is forced to the remaining quotient.
        if remaining < min_factor {
            return None;
        }
        factors.push(remaining);
        let found = assign_factors(factors, candidates);
        factors.pop();
        return found;
    }

    let mut f = min_factor;
    while f * f <= remaining {
        if remaining % f == 0 {
            factors.push(f);
            if let Some(found) =
                search_tuples(remaining / f, slots - 1, f + 1, factors, candidates)
            {
                return Some(found);
            }
            factors.pop();
        }
        f += 1;
    }
    None
}

/// Backtracking assignment of a complete factor tuple to distinct
/// candidates, candidates tried in discovery order.
fn assign_factors(factors: &[u64], candidates: &[(TileId, u64)]) -> Option<Factorization> {
    let mut used: SmallVec<[bool; 4]> = SmallVec::from_elem(false, candidates.len());
    let mut assignments: SmallVec<[Assignment; 4]> = SmallVec::new();

    if assign_next(factors, candidates, &mut used, &mut assignments) {
        Some(Factorization { assignments })
    } else {
        None
    }
}

fn assign_next(
    factors: &[u64],
    candidates: &[(TileId, u64)],
    used: &mut SmallVec<[bool; 4]>,
    assignments: &mut SmallVec<[Assignment; 4]>,
) -> bool {
    let Some((&factor, rest)) = factors.split_first() else {
        return true;
    };

    for (i, &(id, value)) in candidates.iter().enumerate() {
        if used[i] || !is_divisor(factor, value) {
            continue;
        }
        used[i] = true;
        assignments.push(Assignment { id, divisor: factor });
        if assign_next(rest, candidates, used, assignments) {
            return true;
        }
        assignments.pop();
        used[i] = false;
    }
    false
}
