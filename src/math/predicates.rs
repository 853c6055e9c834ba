//! Arithmetic predicates for merge rules.
//!
//! Pure numeric functions consumed by the factorization search and the
//! reducer: divisibility, perfect-power detection, and the equal-pair
//! classification attached to eliminations for presentation.
//!
//! ## Float recovery
//!
//! Square and cube roots are recovered through floating point, which is
//! imprecise for large integers (especially cube roots). The recovered
//! candidate is only ever a starting point: the nearest integers are probed
//! and confirmed by exact re-powering, never by trusting the float.

use serde::{Deserialize, Serialize};

/// Tolerance for floating-point root recovery.
///
/// `cbrt` of a large exact cube can land this far from the integer root.
/// The candidate is still confirmed exactly; the tolerance only widens the
/// probe window.
const ROOT_EPSILON: f64 = 1e-4;

/// True iff `a` evenly divides `b`.
///
/// A value of 0 never divides (guards divide-by-zero).
///
/// ```
/// use divmerge::math::is_divisor;
///
/// assert!(is_divisor(3, 147));
/// assert!(is_divisor(5, 5));
/// assert!(!is_divisor(10, 5));
/// assert!(!is_divisor(0, 5));
/// ```
#[must_use]
pub fn is_divisor(a: u64, b: u64) -> bool {
    a > 0 && b % a == 0
}

/// True iff `n` is a positive exact integer square.
#[must_use]
pub fn is_perfect_square(n: u64) -> bool {
    if n == 0 {
        return false;
    }
    let approx = (n as f64).sqrt();
    confirm_root(approx, 2, n)
}

/// True iff `n` is a positive exact integer cube.
#[must_use]
pub fn is_perfect_cube(n: u64) -> bool {
    if n == 0 {
        return false;
    }
    let approx = (n as f64).cbrt();
    confirm_root(approx, 3, n)
}

/// Probe the integers within `ROOT_EPSILON` (at least ±1) of `approx` and
/// confirm by exact re-powering.
fn confirm_root(approx: f64, exp: u32, n: u64) -> bool {
    let base = (approx + ROOT_EPSILON).round() as u64;
    let lo = base.saturating_sub(1);
    let hi = base.saturating_add(1);
    (lo..=hi).any(|candidate| candidate.checked_pow(exp) == Some(n))
}

/// True iff two tile values form an eliminating pair.
///
/// Any equal pair eliminates, independent of perfect-power status.
#[must_use]
pub fn is_equal_pair(v1: u64, v2: u64) -> bool {
    v1 == v2
}

/// Perfect-power classification of an equal-value elimination.
///
/// Presentation only: the elimination decision itself is `is_equal_pair`,
/// never gated on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerfectPower {
    /// The eliminated value is an exact integer square.
    Square,
    /// The eliminated value is an exact integer cube (and not a square).
    Cube,
}

/// Classify an equal-value pair for presentation.
///
/// Returns `Some(Square)` if the values are equal and a perfect square,
/// else `Some(Cube)` if a perfect cube, else `None`. Square takes priority
/// when a value is both (64 = 8² = 4³ → `Square`).
///
/// ```
/// use divmerge::math::{classify_equal_pair, PerfectPower};
///
/// assert_eq!(classify_equal_pair(4, 4), Some(PerfectPower::Square));
/// assert_eq!(classify_equal_pair(8, 8), Some(PerfectPower::Cube));
/// assert_eq!(classify_equal_pair(64, 64), Some(PerfectPower::Square));
/// assert_eq!(classify_equal_pair(6, 6), None);
/// assert_eq!(classify_equal_pair(4, 8), None);
/// ```
#[must_use]
pub fn classify_equal_pair(v1: u64, v2: u64) -> Option<PerfectPower> {
    if !is_equal_pair(v1, v2) {
        return None;
    }
    if is_perfect_square(v1) {
        Some(PerfectPower::Square)
    } else if is_perfect_cube(v1) {
        Some(PerfectPower::Cube)
    } else {
        None
    }
}
