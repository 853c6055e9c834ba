//! Pure arithmetic: merge-rule predicates and prime utilities.

pub mod predicates;
pub mod primes;

pub use predicates::{
    classify_equal_pair, is_divisor, is_equal_pair, is_perfect_cube, is_perfect_square,
    PerfectPower,
};
pub use primes::{is_prime, primes_up_to};
