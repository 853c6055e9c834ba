//! Prime utilities for spawn-value selection.
//!
//! The game layer spawns prime-valued tiles so that every board value is a
//! product of spawned primes and stays reachable by division.

/// All primes `<= limit`, ascending (sieve of Eratosthenes).
///
/// ```
/// use divmerge::math::primes_up_to;
///
/// assert_eq!(primes_up_to(13), vec![2, 3, 5, 7, 11, 13]);
/// assert!(primes_up_to(1).is_empty());
/// ```
#[must_use]
pub fn primes_up_to(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    let limit = limit as usize;
    let mut composite = vec![false; limit + 1];
    let mut primes = Vec::new();
    for n in 2..=limit {
        if composite[n] {
            continue;
        }
        primes.push(n as u64);
        let mut multiple = n * n;
        while multiple <= limit {
            composite[multiple] = true;
            multiple += n;
        }
    }
    primes
}

/// Primality test by trial division.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
