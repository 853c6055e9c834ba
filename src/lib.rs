//! # divmerge
//!
//! A deterministic merge/chain-reaction engine for a divisibility tile
//! puzzle: tiles slide across a grid and combine by divisibility rules,
//! cascading until the board is stable.
//!
//! ## Design Principles
//!
//! 1. **Pure Engine**: resolution is a function from a board snapshot to a
//!    result. No globals, no hidden counters, no randomness inside the
//!    engine.
//!
//! 2. **Explicit Identity**: every merge produces tiles with fresh ids
//!    drawn from an explicitly threaded allocator, so callers can diff
//!    boards by identity and never confuse a tile with its pre-merge self.
//!
//! 3. **Deterministic Tie-Breaks**: smallest-value-first visiting, strict
//!    rule precedence, and first-valid factorization make every resolution
//!    reproducible.
//!
//! ## Merge Rules
//!
//! In precedence order, per round:
//! - **Multi-tile factorization**: a center tile is simultaneously consumed
//!   by ≥2 adjacent divisor tiles, each taking one factor.
//! - **Equal-value elimination**: two adjacent equal tiles remove each
//!   other (classified as perfect square/cube for presentation only).
//! - **Divisor merge**: a tile divides its largest adjacent multiple.
//!
//! Each round doubles the score multiplier. Quotients of 1 leave the
//! board.
//!
//! ## Modules
//!
//! - `math`: divisibility and perfect-power predicates, prime sieve
//! - `core`: tiles, ids, boards, spawn RNG
//! - `grid`: adjacency and sliding movement
//! - `factor`: multi-tile factorization search
//! - `chain`: single-pass reducer, chain driver, events, results
//! - `game`: configuration and the playable move loop

pub mod chain;
pub mod core;
pub mod factor;
pub mod game;
pub mod grid;
pub mod math;

// Re-export commonly used types
pub use crate::core::{Board, IdAllocator, SpawnRng, SpawnRngState, Tile, TileId};

pub use crate::math::{
    classify_equal_pair, is_divisor, is_equal_pair, is_perfect_cube, is_perfect_square, is_prime,
    primes_up_to, PerfectPower,
};

pub use crate::grid::{adjacent_tiles, are_adjacent, slide, Direction};

pub use crate::factor::{factorize, Assignment, Factorization};

pub use crate::chain::{
    reduce_once, resolve, resolve_capped, ChainResult, MergeEvent, PassOutcome, RoundRecord,
};

pub use crate::game::{Game, GameConfig, GameConfigBuilder, MoveOutcome};
