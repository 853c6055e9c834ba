//! Core engine types: tiles, ids, boards, RNG.
//!
//! The fundamental building blocks every other module consumes. Boards are
//! immutable snapshots; tile ids thread through an explicit allocator rather
//! than any global counter.

pub mod board;
pub mod rng;
pub mod tile;

pub use board::Board;
pub use rng::{SpawnRng, SpawnRngState};
pub use tile::{IdAllocator, Tile, TileId};
