//! Grid geometry: adjacency queries and sliding movement.

pub mod adjacency;
pub mod movement;

pub use adjacency::{adjacent_indices, adjacent_tiles, are_adjacent};
pub use movement::{slide, Direction};
