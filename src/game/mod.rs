//! Game layer: configuration and the move loop around the pure engine.

pub mod config;
pub mod game;

pub use config::{GameConfig, GameConfigBuilder};
pub use game::{Game, MoveOutcome};
