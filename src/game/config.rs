//! Game configuration.
//!
//! The engine never hardcodes board size, spawn sets, or bonus policy -
//! the game layer configures them here. Defaults give a 4x4 board spawning
//! small primes, so every board value stays a product of spawned primes
//! and remains reachable by division.

use serde::{Deserialize, Serialize};

use crate::math::primes_up_to;

/// Configuration for a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid rows.
    pub rows: u8,
    /// Grid columns.
    pub cols: u8,
    /// Values a spawned tile can take.
    pub spawn_values: Vec<u64>,
    /// Relative weight per spawn value (same length as `spawn_values`).
    pub spawn_weights: Vec<f32>,
    /// Tiles spawned after each successful move.
    pub spawns_per_move: usize,
    /// Tiles spawned when the game starts.
    pub start_tiles: usize,
    /// Chain multiplier of the first round of every chain.
    pub base_multiplier: u64,
    /// Defensive bound on chain rounds; `None` means uncapped.
    pub round_cap: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let spawn_values = primes_up_to(7);
        Self {
            rows: 4,
            cols: 4,
            // Favor small primes: [2, 3, 5, 7] at 4/3/2/1.
            spawn_weights: (0..spawn_values.len())
                .map(|i| (spawn_values.len() - i) as f32)
                .collect(),
            spawn_values,
            spawns_per_move: 1,
            start_tiles: 2,
            base_multiplier: 1,
            round_cap: Some(64),
        }
    }
}

/// Builder for a [`GameConfig`].
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board_size(mut self, rows: u8, cols: u8) -> Self {
        assert!(rows >= 2 && cols >= 2, "Board must be at least 2x2");
        self.config.rows = rows;
        self.config.cols = cols;
        self
    }

    /// Set the spawn values; weights reset to uniform.
    pub fn spawn_values(mut self, values: impl Into<Vec<u64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "Spawn values must not be empty");
        assert!(values.iter().all(|&v| v >= 2), "Spawn values must be >= 2");
        self.config.spawn_weights = vec![1.0; values.len()];
        self.config.spawn_values = values;
        self
    }

    pub fn spawn_weights(mut self, weights: impl Into<Vec<f32>>) -> Self {
        let weights = weights.into();
        assert_eq!(
            weights.len(),
            self.config.spawn_values.len(),
            "One weight per spawn value"
        );
        assert!(
            weights.iter().all(|&w| w >= 0.0) && weights.iter().sum::<f32>() > 0.0,
            "Weights must be non-negative and not all zero"
        );
        self.config.spawn_weights = weights;
        self
    }

    pub fn spawns_per_move(mut self, count: usize) -> Self {
        assert!(count >= 1, "Must spawn at least one tile per move");
        self.config.spawns_per_move = count;
        self
    }

    pub fn start_tiles(mut self, count: usize) -> Self {
        assert!(count >= 1, "Must start with at least one tile");
        self.config.start_tiles = count;
        self
    }

    pub fn base_multiplier(mut self, multiplier: u64) -> Self {
        assert!(multiplier >= 1, "Multiplier must be at least 1");
        self.config.base_multiplier = multiplier;
        self
    }

    pub fn round_cap(mut self, cap: Option<u32>) -> Self {
        self.config.round_cap = cap;
        self
    }

    /// Finish the configuration.
    #[must_use]
    pub fn build(self) -> GameConfig {
        let cells = self.config.rows as usize * self.config.cols as usize;
        assert!(
            self.config.start_tiles <= cells,
            "More starting tiles than cells"
        );
        self.config
    }
}

impl GameConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }
}
