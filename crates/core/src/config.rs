//! Game configuration

use crate::spawn::SpawnPolicy;
use crate::types::{CELL_COUNT, INITIAL_TILES};

/// Rules a session is played with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub spawn_policy: SpawnPolicy,
    /// Tiles spawned on a fresh board (clamped to the cell count)
    pub initial_tiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn_policy: SpawnPolicy::FirstRowBiased,
            initial_tiles: INITIAL_TILES,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `MERGE2048_SPAWN_POLICY`: `first-row` (default) or `uniform`
    /// - `MERGE2048_INITIAL_TILES`: tiles on a fresh board (default 2)
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        Self::from_values(
            env::var("MERGE2048_SPAWN_POLICY").ok().as_deref(),
            env::var("MERGE2048_INITIAL_TILES").ok().as_deref(),
        )
    }

    fn from_values(policy: Option<&str>, initial_tiles: Option<&str>) -> Self {
        let defaults = Self::default();

        let spawn_policy = policy
            .and_then(SpawnPolicy::from_str)
            .unwrap_or(defaults.spawn_policy);
        let initial_tiles = initial_tiles
            .and_then(|s| s.trim().parse::<usize>().ok())
            .map(|n| n.min(CELL_COUNT))
            .unwrap_or(defaults.initial_tiles);

        Self {
            spawn_policy,
            initial_tiles,
        }
    }
}
