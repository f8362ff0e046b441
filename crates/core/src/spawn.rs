//! Tile spawner
//!
//! After every effective move one tile is added to an empty cell: a 2 with probability 0.9,
//! otherwise a 4. The cell is drawn first, then the value, each from the session's
//! [`RandomSource`].

use arrayvec::ArrayVec;
use log::{debug, warn};

use crate::board::Board;
use crate::ids::TileIdGen;
use crate::rng::RandomSource;
use crate::types::{
    Position, Tile, CELL_COUNT, SPAWN_HIGH_PROBABILITY, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE,
};

/// Which empty cells are eligible for a spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnPolicy {
    /// Empty cells of the top row are preferred while any exist; otherwise every empty cell
    #[default]
    FirstRowBiased,
    /// Every empty cell is equally likely
    Uniform,
}

impl SpawnPolicy {
    /// Parse policy from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "first-row" | "firstrow" | "biased" => Some(SpawnPolicy::FirstRowBiased),
            "uniform" => Some(SpawnPolicy::Uniform),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnPolicy::FirstRowBiased => "first-row",
            SpawnPolicy::Uniform => "uniform",
        }
    }

    /// Narrow the board's empty cells to the ones this policy may fill
    pub fn eligible_cells(&self, board: &Board) -> ArrayVec<Position, CELL_COUNT> {
        let empty = board.empty_cells();
        match self {
            SpawnPolicy::Uniform => empty,
            SpawnPolicy::FirstRowBiased => {
                let first_row: ArrayVec<Position, CELL_COUNT> =
                    empty.iter().copied().filter(|pos| pos.row == 0).collect();
                if first_row.is_empty() {
                    empty
                } else {
                    first_row
                }
            }
        }
    }
}

/// Add one tile to `board`.
///
/// Returns `None` when the board has no empty cell. That is an expected outcome near the end of
/// a game, not an error. A session whose id space is used up also gets `None` and keeps playing
/// without spawns.
pub fn spawn_tile<R: RandomSource>(
    board: &Board,
    rng: &mut R,
    ids: &mut TileIdGen,
    policy: SpawnPolicy,
) -> Option<Board> {
    let cells = policy.eligible_cells(board);
    if cells.is_empty() {
        debug!("spawn skipped: no empty cell");
        return None;
    }
    if ids.is_exhausted() {
        warn!("spawn skipped: tile ids exhausted");
        return None;
    }

    let position = cells[rng.next_index(cells.len())];
    let value = if rng.next_unit() < SPAWN_HIGH_PROBABILITY {
        SPAWN_HIGH_VALUE
    } else {
        SPAWN_LOW_VALUE
    };
    let tile = Tile::new(ids.next_id()?, value, position);
    debug!(
        "spawned {} value {} at ({}, {})",
        tile.id, value, position.row, position.col
    );

    Some(board.with_tile(tile))
}
