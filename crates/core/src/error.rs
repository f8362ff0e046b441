//! Error types for data entering the core from outside.
//!
//! The move engine itself is total over valid boards; these errors are raised only where a
//! tile list or grid is accepted from a caller (restores, tests, legacy records).

use crate::types::{Position, TileId};

/// A tile list or grid that violates the board invariants.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("tile {id} is outside the board at ({}, {})", position.row, position.col)]
    OutOfBounds { id: TileId, position: Position },

    #[error("cell ({}, {}) holds more than one tile", position.row, position.col)]
    DuplicatePosition { position: Position },

    #[error("tile id {id} appears more than once")]
    DuplicateId { id: TileId },

    #[error("value {value} at ({}, {}) is not a tile value", position.row, position.col)]
    InvalidValue { value: u32, position: Position },

    #[error("saved tiles disagree with the saved grid at ({}, {})", position.row, position.col)]
    GridMismatch { position: Position },

    #[error("no tile ids left to assign")]
    IdsExhausted,
}

/// Failure to load a saved game record.
#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("malformed saved game: {0}")]
    Json(#[from] serde_json::Error),
}
