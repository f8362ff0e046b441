//! Saved game record
//!
//! Plain data owned by whatever persistence layer embeds the core. The record always carries
//! the dense grid; newer records also carry the sparse tile list so ids survive a reload.
//! Records without tiles are recovered from the grid with fresh ids.
//!
//! The best score is stored by the caller as a separate scalar and is not part of the record.
//!
//! ```text
//! {"grid":[[2,0,0,0],[0,0,0,0],[0,0,4,0],[0,0,0,0]],"score":0,"game_over":false,
//!  "tiles":[{"id":1,"value":2,"row":0,"col":0},{"id":2,"value":4,"row":2,"col":2}]}
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{BoardError, SaveError};
use crate::ids::TileIdGen;
use crate::types::{Grid, Position, Tile, TileId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    #[serde(alias = "board")]
    pub grid: Grid,
    pub score: u32,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiles: Option<Vec<SavedTile>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SavedTile {
    pub id: u32,
    pub value: u32,
    pub row: u8,
    pub col: u8,
}

impl From<Tile> for SavedTile {
    fn from(value: Tile) -> Self {
        Self {
            id: value.id.0,
            value: value.value,
            row: value.position.row,
            col: value.position.col,
        }
    }
}

impl From<SavedTile> for Tile {
    fn from(value: SavedTile) -> Self {
        Tile::new(
            TileId(value.id),
            value.value,
            Position::new(value.row, value.col),
        )
    }
}

impl SavedGame {
    /// Build a record from a board and its score
    pub fn new(board: &Board, score: u32, game_over: bool) -> Self {
        Self {
            grid: board.to_grid(),
            score,
            game_over,
            tiles: Some(board.tiles().iter().copied().map(SavedTile::from).collect()),
        }
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Rebuild the board and an id generator that continues after the restored ids.
    ///
    /// Saved tiles must agree with the saved grid cell for cell, and must leave room in the id
    /// space for the next spawn.
    pub fn restore_board(&self) -> Result<(Board, TileIdGen), BoardError> {
        match &self.tiles {
            Some(tiles) => {
                let board = Board::from_tiles(tiles.iter().copied().map(Tile::from).collect())?;
                let grid = board.to_grid();
                for (row, (saved, restored)) in self.grid.iter().zip(grid.iter()).enumerate() {
                    if let Some(col) = (0..saved.len()).find(|&c| saved[c] != restored[c]) {
                        return Err(BoardError::GridMismatch {
                            position: Position::new(row as u8, col as u8),
                        });
                    }
                }
                let ids = TileIdGen::after(board.tiles().iter().map(|t| t.id));
                if ids.is_exhausted() {
                    return Err(BoardError::IdsExhausted);
                }
                Ok((board, ids))
            }
            None => {
                warn!("saved game has no tile list; recovering tiles from the grid");
                let mut ids = TileIdGen::new();
                let board = Board::from_grid(&self.grid, &mut ids)?;
                Ok((board, ids))
            }
        }
    }
}
