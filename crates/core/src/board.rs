//! Board module - the sparse tile list and its dense projection
//!
//! The board is a 4x4 grid. The primary representation is a list of occupied cells
//! (tiles with stable ids); the dense `grid[row][col]` matrix is derived from it on demand.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges 0..3 (left to right)

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::BoardError;
use crate::ids::TileIdGen;
use crate::types::{is_tile_value, Grid, Position, Tile, BOARD_SIZE, CELL_COUNT};

/// The game board - a list of at most 16 tiles, one per cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            tiles: Vec::with_capacity(CELL_COUNT),
        }
    }

    /// Build a board from a caller-supplied tile list, rejecting lists that break an invariant
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self, BoardError> {
        validate(&tiles)?;
        Ok(Self { tiles })
    }

    /// Build a board from tiles the engine itself produced
    pub(crate) fn from_tiles_unchecked(tiles: Vec<Tile>) -> Self {
        debug_assert!(validate(&tiles).is_ok());
        Self { tiles }
    }

    /// Recover a board from a dense grid.
    ///
    /// A grid carries no identity, so every nonzero cell gets a fresh id (row-major order).
    /// Use only for legacy records; the steady-state loop keeps ids across moves.
    pub fn from_grid(grid: &Grid, ids: &mut TileIdGen) -> Result<Self, BoardError> {
        let mut tiles = Vec::with_capacity(CELL_COUNT);
        for (row, cells) in grid.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let position = Position::new(row as u8, col as u8);
                if !is_tile_value(value) {
                    return Err(BoardError::InvalidValue { value, position });
                }
                let id = ids.next_id().ok_or(BoardError::IdsExhausted)?;
                tiles.push(Tile::new(id, value, position));
            }
        }
        Ok(Self { tiles })
    }

    /// Project the tiles onto a dense grid (0 = empty)
    pub fn to_grid(&self) -> Grid {
        let mut grid = [[0u32; BOARD_SIZE]; BOARD_SIZE];
        for tile in &self.tiles {
            grid[tile.position.row as usize][tile.position.col as usize] = tile.value;
        }
        grid
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.tiles.len() >= CELL_COUNT
    }

    /// Get the tile at `position`, if any
    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.position == position)
    }

    /// Empty cells in row-major order (zero-allocation)
    pub fn empty_cells(&self) -> ArrayVec<Position, CELL_COUNT> {
        let occupied = self.occupancy();
        (0..CELL_COUNT)
            .filter(|&idx| !occupied[idx])
            .map(|idx| Position::new((idx / BOARD_SIZE) as u8, (idx % BOARD_SIZE) as u8))
            .collect()
    }

    /// Sum of all tile values
    pub fn total_value(&self) -> u64 {
        self.tiles.iter().map(|tile| u64::from(tile.value)).sum()
    }

    /// Largest tile value, 0 on an empty board
    pub fn max_value(&self) -> u32 {
        self.tiles.iter().map(|tile| tile.value).max().unwrap_or(0)
    }

    /// Return a copy of this board with `tile` added
    pub(crate) fn with_tile(&self, tile: Tile) -> Self {
        let mut tiles = Vec::with_capacity(self.tiles.len() + 1);
        tiles.extend_from_slice(&self.tiles);
        tiles.push(tile);
        Self::from_tiles_unchecked(tiles)
    }

    fn occupancy(&self) -> [bool; CELL_COUNT] {
        let mut occupied = [false; CELL_COUNT];
        for tile in &self.tiles {
            occupied[tile.position.index()] = true;
        }
        occupied
    }
}

/// Check positions, values and ids of a tile list
fn validate(tiles: &[Tile]) -> Result<(), BoardError> {
    let mut occupied = [false; CELL_COUNT];
    for (i, tile) in tiles.iter().enumerate() {
        if !tile.position.in_bounds() {
            return Err(BoardError::OutOfBounds {
                id: tile.id,
                position: tile.position,
            });
        }
        if !is_tile_value(tile.value) {
            return Err(BoardError::InvalidValue {
                value: tile.value,
                position: tile.position,
            });
        }
        let idx = tile.position.index();
        if occupied[idx] {
            return Err(BoardError::DuplicatePosition {
                position: tile.position,
            });
        }
        occupied[idx] = true;
        if tiles[..i].iter().any(|other| other.id == tile.id) {
            return Err(BoardError::DuplicateId { id: tile.id });
        }
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_grid() {
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if *value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
