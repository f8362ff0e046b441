//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used by
//! the rules engine, a frontend, or a persistence layer alike.
//!
//! # Board Dimensions
//!
//! The board is a square grid:
//!
//! - **Side**: 4 cells (rows and columns indexed 0-3)
//! - **Origin**: `(row 0, col 0)` is the top-left corner
//! - **Cells**: 16 in total
//!
//! # Spawn Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_LOW_VALUE` | 2 | Value of a regular spawned tile |
//! | `SPAWN_HIGH_VALUE` | 4 | Value of a rare spawned tile |
//! | `SPAWN_HIGH_PROBABILITY` | 0.1 | Chance that a spawn is the high value |
//! | `INITIAL_TILES` | 2 | Tiles placed on a fresh board |
//!
//! # Examples
//!
//! ```
//! use merge_2048_types::{Direction, Position, Tile, TileId, BOARD_SIZE, CELL_COUNT};
//!
//! // Parse a direction (case-insensitive, several aliases)
//! assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
//! assert_eq!(Direction::from_str("w"), Some(Direction::Up));
//!
//! // Build a tile
//! let tile = Tile::new(TileId(7), 2, Position::new(0, 3));
//! assert_eq!(tile.position.col, 3);
//!
//! // Board dimensions
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(CELL_COUNT, 16);
//! ```

use std::fmt;

/// Board side length in cells
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of tiles spawned on a fresh board
pub const INITIAL_TILES: usize = 2;

/// Value of a regular spawned tile
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of a rare spawned tile
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Probability that a spawned tile carries [`SPAWN_HIGH_VALUE`]
pub const SPAWN_HIGH_PROBABILITY: f64 = 0.1;

/// Largest representable tile value; tiles at this value no longer merge
pub const MAX_TILE_VALUE: u32 = 1 << 31;

/// Dense board representation: `grid[row][col]`, 0 marks an empty cell
pub type Grid = [[u32; BOARD_SIZE]; BOARD_SIZE];


/// The four move directions
///
/// A direction names the edge that tiles slide towards:
/// - **Up**: towards row 0
/// - **Down**: towards row 3
/// - **Left**: towards column 0
/// - **Right**: towards column 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in probing order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names, arrow key names, single letters and WASD:
    /// "up" | "u" | "arrowup" | "w", "down" | "arrowdown" | "s", ...
    ///
    /// # Examples
    ///
    /// ```
    /// use merge_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("ArrowRight"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("a"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" | "arrowup" | "w" => Some(Direction::Up),
            "down" | "arrowdown" | "s" => Some(Direction::Down),
            "left" | "l" | "arrowleft" | "a" => Some(Direction::Left),
            "right" | "r" | "arrowright" | "d" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The direction pointing at the opposite edge
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable tile identity
///
/// Ids survive slides and merges so a frontend can animate a tile's movement
/// instead of recreating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Cell coordinates, `(row, col)` from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check if the position lies on the board
    pub fn in_bounds(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Row-major cell index
    pub fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }
}

/// A numbered tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
    pub position: Position,
}

impl Tile {
    pub const fn new(id: TileId, value: u32, position: Position) -> Self {
        Self {
            id,
            value,
            position,
        }
    }
}

/// Check that `value` may appear on a tile (a power of two, at least 2)
pub fn is_tile_value(value: u32) -> bool {
    value >= 2 && value.is_power_of_two() && value <= MAX_TILE_VALUE
}
