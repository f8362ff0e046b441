//! Move engine - slide, merge, slide
//!
//! All four directions run through one line routine. A direction picks the axis that splits
//! the board into independent lines (rows for left/right, columns for up/down) and the edge the
//! tiles travel towards. Within a line, tiles are walked nearest-edge first; each tile either
//! merges into the last compacted tile or is appended after it.
//!
//! A compacted tile that was produced by a merge during the current walk is closed for further
//! merges, so `[2, 2, 2, 0]` moved left becomes `[4, 2, 0, 0]`, never `[8, 0, 0, 0]` or
//! `[4, 2]` followed by a second merge.
//!
//! Tiles at [`MAX_TILE_VALUE`] are saturated: equal neighbours at that value stay apart.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Direction, Position, Tile, TileId, BOARD_SIZE, MAX_TILE_VALUE};

/// Upper bound on merges in a single move (two per line)
pub const MAX_MERGES: usize = BOARD_SIZE / 2 * BOARD_SIZE;

/// Result of applying one move to a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Board after sliding and merging (no spawn yet)
    pub board: Board,
    /// Points gained: the sum of the new values of all merged tiles
    pub score_increase: u32,
    /// True iff at least one tile changed position or value
    pub moved: bool,
    /// Merges performed, nearest-edge first within each line
    pub merges: ArrayVec<Merge, MAX_MERGES>,
}

/// One merge: `absorbed` was deleted and `into` now carries the doubled value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    pub into: TileId,
    pub absorbed: TileId,
    pub value: u32,
    pub position: Position,
}

/// Which coordinate separates lines for a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    /// Lines are rows; tiles travel along columns (left/right)
    Rows,
    /// Lines are columns; tiles travel along rows (up/down)
    Columns,
}

impl Axis {
    fn line(self, pos: Position) -> usize {
        match self {
            Axis::Rows => pos.row as usize,
            Axis::Columns => pos.col as usize,
        }
    }

    fn along(self, pos: Position) -> usize {
        match self {
            Axis::Rows => pos.col as usize,
            Axis::Columns => pos.row as usize,
        }
    }

    fn with_along(self, pos: Position, along: usize) -> Position {
        match self {
            Axis::Rows => Position::new(pos.row, along as u8),
            Axis::Columns => Position::new(along as u8, pos.col),
        }
    }
}

/// Axis and target edge for a direction (`true` = towards index 0)
fn orientation(direction: Direction) -> (Axis, bool) {
    match direction {
        Direction::Left => (Axis::Rows, true),
        Direction::Right => (Axis::Rows, false),
        Direction::Up => (Axis::Columns, true),
        Direction::Down => (Axis::Columns, false),
    }
}

/// Map between a coordinate and its distance from the target edge (self-inverse)
#[inline(always)]
fn from_edge(coord: usize, toward_start: bool) -> usize {
    if toward_start {
        coord
    } else {
        BOARD_SIZE - 1 - coord
    }
}

/// Move-scoped working record; the merge flag never leaves this module
#[derive(Debug, Clone, Copy)]
struct Slot {
    tile: Tile,
    merged: bool,
}

/// Apply a move to `board`.
///
/// The input board is left untouched. Tiles that slide keep their ids; of each merged pair the
/// tile nearer the target edge survives.
pub fn apply_move(board: &Board, direction: Direction) -> MoveOutcome {
    let (axis, toward_start) = orientation(direction);

    let mut lines: [ArrayVec<Tile, BOARD_SIZE>; BOARD_SIZE] = Default::default();
    for tile in board.tiles() {
        lines[axis.line(tile.position)].push(*tile);
    }

    let mut tiles = Vec::with_capacity(board.len());
    let mut merges = ArrayVec::new();
    let mut score_increase = 0u32;
    let mut moved = false;

    for line in &mut lines {
        line.sort_unstable_by_key(|tile| from_edge(axis.along(tile.position), toward_start));

        let mut compacted: ArrayVec<Slot, BOARD_SIZE> = ArrayVec::new();
        for tile in line.iter() {
            let distance = compacted.len().saturating_sub(1);
            match compacted.last_mut() {
                Some(last)
                    if !last.merged
                        && last.tile.value == tile.value
                        && last.tile.value < MAX_TILE_VALUE =>
                {
                    last.tile.value *= 2;
                    last.merged = true;
                    score_increase = score_increase.saturating_add(last.tile.value);
                    moved = true;
                    merges.push(Merge {
                        into: last.tile.id,
                        absorbed: tile.id,
                        value: last.tile.value,
                        position: axis
                            .with_along(last.tile.position, from_edge(distance, toward_start)),
                    });
                }
                _ => compacted.push(Slot {
                    tile: *tile,
                    merged: false,
                }),
            }
        }

        for (distance, slot) in compacted.into_iter().enumerate() {
            let mut tile = slot.tile;
            let position = axis.with_along(tile.position, from_edge(distance, toward_start));
            if position != tile.position {
                moved = true;
            }
            tile.position = position;
            tiles.push(tile);
        }
    }

    MoveOutcome {
        board: Board::from_tiles_unchecked(tiles),
        score_increase,
        moved,
        merges,
    }
}

/// Check whether a move in `direction` would change the board
pub fn can_move(board: &Board, direction: Direction) -> bool {
    apply_move(board, direction).moved
}
