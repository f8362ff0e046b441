//! Terminal-state detection

use crate::board::Board;
use crate::moves::can_move;
use crate::types::Direction;

/// Check whether any move can still change the board.
///
/// A board with an empty cell always has a move. A full board is probed in all four
/// directions; the probes never touch `board`.
pub fn has_available_move(board: &Board) -> bool {
    if !board.is_full() {
        return true;
    }
    Direction::ALL.iter().any(|&dir| can_move(board, dir))
}

/// Check if the game is over (full board, no direction changes it)
pub fn is_terminal(board: &Board) -> bool {
    !has_available_move(board)
}

/// Directions that would change the board, in [`Direction::ALL`] order
pub fn available_moves(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(board, dir))
        .collect()
}
