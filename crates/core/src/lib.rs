//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the sliding-tile merge game: board model, move engine,
//! spawning and terminal detection. It has **no dependencies** on UI, input handling,
//! storage or I/O, making it:
//!
//! - **Deterministic**: Same random source produces identical games, including tile ids
//! - **Testable**: Every rule is a pure function over a [`Board`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 board as a sparse tile list, with dense grid conversions
//! - [`moves`]: slide/merge engine shared by all four directions
//! - [`spawn`]: empty-cell selection and spawned value
//! - [`terminal`]: game-over detection
//! - [`game_state`]: a game session publishing immutable [`GameState`] snapshots
//! - [`ids`]: tile id generator owned by a session
//! - [`rng`]: random sources for spawning
//! - [`snapshot`]: saved game record for a persistence layer
//! - [`config`]: rules configuration
//!
//! # Game Rules
//!
//! - **Move**: tiles slide towards an edge; equal neighbours merge into their sum, at most
//!   once per resulting tile per move
//! - **Score**: each merge adds the merged tile's new value
//! - **Spawn**: after every move that changed the board, a 2 (90%) or 4 (10%) appears in an
//!   empty cell, top row first
//! - **Game over**: the board is full and no direction changes it
//!
//! # Example
//!
//! ```
//! use merge_2048_core::{Game, GameConfig, SimpleRng};
//! use merge_2048_types::Direction;
//!
//! // Create a game; two tiles are already on the board
//! let mut game = Game::new(SimpleRng::new(12345), GameConfig::default());
//! assert_eq!(game.board().len(), 2);
//!
//! // Apply moves
//! for dir in [Direction::Down, Direction::Left, Direction::Up] {
//!     let report = game.apply_move(dir);
//!     if report.moved {
//!         assert!(report.spawned.is_some());
//!     }
//! }
//!
//! // Check game state
//! assert!(!game.game_over());
//! assert!(game.best_score() >= game.score());
//! ```
//!
//! The pure functions can be used without a session:
//!
//! ```
//! use merge_2048_core::{apply_move, Board, TileIdGen};
//! use merge_2048_types::Direction;
//!
//! let grid = [[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]];
//! let board = Board::from_grid(&grid, &mut TileIdGen::new()).unwrap();
//!
//! let outcome = apply_move(&board, Direction::Left);
//! assert_eq!(outcome.board.to_grid()[0], [4, 2, 0, 0]);
//! assert_eq!(outcome.score_increase, 4);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod ids;
pub mod moves;
pub mod rng;
pub mod snapshot;
pub mod spawn;
pub mod terminal;

pub use merge_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::{BoardError, SaveError};
pub use game_state::{Game, GameState, MoveReport};
pub use ids::TileIdGen;
pub use moves::{apply_move, can_move, Merge, MoveOutcome};
pub use rng::{RandomSource, RngSource, SequenceRng, SimpleRng};
pub use snapshot::{SavedGame, SavedTile};
pub use spawn::{spawn_tile, SpawnPolicy};
pub use terminal::{available_moves, has_available_move, is_terminal};
