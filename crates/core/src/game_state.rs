//! Game state module - one game session
//!
//! This module ties together the core components: board, move engine, spawner, terminal
//! detection, id generator and random source. A [`Game`] owns the only mutable pieces of a
//! session (the id generator and the RNG) and publishes each accepted move as a fresh
//! [`GameState`] snapshot.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::BoardError;
use crate::ids::TileIdGen;
use crate::moves::{apply_move, Merge, MoveOutcome, MAX_MERGES};
use crate::rng::RandomSource;
use crate::snapshot::SavedGame;
use crate::spawn::spawn_tile;
use crate::terminal::{available_moves, is_terminal};
use crate::types::{Direction, Grid, Tile};

/// Immutable snapshot of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    score: u32,
    best_score: u32,
    game_over: bool,
}

impl GameState {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Dense view of the board
    pub fn grid(&self) -> Grid {
        self.board.to_grid()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Record for the persistence layer (best score is stored separately)
    pub fn to_saved(&self) -> SavedGame {
        SavedGame::new(&self.board, self.score, self.game_over)
    }
}

/// What one call to [`Game::apply_move`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub direction: Direction,
    pub moved: bool,
    pub score_increase: u32,
    pub merges: ArrayVec<Merge, MAX_MERGES>,
    /// Tile added after the move, `None` if the move was rejected or the board was full
    pub spawned: Option<Tile>,
    pub game_over: bool,
}

/// A game session
#[derive(Debug, Clone)]
pub struct Game<R> {
    state: GameState,
    ids: TileIdGen,
    rng: R,
    config: GameConfig,
}

impl<R: RandomSource> Game<R> {
    /// Start a new game: empty board plus the configured initial tiles
    pub fn new(rng: R, config: GameConfig) -> Self {
        let mut game = Self {
            state: GameState {
                board: Board::new(),
                score: 0,
                best_score: 0,
                game_over: false,
            },
            ids: TileIdGen::new(),
            rng,
            config,
        };
        game.reset();
        game
    }

    /// Resume a saved game.
    ///
    /// The terminal flag is recomputed from the restored board rather than trusted.
    pub fn restore(
        saved: &SavedGame,
        best_score: u32,
        rng: R,
        config: GameConfig,
    ) -> Result<Self, BoardError> {
        let (board, ids) = saved.restore_board()?;
        let game_over = is_terminal(&board);
        if game_over != saved.game_over {
            debug!(
                "saved game_over={} disagrees with board; using {}",
                saved.game_over, game_over
            );
        }
        info!(
            "restored game: {} tiles, score {}",
            board.len(),
            saved.score
        );

        Ok(Self {
            state: GameState {
                board,
                score: saved.score,
                best_score: best_score.max(saved.score),
                game_over,
            },
            ids,
            rng,
            config,
        })
    }

    /// Throw the current board away and start over; the best score is kept
    pub fn reset(&mut self) {
        self.ids.reset();

        let mut board = Board::new();
        for _ in 0..self.config.initial_tiles {
            match spawn_tile(&board, &mut self.rng, &mut self.ids, self.config.spawn_policy) {
                Some(next) => board = next,
                None => break,
            }
        }
        info!("new game with {} tiles", board.len());

        let game_over = is_terminal(&board);
        self.state = GameState {
            board,
            score: 0,
            best_score: self.state.best_score,
            game_over,
        };
    }

    /// Apply a move: slide and merge, then spawn and check for game over.
    ///
    /// A move that changes nothing leaves the state untouched and spawns nothing.
    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        let MoveOutcome {
            board,
            score_increase,
            moved,
            merges,
        } = apply_move(&self.state.board, direction);

        if !moved {
            debug!("move {} rejected: board unchanged", direction);
            return MoveReport {
                direction,
                moved: false,
                score_increase: 0,
                merges,
                spawned: None,
                game_over: self.state.game_over,
            };
        }

        let (board, spawned) =
            match spawn_tile(&board, &mut self.rng, &mut self.ids, self.config.spawn_policy) {
                Some(next) => {
                    let spawned = next.tiles().last().copied();
                    (next, spawned)
                }
                None => (board, None),
            };

        let score = self.state.score.saturating_add(score_increase);
        let game_over = is_terminal(&board);
        if game_over {
            info!("game over: score {}, max tile {}", score, board.max_value());
        }

        self.state = GameState {
            board,
            score,
            best_score: self.state.best_score.max(score),
            game_over,
        };

        MoveReport {
            direction,
            moved: true,
            score_increase,
            merges,
            spawned,
            game_over,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best_score(&self) -> u32 {
        self.state.best_score
    }

    /// Seed the best score tracked by the caller (never lowers it)
    pub fn set_best_score(&mut self, best_score: u32) {
        self.state.best_score = self.state.best_score.max(best_score);
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Directions that would change the board
    pub fn available_moves(&self) -> Vec<Direction> {
        available_moves(&self.state.board)
    }

    /// Record for the persistence layer
    pub fn save(&self) -> SavedGame {
        self.state.to_saved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{SequenceRng, SimpleRng};
    use crate::spawn::SpawnPolicy;
    use crate::snapshot::SavedTile;
    use crate::types::{Position, TileId, CELL_COUNT, MAX_TILE_VALUE};

    fn game(seed: u32) -> Game<SimpleRng> {
        Game::new(SimpleRng::new(seed), GameConfig::default())
    }

    #[test]
    fn test_new_game_has_two_tiles() {
        let g = game(1);
        assert_eq!(g.board().len(), 2);
        assert_eq!(g.score(), 0);
        assert!(!g.game_over());
        let ids: Vec<_> = g.board().tiles().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TileId(1), TileId(2)]);
    }

    #[test]
    fn test_new_game_fills_first_row() {
        for seed in 1..30 {
            let g = game(seed);
            assert!(g.board().tiles().iter().all(|t| t.position.row == 0));
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = game(42);
        let mut b = game(42);
        for dir in [Direction::Down, Direction::Left, Direction::Down, Direction::Right] {
            assert_eq!(a.apply_move(dir), b.apply_move(dir));
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_effective_move_spawns_and_scores() {
        // Draws: cell 0 value 2, cell 1 value 2, then cell 0 value 2 for the post-move spawn.
        let mut g = Game::new(
            SequenceRng::new(vec![0.0, 0.5, 0.0, 0.5]),
            GameConfig::default(),
        );
        assert_eq!(g.state().grid()[0], [2, 2, 0, 0]);

        let report = g.apply_move(Direction::Right);
        assert!(report.moved);
        assert_eq!(report.score_increase, 4);
        assert_eq!(report.merges.len(), 1);
        let spawned = report.spawned.unwrap();
        assert_eq!(spawned.id, TileId(3));
        assert_eq!(spawned.position, Position::new(0, 0));
        assert_eq!(g.state().grid()[0], [2, 0, 0, 4]);
        assert_eq!(g.score(), 4);
        assert_eq!(g.best_score(), 4);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut g = Game::new(SequenceRng::new(vec![0.0, 0.5]), GameConfig::default());
        // Both tiles land on row 0, so Up cannot move them.
        let before = g.state().clone();
        let report = g.apply_move(Direction::Up);
        assert!(!report.moved);
        assert!(report.spawned.is_none());
        assert_eq!(g.state(), &before);
    }

    #[test]
    fn test_reset_keeps_best_score_and_restarts_ids() {
        let mut g = Game::new(
            SequenceRng::new(vec![0.0, 0.5, 0.0, 0.5]),
            GameConfig::default(),
        );
        g.apply_move(Direction::Left);
        let best = g.best_score();
        assert!(best > 0);

        g.reset();
        assert_eq!(g.score(), 0);
        assert_eq!(g.best_score(), best);
        assert_eq!(g.board().len(), 2);
        assert_eq!(g.board().tiles()[0].id, TileId(1));
    }

    #[test]
    fn test_restore_roundtrip() {
        let mut g = game(7);
        g.apply_move(Direction::Down);
        g.apply_move(Direction::Left);
        let saved = g.save();

        let restored = Game::restore(&saved, 100, SimpleRng::new(1), GameConfig::default()).unwrap();
        assert_eq!(restored.board(), g.board());
        assert_eq!(restored.score(), g.score());
        assert_eq!(restored.best_score(), 100.max(g.score()));
    }

    #[test]
    fn test_restore_recomputes_game_over() {
        let grid = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        let saved = SavedGame {
            grid,
            score: 500,
            game_over: false,
            tiles: None,
        };
        let mut g = Game::restore(&saved, 0, SimpleRng::new(1), GameConfig::default()).unwrap();
        assert!(g.game_over());
        assert!(g.available_moves().is_empty());
        assert_eq!(g.best_score(), 500);

        let report = g.apply_move(Direction::Left);
        assert!(!report.moved);
        assert!(report.game_over);
    }

    #[test]
    fn test_game_reaches_game_over() {
        let mut g = Game::new(SimpleRng::new(99), GameConfig::default());
        let mut turns = 0;
        while !g.game_over() && turns < 10_000 {
            let dir = g.available_moves()[0];
            let before = g.board().total_value();
            let report = g.apply_move(dir);
            assert!(report.moved);
            let spawned = report.spawned.map(|t| u64::from(t.value)).unwrap_or(0);
            assert_eq!(
                g.board().total_value(),
                before + u64::from(report.score_increase) + spawned
            );
            turns += 1;
        }
        assert!(g.game_over());
        assert_eq!(g.board().len(), CELL_COUNT);
        assert!(g.best_score() >= g.score());
    }

    #[test]
    fn test_uniform_policy_config() {
        let config = GameConfig {
            spawn_policy: SpawnPolicy::Uniform,
            initial_tiles: 3,
        };
        let g = Game::new(SequenceRng::new(vec![0.99, 0.5]), config);
        assert_eq!(g.board().len(), 3);
        assert_eq!(g.config().spawn_policy, SpawnPolicy::Uniform);
        assert!(g.board().tile_at(Position::new(3, 3)).is_some());
    }

    #[test]
    fn test_score_saturates_after_restore() {
        let saved = SavedGame {
            grid: [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]],
            score: u32::MAX - 1,
            game_over: false,
            tiles: None,
        };
        let mut g = Game::restore(&saved, 0, SimpleRng::new(1), GameConfig::default()).unwrap();
        let report = g.apply_move(Direction::Left);
        assert!(report.moved);
        assert_eq!(report.score_increase, 4);
        assert_eq!(g.score(), u32::MAX);
        assert_eq!(g.best_score(), u32::MAX);
    }

    #[test]
    fn test_restore_rejects_exhausted_ids() {
        let saved = SavedGame {
            grid: [[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]],
            score: 0,
            game_over: false,
            tiles: Some(vec![
                SavedTile::from(Tile::new(TileId(u32::MAX), 2, Position::new(0, 0))),
                SavedTile::from(Tile::new(TileId(1), 4, Position::new(0, 1))),
            ]),
        };
        let err = Game::restore(&saved, 0, SimpleRng::new(1), GameConfig::default()).unwrap_err();
        assert_eq!(err, BoardError::IdsExhausted);
    }

    #[test]
    fn test_spawns_stop_when_ids_run_out() {
        let saved = SavedGame {
            grid: [[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]],
            score: 0,
            game_over: false,
            tiles: Some(vec![
                SavedTile::from(Tile::new(TileId(u32::MAX - 1), 2, Position::new(0, 0))),
                SavedTile::from(Tile::new(TileId(1), 4, Position::new(0, 1))),
            ]),
        };
        let rng = SequenceRng::new(vec![0.0, 0.5]);
        let mut g = Game::restore(&saved, 0, rng, GameConfig::default()).unwrap();

        let report = g.apply_move(Direction::Down);
        assert_eq!(report.spawned.map(|t| t.id), Some(TileId(u32::MAX)));

        // A 2 now sits above the 2 that slid down; they merge but nothing spawns
        let report = g.apply_move(Direction::Down);
        assert!(report.moved);
        assert_eq!(report.merges.len(), 1);
        assert!(report.spawned.is_none());
        assert!(Board::from_tiles(g.board().tiles().to_vec()).is_ok());
    }

    #[test]
    fn test_largest_tiles_do_not_overflow() {
        let top = MAX_TILE_VALUE;
        let saved = SavedGame {
            grid: [[top, top, 0, 0], [0; 4], [0; 4], [0; 4]],
            score: 0,
            game_over: false,
            tiles: None,
        };
        let mut g = Game::restore(&saved, 0, SimpleRng::new(1), GameConfig::default()).unwrap();

        let report = g.apply_move(Direction::Left);
        assert!(!report.moved);

        let report = g.apply_move(Direction::Right);
        assert!(report.moved);
        assert_eq!(report.score_increase, 0);
        assert_eq!(g.state().grid()[0][2..], [top, top]);
        assert!(Board::from_tiles(g.board().tiles().to_vec()).is_ok());
    }
}
