//! Integration tests for a full game session

use merge_2048::core::{
    Game, GameConfig, RngSource, SavedGame, SequenceRng, SimpleRng, SpawnPolicy,
};
use merge_2048::types::{Direction, TileId, CELL_COUNT};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_game_lifecycle() {
    let mut game = Game::new(SimpleRng::new(12345), GameConfig::default());
    assert_eq!(game.board().len(), 2);
    assert_eq!(game.score(), 0);
    assert!(!game.game_over());

    let mut last_score = 0;
    let mut turns = 0;
    while !game.game_over() {
        let moves = game.available_moves();
        let dir = moves[turns % moves.len()];
        let report = game.apply_move(dir);
        assert!(report.moved);
        assert!(game.score() >= last_score);
        assert_eq!(game.score(), last_score + report.score_increase);
        last_score = game.score();
        turns += 1;
    }

    assert!(game.board().is_full());
    assert_eq!(game.board().len(), CELL_COUNT);
    assert_eq!(game.best_score(), game.score());

    game.reset();
    assert_eq!(game.score(), 0);
    assert_eq!(game.best_score(), last_score);
    assert!(!game.game_over());
}

#[test]
fn test_snapshots_are_independent() {
    let mut game = Game::new(SimpleRng::new(8), GameConfig::default());
    let before = game.state().clone();

    let report = game.apply_move(Direction::Down);
    assert!(report.moved);
    assert_ne!(game.state(), &before);
    assert_eq!(before.board().len(), 2);
}

#[test]
fn test_spawn_ids_are_fresh() {
    let mut game = Game::new(SimpleRng::new(77), GameConfig::default());
    let mut seen: Vec<TileId> = game.board().tiles().iter().map(|t| t.id).collect();

    for dir in [Direction::Down, Direction::Left, Direction::Down, Direction::Right] {
        if let Some(tile) = game.apply_move(dir).spawned {
            assert!(!seen.contains(&tile.id));
            seen.push(tile.id);
        }
    }
}

#[test]
fn test_fixed_sequence_spawns_exact_cells() {
    // Uniform policy: first draw picks cell index, second picks value (< 0.1 means a 4).
    let rng = SequenceRng::new(vec![0.0, 0.05, 0.99, 0.5]);
    let config = GameConfig {
        spawn_policy: SpawnPolicy::Uniform,
        ..GameConfig::default()
    };
    let game = Game::new(rng, config);
    let grid = game.state().grid();
    assert_eq!(grid[0][0], 4);
    assert_eq!(grid[3][3], 2);
}

#[test]
fn test_save_and_restore_through_json() {
    let mut game = Game::new(RngSource::new(ChaCha8Rng::seed_from_u64(3)), GameConfig::default());
    for dir in [Direction::Down, Direction::Right, Direction::Down, Direction::Left] {
        game.apply_move(dir);
    }

    let json = game.save().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("grid").is_some());
    assert!(value.get("tiles").is_some());
    assert_eq!(value["score"], game.score());

    let saved = SavedGame::from_json(&json).unwrap();
    let mut restored = Game::restore(
        &saved,
        game.best_score(),
        RngSource::new(ChaCha8Rng::seed_from_u64(4)),
        GameConfig::default(),
    )
    .unwrap();
    assert_eq!(restored.board(), game.board());
    assert_eq!(restored.best_score(), game.best_score());

    // New spawns continue the id sequence
    let max_id = game.board().tiles().iter().map(|t| t.id).max().unwrap();
    for dir in Direction::ALL {
        if let Some(tile) = restored.apply_move(dir).spawned {
            assert!(tile.id > max_id);
            break;
        }
    }
}

#[test]
fn test_legacy_record_without_tiles() {
    let json = r#"{"grid":[[2,2,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,4]],"score":16,"game_over":false}"#;
    let saved = SavedGame::from_json(json).unwrap();
    let mut game = Game::restore(&saved, 10, SimpleRng::new(1), GameConfig::default()).unwrap();

    assert_eq!(game.board().len(), 3);
    assert_eq!(game.best_score(), 16);

    let report = game.apply_move(Direction::Left);
    assert_eq!(report.score_increase, 4);
    assert_eq!(game.score(), 20);
}
