//! Headless 2048 runner (default binary).
//!
//! Reads moves from stdin, one per line, and prints the board after each.
//! Logging goes to stderr through env_logger (`RUST_LOG`, default `info`).

use std::fs;
use std::io;

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use merge_2048::core::{Game, GameConfig, RngSource, SavedGame};
use merge_2048::driver::{self, DriverConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = driver::parse_args(&args)?;

    let mut game = new_game(&config)?;

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    driver::run(&mut game, stdin, &mut stdout, config.json)
}

fn new_game(config: &DriverConfig) -> Result<Game<RngSource<ChaCha8Rng>>> {
    let rng = match config.seed {
        Some(seed) => {
            info!("seed {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };
    let rules = GameConfig::from_env();

    match &config.load {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read saved game {}", path.display()))?;
            let saved = SavedGame::from_json(&text)?;
            let game = Game::restore(&saved, saved.score, RngSource::new(rng), rules)?;
            info!("resumed {} at score {}", path.display(), game.score());
            Ok(game)
        }
        None => Ok(Game::new(RngSource::new(rng), rules)),
    }
}
