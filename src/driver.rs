//! Headless line-driven driver.
//!
//! Reads one command per line and prints the game after each one. It is a thin consumer of the
//! core: the driver decides when moves happen, the core only computes their result.
//!
//! Commands: a direction (`up`, `down`, `left`, `right`, arrow names, single letters, WASD),
//! `new` to restart, `save` to print the saved-game record, `quit` to stop.

use std::env;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use log::warn;

use crate::core::{Game, RandomSource};
use crate::types::Direction;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DriverConfig {
    /// Seed for the spawn RNG; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Print the saved-game record as JSON instead of a text grid
    pub json: bool,
    /// Saved game to resume
    pub load: Option<PathBuf>,
}

/// Parse driver arguments (program name already stripped).
///
/// `MERGE2048_SEED` supplies the seed when `--seed` is absent.
pub fn parse_args(args: &[String]) -> Result<DriverConfig> {
    let mut config = DriverConfig {
        seed: env::var("MERGE2048_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok()),
        ..DriverConfig::default()
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--load" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --load"))?;
                config.load = Some(PathBuf::from(v));
            }
            "--json" => config.json = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    NewGame,
    Save,
    Quit,
}

impl Command {
    /// Parse a command line (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(dir) = Direction::from_str(s) {
            return Some(Command::Move(dir));
        }
        match s.trim().to_lowercase().as_str() {
            "new" | "restart" | "n" => Some(Command::NewGame),
            "save" => Some(Command::Save),
            "quit" | "exit" | "q" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Run commands from `input` until it ends or a `quit` is read
pub fn run<R, I, O>(game: &mut Game<R>, input: I, out: &mut O, json: bool) -> Result<()>
where
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    print_state(game, out, json)?;

    for line in input.lines() {
        let line = line.context("read command")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Command::from_str(trimmed) {
            Some(Command::Quit) => break,
            Some(Command::Move(dir)) => {
                let report = game.apply_move(dir);
                if !report.moved && !json {
                    writeln!(out, "{}: no change", dir)?;
                    continue;
                }
            }
            Some(Command::NewGame) => game.reset(),
            Some(Command::Save) => {
                writeln!(out, "{}", game.save().to_json()?)?;
                continue;
            }
            None => {
                warn!("unknown command: {}", trimmed);
                writeln!(out, "unknown command: {}", trimmed)?;
                continue;
            }
        }

        print_state(game, out, json)?;
    }

    out.flush()?;
    Ok(())
}

fn print_state<R, O>(game: &Game<R>, out: &mut O, json: bool) -> Result<()>
where
    R: RandomSource,
    O: Write,
{
    if json {
        writeln!(out, "{}", game.save().to_json()?)?;
        return Ok(());
    }

    writeln!(out, "score: {}  best: {}", game.score(), game.best_score())?;
    write!(out, "{}", game.board())?;
    if game.game_over() {
        writeln!(out, "game over")?;
    }
    Ok(())
}
