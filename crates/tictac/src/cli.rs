//! Command-line interface for tictac.

use crate::config::{ConfigError, FirstPlayer, GameConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_core::Difficulty;
use tracing::instrument;

/// Tic-tac-toe against a rule-based computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Front end to run (defaults to the console)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a TOML config file (defaults to ./tictac.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Opponent difficulty: easy or hard
    #[arg(short, long, global = true)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the opponent's random choices
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Pause before the opponent's move, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Let the computer open each round
    #[arg(long, global = true)]
    pub opponent_first: bool,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Text console: type 1-9 to move
    Console,

    /// Terminal graphics: arrow keys, digits or mouse
    Tui,
}

impl Cli {
    /// Front end to run.
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Console)
    }

    /// Builds the session configuration: file, then environment, then flags.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let config = GameConfig::load(self.config.as_deref())?.apply_env()?;
        Ok(self.apply_flags(config))
    }

    /// Applies command-line flags on top of `config`.
    pub fn apply_flags(&self, mut config: GameConfig) -> GameConfig {
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(Some(difficulty));
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(Some(seed));
        }
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_opponent_delay_ms(delay_ms);
        }
        if self.opponent_first {
            config = config.with_first_player(FirstPlayer::Opponent);
        }
        config
    }
}
