//! Game configuration: defaults, TOML file, environment, command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_core::{Difficulty, Mark};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictac.toml";

/// Which side takes the first move in a new round.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human plays first.
    #[default]
    Human,
    /// The computer plays first.
    Opponent,
}

impl FirstPlayer {
    /// The mark that opens the round.
    pub fn mark(self) -> Mark {
        match self {
            Self::Human => Mark::Human,
            Self::Opponent => Mark::Opponent,
        }
    }
}

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Opponent difficulty. When unset the console asks, the TUI uses hard.
    #[serde(default)]
    difficulty: Option<Difficulty>,

    /// Who opens each round.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Pause before the opponent's move is shown, in milliseconds.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,

    /// Seed for the opponent's random choices.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_opponent_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: None,
            first_player: FirstPlayer::default(),
            opponent_delay_ms: default_opponent_delay_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise [`DEFAULT_CONFIG_FILE`] if present,
    /// otherwise defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies `TICTAC_DIFFICULTY` and `TICTAC_SEED` from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// An unrecognized difficulty falls back to easy with a warning; a seed
    /// that is not a `u64` is an error.
    #[instrument(skip(self, lookup))]
    pub fn apply_env_with(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = lookup("TICTAC_DIFFICULTY") {
            self.difficulty = Some(Difficulty::parse_or_easy(&value));
            debug!(difficulty = ?self.difficulty, "Difficulty from environment");
        }
        if let Some(value) = lookup("TICTAC_SEED") {
            let seed = value.trim().parse::<u64>().map_err(|e| {
                ConfigError::new(format!("Invalid TICTAC_SEED {:?}: {}", value, e))
            })?;
            self.seed = Some(seed);
            debug!(seed, "Seed from environment");
        }
        Ok(self)
    }

    /// Difficulty to use when nobody is asked.
    pub fn difficulty_or_default(&self) -> Difficulty {
        self.difficulty.unwrap_or_default()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.difficulty(), None);
        assert_eq!(*config.first_player(), FirstPlayer::Human);
        assert_eq!(*config.opponent_delay_ms(), 500);
        assert_eq!(config.difficulty_or_default(), Difficulty::Hard);
    }

    #[test]
    fn test_env_overrides() {
        let config = GameConfig::default()
            .apply_env_with(|key| match key {
                "TICTAC_DIFFICULTY" => Some("EASY".to_string()),
                "TICTAC_SEED" => Some("42".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(*config.difficulty(), Some(Difficulty::Easy));
        assert_eq!(*config.seed(), Some(42));
    }

    #[test]
    fn test_env_unknown_difficulty_falls_back_to_easy() {
        let config = GameConfig::default()
            .with_difficulty(Some(Difficulty::Hard))
            .apply_env_with(|key| (key == "TICTAC_DIFFICULTY").then(|| "nightmare".to_string()))
            .unwrap();
        assert_eq!(*config.difficulty(), Some(Difficulty::Easy));
    }

    #[test]
    fn test_env_bad_seed_is_error() {
        let err = GameConfig::default()
            .apply_env_with(|key| (key == "TICTAC_SEED").then(|| "soon".to_string()))
            .unwrap_err();
        assert!(err.message.contains("TICTAC_SEED"));
    }

    #[test]
    fn test_first_player_mark() {
        assert_eq!(FirstPlayer::Human.mark(), Mark::Human);
        assert_eq!(FirstPlayer::Opponent.mark(), Mark::Opponent);
    }
}
