//! Terminal front ends for playing tic-tac-toe against the computer.
//!
//! The game logic lives in [`tictac_core`]; this crate supplies the
//! collaborators around it:
//!
//! - **Config**: defaults, TOML file, environment and flag layering
//! - **Console**: line-based text play
//! - **TUI**: ratatui board with keyboard and mouse input
//! - **Logging**: tracing subscriber setup for each front end

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod logging;
mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, FirstPlayer, GameConfig};
pub use console::{Console, RoundResult, Tally, render_board};
pub use logging::{init_file_tracing, init_stderr_tracing};
pub use tui::{App, run_tui};
