//! tictac - play tic-tac-toe against a rule-based computer opponent.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use tictac::{Cli, Command, Console, init_file_tracing, init_stderr_tracing, run_tui};
use tracing::info;

const TUI_LOG_FILE: &str = "tictac_tui.log";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command() {
        Command::Console => init_stderr_tracing("warn"),
        Command::Tui => init_file_tracing(TUI_LOG_FILE, "info")?,
    }

    let config = cli.resolve_config().context("Failed to load configuration")?;
    info!(?config, command = ?cli.command(), "Configuration resolved");

    match cli.command() {
        Command::Console => run_console(config),
        Command::Tui => run_tui(config),
    }
}

/// Run the text console on stdin/stdout
fn run_console(config: tictac::GameConfig) -> Result<()> {
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout();
    let interactive = stdout.is_terminal();

    let tally = Console::new(stdin, stdout.lock(), config)
        .clear_screen(interactive)
        .run()?;
    info!(?tally, "Console session finished");
    Ok(())
}
