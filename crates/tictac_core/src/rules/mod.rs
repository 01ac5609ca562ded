//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the opponent can run them against simulated boards.

mod draw;
mod outcome;
mod win;

pub use draw::check_draw;
pub use outcome::{GameOutcome, evaluate};
pub use win::{LineKind, WINNING_LINES, WinningLine, check_win};
