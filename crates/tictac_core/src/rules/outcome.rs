//! Combined verdict after a placement.

use super::draw::check_draw;
use super::win::{WinningLine, check_win};
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a round, recomputed from the board after every placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Moves remain and nobody has won.
    InProgress,
    /// `mark` completed `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// Full board with no winner.
    Draw,
}

impl GameOutcome {
    /// Whether the round has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameOutcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates the board after `last_mover` placed a mark.
///
/// Win is checked before draw, so a move that fills the last cell and
/// completes a line is a win.
#[instrument(level = "debug")]
pub fn evaluate(board: &Board, last_mover: Mark) -> GameOutcome {
    if let Some(line) = check_win(board, last_mover) {
        GameOutcome::Win {
            mark: last_mover,
            line,
        }
    } else if check_draw(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::LineKind;

    #[test]
    fn test_in_progress() {
        let board: Board = "X..|.O.|...".parse().unwrap();
        assert_eq!(evaluate(&board, Mark::Opponent), GameOutcome::InProgress);
        assert!(!GameOutcome::InProgress.is_over());
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        // X fills the final cell and completes the bottom row.
        let board: Board = "XOO|OOX|XXX".parse().unwrap();
        let outcome = evaluate(&board, Mark::Human);
        assert_eq!(outcome.winner(), Some(Mark::Human));
        let line = outcome.winning_line().unwrap();
        assert_eq!((line.kind(), line.index()), (LineKind::Row, 2));
        assert!(outcome.is_over());
    }

    #[test]
    fn test_draw() {
        let board: Board = "XOX|OXX|OXO".parse().unwrap();
        assert_eq!(evaluate(&board, Mark::Human), GameOutcome::Draw);
        assert_eq!(GameOutcome::Draw.winner(), None);
    }

    #[test]
    fn test_only_last_mover_is_checked() {
        let board: Board = "OOO|XX.|...".parse().unwrap();
        assert_eq!(evaluate(&board, Mark::Human), GameOutcome::InProgress);
    }
}
