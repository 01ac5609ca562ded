//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LineKind {
    /// Horizontal, index 0-2 from the top.
    Row,
    /// Vertical, index 0-2 from the left.
    Column,
    /// Index 0 runs top-left to bottom-right, index 1 top-right to bottom-left.
    Diagonal,
}

/// One of the 8 triples that win the game when held by a single mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    kind: LineKind,
    index: usize,
    cells: [Position; 3],
}

impl WinningLine {
    const fn new(kind: LineKind, index: usize, cells: [Position; 3]) -> Self {
        Self { kind, index, cells }
    }

    /// Orientation of the line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Index of the line within its kind.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The three cells, in catalog order.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// First and last cell, for drawing a stroke through the line.
    pub fn endpoints(&self) -> (Position, Position) {
        (self.cells[0], self.cells[2])
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    fn is_held_by(&self, board: &Board, mark: Mark) -> bool {
        self.cells
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(mark))
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.index)
    }
}

/// Catalog of winning lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = {
    use LineKind::*;
    use Position::*;
    [
        WinningLine::new(Row, 0, [TopLeft, TopCenter, TopRight]),
        WinningLine::new(Row, 1, [MiddleLeft, Center, MiddleRight]),
        WinningLine::new(Row, 2, [BottomLeft, BottomCenter, BottomRight]),
        WinningLine::new(Column, 0, [TopLeft, MiddleLeft, BottomLeft]),
        WinningLine::new(Column, 1, [TopCenter, Center, BottomCenter]),
        WinningLine::new(Column, 2, [TopRight, MiddleRight, BottomRight]),
        WinningLine::new(Diagonal, 0, [TopLeft, Center, BottomRight]),
        WinningLine::new(Diagonal, 1, [TopRight, Center, BottomLeft]),
    ]
};

/// Checks whether `mark` holds a complete line.
///
/// Returns the first matching line in catalog order. More than one line can
/// only complete at once on constructed boards; catalog order decides which
/// one is reported.
#[instrument(level = "trace")]
pub fn check_win(board: &Board, mark: Mark) -> Option<WinningLine> {
    WINNING_LINES
        .iter()
        .find(|line| line.is_held_by(board, mark))
        .copied()
}
