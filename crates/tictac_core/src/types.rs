//! Core domain types for tic-tac-toe.

use crate::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// The symbol owning a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human player, shown as `X`.
    Human,
    /// The computer opponent, shown as `O`.
    Opponent,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Human => Mark::Opponent,
            Mark::Opponent => Mark::Human,
        }
    }

    /// Glyph used to draw this mark.
    pub fn glyph(self) -> char {
        match self {
            Mark::Human => 'X',
            Mark::Opponent => 'O',
        }
    }

    fn from_glyph(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Mark::Human),
            'O' | 'o' => Some(Mark::Opponent),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Cells only ever go from [`Square::Empty`] to a mark. [`Board::place_mark`]
/// and [`Board::place`] are the only ways to change a cell, and both refuse
/// to overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if the cell at display position 1-9 is empty.
    ///
    /// Out-of-range positions are not placeable and report `false`.
    pub fn is_cell_empty(&self, position: usize) -> bool {
        Position::from_number(position).is_some_and(|pos| self.is_empty(pos))
    }

    /// Places `mark` at `pos` if the square is empty.
    ///
    /// Returns `false` and leaves the board untouched when the square is taken.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> bool {
        if !self.is_empty(pos) {
            trace!(?pos, "Square already occupied");
            return false;
        }
        self.squares[pos.index()] = Square::Occupied(mark);
        true
    }

    /// Places `mark` at display position 1-9.
    ///
    /// Returns `false` without mutating for an out-of-range position or an
    /// occupied cell.
    #[instrument(level = "trace", skip(self))]
    pub fn place_mark(&mut self, position: usize, mark: Mark) -> bool {
        match Position::from_number(position) {
            Some(pos) => self.place(pos, mark),
            None => {
                trace!(position, "Position out of range");
                false
            }
        }
    }

    /// 0-based indices of empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.empty_positions().iter().map(|pos| pos.index()).collect()
    }

    /// Empty cells as positions, ascending.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Checks if no empty square remains.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board {:?}: {}", input, reason)]
pub struct BoardParseError {
    /// The rejected input.
    pub input: String,
    /// What was wrong with it.
    pub reason: String,
}

impl BoardParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses 9 cells written row-major: `X`, `O`, or `.`/`_`/`-` for empty.
    /// Whitespace and `|` are ignored, so `"XX.|...|..."` and multi-line
    /// grids both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut filled = 0;

        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let square = match c {
                '.' | '_' | '-' => Square::Empty,
                other => match Mark::from_glyph(other) {
                    Some(mark) => Square::Occupied(mark),
                    None => {
                        return Err(BoardParseError::new(
                            s,
                            format!("unexpected character {:?}", other),
                        ));
                    }
                },
            };
            if filled == 9 {
                return Err(BoardParseError::new(s, "more than 9 cells"));
            }
            squares[filled] = square;
            filled += 1;
        }

        if filled != 9 {
            return Err(BoardParseError::new(
                s,
                format!("expected 9 cells, found {}", filled),
            ));
        }
        Ok(Self { squares })
    }
}
