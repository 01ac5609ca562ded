//! Turn controller for a single round.

use crate::position::Position;
use crate::rules::{GameOutcome, evaluate};
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Who moved.
    pub mark: Mark,
    /// Where.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.number())
    }
}

/// Why a placement was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The display position is not 1-9.
    #[display("Position {} is out of range (must be 1-9)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("{} is already taken", _0)]
    Occupied(Position),

    /// The round has ended.
    #[display("The round is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// State of one round: board, whose turn it is, and the current outcome.
///
/// Marks alternate strictly. The outcome is re-evaluated after every
/// placement and the turn only passes while the round is in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    first: Mark,
    to_move: Mark,
    outcome: GameOutcome,
    history: Vec<Move>,
}

impl Round {
    /// Starts a round with `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            first,
            to_move: first,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the mark that moved first.
    pub fn first(&self) -> Mark {
        self.first
    }

    /// Returns the outcome after the latest placement.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the placements so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whether the round has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Places the current mover's mark at display position 1-9.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn play(&mut self, position: usize) -> Result<GameOutcome, MoveError> {
        let pos = Position::from_number(position).ok_or(MoveError::OutOfRange(position))?;
        self.play_at(pos)
    }

    /// Places the current mover's mark at `pos`.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn play_at(&mut self, pos: Position) -> Result<GameOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let mark = self.to_move;
        if !self.board.place(pos, mark) {
            return Err(MoveError::Occupied(pos));
        }
        let placed = Move::new(mark, pos);
        debug!(%placed, "Mark placed");
        self.history.push(placed);

        self.outcome = evaluate(&self.board, mark);
        match self.outcome {
            GameOutcome::InProgress => {
                self.to_move = mark.opponent();
                debug!(next = ?self.to_move, "Turn passes");
            }
            GameOutcome::Win { mark, line } => info!(?mark, %line, "Round won"),
            GameOutcome::Draw => info!("Round drawn"),
        }
        Ok(self.outcome)
    }

    /// Clears the board for a new round with the same first mover.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting round");
        *self = Self::new(self.first);
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(Mark::Human)
    }
}
