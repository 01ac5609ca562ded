//! Move selection for the computer opponent.

use super::difficulty::Difficulty;
use crate::position::Position;
use crate::rules::check_win;
use crate::types::{Board, Mark};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// The rule that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Rule {
    /// Completes one of the opponent's lines.
    Win,
    /// Takes the cell the human needs to complete a line.
    Block,
    /// Takes the center.
    Center,
    /// Random free corner.
    Corner,
    /// Random free side.
    Side,
    /// Random free cell after every other hard rule missed.
    Fallback,
    /// Random free cell (easy difficulty).
    Random,
}

/// A chosen cell and the rule that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Decision {
    /// Where the opponent plays.
    pub position: Position,
    /// Why.
    pub rule: Rule,
}

/// Picks the opponent's next cell.
///
/// Returns `None` only when the board has no empty cell, which a caller that
/// evaluates the outcome after every placement never reaches.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    opponent: Mark,
    human: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    decide(board, opponent, human, difficulty, rng).map(|decision| decision.position)
}

/// Like [`choose_move`], but also reports which rule fired.
#[instrument(level = "trace", skip(rng))]
pub fn decide<R: Rng + ?Sized>(
    board: &Board,
    opponent: Mark,
    human: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Decision> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        error!("Opponent has no legal move");
        return None;
    }

    let decision = match difficulty {
        Difficulty::Easy => random_among(&empty, Rule::Random, rng),
        Difficulty::Hard => cascade(board, &empty, opponent, human, rng),
    }?;

    debug!(
        ?difficulty,
        rule = %decision.rule,
        position = decision.position.number(),
        "Opponent chose move"
    );
    Some(decision)
}

/// Win, block, center, corner, side, then anything left.
fn cascade<R: Rng + ?Sized>(
    board: &Board,
    empty: &[Position],
    opponent: Mark,
    human: Mark,
    rng: &mut R,
) -> Option<Decision> {
    if let Some(pos) = first_completing(board, empty, opponent) {
        return Some(Decision::new(pos, Rule::Win));
    }
    if let Some(pos) = first_completing(board, empty, human) {
        return Some(Decision::new(pos, Rule::Block));
    }
    if board.is_empty(Position::CENTER) {
        return Some(Decision::new(Position::CENTER, Rule::Center));
    }

    let corners: Vec<_> = free(board, &Position::CORNERS);
    if let Some(decision) = random_among(&corners, Rule::Corner, rng) {
        return Some(decision);
    }
    let sides: Vec<_> = free(board, &Position::SIDES);
    if let Some(decision) = random_among(&sides, Rule::Side, rng) {
        return Some(decision);
    }

    random_among(empty, Rule::Fallback, rng)
}

/// First empty cell (ascending) where `mark` would complete a line.
fn first_completing(board: &Board, empty: &[Position], mark: Mark) -> Option<Position> {
    empty.iter().copied().find(|pos| {
        let mut simulated = *board;
        simulated.place(*pos, mark) && check_win(&simulated, mark).is_some()
    })
}

fn free(board: &Board, candidates: &[Position]) -> Vec<Position> {
    candidates
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

fn random_among<R: Rng + ?Sized>(
    candidates: &[Position],
    rule: Rule,
    rng: &mut R,
) -> Option<Decision> {
    candidates.choose(rng).map(|pos| Decision::new(*pos, rule))
}
