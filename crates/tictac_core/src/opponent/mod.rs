//! The computer opponent.

mod difficulty;
mod strategy;

pub use difficulty::{Difficulty, UnknownDifficulty};
pub use strategy::{Decision, Rule, choose_move, decide};

use crate::position::Position;
use crate::types::{Board, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::instrument;

/// A difficulty bundled with its own random source.
///
/// Front ends hold one of these for the lifetime of a session. Use
/// [`OpponentPolicy::seeded`] for reproducible games.
#[derive(Debug, Clone)]
pub struct OpponentPolicy {
    difficulty: Difficulty,
    rng: StdRng,
}

impl OpponentPolicy {
    /// Creates a policy seeded from the operating system.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a policy with a fixed seed.
    #[instrument]
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty, keeping the random source.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Picks the opponent's next cell. See [`choose_move`].
    pub fn choose_move(&mut self, board: &Board, opponent: Mark, human: Mark) -> Option<Position> {
        choose_move(board, opponent, human, self.difficulty, &mut self.rng)
    }

    /// Picks the opponent's next cell and reports the rule. See [`decide`].
    pub fn decide(&mut self, board: &Board, opponent: Mark, human: Mark) -> Option<Decision> {
        decide(board, opponent, human, self.difficulty, &mut self.rng)
    }
}
