//! Tic-tac-toe game logic for a human playing against a rule-based opponent.
//!
//! # Architecture
//!
//! - **Board**: 9-cell grid, placement and query operations
//! - **Rules**: win detection against the fixed line catalog, draw detection,
//!   and the combined [`evaluate`] verdict
//! - **Opponent**: the computer's move policy, uniform random ([`Difficulty::Easy`])
//!   or an ordered rule cascade ([`Difficulty::Hard`])
//! - **Round**: turn controller that ties the three together for a front end
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use tictac_core::{Difficulty, GameOutcome, Mark, Round, choose_move};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut round = Round::new(Mark::Human);
//! round.play(1).unwrap();
//!
//! let reply = choose_move(round.board(), Mark::Opponent, Mark::Human, Difficulty::Hard, &mut rng)
//!     .expect("board has empty cells");
//! assert_eq!(reply.number(), 5);
//! assert_eq!(round.play(reply.number()).unwrap(), GameOutcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod opponent;
mod position;
mod round;
mod rules;
mod types;

pub use opponent::{
    Decision, Difficulty, OpponentPolicy, Rule, UnknownDifficulty, choose_move, decide,
};
pub use position::Position;
pub use round::{Move, MoveError, Round};
pub use rules::{
    GameOutcome, LineKind, WINNING_LINES, WinningLine, check_draw, check_win, evaluate,
};
pub use types::{Board, BoardParseError, Mark, Square};
