//! Application state and logic.

use super::input::{cell_at, digit_position, move_cursor};
use crate::config::GameConfig;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tictac_core::{Difficulty, GameOutcome, Mark, OpponentPolicy, Position, Round};
use tracing::{debug, error, info, instrument};

/// Main application state.
///
/// Time is passed in explicitly so the opponent's deferred move can be
/// driven without a real clock.
#[derive(Debug)]
pub struct App {
    round: Round,
    policy: OpponentPolicy,
    cursor: Position,
    status: String,
    opponent_delay: Duration,
    opponent_due: Option<Instant>,
    cell_areas: [Rect; 9],
    should_quit: bool,
}

impl App {
    /// Creates a new application and schedules the opponent if it opens.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig, now: Instant) -> Self {
        let difficulty = config.difficulty_or_default();
        let policy = match config.seed() {
            Some(seed) => OpponentPolicy::seeded(difficulty, *seed),
            None => OpponentPolicy::new(difficulty),
        };
        let mut app = Self {
            round: Round::new(config.first_player().mark()),
            policy,
            cursor: Position::CENTER,
            status: String::new(),
            opponent_delay: Duration::from_millis(*config.opponent_delay_ms()),
            opponent_due: None,
            cell_areas: [Rect::default(); 9],
            should_quit: false,
        };
        app.start_turn(now);
        app
    }

    /// Gets the current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Gets the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Gets the opponent difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.policy.difficulty()
    }

    /// Whether the opponent's move is scheduled.
    pub fn opponent_pending(&self) -> bool {
        self.opponent_due.is_some()
    }

    /// Whether the event loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where each cell was drawn, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Time left before the pending opponent move, if any.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.opponent_due.map(|due| due.saturating_duration_since(now))
    }

    /// Handles a key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(now),
            KeyCode::Char('d') => self.toggle_difficulty(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place_human(self.cursor, now),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.place_human(pos, now);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    /// Handles a left click at a terminal coordinate.
    #[instrument(skip(self, now))]
    pub fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        if let Some(pos) = cell_at(&self.cell_areas, column, row) {
            self.cursor = pos;
            self.place_human(pos, now);
        }
    }

    /// Plays the opponent's move once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.opponent_due.is_some_and(|due| now >= due) {
            self.opponent_due = None;
            self.play_opponent(now);
        }
    }

    /// Starts a new round; a pending opponent move is cancelled.
    #[instrument(skip(self, now))]
    pub fn restart(&mut self, now: Instant) {
        debug!("Restarting round");
        self.round.reset();
        self.opponent_due = None;
        self.cursor = Position::CENTER;
        self.start_turn(now);
    }

    fn toggle_difficulty(&mut self) {
        let next = match self.policy.difficulty() {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        };
        info!(%next, "Difficulty changed");
        self.policy.set_difficulty(next);
        if !self.round.is_over() && !self.opponent_pending() {
            self.status = format!("Difficulty: {}. Your turn ({})", next, Mark::Human);
        }
    }

    fn place_human(&mut self, pos: Position, now: Instant) {
        if self.round.is_over() || self.round.to_move() != Mark::Human {
            return;
        }
        match self.round.play_at(pos) {
            Ok(_) => self.start_turn(now),
            Err(e) => {
                debug!(error = %e, "Human move refused");
                self.status = format!("{}. Your turn ({})", e, Mark::Human);
            }
        }
    }

    fn play_opponent(&mut self, now: Instant) {
        if self.round.is_over() || self.round.to_move() != Mark::Opponent {
            return;
        }
        let board = *self.round.board();
        let Some(pos) = self.policy.choose_move(&board, Mark::Opponent, Mark::Human) else {
            error!("Opponent failed to find a valid move");
            self.status = "Opponent has no move. Press 'r' to restart or 'q' to quit.".to_string();
            return;
        };
        match self.round.play_at(pos) {
            Ok(_) => self.start_turn(now),
            Err(e) => {
                error!(error = %e, "Opponent move refused");
                self.status = format!("Opponent move failed: {}", e);
            }
        }
    }

    /// Updates the status line and schedules the opponent when it is up.
    fn start_turn(&mut self, now: Instant) {
        self.status = match self.round.outcome() {
            GameOutcome::Win {
                mark: Mark::Human,
                ..
            } => "You win! Press 'r' to restart or 'q' to quit.".to_string(),
            GameOutcome::Win {
                mark: Mark::Opponent,
                ..
            } => "Opponent wins! Press 'r' to restart or 'q' to quit.".to_string(),
            GameOutcome::Draw => "It's a draw! Press 'r' to restart or 'q' to quit.".to_string(),
            GameOutcome::InProgress => match self.round.to_move() {
                Mark::Human => format!("Your turn ({})", Mark::Human),
                Mark::Opponent => {
                    self.opponent_due = Some(now + self.opponent_delay);
                    "Opponent is thinking...".to_string()
                }
            },
        };
    }
}
