//! Text console front end.

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::Duration;
use tictac_core::{Board, Difficulty, GameOutcome, Mark, OpponentPolicy, Position, Round, Square};
use tracing::{error, info, instrument, warn};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// The round reached a win or a draw.
    Finished(GameOutcome),
    /// The opponent found no legal move.
    Aborted,
}

/// Results across a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Rounds the human won.
    pub human: u32,
    /// Rounds the computer won.
    pub opponent: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: GameOutcome) {
        match outcome.winner() {
            Some(Mark::Human) => self.human += 1,
            Some(Mark::Opponent) => self.opponent += 1,
            None if outcome == GameOutcome::Draw => self.draws += 1,
            None => {}
        }
    }
}

/// Console game driven by line input.
///
/// Generic over its streams so a scripted reader can stand in for stdin.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: GameConfig,
    policy: OpponentPolicy,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console session.
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        let difficulty = config.difficulty_or_default();
        let policy = match config.seed() {
            Some(seed) => OpponentPolicy::seeded(difficulty, *seed),
            None => OpponentPolicy::new(difficulty),
        };
        Self {
            input,
            output,
            config,
            policy,
            clear_screen: false,
        }
    }

    /// Clears the terminal before each board redraw.
    pub fn clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Plays rounds until the player declines a rematch or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Tally> {
        self.welcome()?;

        let configured = *self.config.difficulty();
        let difficulty = match configured {
            Some(difficulty) => difficulty,
            None => match self.ask_difficulty()? {
                Some(difficulty) => difficulty,
                None => return Ok(Tally::default()),
            },
        };
        self.policy.set_difficulty(difficulty);
        info!(%difficulty, "Session started");

        let mut tally = Tally::default();
        loop {
            match self.play_round()? {
                Some(RoundResult::Finished(outcome)) => tally.record(outcome),
                Some(RoundResult::Aborted) => {}
                None => break,
            }

            let again = self.prompt("Play again? (y/n): ")?;
            if !matches!(again.as_deref().map(str::trim), Some("y" | "Y")) {
                break;
            }
            writeln!(self.output, "\nStarting a new game...\n")?;
        }

        writeln!(
            self.output,
            "\nYou {} - {} Computer ({} drawn). Thanks for playing! Goodbye.",
            tally.human, tally.opponent, tally.draws
        )?;
        self.output.flush()?;
        Ok(tally)
    }

    /// Plays one round. Returns `None` if input ended mid-round.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<Option<RoundResult>> {
        let mut round = Round::new(self.config.first_player().mark());
        writeln!(self.output, "\nPlayer '{}' will go first.", round.first())?;

        while !round.is_over() {
            self.draw_board(round.board())?;

            let pos = match round.to_move() {
                Mark::Human => match self.read_position(round.board())? {
                    Some(pos) => pos,
                    None => return Ok(None),
                },
                Mark::Opponent => match self.opponent_move(round.board())? {
                    Some(pos) => pos,
                    None => {
                        error!("Opponent returned no move, ending round");
                        writeln!(self.output, "Critical opponent error - ending round.")?;
                        return Ok(Some(RoundResult::Aborted));
                    }
                },
            };

            if let Err(e) = round.play_at(pos) {
                warn!(error = %e, "Placement refused");
                writeln!(self.output, "Error placing mark: {}", e)?;
            }
        }

        self.draw_board(round.board())?;
        let outcome = round.outcome();
        self.game_over_message(outcome)?;
        Ok(Some(RoundResult::Finished(outcome)))
    }

    fn welcome(&mut self) -> Result<()> {
        writeln!(self.output, "***********************************")?;
        writeln!(self.output, "*                                 *")?;
        writeln!(self.output, "*  Welcome to Terminal Tic Tac Toe *")?;
        writeln!(self.output, "*        (Human vs Computer)      *")?;
        writeln!(self.output, "*                                 *")?;
        writeln!(self.output, "***********************************")?;
        writeln!(
            self.output,
            "\nYou are Player '{}'. The computer is Player '{}'.",
            Mark::Human,
            Mark::Opponent
        )?;
        writeln!(self.output, "Enter a number (1-9) to place your mark.")?;
        Ok(())
    }

    fn ask_difficulty(&mut self) -> Result<Option<Difficulty>> {
        loop {
            let Some(line) = self.prompt("Choose difficulty (easy/hard): ")? else {
                return Ok(None);
            };
            match line.parse::<Difficulty>() {
                Ok(difficulty) => return Ok(Some(difficulty)),
                Err(e) => writeln!(self.output, "Invalid input: {}", e)?,
            }
        }
    }

    fn read_position(&mut self, board: &Board) -> Result<Option<Position>> {
        loop {
            let prompt = format!("Your turn ({}), enter your move (1-9): ", Mark::Human);
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(None);
            };

            match Position::from_label_or_number(&line) {
                Some(pos) if board.is_empty(pos) => return Ok(Some(pos)),
                Some(_) => writeln!(self.output, "Invalid input: That cell is already taken!")?,
                None if line.trim().parse::<i64>().is_ok() => {
                    writeln!(self.output, "Invalid input: Position must be between 1 and 9.")?
                }
                None => writeln!(self.output, "Invalid input: Please enter a number (1-9).")?,
            }
        }
    }

    fn opponent_move(&mut self, board: &Board) -> Result<Option<Position>> {
        write!(self.output, "Computer ({}) is thinking...", Mark::Opponent)?;
        self.output.flush()?;
        std::thread::sleep(self.thinking_time());
        writeln!(self.output, " done.")?;

        let pos = self.policy.choose_move(board, Mark::Opponent, Mark::Human);
        if let Some(pos) = pos {
            writeln!(
                self.output,
                "Computer ({}) chooses position {}",
                Mark::Opponent,
                pos.number()
            )?;
        }
        Ok(pos)
    }

    /// Configured delay with 0.5x-1.2x jitter.
    fn thinking_time(&self) -> Duration {
        let base = Duration::from_millis(*self.config.opponent_delay_ms());
        if base.is_zero() {
            return Duration::ZERO;
        }
        base.mul_f64(rand::rng().random_range(0.5..=1.2))
    }

    fn draw_board(&mut self, board: &Board) -> Result<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))
                .context("Failed to clear screen")?;
        }
        write!(self.output, "\n{}", render_board(board))?;
        Ok(())
    }

    fn game_over_message(&mut self, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win {
                mark: Mark::Human,
                line,
            } => writeln!(
                self.output,
                "Congratulations! You ({}) beat the computer with {}!",
                Mark::Human,
                line
            )?,
            GameOutcome::Win {
                mark: Mark::Opponent,
                line,
            } => writeln!(
                self.output,
                "Oh no! The computer ({}) won this time with {}.",
                Mark::Opponent,
                line
            )?,
            GameOutcome::Draw => writeln!(self.output, "It's a draw! Well played.")?,
            GameOutcome::InProgress => {}
        }
        writeln!(self.output, "\n***********************************")?;
        writeln!(self.output, "*            Game Over            *")?;
        writeln!(self.output, "***********************************\n")?;
        Ok(())
    }

    /// Writes `text` and reads one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Board with marks, followed by the position guide.
pub fn render_board(board: &Board) -> String {
    let rule = "-------------------\n";
    let mut out = String::from("     TIC TAC TOE (Human vs Computer)\n");
    out.push_str(rule);
    for row in Position::ALL.chunks(3) {
        let cells: Vec<char> = row
            .iter()
            .map(|pos| match board.get(*pos) {
                Square::Empty => ' ',
                Square::Occupied(mark) => mark.glyph(),
            })
            .collect();
        out.push_str(&format!("|  {}  |  {}  |  {}  |\n", cells[0], cells[1], cells[2]));
        out.push_str(rule);
    }

    out.push_str("\n   (Positions:)\n");
    out.push_str(rule);
    for row in Position::ALL.chunks(3) {
        out.push_str(&format!(
            "|  {}  |  {}  |  {}  |\n",
            row[0].number(),
            row[1].number(),
            row[2].number()
        ));
        out.push_str(rule);
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board() {
        let board: Board = "X..|.O.|...".parse().unwrap();
        let text = render_board(&board);
        assert!(text.contains("|  X  |     |     |"));
        assert!(text.contains("|     |  O  |     |"));
        assert!(text.contains("|  7  |  8  |  9  |"));
    }

    fn console_with_delay(delay_ms: u64) -> Console<&'static [u8], Vec<u8>> {
        let config = GameConfig::default().with_opponent_delay_ms(delay_ms);
        Console::new(&b""[..], Vec::new(), config)
    }

    #[test]
    fn test_thinking_time_jitter_bounds() {
        let console = console_with_delay(1000);
        for _ in 0..100 {
            let t = console.thinking_time();
            assert!(t >= Duration::from_millis(500), "{:?}", t);
            assert!(t <= Duration::from_millis(1200), "{:?}", t);
        }
        assert_eq!(console_with_delay(0).thinking_time(), Duration::ZERO);
    }

    #[test]
    fn test_thinking_time_huge_delay() {
        let base = Duration::from_millis(u64::MAX);
        let t = console_with_delay(u64::MAX).thinking_time();
        assert!(t >= base / 3);
        assert!(t <= base.mul_f64(1.3));
    }

    #[test]
    fn test_tally_records() {
        let mut tally = Tally::default();
        tally.record(GameOutcome::Draw);
        tally.record(GameOutcome::Win {
            mark: Mark::Opponent,
            line: tictac_core::WINNING_LINES[0],
        });
        assert_eq!(
            tally,
            Tally {
                human: 0,
                opponent: 1,
                draws: 1
            }
        );
    }
}
