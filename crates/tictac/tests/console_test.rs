//! Scripted console sessions.

use std::io::Cursor;
use tictac::{Console, FirstPlayer, GameConfig, Tally};
use tictac_core::Difficulty;

fn hard_config() -> GameConfig {
    GameConfig::default()
        .with_difficulty(Some(Difficulty::Hard))
        .with_opponent_delay_ms(0)
        .with_seed(Some(7))
}

fn run_script(config: GameConfig, script: &str) -> (Tally, String) {
    let mut output = Vec::new();
    let tally = Console::new(Cursor::new(script.as_bytes()), &mut output, config)
        .run()
        .unwrap();
    (tally, String::from_utf8(output).unwrap())
}

#[test]
fn test_draw_against_hard_with_bad_input() {
    // O answers 5, 3, 4, 9; the bad lines are rejected before X plays 2.
    let (tally, output) = run_script(hard_config(), "1\nzzz\n10\n1\n2\n7\n6\n8\nn\n");

    assert_eq!(
        tally,
        Tally {
            human: 0,
            opponent: 0,
            draws: 1
        }
    );
    assert!(output.contains("Invalid input: Please enter a number (1-9)."));
    assert!(output.contains("Invalid input: Position must be between 1 and 9."));
    assert!(output.contains("Invalid input: That cell is already taken!"));
    for n in [5, 3, 4, 9] {
        assert!(output.contains(&format!("Computer (O) chooses position {}", n)));
    }
    assert!(output.contains("It's a draw! Well played."));
    assert!(output.contains("Thanks for playing! Goodbye."));
}

#[test]
fn test_difficulty_prompt_retries() {
    let config = GameConfig::default()
        .with_opponent_delay_ms(0)
        .with_seed(Some(1));
    let (tally, output) = run_script(config, "medium\nhard\n");

    assert_eq!(tally, Tally::default());
    assert!(output.contains("Choose difficulty (easy/hard): "));
    assert!(output.contains("Invalid input: Unknown difficulty \"medium\""));
    // Input ended at the first move prompt.
    assert!(output.contains("enter your move (1-9): "));
}

#[test]
fn test_eof_before_difficulty() {
    let (tally, output) = run_script(GameConfig::default(), "");
    assert_eq!(tally, Tally::default());
    assert!(output.contains("Welcome to Terminal Tic Tac Toe"));
    assert!(!output.contains("Player 'X' will go first."));
}

#[test]
fn test_opponent_opens_in_center() {
    let config = hard_config().with_first_player(FirstPlayer::Opponent);
    let (_, output) = run_script(config, "");

    assert!(output.contains("Player 'O' will go first."));
    assert!(output.contains("Computer (O) chooses position 5"));
}

#[test]
fn test_play_again_counts_rounds() {
    let script = "1\n2\n7\n6\n8\ny\n1\n2\n7\n6\n8\nn\n";
    let (tally, output) = run_script(hard_config(), script);

    assert_eq!(tally.draws, 2);
    assert!(output.contains("Starting a new game..."));
    assert!(output.contains("You 0 - 0 Computer (2 drawn)."));
}
