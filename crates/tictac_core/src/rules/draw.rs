//! Draw detection logic for tic-tac-toe.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full.
///
/// A full board is only a draw when the last mover did not win;
/// [`evaluate`](super::evaluate) checks both in the right order.
#[instrument(level = "trace")]
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::check_win;
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!check_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board: Board = "XO.|...|...".parse().unwrap();
        assert!(!check_draw(&board));
    }

    #[test]
    fn test_full_board_without_winner() {
        // X O X / O X X / O X O
        let board: Board = "XOX|OXX|OXO".parse().unwrap();
        assert!(check_draw(&board));
        assert_eq!(check_win(&board, Mark::Human), None);
        assert_eq!(check_win(&board, Mark::Opponent), None);
    }
}
