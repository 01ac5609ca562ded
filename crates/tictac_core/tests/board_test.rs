//! Tests for the board model and outcome evaluator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tictac_core::{
    Board, GameOutcome, LineKind, Mark, Position, Square, check_draw, check_win, evaluate,
};

/// Fills a board with random legal-looking placements (marks alternate).
fn random_board(rng: &mut StdRng) -> Board {
    let mut board = Board::new();
    let mut mark = Mark::Human;
    let placements = rng.random_range(0..=9);
    for _ in 0..placements {
        let empty = board.empty_cells();
        let index = empty[rng.random_range(0..empty.len())];
        assert!(board.place_mark(index + 1, mark));
        mark = mark.opponent();
    }
    board
}

#[test]
fn test_place_then_query_every_position() {
    for position in 1..=9 {
        for mark in [Mark::Human, Mark::Opponent] {
            let mut board = Board::new();
            assert!(board.is_cell_empty(position));
            assert!(board.place_mark(position, mark));
            assert!(!board.is_cell_empty(position));
            assert_eq!(board.squares()[position - 1], Square::Occupied(mark));
        }
    }
}

#[test]
fn test_second_placement_is_rejected() {
    for position in 1..=9 {
        let mut board = Board::new();
        assert!(board.place_mark(position, Mark::Human));
        let after_first = board;
        assert!(!board.place_mark(position, Mark::Opponent));
        assert!(!board.place_mark(position, Mark::Human));
        assert_eq!(board, after_first);
    }
}

#[test]
fn test_empty_cells_count_and_order() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let board = random_board(&mut rng);
        let empty = board.empty_cells();
        let occupied = board.count(Mark::Human) + board.count(Mark::Opponent);
        assert_eq!(empty.len(), 9 - occupied);
        assert!(empty.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(board.is_full(), empty.is_empty());
    }
}

#[test]
fn test_check_win_matches_line_definition() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let board = random_board(&mut rng);
        for mark in [Mark::Human, Mark::Opponent] {
            let expected = tictac_core::WINNING_LINES.iter().any(|line| {
                line.cells()
                    .iter()
                    .all(|pos| board.get(*pos) == Square::Occupied(mark))
            });
            assert_eq!(check_win(&board, mark).is_some(), expected);
        }
    }
}

#[test]
fn test_top_row_reports_row_zero() {
    let board: Board = "XXX......".parse().unwrap();
    let line = check_win(&board, Mark::Human).unwrap();
    assert_eq!(line.kind(), LineKind::Row);
    assert_eq!(line.index(), 0);
    assert_eq!(line.cells(), [Position::TopLeft, Position::TopCenter, Position::TopRight]);
}

#[test]
fn test_draw_detection() {
    assert!(!check_draw(&Board::new()));

    let full: Board = "XOX|XOO|OXX".parse().unwrap();
    assert!(check_draw(&full));
    assert_eq!(evaluate(&full, Mark::Human), GameOutcome::Draw);
}
