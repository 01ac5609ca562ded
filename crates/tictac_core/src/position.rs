//! Cell addressing for the 3x3 board.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell on the board.
///
/// Cells are numbered row-major. Internally they are addressed by a
/// 0-based index (0-8); players see a 1-based display number (1-9).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0, number 1)
    TopLeft,
    /// Top-center (index 1, number 2)
    TopCenter,
    /// Top-right (index 2, number 3)
    TopRight,
    /// Middle-left (index 3, number 4)
    MiddleLeft,
    /// Center (index 4, number 5)
    Center,
    /// Middle-right (index 5, number 6)
    MiddleRight,
    /// Bottom-left (index 6, number 7)
    BottomLeft,
    /// Bottom-center (index 7, number 8)
    BottomCenter,
    /// Bottom-right (index 8, number 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The center cell.
    pub const CENTER: Position = Position::Center;

    /// The four corners, ascending.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// The four edge midpoints, ascending.
    pub const SIDES: [Position; 4] = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// Converts position to board index (0-8).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts position to its display number (1-9).
    pub const fn number(self) -> usize {
        self.index() + 1
    }

    /// Creates position from board index (0-8).
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Creates position from display number (1-9).
    pub const fn from_number(number: usize) -> Option<Self> {
        match number {
            1..=9 => Self::from_index(number - 1),
            _ => None,
        }
    }

    /// Row of this cell (0-2, top to bottom).
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this cell (0-2, left to right).
    pub const fn column(self) -> usize {
        self.index() % 3
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parse from display number (1-9) or label.
    ///
    /// Labels match case-insensitively, and a unique fragment is enough
    /// ("center" matches only [`Position::Center`] because it is tried as an
    /// exact label first).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_number(num);
        }
        if s.is_empty() {
            return None;
        }

        let s_lower = s.to_lowercase();
        if let Some(exact) = Self::iter().find(|pos| pos.label().to_lowercase() == s_lower) {
            return Some(exact);
        }

        let mut matches = Self::iter().filter(|pos| pos.label().to_lowercase().contains(&s_lower));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_index_agree() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(pos.number(), i + 1);
            assert_eq!(Position::from_index(i), Some(*pos));
            assert_eq!(Position::from_number(i + 1), Some(*pos));
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::from_number(0), None);
        assert_eq!(Position::from_number(10), None);
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!((Position::TopLeft.row(), Position::TopLeft.column()), (0, 0));
        assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.column()), (1, 2));
        assert_eq!((Position::BottomCenter.row(), Position::BottomCenter.column()), (2, 1));
    }

    #[test]
    fn test_parse_number_and_label() {
        assert_eq!(Position::from_label_or_number("5"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number(" 9 "), Some(Position::BottomRight));
        assert_eq!(Position::from_label_or_number("0"), None);
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("TOP-LEFT"), Some(Position::TopLeft));
        assert_eq!(Position::from_label_or_number("bottom-r"), Some(Position::BottomRight));
        // "top" names three cells
        assert_eq!(Position::from_label_or_number("top"), None);
        assert_eq!(Position::from_label_or_number(""), None);
    }

    #[test]
    fn test_corners_and_sides_partition_the_ring() {
        let mut ring: Vec<_> = Position::CORNERS.iter().chain(&Position::SIDES).copied().collect();
        ring.sort();
        let expected: Vec<_> = Position::ALL
            .iter()
            .copied()
            .filter(|p| *p != Position::CENTER)
            .collect();
        assert_eq!(ring, expected);
    }
}
