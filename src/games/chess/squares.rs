use std::fmt::{Display, Formatter};
use std::str::FromStr;

use derive_more::{Add, Mul, Neg};
use static_assertions::const_assert_eq;

use crate::games::Color;
use crate::general::common::parse_int_from_str;

pub const NUM_ROWS: usize = 8;
pub const NUM_COLUMNS: usize = 8;
pub const NUM_SQUARES: usize = NUM_ROWS * NUM_COLUMNS;

const_assert_eq!(NUM_SQUARES, 64);

/// Board coordinates. Row 0 is black's back rank, row 7 is white's back rank,
/// so the square printed as "e2" (white's king pawn) is row 6, column 4.
/// Values outside the board can be constructed; lookups treat them as empty squares.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        self.row < NUM_ROWS && self.col < NUM_COLUMNS
    }

    /// The only way to derive a neighboring square; returns `None` when the
    /// target would fall off the board.
    pub fn offset(self, delta: Delta) -> Option<Square> {
        let row = self.row as isize + delta.rows;
        let col = self.col as isize + delta.cols;
        if (0..NUM_ROWS as isize).contains(&row) && (0..NUM_COLUMNS as isize).contains(&col) {
            Some(Square::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl FromStr for Square {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let file = s
            .chars()
            .next()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase() as usize - 'a' as usize)
            .ok_or("file (column) must be a valid ascii letter")?;
        let rank: usize = parse_int_from_str(&s[1..], "rank (row)")?;
        if file >= NUM_COLUMNS || !(1..=NUM_ROWS).contains(&rank) {
            return Err(format!("'{s}' lies outside of the board"));
        }
        Ok(Square::new(NUM_ROWS - rank, file))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{0}{1}",
            (self.col + 'a' as usize) as u8 as char,
            NUM_ROWS - self.row
        )
    }
}

/// A row/column offset, scalable along a ray.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Add, Neg, Mul)]
pub struct Delta {
    pub rows: isize,
    pub cols: isize,
}

impl Delta {
    pub const fn new(rows: isize, cols: isize) -> Self {
        Self { rows, cols }
    }

    /// The direction pawns of this color advance in.
    pub fn forward(color: Color) -> Delta {
        match color {
            Color::White => Delta::new(-1, 0),
            Color::Black => Delta::new(1, 0),
        }
    }
}

pub const ORTHOGONALS: [Delta; 4] = [
    Delta::new(0, 1),
    Delta::new(0, -1),
    Delta::new(1, 0),
    Delta::new(-1, 0),
];

pub const DIAGONALS: [Delta; 4] = [
    Delta::new(1, 1),
    Delta::new(1, -1),
    Delta::new(-1, 1),
    Delta::new(-1, -1),
];

pub const KING_STEPS: [Delta; 8] = [
    Delta::new(-1, -1),
    Delta::new(-1, 0),
    Delta::new(-1, 1),
    Delta::new(0, -1),
    Delta::new(0, 1),
    Delta::new(1, -1),
    Delta::new(1, 0),
    Delta::new(1, 1),
];

pub const KNIGHT_JUMPS: [Delta; 8] = [
    Delta::new(-2, -1),
    Delta::new(-2, 1),
    Delta::new(-1, -2),
    Delta::new(-1, 2),
    Delta::new(1, -2),
    Delta::new(1, 2),
    Delta::new(2, -1),
    Delta::new(2, 1),
];
