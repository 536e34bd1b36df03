use std::fmt;
use std::fmt::{Display, Formatter};

use strum_macros::EnumIter;

use crate::games::chess::squares::Square;

pub mod chess;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, EnumIter)]
pub enum Color {
    #[default]
    White = 0,
    Black = 1,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Computes the supremum norm of a - b, i.e. the number of king steps between the squares.
pub fn sup_distance(a: Square, b: Square) -> usize {
    a.row.abs_diff(b.row).max(a.col.abs_diff(b.col))
}

#[cfg(test)]
mod tests {
    use crate::games::chess::squares::Square;
    use crate::games::{sup_distance, Color};

    #[test]
    fn color_test() {
        assert_eq!(Color::White.other(), Color::Black);
        assert_eq!(Color::Black.other(), Color::White);
        assert_eq!(Color::default(), Color::White);
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn sup_distance_test() {
        assert_eq!(sup_distance(Square::new(0, 0), Square::new(0, 0)), 0);
        assert_eq!(sup_distance(Square::new(3, 3), Square::new(4, 2)), 1);
        assert_eq!(sup_distance(Square::new(3, 3), Square::new(1, 4)), 2);
        assert_eq!(sup_distance(Square::new(7, 0), Square::new(0, 7)), 7);
    }
}
