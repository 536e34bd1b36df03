use std::fmt::{Display, Formatter};

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::games::Color;

pub const UNICODE_WHITE_PAWN: char = '♙';
pub const UNICODE_WHITE_KNIGHT: char = '♘';
pub const UNICODE_WHITE_BISHOP: char = '♗';
pub const UNICODE_WHITE_ROOK: char = '♖';
pub const UNICODE_WHITE_QUEEN: char = '♕';
pub const UNICODE_WHITE_KING: char = '♔';

pub const UNICODE_BLACK_PAWN: char = '\u{265F}'; // the '♟︎' character seems to give some editors trouble
pub const UNICODE_BLACK_KNIGHT: char = '♞';
pub const UNICODE_BLACK_BISHOP: char = '♝';
pub const UNICODE_BLACK_ROOK: char = '♜';
pub const UNICODE_BLACK_QUEEN: char = '♛';
pub const UNICODE_BLACK_KING: char = '♚';

#[derive(Copy, Clone, Eq, PartialEq, Debug, EnumIter, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece is a plain value; boards store one value per square, so two squares
/// can never share a piece instance.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ChessPiece {
    pub kind: PieceKind,
    pub color: Color,
}

impl ChessPiece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub fn to_ascii_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn to_utf8_char(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => UNICODE_WHITE_PAWN,
            (Color::White, PieceKind::Knight) => UNICODE_WHITE_KNIGHT,
            (Color::White, PieceKind::Bishop) => UNICODE_WHITE_BISHOP,
            (Color::White, PieceKind::Rook) => UNICODE_WHITE_ROOK,
            (Color::White, PieceKind::Queen) => UNICODE_WHITE_QUEEN,
            (Color::White, PieceKind::King) => UNICODE_WHITE_KING,
            (Color::Black, PieceKind::Pawn) => UNICODE_BLACK_PAWN,
            (Color::Black, PieceKind::Knight) => UNICODE_BLACK_KNIGHT,
            (Color::Black, PieceKind::Bishop) => UNICODE_BLACK_BISHOP,
            (Color::Black, PieceKind::Rook) => UNICODE_BLACK_ROOK,
            (Color::Black, PieceKind::Queen) => UNICODE_BLACK_QUEEN,
            (Color::Black, PieceKind::King) => UNICODE_BLACK_KING,
        }
    }

    pub fn from_ascii_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Self::new(kind, color))
    }

    pub fn pieces() -> impl Iterator<Item = ChessPiece> {
        Color::iter()
            .flat_map(|color| PieceKind::iter().map(move |kind| ChessPiece::new(kind, color)))
    }
}

impl Display for ChessPiece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_utf8_char())
    }
}
