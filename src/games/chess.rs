use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::iproduct;
use rand::Rng;
use strum_macros::EnumIter;

use crate::games::chess::pieces::{ChessPiece, PieceKind};
use crate::games::chess::squares::{Square, NUM_COLUMNS, NUM_ROWS};
use crate::games::Color;

pub mod movegen;
pub mod moves;
pub mod pieces;
pub mod squares;

const BACK_RANK: [PieceKind; NUM_COLUMNS] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The result of asking "how is the side to move doing?". Recomputed from the
/// board after every move, never stored incrementally.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, EnumIter, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Chessboard {
    squares: [[Option<ChessPiece>; NUM_COLUMNS]; NUM_ROWS],
}

impl Default for Chessboard {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Chessboard {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; NUM_COLUMNS]; NUM_ROWS],
        }
    }

    /// Black occupies rows 0 and 1, white rows 6 and 7, so row indices grow
    /// towards white's side of the board.
    pub fn startpos() -> Self {
        let mut board = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(ChessPiece::new(kind, Color::Black));
            board.squares[1][col] = Some(ChessPiece::new(PieceKind::Pawn, Color::Black));
            board.squares[NUM_ROWS - 2][col] = Some(ChessPiece::new(PieceKind::Pawn, Color::White));
            board.squares[NUM_ROWS - 1][col] = Some(ChessPiece::new(kind, Color::White));
        }
        board
    }

    /// Returns `None` both for empty squares and for coordinates off the board.
    pub fn piece_on(&self, square: Square) -> Option<ChessPiece> {
        self.squares
            .get(square.row)
            .and_then(|row| row.get(square.col))
            .copied()
            .flatten()
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_on(square).is_some()
    }

    pub fn place_piece(&mut self, square: Square, piece: ChessPiece) {
        debug_assert!(square.is_on_board());
        self.squares[square.row][square.col] = Some(piece);
    }

    pub fn try_place_piece(&mut self, square: Square, piece: ChessPiece) -> Result<(), String> {
        if !square.is_on_board() {
            // don't print the square in algebraic notation, that's only
            // defined for on-board coordinates
            return Err(format!(
                "There is no square with row {0} and column {1} on the board",
                square.row, square.col
            ));
        }
        if self.is_occupied(square) {
            return Err(format!("The square {square} is already occupied"));
        }
        self.place_piece(square, piece);
        Ok(())
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<ChessPiece> {
        debug_assert!(square.is_on_board());
        self.squares[square.row][square.col].take()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        iproduct!(0..NUM_ROWS, 0..NUM_COLUMNS)
            .map(|(row, col)| Square::new(row, col))
            .find(|&square| {
                self.piece_on(square) == Some(ChessPiece::new(PieceKind::King, color))
            })
    }

    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, ChessPiece)> + '_ {
        iproduct!(0..NUM_ROWS, 0..NUM_COLUMNS).filter_map(|(row, col)| {
            let square = Square::new(row, col);
            self.piece_on(square).map(|piece| (square, piece))
        })
    }

    pub fn colored_squares(&self, color: Color) -> impl Iterator<Item = (Square, ChessPiece)> + '_ {
        self.occupied_squares()
            .filter(move |(_, piece)| piece.color == color)
    }

    /// Parses the piece placement field of a FEN, like
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`. The first rank in the
    /// string is row 0, black's back rank.
    pub fn from_piece_placement(placement: &str) -> Result<Self, String> {
        let mut board = Self::empty();
        let ranks = placement.split('/').collect::<Vec<_>>();
        if ranks.len() != NUM_ROWS {
            return Err(format!(
                "Expected {NUM_ROWS} ranks separated by '/', got {0}",
                ranks.len()
            ));
        }
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank.chars() {
                if let Some(digit) = c.to_digit(10) {
                    col += digit as usize;
                } else {
                    let piece = ChessPiece::from_ascii_char(c)
                        .ok_or_else(|| format!("Invalid piece character '{c}'"))?;
                    if col >= NUM_COLUMNS {
                        return Err(format!("Rank '{rank}' contains more than {NUM_COLUMNS} squares"));
                    }
                    board.squares[row][col] = Some(piece);
                    col += 1;
                }
            }
            if col != NUM_COLUMNS {
                return Err(format!(
                    "Rank '{rank}' describes {col} squares instead of {NUM_COLUMNS}"
                ));
            }
        }
        Ok(board)
    }

    fn diagram(&self, piece_to_char: impl Fn(ChessPiece) -> char) -> String {
        let mut res = String::new();
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLUMNS {
                let c = match self.squares[row][col] {
                    Some(piece) => piece_to_char(piece),
                    None => '.',
                };
                res.push(c);
                if col != NUM_COLUMNS - 1 {
                    res.push(' ');
                }
            }
            res.push('\n');
        }
        res
    }

    pub fn as_ascii_diagram(&self) -> String {
        self.diagram(ChessPiece::to_ascii_char)
    }

    pub fn as_unicode_diagram(&self) -> String {
        self.diagram(ChessPiece::to_utf8_char)
    }

    /// The status of `color`, assuming it is that player's turn.
    pub fn status_for<R: Rng>(&self, color: Color, rng: &mut R) -> GameStatus {
        let in_check = self.is_in_check(color, rng);
        let can_move = self.has_any_legal_move(color, rng);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Playing,
        }
    }
}

impl Display for Chessboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_unicode_diagram())
    }
}
