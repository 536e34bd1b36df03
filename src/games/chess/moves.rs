use std::fmt::{Display, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::games::chess::pieces::{ChessPiece, PieceKind};
use crate::games::chess::squares::Square;
use crate::games::chess::Chessboard;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl ChessMove {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl Display for ChessMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}{1}", self.from, self.to)
    }
}

/// What actually happened when a move was executed, for announcements.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MoveRecord {
    pub mov: ChessMove,
    pub piece: ChessPiece,
    pub captured: Option<ChessPiece>,
}

impl Chessboard {
    pub fn make_move<R: Rng>(self, mov: ChessMove, rng: &mut R) -> Self {
        self.make_move_recorded(mov, rng).0
    }

    /// Executes `mov` on a copy of the board. A move without a piece on its
    /// origin square, or one leaving the board, returns the board unchanged
    /// with no record. Legality is not checked here.
    pub fn make_move_recorded<R: Rng>(mut self, mov: ChessMove, rng: &mut R) -> (Self, Option<MoveRecord>) {
        let Some(piece) = self.piece_on(mov.from) else {
            return (self, None);
        };
        if !mov.to.is_on_board() {
            return (self, None);
        }
        let captured = self.piece_on(mov.to);
        self.remove_piece(mov.from);
        self.place_piece(mov.to, piece);
        // a bishop capture flings the bishop onto the square of a random
        // friendly pawn and puts that pawn where the capture happened; the
        // pawn pool is collected after the bishop has landed
        if piece.kind == PieceKind::Bishop && captured.is_some() {
            let pawns = self
                .colored_squares(piece.color)
                .filter(|&(_, p)| p.kind == PieceKind::Pawn)
                .map(|(square, _)| square)
                .collect::<Vec<_>>();
            if let Some(&pawn_square) = pawns.choose(rng) {
                self.place_piece(mov.to, ChessPiece::new(PieceKind::Pawn, piece.color));
                self.place_piece(pawn_square, piece);
            }
        }
        (self, Some(MoveRecord { mov, piece, captured }))
    }
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use crate::games::chess::moves::ChessMove;
    use crate::games::chess::pieces::{ChessPiece, PieceKind};
    use crate::games::chess::squares::Square;
    use crate::games::chess::Chessboard;
    use crate::games::Color;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn simple_move_test() {
        let board = Chessboard::startpos();
        let (after, record) =
            board.make_move_recorded(ChessMove::new(sq(6, 4), sq(5, 3)), &mut thread_rng());
        let record = record.unwrap();
        assert_eq!(record.piece, ChessPiece::new(PieceKind::Pawn, Color::White));
        assert_eq!(record.captured, None);
        assert_eq!(after.piece_on(sq(6, 4)), None);
        assert_eq!(
            after.piece_on(sq(5, 3)),
            Some(ChessPiece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(after.occupied_squares().count(), 32);
    }

    #[test]
    fn capture_records_victim_test() {
        let mut board = Chessboard::empty();
        board.place_piece(sq(4, 4), ChessPiece::new(PieceKind::Pawn, Color::White));
        board.place_piece(sq(3, 4), ChessPiece::new(PieceKind::Rook, Color::Black));
        let (after, record) =
            board.make_move_recorded(ChessMove::new(sq(4, 4), sq(3, 4)), &mut thread_rng());
        assert_eq!(
            record.unwrap().captured,
            Some(ChessPiece::new(PieceKind::Rook, Color::Black))
        );
        assert_eq!(after.occupied_squares().count(), 1);
    }

    #[test]
    fn empty_origin_is_a_noop_test() {
        let board = Chessboard::startpos();
        let (after, record) =
            board.make_move_recorded(ChessMove::new(sq(4, 4), sq(3, 4)), &mut thread_rng());
        assert_eq!(after, board);
        assert_eq!(record, None);
    }

    #[test]
    fn move_and_inverse_restore_board_test() {
        // a quiet move followed by its inverse restores the exact position
        let board = Chessboard::startpos();
        let there = board.make_move(ChessMove::new(sq(6, 4), sq(5, 3)), &mut thread_rng());
        let back = there.make_move(ChessMove::new(sq(5, 3), sq(6, 4)), &mut thread_rng());
        assert_eq!(back, board);

        // after a capture and the inverse relocation, only the victim is
        // missing
        let mut board = Chessboard::empty();
        board.place_piece(sq(4, 4), ChessPiece::new(PieceKind::Rook, Color::White));
        board.place_piece(sq(2, 4), ChessPiece::new(PieceKind::Pawn, Color::Black));
        let there = board.make_move(ChessMove::new(sq(4, 4), sq(2, 4)), &mut thread_rng());
        let back = there.make_move(ChessMove::new(sq(2, 4), sq(4, 4)), &mut thread_rng());
        assert_eq!(back.occupied_squares().count(), board.occupied_squares().count() - 1);
        assert_eq!(
            back.piece_on(sq(4, 4)),
            Some(ChessPiece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(back.piece_on(sq(2, 4)), None);
    }

    #[test]
    fn bishop_swap_test() {
        let mut board = Chessboard::empty();
        board.place_piece(sq(2, 2), ChessPiece::new(PieceKind::Bishop, Color::White));
        board.place_piece(sq(4, 4), ChessPiece::new(PieceKind::Knight, Color::Black));
        board.place_piece(sq(6, 0), ChessPiece::new(PieceKind::Pawn, Color::White));
        let (after, record) =
            board.make_move_recorded(ChessMove::new(sq(2, 2), sq(4, 4)), &mut thread_rng());
        // the only friendly pawn trades places with the bishop
        assert_eq!(
            after.piece_on(sq(6, 0)),
            Some(ChessPiece::new(PieceKind::Bishop, Color::White))
        );
        assert_eq!(
            after.piece_on(sq(4, 4)),
            Some(ChessPiece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(after.piece_on(sq(2, 2)), None);
        assert_eq!(
            record.unwrap().captured,
            Some(ChessPiece::new(PieceKind::Knight, Color::Black))
        );
        assert_eq!(after.occupied_squares().count(), 2);
    }

    #[test]
    fn bishop_swap_without_pawns_test() {
        let mut board = Chessboard::empty();
        board.place_piece(sq(2, 2), ChessPiece::new(PieceKind::Bishop, Color::White));
        board.place_piece(sq(4, 4), ChessPiece::new(PieceKind::Pawn, Color::Black));
        let (after, _) =
            board.make_move_recorded(ChessMove::new(sq(2, 2), sq(4, 4)), &mut thread_rng());
        // no friendly pawn to swap with, the bishop stays where it captured
        assert_eq!(
            after.piece_on(sq(4, 4)),
            Some(ChessPiece::new(PieceKind::Bishop, Color::White))
        );
        assert_eq!(after.occupied_squares().count(), 1);
    }

    #[test]
    fn bishop_quiet_move_does_not_swap_test() {
        let mut board = Chessboard::empty();
        board.place_piece(sq(2, 2), ChessPiece::new(PieceKind::Bishop, Color::White));
        board.place_piece(sq(6, 0), ChessPiece::new(PieceKind::Pawn, Color::White));
        let (after, _) =
            board.make_move_recorded(ChessMove::new(sq(2, 2), sq(4, 4)), &mut thread_rng());
        assert_eq!(
            after.piece_on(sq(4, 4)),
            Some(ChessPiece::new(PieceKind::Bishop, Color::White))
        );
        assert_eq!(
            after.piece_on(sq(6, 0)),
            Some(ChessPiece::new(PieceKind::Pawn, Color::White))
        );
    }
}
