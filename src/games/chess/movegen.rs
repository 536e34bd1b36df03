use itertools::iproduct;
use rand::Rng;

use crate::games::chess::moves::ChessMove;
use crate::games::chess::pieces::{ChessPiece, PieceKind};
use crate::games::chess::squares::{Delta, Square, DIAGONALS, KING_STEPS, KNIGHT_JUMPS, NUM_COLUMNS, NUM_ROWS, ORTHOGONALS};
use crate::games::chess::Chessboard;
use crate::games::{sup_distance, Color};

impl Chessboard {
    /// All squares the piece on `from` could move to under the movement rules
    /// alone, before accounting for check. The caller supplies the piece so
    /// that attack queries don't need to re-read the board.
    pub fn candidate_moves<R: Rng>(
        &self,
        from: Square,
        piece: ChessPiece,
        rng: &mut R,
    ) -> Vec<Square> {
        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(from, piece.color),
            PieceKind::Knight => self.knight_moves(from, piece.color, rng),
            PieceKind::Bishop => self.bishop_moves(from, piece.color),
            PieceKind::Rook => self.rook_moves(from, piece.color),
            PieceKind::Queen => self.queen_moves(from, piece.color),
            PieceKind::King => self.king_moves(from, piece.color),
        }
    }

    /// Pawns step diagonally forward onto empty squares and capture the enemy
    /// piece directly in front of them. So the diagonal is never an attack and
    /// the forward square never a quiet move.
    fn pawn_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let forward = Delta::forward(color);
        let mut res = Vec::new();
        for dc in [-1, 1] {
            if let Some(to) = from.offset(forward + Delta::new(0, dc)) {
                if !self.is_occupied(to) {
                    res.push(to);
                }
            }
        }
        if let Some(to) = from.offset(forward) {
            if let Some(target) = self.piece_on(to) {
                if target.color != color {
                    res.push(to);
                }
            }
        }
        res
    }

    /// Rooks slide orthogonally but may only stop on squares an even number of
    /// steps away. The ray still ends at the first occupied square, so an
    /// enemy piece at an odd distance blocks without being capturable.
    fn rook_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut res = Vec::new();
        for dir in ORTHOGONALS {
            for step in 1..NUM_ROWS {
                let Some(to) = from.offset(dir * step as isize) else {
                    break;
                };
                match self.piece_on(to) {
                    Some(target) => {
                        if step % 2 == 0 && target.color != color {
                            res.push(to);
                        }
                        break;
                    }
                    None => {
                        if step % 2 == 0 {
                            res.push(to);
                        }
                    }
                }
            }
        }
        res
    }

    /// Each call rolls one of three movement moods, then keeps only targets in
    /// the 3x3 neighborhood of `from`. True knight jumps all land outside that
    /// neighborhood, so the third mood yields no moves at all.
    fn knight_moves<R: Rng>(&self, from: Square, color: Color, rng: &mut R) -> Vec<Square> {
        let candidates = match rng.gen_range(0..3) {
            0 => self.ray_moves(from, color, &ORTHOGONALS, 2),
            1 => self.ray_moves(from, color, &DIAGONALS, 2),
            _ => self.leap_moves(from, color, &KNIGHT_JUMPS),
        };
        candidates
            .into_iter()
            .filter(|&to| sup_distance(from, to) <= 1)
            .collect()
    }

    fn bishop_moves(&self, from: Square, color: Color) -> Vec<Square> {
        self.ray_moves(from, color, &DIAGONALS, NUM_ROWS - 1)
    }

    /// A friendly pawn directly ahead turns the queen into a vaulter: her only
    /// candidate is the square two ahead. Otherwise she slides as usual.
    fn queen_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let forward = Delta::forward(color);
        if let Some(ahead) = from.offset(forward) {
            if self.piece_on(ahead) == Some(ChessPiece::new(PieceKind::Pawn, color)) {
                return from
                    .offset(forward * 2)
                    .filter(|&to| self.piece_on(to).map_or(true, |p| p.color != color))
                    .into_iter()
                    .collect();
            }
        }
        let mut res = self.ray_moves(from, color, &ORTHOGONALS, NUM_ROWS - 1);
        res.extend(self.ray_moves(from, color, &DIAGONALS, NUM_ROWS - 1));
        res
    }

    fn king_moves(&self, from: Square, color: Color) -> Vec<Square> {
        self.leap_moves(from, color, &KING_STEPS)
    }

    fn ray_moves(
        &self,
        from: Square,
        color: Color,
        dirs: &[Delta],
        max_steps: usize,
    ) -> Vec<Square> {
        let mut res = Vec::new();
        for &dir in dirs {
            for step in 1..=max_steps {
                let Some(to) = from.offset(dir * step as isize) else {
                    break;
                };
                match self.piece_on(to) {
                    Some(target) => {
                        if target.color != color {
                            res.push(to);
                        }
                        break;
                    }
                    None => res.push(to),
                }
            }
        }
        res
    }

    fn leap_moves(&self, from: Square, color: Color, steps: &[Delta]) -> Vec<Square> {
        steps
            .iter()
            .filter_map(|&step| from.offset(step))
            .filter(|&to| self.piece_on(to).map_or(true, |p| p.color != color))
            .collect()
    }

    /// Whether any piece of `by` has `target` among its candidate moves. This
    /// deliberately uses raw candidates instead of legal moves, since legality
    /// itself is defined through check and would recurse back into this.
    pub fn attacks_square<R: Rng>(&self, target: Square, by: Color, rng: &mut R) -> bool {
        iproduct!(0..NUM_ROWS, 0..NUM_COLUMNS).any(|(row, col)| {
            let from = Square::new(row, col);
            match self.piece_on(from) {
                Some(piece) if piece.color == by => {
                    self.candidate_moves(from, piece, rng).contains(&target)
                }
                _ => false,
            }
        })
    }

    /// A board without a king for `color` reports no check rather than failing.
    pub fn is_in_check<R: Rng>(&self, color: Color, rng: &mut R) -> bool {
        match self.king_square(color) {
            Some(king) => self.attacks_square(king, color.other(), rng),
            None => false,
        }
    }

    /// Candidate moves that don't leave the mover's own king in check. Each
    /// candidate is vetted by fully executing it, including the bishop's pawn
    /// swap, since the swap can change which squares are attacked afterwards.
    pub fn legal_moves<R: Rng>(&self, from: Square, rng: &mut R) -> Vec<Square> {
        let Some(piece) = self.piece_on(from) else {
            return Vec::new();
        };
        self.candidate_moves(from, piece, rng)
            .into_iter()
            .filter(|&to| {
                let after = self.make_move(ChessMove::new(from, to), rng);
                !after.is_in_check(piece.color, rng)
            })
            .collect()
    }

    pub fn has_any_legal_move<R: Rng>(&self, color: Color, rng: &mut R) -> bool {
        self.colored_squares(color)
            .collect::<Vec<_>>()
            .into_iter()
            .any(|(from, _)| !self.legal_moves(from, rng).is_empty())
    }

    pub fn is_checkmate<R: Rng>(&self, color: Color, rng: &mut R) -> bool {
        self.is_in_check(color, rng) && !self.has_any_legal_move(color, rng)
    }

    pub fn is_stalemate<R: Rng>(&self, color: Color, rng: &mut R) -> bool {
        !self.is_in_check(color, rng) && !self.has_any_legal_move(color, rng)
    }
}
