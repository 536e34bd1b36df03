use std::fmt::Write;

use colored::{Color as TermColor, Colorize};
use rand::Rng;

use crate::games::chess::pieces::ChessPiece;
use crate::games::chess::squares::{Square, NUM_COLUMNS, NUM_ROWS};
use crate::games::chess::GameStatus;
use crate::games::Color::White;
use crate::play::Session;

fn color(
    piece: Option<ChessPiece>,
    square: Square,
    selected: Option<Square>,
    valid_moves: &[Square],
) -> String {
    let white_bg_col = TermColor::White;
    let black_bg_col = TermColor::Black;
    let white_piece_col = TermColor::Green;
    let black_piece_col = TermColor::Cyan;
    let selected_bg_col = TermColor::Yellow;
    let move_bg_col = TermColor::Red;

    let bg_color = if selected == Some(square) {
        selected_bg_col
    } else if valid_moves.contains(&square) {
        move_bg_col
    } else if (square.row + square.col) % 2 == 0 {
        white_bg_col
    } else {
        black_bg_col
    };

    match piece {
        None => "  ".to_string().color(TermColor::Black),
        Some(piece) if piece.color == White => {
            (piece.to_utf8_char().to_string() + " ").color(white_piece_col)
        }
        Some(piece) => (piece.to_utf8_char().to_string() + " ").color(black_piece_col),
    }
    .on_color(bg_color)
    .to_string()
}

/// Prints the board with the selection highlighted in yellow and the selected
/// piece's moves in red, followed by a status line.
pub fn show<R: Rng>(session: &Session<R>) {
    let board = session.board();
    for row in 0..NUM_ROWS {
        let mut line = " ".to_string();
        for col in 0..NUM_COLUMNS {
            let square = Square::new(row, col);
            let _ = write!(
                &mut line,
                "{0}",
                color(
                    board.piece_on(square),
                    square,
                    session.selected_square(),
                    session.valid_moves(),
                )
            );
        }
        let _ = write!(&mut line, " {0}", NUM_ROWS - row);
        println!("{line}");
    }
    let mut files = " ".to_string();
    for col in 0..NUM_COLUMNS {
        let _ = write!(&mut files, "{0} ", (b'A' + col as u8) as char);
    }
    println!("{files}");
    match session.status() {
        GameStatus::Playing => println!("{0} to move", session.current_player()),
        GameStatus::Check => println!("{0} to move, in check", session.current_player()),
        GameStatus::Checkmate => println!(
            "Checkmate, {0} wins",
            session.current_player().other()
        ),
        GameStatus::Stalemate => println!("Stalemate"),
    }
}
