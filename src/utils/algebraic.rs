//! Square conversions for algebraic coordinates.
//!
//! Row 0 is rank 8 and row 7 is rank 1, so `e2` is row 6, column 4.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Move, Square};

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(Square::new(7 - (rank - b'1') as i8, (file - b'a') as i8))
}

/// Convert an on-board square to algebraic notation; `None` when off the board.
#[inline]
pub fn square_to_algebraic(square: Square) -> Option<String> {
    if !square.is_on_board() {
        return None;
    }
    let file_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'1' + (7 - square.row) as u8);
    Some(format!("{file_char}{rank_char}"))
}

/// Parse coordinate notation such as "e2e4".
pub fn algebraic_to_move(text: &str) -> ChessResult<Move> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }
    Ok(Move::new(
        algebraic_to_square(&text[0..2])?,
        algebraic_to_square(&text[2..4])?,
    ))
}

/// Coordinate notation for a move, e.g. "e2e4".
pub fn move_to_algebraic(mv: Move) -> Option<String> {
    Some(format!(
        "{}{}",
        square_to_algebraic(mv.start)?,
        square_to_algebraic(mv.end)?
    ))
}
