//! Move legality checking.
//!
//! A move is legal when both squares are on the board, the start square
//! holds a piece of the side to move, the destination does not hold a piece
//! of the same color, the piece's geometry allows it, and the resulting
//! position does not leave the mover's king attacked.
//!
//! The self-check filter consults attack detection, and attack detection
//! calls back in here with `ignore_self_check = true`. That flag is what
//! keeps the recursion one level deep.

use crate::errors::MoveRejection;
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_checks::is_square_attacked;

/// True if `start -> end` is a legal move for `turn_color`.
///
/// With `ignore_self_check` the color-matches-turn test and the
/// king-safety simulation are both skipped, which yields pseudo-legal
/// (geometry-only) answers for attack detection.
#[inline]
pub fn is_legal_move(
    board: &Board,
    start: Square,
    end: Square,
    turn_color: Color,
    ignore_self_check: bool,
) -> bool {
    check_move(board, start, end, turn_color, ignore_self_check).is_ok()
}

/// Same decision as [`is_legal_move`], reporting the first rule that failed.
pub fn check_move(
    board: &Board,
    start: Square,
    end: Square,
    turn_color: Color,
    ignore_self_check: bool,
) -> Result<(), MoveRejection> {
    if !start.is_on_board() {
        return Err(MoveRejection::OffBoard(start));
    }
    if !end.is_on_board() {
        return Err(MoveRejection::OffBoard(end));
    }

    let piece = board
        .piece_at(start)
        .ok_or(MoveRejection::EmptyStartSquare(start))?;

    if !ignore_self_check && piece.color != turn_color {
        return Err(MoveRejection::WrongColor {
            turn: turn_color,
            piece: piece.color,
        });
    }

    let target = board.piece_at(end);
    if target.is_some_and(|occupant| occupant.color == piece.color) {
        return Err(MoveRejection::IllegalForPiece);
    }

    if !is_pseudo_legal(board, start, end, piece, target.is_some()) {
        return Err(MoveRejection::IllegalForPiece);
    }

    if !ignore_self_check && leaves_king_attacked(board, Move::new(start, end), piece.color) {
        return Err(MoveRejection::LeavesKingInCheck);
    }

    Ok(())
}

/// Geometry and path-clearance rules, blind to check.
fn is_pseudo_legal(board: &Board, start: Square, end: Square, piece: Piece, is_capture: bool) -> bool {
    let d_row = end.row - start.row;
    let d_col = end.col - start.col;

    match piece.kind {
        PieceKind::Pawn => is_pawn_move(board, start, d_row, d_col, piece.color, is_capture),
        PieceKind::Rook => (d_row == 0 || d_col == 0) && is_path_clear(board, start, end),
        PieceKind::Bishop => d_row.abs() == d_col.abs() && is_path_clear(board, start, end),
        PieceKind::Queen => {
            (d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs())
                && is_path_clear(board, start, end)
        }
        PieceKind::Knight => matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1)),
        PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
    }
}

fn is_pawn_move(
    board: &Board,
    start: Square,
    d_row: i8,
    d_col: i8,
    color: Color,
    is_capture: bool,
) -> bool {
    let direction = color.pawn_direction();

    if d_col == 0 && !is_capture {
        if d_row == direction {
            return true;
        }
        return d_row == 2 * direction
            && start.row == color.pawn_home_row()
            && board.is_empty_at(start.offset(direction, 0));
    }

    // Diagonal steps only ever capture; there is no en passant.
    d_col.abs() == 1 && d_row == direction && is_capture
}

/// Every square strictly between `start` and `end` is empty.
///
/// Callers guarantee the squares share a rank, file, or diagonal.
fn is_path_clear(board: &Board, start: Square, end: Square) -> bool {
    let step_row = (end.row - start.row).signum();
    let step_col = (end.col - start.col).signum();

    let mut cursor = start.offset(step_row, step_col);
    while cursor != end {
        if !board.is_empty_at(cursor) {
            return false;
        }
        cursor = cursor.offset(step_row, step_col);
    }
    true
}

/// Simulate on a fresh copy and test the mover's king. No king means no check.
fn leaves_king_attacked(board: &Board, mv: Move, mover: Color) -> bool {
    let next = board.with_move_applied(mv);
    match next.find_king(mover) {
        Some(king_square) => is_square_attacked(&next, king_square, mover.opposite()),
        None => false,
    }
}
