//! Legal move enumeration and terminal-position tests.
//!
//! Candidates come from fixed offset sets (pawn, knight, king) or from
//! walking rays until the edge or the first occupied square (sliders). Every
//! candidate is then filtered through the legality checker, so the generator
//! and the checker cannot disagree. Nothing is cached between calls.

use crate::game_state::chess_rules::{
    BISHOP_DIRECTIONS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_rules::is_legal_move;
use crate::move_generation::move_generator::MoveGenerator;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        all_legal_moves(board, color)
    }
}

/// Every legal move for `piece` standing on `square`.
pub fn legal_moves_for(piece: Piece, square: Square, board: &Board, turn_color: Color) -> Vec<Move> {
    let mut candidates = Vec::<Square>::with_capacity(28);

    match piece.kind {
        PieceKind::Pawn => {
            let direction = piece.color.pawn_direction();
            for (d_row, d_col) in [(direction, 0), (2 * direction, 0), (direction, -1), (direction, 1)] {
                candidates.push(square.offset(d_row, d_col));
            }
        }
        PieceKind::Knight => {
            candidates.extend(KNIGHT_OFFSETS.iter().map(|&(d_row, d_col)| square.offset(d_row, d_col)));
        }
        PieceKind::King => {
            candidates.extend(QUEEN_DIRECTIONS.iter().map(|&(d_row, d_col)| square.offset(d_row, d_col)));
        }
        PieceKind::Rook => walk_rays(board, square, &ROOK_DIRECTIONS, &mut candidates),
        PieceKind::Bishop => walk_rays(board, square, &BISHOP_DIRECTIONS, &mut candidates),
        PieceKind::Queen => walk_rays(board, square, &QUEEN_DIRECTIONS, &mut candidates),
    }

    candidates
        .into_iter()
        .filter(|&end| is_legal_move(board, square, end, turn_color, false))
        .map(|end| Move::new(square, end))
        .collect()
}

/// Union of [`legal_moves_for`] over every piece of `color`, row-major.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(square, piece)| legal_moves_for(piece, square, board, color))
        .collect()
}

/// Short-circuiting form of `!all_legal_moves(..).is_empty()`.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(square, piece)| !legal_moves_for(piece, square, board, color).is_empty())
}

/// `color` is in check and has no legal move. A missing king is never mated.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_king_in_check(board, color) && !has_any_legal_move(board, color)
}

/// `color` is not in check and has no legal move.
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_king_in_check(board, color) && !has_any_legal_move(board, color)
}

/// Push ray squares up to the edge; an occupied square ends the ray and is
/// included so the checker can accept an enemy capture or refuse a friendly one.
fn walk_rays(board: &Board, from: Square, directions: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while cursor.is_on_board() {
            out.push(cursor);
            if !board.is_empty_at(cursor) {
                break;
            }
            cursor = cursor.offset(d_row, d_col);
        }
    }
}
