//! Attack detection.
//!
//! Answers "could `attacker_color` capture on this square next ply" using
//! geometry only. Whether the attacking move would expose the attacker's own
//! king is deliberately ignored, so this calls the legality checker with
//! self-check filtering switched off.

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_rules::is_legal_move;

/// True if any piece of `attacker_color` has a pseudo-legal path to `square`.
///
/// Pawns attack one square diagonally forward whether or not that square is
/// occupied. A square holding one of the attacker's own pieces is never
/// attacked, since nothing can capture its own side.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    if !square.is_on_board() {
        return false;
    }
    if board
        .piece_at(square)
        .is_some_and(|occupant| occupant.color == attacker_color)
    {
        return false;
    }

    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| attacks(board, from, piece, square))
}

/// True if `color`'s king stands on an attacked square. A missing king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_square) = board.find_king(color) else {
        return false;
    };
    is_square_attacked(board, king_square, color.opposite())
}

/// Every piece of `attacker_color` that attacks `square`, row-major.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    if !square.is_on_board()
        || board
            .piece_at(square)
            .is_some_and(|occupant| occupant.color == attacker_color)
    {
        return Vec::new();
    }

    board
        .pieces_of(attacker_color)
        .filter(|&(from, piece)| attacks(board, from, piece, square))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

/// Whether `piece` standing on `from` attacks `target`. The caller has already
/// ruled out targets holding the attacker's own pieces.
#[inline]
fn attacks(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks_square(from, piece.color, target),
        _ => is_legal_move(board, from, target, piece.color, true),
    }
}

#[inline]
fn pawn_attacks_square(from: Square, color: Color, target: Square) -> bool {
    target.row - from.row == color.pawn_direction() && (target.col - from.col).abs() == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_placement;

    #[test]
    fn pawn_attacks_empty_diagonals_only() {
        let board = parse_placement("4k3/8/8/8/8/8/4P3/4K3").expect("placement should parse");
        // e2 pawn sits on (6, 4).
        assert!(is_square_attacked(&board, Square::new(5, 3), Color::White));
        assert!(is_square_attacked(&board, Square::new(5, 5), Color::White));
        assert!(!is_square_attacked(&board, Square::new(5, 4), Color::White));
    }

    #[test]
    fn sliders_are_blocked_by_any_piece() {
        let board = parse_placement("r3k3/8/8/8/p7/8/8/4K3").expect("placement should parse");
        // a8 rook looks down the a-file but the a4 pawn blocks it.
        assert!(is_square_attacked(&board, Square::new(3, 0), Color::Black));
        assert!(!is_square_attacked(&board, Square::new(7, 0), Color::Black));
        assert!(is_square_attacked(&board, Square::new(0, 3), Color::Black));
    }

    #[test]
    fn own_pieces_are_not_attacked() {
        let board = parse_placement("4k3/8/8/8/8/8/3P4/3QK3").expect("placement should parse");
        assert!(!is_square_attacked(&board, Square::new(6, 3), Color::White));
    }

    #[test]
    fn check_detection_tolerates_missing_king() {
        let board = parse_placement("8/8/8/8/8/8/8/R7").expect("placement should parse");
        assert!(!is_king_in_check(&board, Color::Black));
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn lists_every_attacker() {
        let board = parse_placement("4k3/8/8/8/1n6/8/2R5/4K3").expect("placement should parse");
        // c2 is hit by the b4 knight only.
        let attackers = attackers_to_square(&board, Square::new(6, 2), Color::Black);
        assert_eq!(attackers, vec![(Square::new(4, 1), PieceKind::Knight)]);

        let on_king = attackers_to_square(&board, Square::new(0, 4), Color::White);
        assert!(on_king.is_empty());
    }

    #[test]
    fn attacker_list_agrees_with_attack_test() {
        let board = parse_placement("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR")
            .expect("placement should parse");
        for color in [Color::White, Color::Black] {
            for square in Square::all() {
                assert_eq!(
                    is_square_attacked(&board, square, color),
                    !attackers_to_square(&board, square, color).is_empty(),
                    "{color:?} on {square:?}"
                );
            }
        }
        // f7 is hit by the c4 bishop and the f3 queen.
        assert_eq!(
            attackers_to_square(&board, Square::new(1, 5), Color::White),
            vec![(Square::new(4, 2), PieceKind::Bishop), (Square::new(5, 5), PieceKind::Queen)]
        );
    }
}
