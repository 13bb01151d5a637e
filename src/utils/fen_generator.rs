use crate::game_state::{board::Board, chess_types::*, game_state::GameState};

/// Placement and side-to-move fields for a game (no castling, en passant or clocks).
pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.turn {
        Color::White => "w",
        Color::Black => "b",
    };
    format!("{} {}", generate_placement(&game_state.board), side_to_move)
}

/// FEN board-placement field, row 0 first.
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8i8 {
        let mut empty_count = 0u8;

        for col in 0..8i8 {
            if let Some(piece) = board.piece_at(Square::new(row, col)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.code());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}
