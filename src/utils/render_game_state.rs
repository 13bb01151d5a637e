//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the demo
//! binary. Row 0 (rank 8) is printed first.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameOutcome, GameStatus};

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8i8 {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..8i8 {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board followed by a one-line status summary.
pub fn render_game_state(game_state: &GameState) -> String {
    let status = match (game_state.status, game_state.outcome, game_state.winner) {
        (GameStatus::Waiting, _, _) => "waiting for opponent".to_owned(),
        (GameStatus::GameOver, Some(GameOutcome::Checkmate), Some(winner)) => {
            format!("checkmate, {} wins", color_name(winner))
        }
        (GameStatus::GameOver, Some(GameOutcome::Stalemate), _) => "stalemate, draw".to_owned(),
        (GameStatus::GameOver, _, _) => "game over".to_owned(),
        (GameStatus::Playing, _, _) if game_state.check_status.for_color(game_state.turn) => {
            format!("{} to move, in check", color_name(game_state.turn))
        }
        (GameStatus::Playing, _, _) => format!("{} to move", color_name(game_state.turn)),
    };

    format!("{}\n{}", render_board(&game_state.board), status)
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rank_eight_first() {
        let text = render_board(&Board::initial());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn status_line_reports_turn() {
        let text = render_game_state(&GameState::new_game());
        assert!(text.ends_with("white to move"));
    }
}
