//! FEN-to-Board parser.
//!
//! Reads the board-placement field of Forsyth-Edwards Notation, optionally
//! followed by the side-to-move field. Castling, en-passant and clock fields
//! are accepted and ignored since the rule set has no use for them. The
//! first FEN rank (rank 8) becomes row 0.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::{board::Board, chess_types::*, game_state::GameState};

/// Parse a FEN record (or just its placement field) into a playing game.
///
/// A missing side-to-move field means White.
pub fn parse_fen(fen: &str, rules: RulesConfig) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let placement = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFen("missing board layout".to_owned()))?;
    let board = parse_placement(placement)?;

    let turn = match parts.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => {
            return Err(ChessErrors::InvalidFen(format!(
                "invalid side-to-move field: {other}"
            )))
        }
    };

    Ok(GameState::from_board(board, turn, rules))
}

/// Parse the board-placement field alone.
pub fn parse_placement(placement: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_code(ch).ok_or_else(|| {
                ChessErrors::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;
            if col >= 8 {
                return Err(ChessErrors::InvalidFen(format!(
                    "rank {} has too many files",
                    8 - row
                )));
            }

            board.set(Square::new(row as i8, col as i8), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                8 - row
            )));
        }
    }

    Ok(board)
}
