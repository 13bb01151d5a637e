//! Canonical chess-rule constants and rule toggles.
//!
//! Stores the standard starting layout and the small set of switches that
//! change how terminal positions are judged.

use serde::{Deserialize, Serialize};

/// Standard starting layout as a FEN board-placement field (row 0 first).
pub const STARTING_POSITION_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Knight jumps as `(d_row, d_col)`.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Orthogonal rays (rook lines).
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal rays (bishop lines).
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight rays; also the king's step set.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Rule switches carried with each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// End the game as a draw when the side to move has no legal move and is
    /// not in check. When off, such a position stays `Playing` forever.
    pub stalemate_ends_game: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            stalemate_ends_game: true,
        }
    }
}

impl RulesConfig {
    /// Checkmate is the only terminal condition.
    pub const fn checkmate_only() -> Self {
        Self {
            stalemate_ends_game: false,
        }
    }
}
