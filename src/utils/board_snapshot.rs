//! Board snapshot codec for the persistence/sync layer.
//!
//! The wire form is a compact JSON array of 8 rows, each an array of 8
//! one-character strings: uppercase for White, lowercase for Black, `""`
//! for an empty square. Row 0 is Black's back rank.

use tracing::warn;

use crate::errors::ChessResult;
use crate::game_state::board::Board;

/// Encode a board as its JSON grid.
pub fn serialize_board(board: &Board) -> ChessResult<String> {
    Ok(serde_json::to_string(board)?)
}

/// Decode a JSON grid, rejecting wrong dimensions and unknown codes.
pub fn deserialize_board(snapshot: &str) -> ChessResult<Board> {
    Ok(serde_json::from_str(snapshot)?)
}

/// Decode a snapshot, falling back to the initial board when it is malformed.
///
/// A corrupt remote snapshot must not take down a live session.
pub fn board_or_initial(snapshot: &str) -> Board {
    deserialize_board(snapshot).unwrap_or_else(|error| {
        warn!(%error, "malformed board snapshot, substituting the initial board");
        Board::initial()
    })
}
