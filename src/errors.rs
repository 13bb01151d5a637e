//! Errors used throughout the chess engine.
//!
//! Rule queries (legality, attack detection, checkmate) are total and never
//! fail; they answer with `bool`/`Option`. `ChessErrors` covers the edges of
//! the crate where outside data comes in: snapshot and FEN decoding,
//! coordinate parsing, and engine configuration. `MoveRejection` names why a
//! move request was refused so callers can log it, even though the
//! state-machine contract is to drop the request silently.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Why `GameState::try_apply_move` refused a move.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("game is not in progress")]
    GameNotInProgress,

    #[error("square ({}, {}) is off the board", .0.row, .0.col)]
    OffBoard(Square),

    #[error("no piece on start square ({}, {})", .0.row, .0.col)]
    EmptyStartSquare(Square),

    #[error("it is {turn:?}'s turn but the piece is {piece:?}")]
    WrongColor { turn: Color, piece: Color },

    /// Geometry, blocking, or friendly-capture rules forbid the move.
    #[error("the piece cannot move that way")]
    IllegalForPiece,

    #[error("the move leaves the mover's king in check")]
    LeavesKingInCheck,
}

/// Unified error type for decoding and configuration failures.
#[derive(Error, Debug)]
pub enum ChessErrors {
    /// Snapshot text was not a JSON grid of strings.
    #[error("invalid board snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),

    #[error("board snapshot must be 8x8, got {rows} rows (a row had {cols} columns)")]
    InvalidSnapshotDimensions { rows: usize, cols: usize },

    /// A snapshot cell held something other than "" or one piece code.
    #[error("invalid piece code {0:?}")]
    InvalidPieceCode(String),

    #[error("invalid algebraic square {0:?}")]
    InvalidAlgebraicString(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("unknown engine option {0:?}")]
    UnknownOption(String),

    #[error("invalid value {value:?} for engine option {name:?}")]
    InvalidOptionValue { name: String, value: String },

    #[error("move rejected: {0}")]
    MoveRejected(#[from] MoveRejection),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
