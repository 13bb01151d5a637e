//! Crate root module declarations for the two-player chess rule engine.
//!
//! The engine decides which moves are legal, applies them to immutable board
//! snapshots, detects check, checkmate and stalemate, and drives the
//! turn-by-turn game state. Rendering, matchmaking and syncing snapshots
//! between participants belong to the caller; the `utils::board_snapshot`
//! codec is the hand-off point for the latter.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_rules;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_snapshot;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}

pub use errors::{ChessErrors, ChessResult, MoveRejection};
pub use game_state::chess_types::{Board, Color, GameState, Move, Piece, PieceKind, Square};
pub use game_state::game_state::{CheckStatus, GameOutcome, GameStatus};
pub use move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
pub use move_generation::legal_move_generator::{
    all_legal_moves, is_checkmate, is_stalemate, legal_moves_for,
};
pub use move_generation::legal_move_rules::is_legal_move;

/// Standard starting position, White to move, already playing.
pub fn create_initial_state() -> GameState {
    GameState::new_game()
}
