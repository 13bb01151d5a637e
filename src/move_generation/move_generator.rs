use crate::game_state::{board::Board, chess_types::*};

/// Source of legal moves for a whole side.
///
/// The rule engine's own implementation is
/// [`LegalMoveGenerator`](crate::move_generation::legal_move_generator::LegalMoveGenerator);
/// the trait exists so perft and engines can run against test doubles.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<Move>;
}
