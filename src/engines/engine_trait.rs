//! Engine abstraction for automated opponents.
//!
//! Engines sit outside the game state machine: they look at a snapshot,
//! propose a move, and the caller submits it through `GameState::apply_move`
//! like any human move.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{GameState, Move};

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Size of the pool the move was picked from.
    pub candidate_count: usize,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn set_option(&mut self, _name: &str, _value: &str) -> ChessResult<()> {
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}
