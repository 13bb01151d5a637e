//! Uniform random-move engine.
//!
//! Collects every legal move of the side to move through the same
//! move-generation contract the rules use and picks one uniformly. This is
//! the computer opponent; it carries no evaluation.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic engine for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    /// Supports `Seed` (u64), which reseeds the generator.
    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if !name.eq_ignore_ascii_case("seed") {
            return Err(ChessErrors::UnknownOption(name.to_owned()));
        }
        let seed = value
            .trim()
            .parse::<u64>()
            .map_err(|_| ChessErrors::InvalidOptionValue {
                name: name.to_owned(),
                value: value.to_owned(),
            })?;
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let legal_moves = self
            .move_generator
            .generate_legal_moves(&game_state.board, game_state.turn);

        let best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        debug!(
            turn = ?game_state.turn,
            candidates = legal_moves.len(),
            ?best_move,
            "random engine picked a move"
        );

        Ok(EngineOutput {
            best_move,
            candidate_count: legal_moves.len(),
        })
    }
}
