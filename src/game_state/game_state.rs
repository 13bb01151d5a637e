//! Turn-by-turn game state machine.
//!
//! `GameState` is an owned snapshot: board, side to move, lifecycle status,
//! check flags and outcome. Every transition takes `&self` and returns a new
//! value, so the caller (UI or sync layer) holds the single authoritative
//! instance and decides when to replace it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::errors::MoveRejection;
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{is_checkmate, is_stalemate};
use crate::move_generation::legal_move_rules::check_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Created, waiting for a second participant.
    Waiting,
    Playing,
    /// Terminal; no further moves are accepted.
    GameOver,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Checkmate,
    Stalemate,
}

/// Whether each king currently stands in check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckStatus {
    pub white: bool,
    pub black: bool,
}

impl CheckStatus {
    pub fn of(board: &Board) -> Self {
        Self {
            white: is_king_in_check(board, Color::White),
            black: is_king_in_check(board, Color::Black),
        }
    }

    #[inline]
    pub fn for_color(self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub status: GameStatus,
    /// Display only; has no rule consequence.
    pub last_move: Option<Move>,
    pub check_status: CheckStatus,
    pub winner: Option<Color>,
    pub outcome: Option<GameOutcome>,
    /// Half-moves accepted so far.
    pub ply: u16,
    pub rules: RulesConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, White to move, already playing.
    pub fn new_game() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    pub fn with_rules(rules: RulesConfig) -> Self {
        Self::from_board(Board::initial(), Color::White, rules)
    }

    /// Initial position waiting for a second participant; see [`GameState::start`].
    pub fn new_waiting() -> Self {
        Self {
            status: GameStatus::Waiting,
            ..Self::new_game()
        }
    }

    /// Arbitrary position, for setups and tests. A position where `turn` is
    /// already mated (or stalemated, when the rules say so) loads as finished.
    pub fn from_board(board: Board, turn: Color, rules: RulesConfig) -> Self {
        Self {
            board,
            turn,
            status: GameStatus::Playing,
            last_move: None,
            check_status: CheckStatus::of(&board),
            winner: None,
            outcome: None,
            ply: 0,
            rules,
        }
        .settle_outcome()
    }

    /// Waiting -> Playing. Any other status is returned unchanged.
    pub fn start(&self) -> Self {
        let mut next = self.clone();
        if next.status == GameStatus::Waiting {
            next.status = GameStatus::Playing;
        }
        next
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Apply a move, or return an unchanged copy when it is rejected.
    pub fn apply_move(&self, start: Square, end: Square) -> Self {
        self.try_apply_move(start, end)
            .unwrap_or_else(|_| self.clone())
    }

    /// Apply a move and report why it was refused when it is.
    pub fn try_apply_move(&self, start: Square, end: Square) -> Result<Self, MoveRejection> {
        if self.status != GameStatus::Playing {
            debug!(?start, ?end, status = ?self.status, "move rejected: game not in progress");
            return Err(MoveRejection::GameNotInProgress);
        }

        if let Err(rejection) = check_move(&self.board, start, end, self.turn, false) {
            debug!(?start, ?end, turn = ?self.turn, %rejection, "move rejected");
            return Err(rejection);
        }

        let mover = self.turn;
        let mv = Move::new(start, end);
        let board = self.board.with_move_applied(mv);
        let turn = mover.opposite();

        let next = Self {
            board,
            turn,
            status: GameStatus::Playing,
            last_move: Some(mv),
            check_status: CheckStatus::of(&board),
            winner: None,
            outcome: None,
            ply: self.ply.saturating_add(1),
            rules: self.rules,
        };
        trace!(?mv, ?mover, ply = next.ply, "move applied");

        Ok(next.settle_outcome())
    }

    /// Mark the game over when the side to move is mated, or stalemated under
    /// rules that end the game there.
    fn settle_outcome(mut self) -> Self {
        if is_checkmate(&self.board, self.turn) {
            let winner = self.turn.opposite();
            self.status = GameStatus::GameOver;
            self.winner = Some(winner);
            self.outcome = Some(GameOutcome::Checkmate);
            info!(?winner, ply = self.ply, "checkmate");
        } else if self.rules.stalemate_ends_game && is_stalemate(&self.board, self.turn) {
            self.status = GameStatus::GameOver;
            self.outcome = Some(GameOutcome::Stalemate);
            info!(stalemated = ?self.turn, ply = self.ply, "stalemate");
        }
        self
    }
}
