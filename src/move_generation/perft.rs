//! Perft: exhaustive move-path counting to a fixed depth.
//!
//! Used to validate move generation against published node counts and as
//! the workload for the criterion benchmark. The rule set has no castling,
//! no en passant and queen-only promotion, so counts match the standard
//! tables only while those features cannot occur (the initial position up
//! to depth 4).

use std::sync::Arc;
use std::thread;

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, board: &Board, side_to_move: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board, side_to_move) {
        perft_recurse(generator, board, side_to_move, mv, depth, 1, &mut total);
    }
    total
}

/// Same counts as [`perft`], one worker thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    side_to_move: Color,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let root_moves = generator.generate_legal_moves(board, side_to_move);
    let handles: Vec<_> = root_moves
        .into_iter()
        .map(|mv| {
            let generator_ref = Arc::clone(&generator);
            let board = *board;
            thread::spawn(move || {
                let mut local = PerftCounts::default();
                perft_recurse(generator_ref.as_ref(), &board, side_to_move, mv, depth, 1, &mut local);
                local
            })
        })
        .collect();

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok(local) => total.merge(local),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
    total
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    mover: Color,
    mv: Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let next = board.with_move_applied(mv);
    let defender = mover.opposite();

    if current_depth == search_depth {
        counts.nodes += 1;

        if board.piece_at(mv.end).is_some() {
            counts.captures += 1;
        }
        if board.piece_at(mv.start).map(|piece| piece.kind) == Some(PieceKind::Pawn)
            && mv.end.row == mover.promotion_row()
        {
            counts.promotions += 1;
        }
        if is_king_in_check(&next, defender) {
            counts.checks += 1;
            if !has_any_legal_move(&next, defender) {
                counts.checkmates += 1;
            }
        }
        return;
    }

    for child in generator.generate_legal_moves(&next, defender) {
        perft_recurse(generator, &next, defender, child, search_depth, current_depth + 1, counts);
    }
}
