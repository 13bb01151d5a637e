use std::sync::Arc;

use two_player_chess::engines::engine_random::RandomEngine;
use two_player_chess::engines::engine_trait::Engine;
use two_player_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use two_player_chess::move_generation::perft::{perft_multi_threaded, PerftCounts};
use two_player_chess::utils::board_snapshot::{deserialize_board, serialize_board};
use two_player_chess::{
    all_legal_moves, create_initial_state, is_checkmate, is_king_in_check, is_legal_move,
    legal_moves_for, Board, Color, GameState, Square,
};

/// Positions reached by a seeded random game, starting position included.
fn random_game(seed: u64, max_plies: u16) -> Vec<GameState> {
    let mut engine = RandomEngine::with_seed(seed);
    let mut state = create_initial_state();
    let mut history = vec![state.clone()];

    while !state.is_terminal() && state.ply < max_plies {
        let Some(mv) = engine
            .choose_move(&state)
            .expect("random engine should run")
            .best_move
        else {
            break;
        };
        state = state
            .try_apply_move(mv.start, mv.end)
            .expect("engine moves are legal");
        history.push(state.clone());
    }
    history
}

#[test]
fn generator_and_checker_agree() {
    for seed in [1, 2, 3] {
        for state in random_game(seed, 80) {
            for mv in all_legal_moves(&state.board, state.turn) {
                assert!(is_legal_move(&state.board, mv.start, mv.end, state.turn, false));
            }
        }
    }
}

#[test]
fn no_generated_move_leaves_own_king_in_check() {
    for seed in [11, 12] {
        for state in random_game(seed, 80) {
            for mv in all_legal_moves(&state.board, state.turn) {
                let next = state.board.with_move_applied(mv);
                assert!(!is_king_in_check(&next, state.turn));
            }
        }
    }
}

#[test]
fn checker_accepts_nothing_the_generator_missed() {
    for state in random_game(21, 40) {
        let generated = all_legal_moves(&state.board, state.turn);
        for (start, _) in state.board.pieces_of(state.turn) {
            for end in Square::all() {
                if is_legal_move(&state.board, start, end, state.turn, false) {
                    assert!(
                        generated.iter().any(|mv| mv.start == start && mv.end == end),
                        "{start:?} -> {end:?} accepted but not generated"
                    );
                }
            }
        }
    }
}

#[test]
fn checkmate_means_check_and_no_moves() {
    for seed in [31, 32, 33, 34] {
        for state in random_game(seed, 200) {
            let mated = is_checkmate(&state.board, state.turn);
            let expected = is_king_in_check(&state.board, state.turn)
                && state
                    .board
                    .pieces_of(state.turn)
                    .all(|(square, piece)| legal_moves_for(piece, square, &state.board, state.turn).is_empty());
            assert_eq!(mated, expected);
            if mated {
                assert!(state.is_terminal());
                assert_eq!(state.winner, Some(state.turn.opposite()));
            }
        }
    }
}

#[test]
fn snapshots_round_trip_through_random_play() {
    for state in random_game(41, 60) {
        let encoded = serialize_board(&state.board).expect("board should serialize");
        let decoded = deserialize_board(&encoded).expect("snapshot should load");
        assert_eq!(decoded, state.board);
        assert_eq!(serialize_board(&decoded).expect("board should serialize"), encoded);
    }
}

#[test]
fn game_state_survives_json_persistence() {
    let state = random_game(51, 30).pop().expect("at least the initial state");
    let json = serde_json::to_string(&state).expect("state should serialize");
    let restored: GameState = serde_json::from_str(&json).expect("state should deserialize");
    assert_eq!(restored, state);
}

#[test]
fn startpos_perft_depth_four_matches_published_counts() {
    let counts = perft_multi_threaded(Arc::new(LegalMoveGenerator), &Board::initial(), Color::White, 4);
    assert_eq!(
        counts,
        PerftCounts {
            nodes: 197_281,
            captures: 1_576,
            promotions: 0,
            checks: 469,
            checkmates: 8,
        }
    );
}
