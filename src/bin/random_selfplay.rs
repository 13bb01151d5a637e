//! Random-vs-random self-play runner.
//!
//! Run with:
//! `cargo run --release --bin random_selfplay -- --seed 1234 --max-plies 300`
//! `RUST_LOG=debug cargo run --bin random_selfplay` to see every engine pick.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use two_player_chess::engines::engine_random::RandomEngine;
use two_player_chess::engines::engine_trait::Engine;
use two_player_chess::game_state::chess_rules::RulesConfig;
use two_player_chess::utils::algebraic::move_to_algebraic;
use two_player_chess::utils::board_snapshot::serialize_board;
use two_player_chess::utils::render_game_state::render_game_state;
use two_player_chess::{ChessResult, Color, GameState};

#[derive(Parser, Debug)]
#[command(about = "Play a game between two uniform-random engines")]
struct Args {
    /// Seed for White's engine; Black uses seed + 1.
    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Stop after this many half-moves if the game has not ended.
    #[arg(long, default_value_t = 400)]
    max_plies: u16,

    /// Keep stalemated games running (they then stop at the ply limit).
    #[arg(long)]
    checkmate_only: bool,

    /// Print only the final position.
    #[arg(long)]
    quiet: bool,
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let rules = if args.checkmate_only {
        RulesConfig::checkmate_only()
    } else {
        RulesConfig::default()
    };

    let mut white = RandomEngine::with_seed(args.seed);
    let mut black = RandomEngine::with_seed(args.seed.wrapping_add(1));
    let mut state = GameState::with_rules(rules);

    while !state.is_terminal() && state.ply < args.max_plies {
        let engine: &mut dyn Engine = match state.turn {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let Some(mv) = engine.choose_move(&state)?.best_move else {
            info!(turn = ?state.turn, "no legal moves left");
            break;
        };

        state = state.try_apply_move(mv.start, mv.end)?;
        if !args.quiet {
            println!(
                "{}. {}",
                state.ply,
                move_to_algebraic(mv).unwrap_or_else(|| "????".to_owned())
            );
        }
    }

    println!("{}", render_game_state(&state));
    println!("snapshot: {}", serialize_board(&state.board)?);
    info!(ply = state.ply, status = ?state.status, winner = ?state.winner, "self-play finished");
    Ok(())
}
