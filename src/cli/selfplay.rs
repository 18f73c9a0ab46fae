//! Batch engine-vs-opponent games for validation and benchmarking
//!
//! Against a second engine every game should end in a tie; against a random
//! mover the engine should win or tie but never lose.

use anyhow::Result;
use clap::{Args, ValueEnum};
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::Serialize;

use crate::board::{Outcome, Player};
use crate::cli::output;
use crate::engine::Engine;
use crate::error::Error;
use crate::game::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    /// A second exhaustive-search engine
    Optimal,
    /// A uniformly random legal mover
    Random,
}

#[derive(Args, Debug)]
pub struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    pub games: usize,

    /// Opponent for the engine
    #[arg(long, value_enum, default_value = "random")]
    pub opponent: Opponent,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the summary as JSON instead of the human-readable table
    #[arg(long)]
    pub json: bool,
}

/// Aggregate results of a self-play batch
#[derive(Debug, Default, Serialize)]
pub struct SelfplaySummary {
    pub games: usize,
    pub engine_wins: usize,
    pub opponent_wins: usize,
    pub ties: usize,
    /// Total evaluator invocations across every engine move in the batch
    pub iterations: u64,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or_else(rand::random));
    let pb = output::create_game_progress(args.games as u64);
    let mut summary = SelfplaySummary {
        games: args.games,
        ..Default::default()
    };

    for game_index in 0..args.games {
        // Alternate which side the engine opens with
        let computer = if game_index % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        let outcome = play_one(computer, args.opponent, &mut rng, &mut summary)?;

        match outcome {
            Outcome::Win(winner) if winner == computer => summary.engine_wins += 1,
            Outcome::Win(_) => summary.opponent_wins += 1,
            _ => summary.ties += 1,
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&args, &summary);
    }

    Ok(())
}

fn play_one(
    computer: Player,
    opponent: Opponent,
    rng: &mut StdRng,
    summary: &mut SelfplaySummary,
) -> Result<Outcome> {
    let engine = Engine::new(computer);
    let mut game = Game::new();

    loop {
        let position = if game.to_move() == computer {
            let report = engine.choose_move(game.board())?;
            summary.iterations += report.iterations;
            report.position
        } else {
            match opponent {
                Opponent::Optimal => {
                    let reply = Engine::new(computer.opponent());
                    let report = reply.choose_move(game.board())?;
                    summary.iterations += report.iterations;
                    report.position
                }
                Opponent::Random => game
                    .board()
                    .empty_positions()
                    .choose(rng)
                    .copied()
                    .ok_or(Error::NoMovesAvailable)?,
            }
        };

        let outcome = game.play(position)?;
        if outcome.is_terminal() {
            return Ok(outcome);
        }
    }
}

fn print_summary(args: &SelfplayArgs, summary: &SelfplaySummary) {
    output::print_section("Self-play results");
    output::print_kv("games", &output::format_number(summary.games));
    output::print_kv(
        "opponent",
        match args.opponent {
            Opponent::Optimal => "optimal",
            Opponent::Random => "random",
        },
    );
    output::print_kv("engine wins", &output::format_number(summary.engine_wins));
    output::print_kv(
        "opponent wins",
        &output::format_number(summary.opponent_wins),
    );
    output::print_kv("ties", &output::format_number(summary.ties));
    output::print_kv(
        "search iterations",
        &output::format_number(summary.iterations as usize),
    );
}
