//! Interactive human-vs-engine session

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::board::{Outcome, Player};
use crate::cli::output;
use crate::engine::Engine;
use crate::game::Game;

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Show per-candidate scores and search statistics after each engine move
    #[arg(long)]
    pub verbose: bool,

    /// Random seed for the draw that decides which side the engine plays
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or_else(rand::random));

    println!("This program is going to play tic tac toe with you.");
    println!("Each slot on the board is represented by a number, like this:");
    println!("1 | 2 | 3");
    println!("---------");
    println!("4 | 5 | 6");
    println!("---------");
    println!("7 | 8 | 9");
    println!("When your turn is called, enter your move and press ENTER.");

    if !confirm(&mut input, "Are you ready to play?")? {
        return Ok(());
    }

    loop {
        run_game(&mut input, &mut rng, args.verbose)?;
        if !confirm(&mut input, "Do you want to play again?")? {
            break;
        }
    }

    Ok(())
}

/// Play one full game: draw sides, alternate turns until a terminal outcome
fn run_game(input: &mut impl BufRead, rng: &mut StdRng, verbose: bool) -> Result<()> {
    // X always opens; a coin flip decides which side the engine plays.
    let computer = if rng.random_bool(0.5) {
        Player::X
    } else {
        Player::O
    };
    let engine = Engine::new(computer);
    let mut game = Game::new();

    println!(
        "The computer plays {}, you play {}. {} moves first.",
        engine.computer(),
        engine.human(),
        Player::X
    );

    loop {
        println!("{}", output::render_board(game.board()));

        let outcome = if game.to_move() == computer {
            let report = engine.choose_move(game.board())?;
            println!("The computer plays slot {}.", report.position + 1);
            if verbose {
                output::print_search_report(&report);
            }
            game.play(report.position)?
        } else {
            let position = ask_move(input, &game)?;
            game.play(position)?
        };

        match outcome {
            Outcome::InProgress => continue,
            Outcome::Tie => {
                println!("{}", output::render_board(game.board()));
                println!("It's a tie.");
            }
            Outcome::Win(winner) => {
                println!("{}", output::render_board(game.board()));
                if winner == computer {
                    println!("The computer ({winner}) wins.");
                } else {
                    println!("You ({winner}) win!");
                }
            }
        }
        return Ok(());
    }
}

/// Prompt for a slot number until the player enters a legal move
fn ask_move(input: &mut impl BufRead, game: &Game) -> Result<usize> {
    loop {
        println!("Your move ({}):", game.to_move());
        print!(">: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed before the game ended");
        }

        match line.trim().parse::<usize>() {
            Ok(slot @ 1..=9) if game.board().legal_move(slot - 1) => return Ok(slot - 1),
            Ok(slot @ 1..=9) => println!("ERROR: slot {slot} is already taken."),
            _ => println!("ERROR: enter a number between 1 and 9."),
        }
    }
}

/// Ask a y/n question, re-prompting on anything else
fn confirm(input: &mut impl BufRead, question: &str) -> Result<bool> {
    loop {
        println!("{question} [y|n]");
        print!(">: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match line.trim() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => println!("ERROR: invalid input."),
        }
    }
}
