//! Tic-Tac-Toe played against an exhaustive game-tree search engine
//!
//! This crate provides:
//! - A 3x3 board representation with a pure terminal-state detector
//! - A full-depth minimax move chooser with per-run diagnostics
//! - A turn-taking game wrapper used by the console front end
//! - A CLI for interactive play and batch self-play validation
//!
//! The engine never prints or reads anything itself; it returns structured
//! per-candidate data that the CLI renders when asked to be verbose.

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Outcome, Player};
pub use engine::{CandidateScore, Engine, SearchReport};
pub use error::{Error, Result};
pub use game::{Game, Move};
pub use lines::{LINES, LineAnalyzer};
