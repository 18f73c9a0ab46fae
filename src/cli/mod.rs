//! CLI infrastructure for the oxo console game
//!
//! This module provides the command-line interface for playing against the
//! engine interactively and for running batch self-play validation games.

pub mod output;
pub mod play;
pub mod selfplay;
