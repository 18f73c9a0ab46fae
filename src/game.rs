//! Turn-taking game state shared by the console session and self-play

use serde::{Deserialize, Serialize};

use crate::board::{Board, Outcome, Player};
use crate::error::{Error, Result};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// A game in progress: the board of record, whose turn it is, and the move
/// history. X always moves first; which side plays X is the caller's
/// business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Player::X,
            moves: Vec::new(),
        }
    }

    /// The board of record
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player who moves next
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The moves played so far
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// State of the game, computed fresh from the board
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Play the next move and return the resulting outcome
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if the game is already decided and
    /// [`Error::InvalidMove`] if the position is out of range or occupied.
    pub fn play(&mut self, position: usize) -> Result<Outcome> {
        if self.outcome().is_terminal() {
            return Err(Error::GameOver);
        }

        self.board = self.board.place(position, self.to_move)?;
        self.moves.push(Move {
            position,
            player: self.to_move,
        });
        self.to_move = self.to_move.opponent();

        Ok(self.outcome())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
