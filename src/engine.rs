//! Exhaustive game-tree search for move selection
//!
//! The engine searches every continuation to the end of the game, so it has
//! no depth limit and no pruning. Terminal positions are scored with a depth
//! bias: wins reached sooner score higher, losses reached later score less
//! badly, and a tie scores a neutral zero. Each interior node takes the
//! maximum over children when the computer is the mover and the minimum when
//! the human is, which is the standard minimax convention.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Outcome, Player};
use crate::error::{Error, Result};

/// Base score for a decided game. Leaf scores are `SCORE_WIN - depth` for a
/// computer win and `depth - SCORE_WIN` for a human win, so with at most 9
/// plies every win stays positive and every loss negative, both distinct
/// from the neutral tie score of 0.
const SCORE_WIN: i32 = 10;

/// Score assigned to one candidate move at the root of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub position: usize,
    pub score: i32,
}

/// Result of one move-selection run.
///
/// The iteration counter and timestamps live here, per invocation, rather
/// than as engine state, so repeated or overlapping searches cannot
/// interfere with each other's diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// The chosen cell index
    pub position: usize,
    /// Every legal candidate with its score, in index order
    pub candidates: Vec<CandidateScore>,
    /// Number of evaluator invocations across the whole run
    pub iterations: u64,
    /// Wall-clock time spent selecting the move
    pub elapsed: Duration,
}

/// The move-selection engine, fixed to one marker assignment for the
/// duration of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    computer: Player,
}

impl Engine {
    pub fn new(computer: Player) -> Self {
        Engine { computer }
    }

    /// The marker the engine plays
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// The marker the opponent plays
    pub fn human(&self) -> Player {
        self.computer.opponent()
    }

    /// Choose the best move for the computer on the given board.
    ///
    /// Every legal cell is tried on a scratch copy of the board and scored by
    /// the full-depth evaluator; the cell with the strictly greatest score
    /// wins, ties broken by the first such cell in index order so results are
    /// reproducible. The caller's board is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMovesAvailable`] if the board has no empty cell.
    /// Callers are expected to check [`Board::outcome`] before asking for a
    /// move.
    pub fn choose_move(&self, board: &Board) -> Result<SearchReport> {
        let start = Instant::now();
        let mut iterations = 0u64;
        let mut scratch = board.cells;
        let mut candidates = Vec::new();
        let mut best: Option<CandidateScore> = None;

        for position in 0..9 {
            if !board.legal_move(position) {
                continue;
            }

            scratch[position] = self.computer.to_cell();
            let score = self.evaluate(&mut scratch, 1, &mut iterations);
            scratch[position] = Cell::Empty;

            candidates.push(CandidateScore { position, score });
            // Strict comparison keeps the first best index on ties
            if best.is_none_or(|b| score > b.score) {
                best = Some(CandidateScore { position, score });
            }
        }

        let best = best.ok_or(Error::NoMovesAvailable)?;

        Ok(SearchReport {
            position: best.position,
            candidates,
            iterations,
            elapsed: start.elapsed(),
        })
    }

    /// Score a position assuming optimal play by both sides.
    ///
    /// `depth` counts plies already played by the search on top of the live
    /// board: even depth means the computer moves next, odd depth the human.
    /// Each candidate cell is placed on the scratch board and restored to
    /// empty right after the recursive call returns; the loop body has no
    /// early return between placement and restore, so every sibling sees the
    /// scratch board in its pre-call state.
    fn evaluate(&self, scratch: &mut [Cell; 9], depth: i32, iterations: &mut u64) -> i32 {
        *iterations += 1;

        match (Board { cells: *scratch }).outcome() {
            Outcome::Win(winner) if winner == self.computer => return SCORE_WIN - depth,
            Outcome::Win(_) => return depth - SCORE_WIN,
            Outcome::Tie => return 0,
            Outcome::InProgress => {}
        }

        let computer_to_move = depth % 2 == 0;
        let mover = if computer_to_move {
            self.computer
        } else {
            self.human()
        };
        let mut best = if computer_to_move { i32::MIN } else { i32::MAX };

        for position in 0..9 {
            if scratch[position] != Cell::Empty {
                continue;
            }

            scratch[position] = mover.to_cell();
            let score = self.evaluate(scratch, depth + 1, iterations);
            scratch[position] = Cell::Empty;

            best = if computer_to_move {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}
