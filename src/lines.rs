//! Winning-line tables and line analysis

use crate::board::{Cell, Player};

/// The eight winning lines on the 3x3 board, in detection precedence order:
/// both diagonals first, then rows top to bottom, then columns left to right.
///
/// The order only matters for malformed snapshots where more than one line is
/// complete; [`LineAnalyzer::winner`] reports the first completed line found.
pub const LINES: [[usize; 3]; 8] = [
    [0, 4, 8],
    [2, 4, 6], // diagonals
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Owner of the first completed line under the precedence order, if any
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        for line in &LINES {
            let first = cells[line[0]];
            if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
                return first.to_player();
            }
        }
        None
    }

    /// Check if a player has three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Positions that would immediately win for the player, in index order
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let target = player.to_cell();
        let mut moves: Vec<usize> = LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, target, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], target: Cell, line: &[usize; 3]) -> Option<usize> {
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        // More than one empty cell, not a winning move
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::X));
        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_winner_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::X));
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        let cells = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::winner(&cells), None);
    }

    #[test]
    fn test_winning_moves() {
        // X.X
        // ...
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::winning_moves(&cells, Player::X), vec![1]);
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX.
        // X..
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        let moves = LineAnalyzer::winning_moves(&cells, Player::X);
        assert_eq!(moves, vec![2, 6]);
    }

    #[test]
    fn test_no_winning_move_with_single_piece() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;

        assert!(LineAnalyzer::winning_moves(&cells, Player::X).is_empty());
        assert!(LineAnalyzer::winning_moves(&cells, Player::O).is_empty());
    }
}
