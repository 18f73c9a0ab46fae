//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::board::{Board, Cell};
use crate::engine::SearchReport;

/// Render the board for the console: `X`/`O` marks, with the 1-9 slot number
/// shown in each empty cell so the player knows what to type.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..3 {
        if row > 0 {
            out.push_str("---------\n");
        }
        for col in 0..3 {
            let pos = row * 3 + col;
            if col > 0 {
                out.push_str(" | ");
            }
            let mark = match board.get(pos) {
                Cell::Empty => (b'1' + pos as u8) as char,
                cell => cell.to_char(),
            };
            out.push(mark);
        }
        out.push('\n');
    }
    out
}

/// Print the per-candidate diagnostics of one engine move
pub fn print_search_report(report: &SearchReport) {
    print_subsection("Search diagnostics");
    for candidate in &report.candidates {
        println!("  slot {:>2}  score {:>3}", candidate.position + 1, candidate.score);
    }
    print_kv("iterations", &format_number(report.iterations as usize));
    print_kv("elapsed", &format!("{:?}", report.elapsed));
}

/// Create a progress bar for a batch of games
pub fn create_game_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board_shows_slot_numbers() {
        let board = Board::new();
        let rendered = render_board(&board);
        assert!(rendered.contains("1 | 2 | 3"));
        assert!(rendered.contains("7 | 8 | 9"));
    }

    #[test]
    fn test_render_board_shows_marks() {
        let board = Board::from_string("X.O ... ...").unwrap();
        let rendered = render_board(&board);
        assert!(rendered.starts_with("X | 2 | O"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(549945), "549,945");
    }
}
