//! # board_io.rs
//!
//! Implements board formatting and visualization functions.
//!
//! This file contains functionality for converting a board into a
//! human-readable display with Unicode box-drawing characters, with rank and
//! file labels for easy reference, plus the algebraic formatting of single
//! squares and moves.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/03/2026

use game::representations::board::{Board, Pos};
use game::representations::moves::MoveData;

use crate::fen::piece_letter;

/// Algebraic name of a square, `e4` style. The top row is the highest rank.
pub fn format_square(pos: Pos, board_size: i8) -> String {
    let file_char = (b'a' + pos.0 as u8) as char;

    format!("{}{}", file_char, board_size - pos.1)
}

pub fn format_move(move_data: &MoveData, board_size: i8) -> String {
    format!(
        "{}{}",
        format_square(move_data.from, board_size),
        format_square(move_data.to, board_size),
    )
}

pub fn format_board(board: &Board) -> String {
    let size = board.size();
    let files = size as usize;

    let mut result = String::new();
    result.push_str(
        &format!("   ╔{}╗\n", "═══╤".repeat(files - 1) + "═══")
    );

    for row in 0..size {
        let cells = (0..size)
            .map(|file| match board.piece_at((file, row)) {
                Some(piece) => piece_letter(&piece).to_string(),
                None => " ".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" │ ");

        result.push_str(
            &format!("{:02} ║ {} ║\n", size - row, cells)
        );

        if row != size - 1 {
            result.push_str(
                &format!("   ╟{}╢\n", "───┼".repeat(files - 1) + "───")
            );
        }
    }

    result.push_str(
        &format!("   ╚{}╝\n     ", "═══╧".repeat(files - 1) + "═══")
    );

    for file in 0..size {
        let file_label = ((b'A' + file as u8) as char).to_string();
        result.push_str(&format!("{:3} ", file_label));
    }
    result.push('\n');

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::constants::*;

    #[test]
    fn squares_format_in_algebraic_notation() {
        assert_eq!(format_square((A, 0), BOARD_SIZE), "a8");
        assert_eq!(format_square((E, 4), BOARD_SIZE), "e4");
        assert_eq!(format_square((H, 7), BOARD_SIZE), "h1");
    }

    #[test]
    fn initial_board_renders_both_back_ranks() {
        let rendered = format_board(&Board::initial());

        assert!(rendered.contains("08 ║ r │ n │ b │ q │ k │ b │ n │ r ║"));
        assert!(rendered.contains("01 ║ R │ N │ B │ Q │ K │ B │ N │ R ║"));
        assert_eq!(
            rendered.lines().count(),
            2 * BOARD_SIZE as usize + 2,
        );
    }
}
