//! # fen.rs
//!
//! Implements FEN parsing and serialization.
//!
//! This file converts between Forsyth-Edwards Notation strings and game
//! states. Decoding expands the placement field into a board, restores
//! castling rights by clearing the touched flag on the named corner rooks
//! and their king, resolves the active color, and marks the en-passant
//! target square. Encoding derives every field back from the board, with
//! each side's castling letters computed independently from its own king
//! and rooks.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/03/2026

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use game::constants::*;
use game::representations::board::{Board, Pos};
use game::representations::piece::{Piece, PieceColor, PieceKind};

/// Position plus the side-to-move bookkeeping FEN carries around the board.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub active_color: PieceColor,
    pub fullmove_number: u32,
}

lazy_static! {
    static ref KIND_BY_LETTER: HashMap<char, PieceKind> = HashMap::from([
        ('p', PieceKind::Pawn),
        ('n', PieceKind::Knight),
        ('b', PieceKind::Bishop),
        ('r', PieceKind::Rook),
        ('q', PieceKind::Queen),
        ('k', PieceKind::King),
    ]);

    static ref LETTER_BY_KIND: HashMap<PieceKind, char> = HashMap::from([
        (PieceKind::Pawn, 'p'),
        (PieceKind::Knight, 'n'),
        (PieceKind::Bishop, 'b'),
        (PieceKind::Rook, 'r'),
        (PieceKind::Queen, 'q'),
        (PieceKind::King, 'k'),
    ]);

    static ref EN_PASSANT_FIELD: Regex =
        Regex::new("^[a-h][1-8]$").expect("invalid en passant pattern");
}

fn placement_to_board(placement: &str) -> Board {
    let mut board = Board::empty(BOARD_SIZE);

    let mut row: i8 = 0;
    let mut file: i8 = 0;

    for c in placement.chars() {
        match c {
            '/' => {
                row += 1;
                file = 0;
            }
            '1'..='9' => {
                file += c.to_digit(10).unwrap() as i8;
            }
            _ => {
                let kind = *KIND_BY_LETTER
                    .get(&c.to_ascii_lowercase())
                    .expect(&format!("Unknown piece character: {}", c));

                let color = if c.is_ascii_uppercase() {
                    PieceColor::White
                } else {
                    PieceColor::Black
                };

                // Placement letters carry no history, so every piece starts
                // out touched; the castling field restores the exceptions.
                board.place((file, row), Piece::new(kind, color).touched());

                file += 1;
            }
        }
    }

    board
}

/// Clears the touched flag on the corner rook and home-square king a
/// castling letter vouches for. Letters naming absent or misplaced pieces
/// are ignored.
fn restore_castling_right(board: &mut Board, rook_pos: Pos, color: PieceColor) {
    let king_pos = (KING_HOME_FILE, rook_pos.1);

    if let Some(rook) = board.piece_at(rook_pos) {
        if rook.kind == PieceKind::Rook && rook.color == color {
            board.place(rook_pos, Piece::new(PieceKind::Rook, color));
        }
    }

    if let Some(king) = board.piece_at(king_pos) {
        if king.kind == PieceKind::King && king.color == color {
            board.place(king_pos, Piece::new(PieceKind::King, color));
        }
    }
}

pub fn fen_to_game_state(fen: &str) -> GameState {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    assert!(fields.len() >= 4, "FEN must have at least 4 fields");

    let mut board = placement_to_board(fields[0]);

    let active_color = match fields[1] {
        "w" => PieceColor::White,
        "b" => PieceColor::Black,
        _ => panic!("Invalid active color: {}", fields[1]),
    };

    let white_home = BOARD_SIZE - 1;
    for c in fields[2].chars() {
        match c {
            'K' => restore_castling_right(
                &mut board, (H, white_home), PieceColor::White,
            ),
            'Q' => restore_castling_right(
                &mut board, (A, white_home), PieceColor::White,
            ),
            'k' => restore_castling_right(&mut board, (H, 0), PieceColor::Black),
            'q' => restore_castling_right(&mut board, (A, 0), PieceColor::Black),
            _ => {}
        }
    }

    if EN_PASSANT_FIELD.is_match(fields[3]) {
        let mut chars = fields[3].chars();
        let file = (chars.next().unwrap() as u8 - b'a') as i8;
        let rank = chars.next().unwrap().to_digit(10).unwrap() as i8;

        board.mark_en_passant_target((file, BOARD_SIZE - rank));
    }

    let fullmove_number = if fields.len() >= 6 {
        fields[5].parse().unwrap_or(1)
    } else {
        1
    };

    GameState {
        board,
        active_color,
        fullmove_number,
    }
}

/// FEN letter for a piece, uppercase for white.
pub fn piece_letter(piece: &Piece) -> char {
    let letter = LETTER_BY_KIND[&piece.kind];

    if piece.color == PieceColor::White {
        letter.to_ascii_uppercase()
    } else {
        letter
    }
}

fn board_to_placement(board: &Board) -> String {
    let mut placement = String::new();

    for row in 0..board.size() {
        if row > 0 {
            placement.push('/');
        }

        let mut empty_run = 0;

        for file in 0..board.size() {
            match board.piece_at((file, row)) {
                Some(piece) => {
                    if empty_run > 0 {
                        placement.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }

                    placement.push(piece_letter(&piece));
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            placement.push_str(&empty_run.to_string());
        }
    }

    placement
}

/// One side's castling letters, derived from that side's king and rooks
/// alone: the king must stand untouched on its home square, and each corner
/// rook that is also untouched contributes its letter.
fn castling_letters(board: &Board, color: PieceColor) -> String {
    let home_row = if color == PieceColor::White {
        board.size() - 1
    } else {
        0
    };

    let untouched_at = |pos: Pos, kind: PieceKind| {
        matches!(
            board.piece_at(pos),
            Some(piece)
                if piece.kind == kind
                    && piece.color == color
                    && !piece.touched
        )
    };

    if !untouched_at((KING_HOME_FILE, home_row), PieceKind::King) {
        return String::new();
    }

    let mut letters = String::new();

    if untouched_at((H, home_row), PieceKind::Rook) {
        letters.push('K');
    }
    if untouched_at((A, home_row), PieceKind::Rook) {
        letters.push('Q');
    }

    if color == PieceColor::Black {
        letters = letters.to_ascii_lowercase();
    }

    letters
}

fn en_passant_field(board: &Board) -> String {
    for row in 0..board.size() {
        for file in 0..board.size() {
            if board.is_en_passant_target((file, row)) {
                let file_char = (b'a' + file as u8) as char;
                return format!("{}{}", file_char, board.size() - row);
            }
        }
    }

    "-".to_string()
}

pub fn state_to_fen(state: &GameState) -> String {
    let placement = board_to_placement(&state.board);

    let color = match state.active_color {
        PieceColor::White => "w",
        PieceColor::Black => "b",
    };

    let mut castling = castling_letters(&state.board, PieceColor::White);
    castling.push_str(&castling_letters(&state.board, PieceColor::Black));
    if castling.is_empty() {
        castling.push('-');
    }

    let halfmove = state.fullmove_number.saturating_sub(1);

    format!(
        "{} {} {} {} {} {}",
        placement,
        color,
        castling,
        en_passant_field(&state.board),
        halfmove,
        state.fullmove_number,
    )
}
