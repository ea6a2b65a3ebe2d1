//! # moves.rs
//!
//! Defines move and game-result value types.
//!
//! This file contains the plain data carried between the engine and its
//! callers: a move with its optional opportunistic classification, the game
//! result, and the helpers that remap a move onto a flipped board. The
//! classification is a hint for notation and highlighting; the authoritative
//! facts of a move are always `from`, `to` and the board produced by
//! applying it.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/03/2026

use crate::representations::board::Pos;
use crate::representations::piece::{Piece, PieceColor, PieceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Move,
    Capture,
    Check,
    DoubleCheck,
    Mate,
    Promotion,
    KingsideCastle,
    QueensideCastle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveData {
    pub from: Pos,
    pub to: Pos,
    pub piece: Piece,
    pub kind: Option<MoveKind>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResultKind {
    Checkmate,
    Stalemate,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub kind: GameResultKind,

    /// Only checkmate has a winner.
    pub winner: Option<PieceColor>,
}

/// Remaps a move so it can be applied to the flipped rendition of the board.
pub fn reverse_move(move_data: &MoveData, board_size: i8) -> MoveData {
    MoveData {
        from: reverse_pos(move_data.from, board_size),
        to: reverse_pos(move_data.to, board_size),
        piece: move_data.piece,
        kind: move_data.kind,
    }
}

/// Remaps a `[from, to]` vector for highlighting on a flipped board.
pub fn reverse_move_vector(vector: [Pos; 2], board_size: i8) -> [Pos; 2] {
    [
        reverse_pos(vector[0], board_size),
        reverse_pos(vector[1], board_size),
    ]
}

fn reverse_pos(pos: Pos, board_size: i8) -> Pos {
    (board_size - (pos.0 + 1), board_size - (pos.1 + 1))
}

/// Classifies a move as castling from the move data alone: an untouched king
/// travelling two or more files. Anything else is not castling.
pub fn castling_type(move_data: &MoveData) -> Option<MoveKind> {
    if move_data.piece.touched || move_data.piece.kind != PieceKind::King {
        return None;
    }

    let file_diff = move_data.to.0 - move_data.from.0;

    if file_diff.abs() <= 1 {
        return None;
    }

    if file_diff > 0 {
        Some(MoveKind::KingsideCastle)
    } else {
        Some(MoveKind::QueensideCastle)
    }
}
