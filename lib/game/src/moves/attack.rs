//! # attack.rs
//!
//! Implements ray tracing and attack-footprint computation.
//!
//! This file contains the line tracer used by move generation, pin detection
//! and check detection, plus the per-kind attack footprints that decide which
//! squares a king may not step onto. A traced line deliberately passes
//! through pieces hostile to the tracing piece: pin detection needs to see
//! the king behind a shielding piece, and a checked king must not retreat
//! along the very ray that checks it.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/03/2026

use lazy_static::lazy_static;

use crate::representations::board::{Board, Pos};
use crate::representations::piece::{PieceColor, PieceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Direction {
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Top => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::BottomRight => (1, 1),
            Direction::Bottom => (0, 1),
            Direction::BottomLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::TopLeft => (-1, -1),
        }
    }
}

lazy_static! {
    pub static ref DIAGONAL_DIRECTIONS: [Direction; 4] = [
        Direction::TopRight,
        Direction::BottomRight,
        Direction::BottomLeft,
        Direction::TopLeft,
    ];
    pub static ref ORTHOGONAL_DIRECTIONS: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];
    pub static ref ALL_DIRECTIONS: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];
    pub static ref KNIGHT_OFFSETS: [(i8, i8); 8] = [
        ( 1, -2),
        (-1, -2),
        (-2,  1),
        (-2, -1),
        ( 2,  1),
        ( 2, -1),
        ( 1,  2),
        (-1,  2),
    ];
    pub static ref KING_OFFSETS: [(i8, i8); 8] = [
        ( 0, -1),
        ( 1, -1),
        ( 1,  0),
        ( 1,  1),
        ( 0,  1),
        (-1,  1),
        (-1,  0),
        (-1, -1),
    ];
}

/// The directions a long-range piece of `kind` attacks along. Empty for
/// leapers and steppers.
pub fn slider_directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Bishop => &*DIAGONAL_DIRECTIONS,
        PieceKind::Rook => &*ORTHOGONAL_DIRECTIONS,
        PieceKind::Queen => &*ALL_DIRECTIONS,
        _ => &[],
    }
}

fn can_extend_line(board: &Board, origin: Pos, target: Pos) -> bool {
    board.in_bounds(target)
        && (!board.has_piece(target) || board.is_enemy(origin, target))
}

/// Walks one ray from `origin`, collecting every square that is empty or
/// holds a piece hostile to the tracer, and stopping before the first
/// friendly piece or the board edge. Hostile pieces do not end the walk;
/// that X-ray view is what makes the line usable for pin detection.
pub fn full_attacked_line(
    board: &Board,
    origin: Pos,
    direction: Direction,
) -> Vec<Pos> {
    let (di, dj) = direction.delta();
    let mut line = Vec::new();
    let mut next = (origin.0 + di, origin.1 + dj);

    while can_extend_line(board, origin, next) {
        line.push(next);
        next = (next.0 + di, next.1 + dj);
    }

    line
}

/// The squares a long-range piece at `pos` keeps under attack along `dirs`:
/// each ray runs up to and including the first occupied square, except that
/// it passes through the enemy king so the squares behind a checked king
/// stay marked.
fn slider_attacks(board: &Board, pos: Pos, dirs: &[Direction]) -> Vec<Pos> {
    let mut attacked = Vec::new();

    for &direction in dirs {
        let (di, dj) = direction.delta();
        let mut next = (pos.0 + di, pos.1 + dj);

        while board.in_bounds(next) {
            attacked.push(next);

            if board.has_piece(next) && !board.is_enemy_king(pos, next) {
                break;
            }

            next = (next.0 + di, next.1 + dj);
        }
    }

    attacked
}

/// The two diagonal squares a pawn at `pos` attacks. Attack direction
/// depends on the pawn's color crossed with the board orientation.
pub fn pawn_attacks(board: &Board, pos: Pos, reversed: bool) -> Vec<Pos> {
    let Some(color) = board.color_at(pos) else {
        return Vec::new();
    };

    let dj = if (color == PieceColor::White) != reversed {
        -1
    } else {
        1
    };

    [(pos.0 - 1, pos.1 + dj), (pos.0 + 1, pos.1 + dj)]
        .into_iter()
        .filter(|&target| board.in_bounds(target))
        .collect()
}

pub fn knight_attacks(board: &Board, pos: Pos) -> Vec<Pos> {
    KNIGHT_OFFSETS
        .iter()
        .map(|&(di, dj)| (pos.0 + di, pos.1 + dj))
        .filter(|&target| board.in_bounds(target))
        .collect()
}

pub fn king_attacks(board: &Board, pos: Pos) -> Vec<Pos> {
    KING_OFFSETS
        .iter()
        .map(|&(di, dj)| (pos.0 + di, pos.1 + dj))
        .filter(|&target| board.in_bounds(target))
        .collect()
}

/// The union of every enemy piece's attack footprint relative to the piece
/// at `pos`. Consumed exclusively by king-move and castling legality checks;
/// the footprint includes defended enemy pieces, which is exactly what keeps
/// the king from capturing them.
pub fn all_attacked_positions_by_enemies(
    board: &Board,
    pos: Pos,
    reversed: bool,
) -> Vec<Pos> {
    let mut attacked = Vec::new();

    for enemy_pos in board.enemy_positions(pos) {
        let kind = match board.kind_at(enemy_pos) {
            Some(kind) => kind,
            None => continue,
        };

        let mut footprint = match kind {
            PieceKind::Pawn => pawn_attacks(board, enemy_pos, reversed),
            PieceKind::Knight => knight_attacks(board, enemy_pos),
            PieceKind::King => king_attacks(board, enemy_pos),
            long_range => {
                slider_attacks(board, enemy_pos, slider_directions(long_range))
            }
        };

        attacked.append(&mut footprint);
    }

    attacked
}
