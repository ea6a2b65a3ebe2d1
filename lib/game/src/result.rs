//! # result.rs
//!
//! Detects checks and terminal game states.
//!
//! This file computes the active check lines against a king, decides whether
//! a position is checkmate, stalemate, or a dead draw, recognizes the
//! fourfold move repetition that ends a game, and counts captured pieces by
//! comparing a board against the standard starting complement.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/03/2026

use crate::constants::*;
use crate::moves::attack::{knight_attacks, pawn_attacks, slider_directions};
use crate::moves::move_gen::get_next_moves;
use crate::representations::board::{Board, Pos};
use crate::representations::moves::{GameResult, GameResultKind};
use crate::representations::piece::{PieceColor, PieceKind};

/// Every check line `attacker_color` currently delivers against the enemy
/// king. A slider line holds the squares strictly between the attacker and
/// the king with the attacker's own square appended last; a pawn or knight
/// check yields the king's square followed by the attacker's. The appended
/// attacker square is what lets evasion filtering treat capturing the
/// checker as a resolving move.
pub fn get_lines_with_check(
    board: &Board,
    attacker_color: PieceColor,
    reversed: bool,
) -> Vec<Vec<Pos>> {
    let mut lines = Vec::new();

    for pos in board.positions_of_color(attacker_color) {
        let Some(kind) = board.kind_at(pos) else {
            continue;
        };

        if kind.is_long_range() {
            for &direction in slider_directions(kind) {
                let (di, dj) = direction.delta();
                let mut line = Vec::new();
                let mut next = (pos.0 + di, pos.1 + dj);

                while board.in_bounds(next) {
                    if board.has_piece(next) {
                        if board.is_enemy_king(pos, next) {
                            line.push(pos);
                            lines.push(line);
                        }

                        break;
                    }

                    line.push(next);
                    next = (next.0 + di, next.1 + dj);
                }
            }

            continue;
        }

        let direct_attacks = match kind {
            PieceKind::Pawn => pawn_attacks(board, pos, reversed),
            PieceKind::Knight => knight_attacks(board, pos),
            _ => Vec::new(),                                                    /* kings never give check             */
        };

        for target in direct_attacks {
            if board.is_enemy_king(pos, target) {
                lines.push(vec![target, pos]);
            }
        }
    }

    lines
}

fn insufficient_material(board: &Board) -> bool {
    let pieces = board.pieces();

    match pieces.len() {
        2 => true,                                                              /* king versus king                   */
        3 => pieces.iter().any(|(_, piece)| {
            piece.kind == PieceKind::Knight || piece.kind == PieceKind::Bishop
        }),
        _ => false,
    }
}

/// Terminal-state check for the side about to move, given the check lines
/// already computed against it. Returns `None` while the game goes on.
/// Checkmate carries the winning color, stalemate and the dead material
/// draws carry none.
pub fn get_game_result(
    board: &Board,
    lines_with_check: &[Vec<Pos>],
    active_color: PieceColor,
    reversed: bool,
) -> Option<GameResult> {
    if insufficient_material(board) {
        return Some(GameResult {
            kind: GameResultKind::Draw,
            winner: None,
        });
    }

    let legal_moves: usize = board
        .positions_of_color(active_color)
        .into_iter()
        .map(|pos| get_next_moves(board, pos, lines_with_check, reversed).len())
        .sum();

    if legal_moves > 0 {
        return None;
    }

    if lines_with_check.is_empty() {
        Some(GameResult {
            kind: GameResultKind::Stalemate,
            winner: None,
        })
    } else {
        Some(GameResult {
            kind: GameResultKind::Checkmate,
            winner: Some(active_color.opposite()),
        })
    }
}

/// Detects the draw where both players repeat the same shuffle twice: among
/// the eight most recent stored position strings, the first four must equal
/// the last four verbatim. A history shorter than eight entries never
/// qualifies.
pub fn detect_draw_by_repeat_moves(fen_history: &[String]) -> bool {
    if fen_history.len() < 8 {
        return false;
    }

    let recent = &fen_history[fen_history.len() - 8..];

    recent[..4] == recent[4..]
}

fn expected_count(kind: PieceKind) -> usize {
    match kind {
        PieceKind::Pawn => PAWNS_COUNT,
        PieceKind::Knight => KNIGHTS_COUNT,
        PieceKind::Bishop => BISHOPS_COUNT,
        PieceKind::Rook => ROOKS_COUNT,
        PieceKind::Queen => QUEENS_COUNT,
        PieceKind::King => KINGS_COUNT,
    }
}

/// Number of `color` pieces of `kind` still standing.
pub fn figures_count_by_kind(
    board: &Board,
    color: PieceColor,
    kind: PieceKind,
) -> usize {
    board
        .pieces()
        .iter()
        .filter(|(_, piece)| piece.color == color && piece.kind == kind)
        .count()
}

/// Pieces of `color` missing from the board relative to the standard
/// starting complement. Promotions can push a kind above its starting
/// count, those kinds simply contribute nothing.
pub fn get_beaten_figures(board: &Board, color: PieceColor) -> Vec<PieceKind> {
    let mut beaten = Vec::new();

    for kind in [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ] {
        let standing = figures_count_by_kind(board, color, kind);
        let missing = expected_count(kind).saturating_sub(standing);

        for _ in 0..missing {
            beaten.push(kind);
        }
    }

    beaten
}
