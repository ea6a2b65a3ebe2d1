//! # move_gen.rs
//!
//! Implements legal-move computation for every piece kind.
//!
//! This file contains the per-kind candidate generators, the pin correction
//! that restricts a piece standing between its king and an enemy slider, the
//! check-evasion filter applied when the friendly king is under attack, and
//! castling legality. Dispatch is a plain `match` over `PieceKind`: the rule
//! set per kind is closed and small, so enum dispatch reads better than any
//! trait hierarchy would.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/03/2026

use crate::moves::attack::{
    all_attacked_positions_by_enemies,
    full_attacked_line,
    slider_directions,
    KNIGHT_OFFSETS,
    KING_OFFSETS,
};
use crate::representations::board::{Board, Pos};
use crate::representations::piece::{PieceColor, PieceKind};

/// Whether a non-king piece may land on `target`: inside the board, and
/// either empty or holding a capturable enemy. The enemy king is never
/// capturable.
fn check_possible_move_to(board: &Board, pos: Pos, target: Pos) -> bool {
    board.in_bounds(target)
        && (!board.has_piece(target)
            || (board.is_enemy(pos, target)
                && !board.is_enemy_king(pos, target)))
}

fn slider_moves(board: &Board, pos: Pos, kind: PieceKind) -> Vec<Pos> {
    let mut next_moves = Vec::new();

    for &direction in slider_directions(kind) {
        let (di, dj) = direction.delta();
        let mut next = (pos.0 + di, pos.1 + dj);

        while check_possible_move_to(board, pos, next) {
            next_moves.push(next);

            if board.is_enemy(pos, next) {
                break;
            }

            next = (next.0 + di, next.1 + dj);
        }
    }

    next_moves
}

fn knight_moves(board: &Board, pos: Pos) -> Vec<Pos> {
    KNIGHT_OFFSETS
        .iter()
        .map(|&(di, dj)| (pos.0 + di, pos.1 + dj))
        .filter(|&target| check_possible_move_to(board, pos, target))
        .collect()
}

/// Raw pawn candidates: the two-square first move from the start row, the
/// single step onto an empty square, and the two diagonal captures. A
/// diagonal square is capturable when it holds an enemy or when it carries
/// the one-ply en-passant marker.
fn pawn_moves(board: &Board, pos: Pos, reversed: bool) -> Vec<Pos> {
    let Some(color) = board.color_at(pos) else {
        return Vec::new();
    };

    let dj = if (color == PieceColor::White) != reversed {
        -1
    } else {
        1
    };
    let start_row = if dj < 0 { board.size() - 2 } else { 1 };

    let mut next_moves = Vec::new();

    let single = (pos.0, pos.1 + dj);
    let double = (pos.0, pos.1 + 2 * dj);

    if pos.1 == start_row
        && !board.has_piece(single)
        && !board.has_piece(double)
    {
        next_moves.push(double);
    }

    if board.in_bounds(single) && !board.has_piece(single) {
        next_moves.push(single);
    }

    for target in [(pos.0 - 1, pos.1 + dj), (pos.0 + 1, pos.1 + dj)] {
        if !board.in_bounds(target) {
            continue;
        }

        let capturable = board.is_enemy(pos, target)
            && !board.is_enemy_king(pos, target);

        if capturable || board.is_en_passant_target(target) {
            next_moves.push(target);
        }
    }

    next_moves
}

/// Whether `pos` lies strictly between the attacker and the king on their
/// shared line. Pure coordinate geometry; both orderings of the endpoints
/// are accepted.
fn pos_between_attacker_and_king(
    pos: Pos,
    king_pos: Pos,
    attacker_pos: Pos,
) -> bool {
    let between = |value: i8, a: i8, b: i8| {
        (value > a && value < b) || (value > b && value < a)
    };

    if pos.0 == attacker_pos.0 && pos.0 == king_pos.0 {
        return between(pos.1, king_pos.1, attacker_pos.1);
    }

    if pos.1 == attacker_pos.1 && pos.1 == king_pos.1 {
        return between(pos.0, king_pos.0, attacker_pos.0);
    }

    between(pos.1, king_pos.1, attacker_pos.1)
        && between(pos.0, king_pos.0, attacker_pos.0)
}

/// Looks for an enemy slider whose ray holds exactly one friendly piece
/// shielding the king, with the queried piece being that shield. When the
/// piece is pinned this way its moves collapse to the pinning line,
/// including the capture of the pinning piece itself.
fn pin_restricted_moves(
    board: &Board,
    figure_pos: Pos,
    king_pos: Pos,
    possible_moves: &[Pos],
) -> Option<Vec<Pos>> {
    for enemy_pos in board.enemy_positions(figure_pos) {
        let kind = board.kind_at(enemy_pos)?;

        if !kind.is_long_range() {
            continue;
        }

        for &direction in slider_directions(kind) {
            let line = full_attacked_line(board, enemy_pos, direction);

            let king_index = line.iter().position(|&p| p == king_pos);
            let figure_index = line.iter().position(|&p| p == figure_pos);

            let shield_count = line
                .iter()
                .filter(|&&p| {
                    board.is_enemy(enemy_pos, p)
                        && !board.is_enemy_king(enemy_pos, p)
                })
                .count();

            if let (Some(king_index), Some(figure_index)) =
                (king_index, figure_index)
            {
                if king_index > figure_index && shield_count == 1 {
                    let restricted = possible_moves
                        .iter()
                        .copied()
                        .filter(|target| {
                            line.contains(target) || *target == enemy_pos
                        })
                        .collect();

                    return Some(restricted);
                }
            }
        }
    }

    None
}

/// Applies pin correction and check-evasion filtering to a raw candidate
/// set. With one active check line only blocking squares and the capture of
/// the checking piece survive; with two or more lines no non-king move can
/// resolve the check, so nothing survives.
pub fn correction_possible_moves(
    board: &Board,
    figure_pos: Pos,
    possible_moves: Vec<Pos>,
    lines_with_check: &[Vec<Pos>],
) -> Vec<Pos> {
    let Some(color) = board.color_at(figure_pos) else {
        return Vec::new();
    };

    // Without a king there is nothing to pin against or to defend.
    let Some(king_pos) = board.find_king(color) else {
        return possible_moves;
    };

    let prepared_moves =
        pin_restricted_moves(board, figure_pos, king_pos, &possible_moves)
            .unwrap_or(possible_moves);

    match lines_with_check {
        [] => prepared_moves,

        [line] => {
            let Some(&attacker_pos) = line.last() else {
                return prepared_moves;
            };

            prepared_moves
                .into_iter()
                .filter(|&target| {
                    line.contains(&target)
                        && (pos_between_attacker_and_king(
                            target,
                            king_pos,
                            attacker_pos,
                        ) || board.is_enemy(king_pos, target))
                })
                .collect()
        }

        _ => Vec::new(),
    }
}

/// Castling legality for one side. `path` runs from the square next to the
/// king up to and including the rook's corner square. The king must be
/// untouched and not in check, the corner rook present and untouched, every
/// square strictly between them empty, and the two squares the king transits
/// unattacked.
pub fn check_possible_castling(
    board: &Board,
    king_pos: Pos,
    path: &[Pos],
    reversed: bool,
) -> bool {
    let Some(king) = board.piece_at(king_pos) else {
        return false;
    };

    if king.kind != PieceKind::King || king.touched {
        return false;
    }

    let attacked = all_attacked_positions_by_enemies(board, king_pos, reversed);

    if attacked.contains(&king_pos) {
        return false;
    }

    let Some((&rook_pos, between)) = path.split_last() else {
        return false;
    };

    match board.piece_at(rook_pos) {
        Some(rook) => {
            if rook.kind != PieceKind::Rook
                || rook.color != king.color
                || rook.touched
            {
                return false;
            }
        }
        None => return false,
    }

    if between.iter().any(|&pos| board.has_piece(pos)) {
        return false;
    }

    let transit = &between[..between.len().min(2)];

    !transit.iter().any(|pos| attacked.contains(pos))
}

/// King candidates: the eight adjacent squares minus everything the enemy
/// attacks, plus the castling path squares when castling is legal. Check
/// evasion needs no extra filtering here, the attacked-square exclusion
/// already covers it.
fn king_moves(board: &Board, pos: Pos, reversed: bool) -> Vec<Pos> {
    let attacked = all_attacked_positions_by_enemies(board, pos, reversed);

    let mut next_moves: Vec<Pos> = KING_OFFSETS
        .iter()
        .map(|&(di, dj)| (pos.0 + di, pos.1 + dj))
        .filter(|&target| {
            check_possible_move_to(board, pos, target)
                && !attacked.contains(&target)
        })
        .collect();

    let kingside_files: [i8; 3] = if reversed {
        [-1, -2, -3]
    } else {
        [1, 2, 3]
    };
    let queenside_files: [i8; 4] = if reversed {
        [1, 2, 3, 4]
    } else {
        [-1, -2, -3, -4]
    };

    let kingside_path: Vec<Pos> = kingside_files
        .iter()
        .map(|&di| (pos.0 + di, pos.1))
        .collect();
    let queenside_path: Vec<Pos> = queenside_files
        .iter()
        .map(|&di| (pos.0 + di, pos.1))
        .collect();

    if check_possible_castling(board, pos, &kingside_path, reversed) {
        next_moves.extend(kingside_path);
    }

    if check_possible_castling(board, pos, &queenside_path, reversed) {
        next_moves.extend(queenside_path);
    }

    next_moves
}

/// Every legal destination for the piece at `pos`, given the check lines
/// currently active against its own king. An empty square yields an empty
/// list.
pub fn get_next_moves(
    board: &Board,
    pos: Pos,
    lines_with_check: &[Vec<Pos>],
    reversed: bool,
) -> Vec<Pos> {
    let Some(piece) = board.piece_at(pos) else {
        return Vec::new();
    };

    let raw_moves = match piece.kind {
        PieceKind::Pawn => pawn_moves(board, pos, reversed),
        PieceKind::Knight => knight_moves(board, pos),
        PieceKind::King => return king_moves(board, pos, reversed),
        long_range => slider_moves(board, pos, long_range),
    };

    correction_possible_moves(board, pos, raw_moves, lines_with_check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::representations::piece::Piece;
    use crate::result::get_lines_with_check;

    fn board_with(pieces: &[(Pos, PieceKind, PieceColor)]) -> Board {
        let mut board = Board::empty(BOARD_SIZE);

        for &(pos, kind, color) in pieces {
            board.place(pos, Piece::new(kind, color).touched());
        }

        board
    }

    fn untouched(board: &mut Board, pos: Pos, kind: PieceKind, color: PieceColor) {
        board.place(pos, Piece::new(kind, color));
    }

    #[test]
    fn knight_in_the_open_has_eight_moves() {
        let board = board_with(&[
            ((D, 4), PieceKind::Knight, PieceColor::White),
            ((E, 7), PieceKind::King, PieceColor::White),
            ((E, 0), PieceKind::King, PieceColor::Black),
        ]);

        assert_eq!(get_next_moves(&board, (D, 4), &[], false).len(), 8);
    }

    #[test]
    fn empty_square_yields_no_moves() {
        let board = Board::initial();

        assert!(get_next_moves(&board, (E, 4), &[], false).is_empty());
    }

    #[test]
    fn pawn_first_move_offers_one_and_two_steps() {
        let board = Board::initial();

        let moves = get_next_moves(&board, (E, 6), &[], false);

        assert!(moves.contains(&(E, 5)));
        assert!(moves.contains(&(E, 4)));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn pawn_double_step_is_blocked_by_any_intervening_piece() {
        let mut board = Board::initial();
        board.place((E, 5), Piece::new(PieceKind::Knight, PieceColor::Black));

        assert!(get_next_moves(&board, (E, 6), &[], false).is_empty());
    }

    #[test]
    fn pawn_may_capture_onto_the_en_passant_square() {
        let mut board = board_with(&[
            ((E, 3), PieceKind::Pawn, PieceColor::White),
            ((D, 3), PieceKind::Pawn, PieceColor::Black),
            ((E, 7), PieceKind::King, PieceColor::White),
            ((E, 0), PieceKind::King, PieceColor::Black),
        ]);
        board.mark_en_passant_target((D, 2));

        let moves = get_next_moves(&board, (E, 3), &[], false);

        assert!(moves.contains(&(D, 2)));
    }

    #[test]
    fn pinned_bishop_is_confined_to_the_pinning_file() {
        // Rook behind the bishop on the king's own file: every diagonal
        // move would expose the king.
        let board = board_with(&[
            ((E, 7), PieceKind::King, PieceColor::White),
            ((E, 5), PieceKind::Bishop, PieceColor::White),
            ((E, 1), PieceKind::Rook, PieceColor::Black),
            ((A, 0), PieceKind::King, PieceColor::Black),
        ]);

        let moves = get_next_moves(&board, (E, 5), &[], false);

        assert!(moves.is_empty(), "a file-pinned bishop has no diagonal moves");
    }

    #[test]
    fn pinned_rook_may_slide_along_the_pin_and_capture_the_pinner() {
        let board = board_with(&[
            ((E, 7), PieceKind::King, PieceColor::White),
            ((E, 5), PieceKind::Rook, PieceColor::White),
            ((E, 1), PieceKind::Rook, PieceColor::Black),
            ((A, 0), PieceKind::King, PieceColor::Black),
        ]);

        let moves = get_next_moves(&board, (E, 5), &[], false);

        assert!(moves.contains(&(E, 6)));
        assert!(moves.contains(&(E, 1)));                                       /* capturing the pinner               */
        assert!(!moves.contains(&(A, 5)));
    }

    #[test]
    fn single_check_restricts_pieces_to_blocks_and_captures() {
        let board = board_with(&[
            ((E, 7), PieceKind::King, PieceColor::White),
            ((A, 6), PieceKind::Rook, PieceColor::White),
            ((E, 0), PieceKind::Rook, PieceColor::Black),
            ((A, 0), PieceKind::King, PieceColor::Black),
        ]);

        let lines = get_lines_with_check(&board, PieceColor::Black, false);
        assert_eq!(lines.len(), 1);

        let moves = get_next_moves(&board, (A, 6), &lines, false);

        assert_eq!(moves, vec![(E, 6)], "only the blocking square survives");
    }

    #[test]
    fn double_check_leaves_non_king_pieces_without_moves() {
        let board = board_with(&[
            ((E, 7), PieceKind::King, PieceColor::White),
            ((A, 6), PieceKind::Queen, PieceColor::White),
            ((E, 0), PieceKind::Rook, PieceColor::Black),
            ((H, 7), PieceKind::Rook, PieceColor::Black),
            ((A, 0), PieceKind::King, PieceColor::Black),
        ]);

        let lines = get_lines_with_check(&board, PieceColor::Black, false);
        assert_eq!(lines.len(), 2);

        assert!(get_next_moves(&board, (A, 6), &lines, false).is_empty());
    }

    #[test]
    fn kingside_castling_requires_every_condition_at_once() {
        let mut board = Board::empty(BOARD_SIZE);
        untouched(&mut board, (E, 7), PieceKind::King, PieceColor::White);
        untouched(&mut board, (H, 7), PieceKind::Rook, PieceColor::White);
        untouched(&mut board, (E, 0), PieceKind::King, PieceColor::Black);

        let moves = get_next_moves(&board, (E, 7), &[], false);
        assert!(moves.contains(&(G, 7)), "castling destination offered");

        // Touched rook.
        let mut touched_rook = board.clone();
        touched_rook.place(
            (H, 7),
            Piece::new(PieceKind::Rook, PieceColor::White).touched(),
        );
        assert!(!get_next_moves(&touched_rook, (E, 7), &[], false)
            .contains(&(G, 7)));

        // A piece between king and rook.
        let mut blocked = board.clone();
        blocked.place((F, 7), Piece::new(PieceKind::Bishop, PieceColor::White));
        assert!(!get_next_moves(&blocked, (E, 7), &[], false)
            .contains(&(G, 7)));

        // The transit square is attacked.
        let mut transit_attacked = board.clone();
        transit_attacked.place(
            (F, 0),
            Piece::new(PieceKind::Rook, PieceColor::Black).touched(),
        );
        assert!(!get_next_moves(&transit_attacked, (E, 7), &[], false)
            .contains(&(G, 7)));

        // The king is in check.
        let mut checked = board.clone();
        checked.place(
            (E, 0),
            Piece::new(PieceKind::Rook, PieceColor::Black).touched(),
        );
        checked.place(
            (A, 0),
            Piece::new(PieceKind::King, PieceColor::Black).touched(),
        );
        assert!(!get_next_moves(&checked, (E, 7), &[], false)
            .contains(&(G, 7)));
    }

    #[test]
    fn queenside_castling_checks_occupancy_up_to_the_rook() {
        let mut board = Board::empty(BOARD_SIZE);
        untouched(&mut board, (E, 7), PieceKind::King, PieceColor::White);
        untouched(&mut board, (A, 7), PieceKind::Rook, PieceColor::White);
        untouched(&mut board, (E, 0), PieceKind::King, PieceColor::Black);

        assert!(get_next_moves(&board, (E, 7), &[], false).contains(&(C, 7)));

        // The knight square blocks even though the king never crosses it.
        let mut blocked = board.clone();
        blocked.place((B, 7), Piece::new(PieceKind::Knight, PieceColor::White));
        assert!(!get_next_moves(&blocked, (E, 7), &[], false)
            .contains(&(C, 7)));
    }

    #[test]
    fn king_never_steps_onto_an_attacked_square() {
        let board = board_with(&[
            ((E, 7), PieceKind::King, PieceColor::White),
            ((D, 0), PieceKind::Rook, PieceColor::Black),
            ((A, 0), PieceKind::King, PieceColor::Black),
        ]);

        let moves = get_next_moves(&board, (E, 7), &[], false);

        assert!(!moves.contains(&(D, 7)));
        assert!(!moves.contains(&(D, 6)));
        assert!(moves.contains(&(F, 7)));
    }
}
