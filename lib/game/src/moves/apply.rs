//! # apply.rs
//!
//! Applies a move to a board and produces the successor position.
//!
//! Boards are values here: nothing in this file mutates its input, every
//! application clones and returns a fresh board. Alongside the new board the
//! caller receives the squares whose pieces were captured (for captured-piece
//! accounting) and a flag telling it a pawn now stands on its promotion row
//! and must be exchanged before play continues.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/03/2026

use crate::constants::*;
use crate::representations::board::{Board, Pos};
use crate::representations::moves::MoveData;
use crate::representations::piece::{Piece, PieceKind};

/// Outcome of applying one move.
pub struct StateChange {
    pub board: Board,

    /// Squares whose occupants were removed by this move. Holds the
    /// destination for ordinary captures and the bypassed pawn's square for
    /// en passant.
    pub attacked_positions: Vec<Pos>,

    /// Set when a pawn reached its final row and awaits exchange through
    /// [`transform_pawn_to_figure`].
    pub promotion_pending: bool,
}

fn castle(board: &mut Board, move_data: &MoveData, reversed: bool) {
    let (from, to) = (move_data.from, move_data.to);
    let row = from.1;

    let kingside = (to.0 > from.0) != reversed;

    let corner_file = if to.0 > from.0 { board.size() - 1 } else { 0 };

    let (king_file, rook_file) = match (kingside, reversed) {
        (true, false) => (KINGSIDE_KING_FILE, KINGSIDE_ROOK_FILE),
        (false, false) => (QUEENSIDE_KING_FILE, QUEENSIDE_ROOK_FILE),
        (true, true) => {
            (KINGSIDE_KING_FILE_REVERSED, KINGSIDE_ROOK_FILE_REVERSED)
        }
        (false, true) => {
            (QUEENSIDE_KING_FILE_REVERSED, QUEENSIDE_ROOK_FILE_REVERSED)
        }
    };

    board.clear(from);
    board.clear((corner_file, row));

    board.place((king_file, row), move_data.piece.touched());
    board.place(
        (rook_file, row),
        Piece::new(PieceKind::Rook, move_data.piece.color).touched(),
    );
}

/// Applies `move_data` to `board`. Handles the four special transitions on
/// top of the plain relocation: ordinary captures, both castlings, en
/// passant, and the double pawn step that opens a one-ply en-passant window
/// on the square it jumped over.
pub fn change_state(
    board: &Board,
    move_data: &MoveData,
    reversed: bool,
) -> StateChange {
    let (from, to) = (move_data.from, move_data.to);
    let piece = move_data.piece;

    // En-passant windows last a single ply: whatever marker the previous
    // move left is stale now.
    let mut next_board = board.without_en_passant_targets();

    let mut attacked_positions = Vec::new();

    if piece.kind == PieceKind::King && (to.0 - from.0).abs() > 1 {
        castle(&mut next_board, move_data, reversed);

        return StateChange {
            board: next_board,
            attacked_positions,
            promotion_pending: false,
        };
    }

    if next_board.has_piece(to) {
        attacked_positions.push(to);
    }

    let en_passant_capture = piece.kind == PieceKind::Pawn
        && to.0 != from.0
        && !board.has_piece(to)
        && board.is_en_passant_target(to);

    if en_passant_capture {
        let bypassed = (to.0, from.1);

        next_board.clear(bypassed);
        attacked_positions.push(bypassed);
    }

    next_board.clear(from);
    next_board.place(to, piece.touched());

    if piece.kind == PieceKind::Pawn && (to.1 - from.1).abs() == 2 {
        next_board.mark_en_passant_target((from.0, (from.1 + to.1) / 2));
    }

    let promotion_pending = piece.kind == PieceKind::Pawn
        && (to.1 == 0 || to.1 == board.size() - 1);

    StateChange {
        board: next_board,
        attacked_positions,
        promotion_pending,
    }
}

/// Exchanges the pawn standing on `pos` for `kind`, keeping its color. The
/// replacement counts as touched.
pub fn transform_pawn_to_figure(
    board: &Board,
    pos: Pos,
    kind: PieceKind,
) -> Board {
    let mut next_board = board.clone();

    if let Some(pawn) = board.piece_at(pos) {
        next_board.place(pos, Piece::new(kind, pawn.color).touched());
    }

    next_board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representations::piece::PieceColor;

    fn move_of(board: &Board, from: Pos, to: Pos) -> MoveData {
        MoveData {
            from,
            to,
            piece: board.piece_at(from).expect("no piece on from-square"),
            kind: None,
        }
    }

    #[test]
    fn plain_move_leaves_the_input_board_untouched() {
        let board = Board::initial();

        let change = change_state(&board, &move_of(&board, (E, 6), (E, 4)), false);

        assert!(board.has_piece((E, 6)), "input board must stay as it was");
        assert!(!change.board.has_piece((E, 6)));
        assert!(change.board.has_piece((E, 4)));
        assert!(change.board.piece_at((E, 4)).unwrap().touched);
        assert!(change.attacked_positions.is_empty());
    }

    #[test]
    fn capture_reports_the_destination_square() {
        let mut board = Board::initial();
        board.place(
            (E, 5),
            Piece::new(PieceKind::Knight, PieceColor::Black).touched(),
        );

        let change = change_state(&board, &move_of(&board, (D, 6), (E, 5)), false);

        assert_eq!(change.attacked_positions, vec![(E, 5)]);
        assert_eq!(
            change.board.kind_at((E, 5)),
            Some(PieceKind::Pawn),
        );
    }

    #[test]
    fn double_step_marks_the_bypassed_square() {
        let board = Board::initial();

        let change = change_state(&board, &move_of(&board, (E, 6), (E, 4)), false);

        assert!(change.board.is_en_passant_target((E, 5)));
    }

    #[test]
    fn en_passant_window_expires_after_one_application() {
        let board = Board::initial();

        let first = change_state(&board, &move_of(&board, (E, 6), (E, 4)), false);
        let second = change_state(
            &first.board,
            &move_of(&first.board, (B, 1), (B, 3)),
            false,
        );

        assert!(!second.board.is_en_passant_target((E, 5)));
        assert!(second.board.is_en_passant_target((B, 2)));
    }

    #[test]
    fn en_passant_capture_removes_the_bypassed_pawn() {
        let mut board = Board::empty(BOARD_SIZE);
        board.place(
            (E, 3),
            Piece::new(PieceKind::Pawn, PieceColor::White).touched(),
        );
        board.place(
            (D, 3),
            Piece::new(PieceKind::Pawn, PieceColor::Black).touched(),
        );
        board.mark_en_passant_target((D, 2));

        let change = change_state(&board, &move_of(&board, (E, 3), (D, 2)), false);

        assert!(!change.board.has_piece((D, 3)), "bypassed pawn removed");
        assert_eq!(change.board.kind_at((D, 2)), Some(PieceKind::Pawn));
        assert_eq!(change.attacked_positions, vec![(D, 3)]);
    }

    #[test]
    fn kingside_castling_places_king_and_rook_on_their_files() {
        let mut board = Board::empty(BOARD_SIZE);
        board.place((E, 7), Piece::new(PieceKind::King, PieceColor::White));
        board.place((H, 7), Piece::new(PieceKind::Rook, PieceColor::White));

        let change = change_state(&board, &move_of(&board, (E, 7), (G, 7)), false);

        assert_eq!(change.board.kind_at((G, 7)), Some(PieceKind::King));
        assert_eq!(change.board.kind_at((F, 7)), Some(PieceKind::Rook));
        assert!(!change.board.has_piece((E, 7)));
        assert!(!change.board.has_piece((H, 7)));
        assert!(change.board.piece_at((G, 7)).unwrap().touched);
    }

    #[test]
    fn queenside_castling_clears_the_far_corner() {
        let mut board = Board::empty(BOARD_SIZE);
        board.place((E, 0), Piece::new(PieceKind::King, PieceColor::Black));
        board.place((A, 0), Piece::new(PieceKind::Rook, PieceColor::Black));

        let change = change_state(&board, &move_of(&board, (E, 0), (C, 0)), false);

        assert_eq!(change.board.kind_at((C, 0)), Some(PieceKind::King));
        assert_eq!(change.board.kind_at((D, 0)), Some(PieceKind::Rook));
        assert!(!change.board.has_piece((A, 0)));
    }

    #[test]
    fn promotion_is_signalled_and_completed_separately() {
        let mut board = Board::empty(BOARD_SIZE);
        board.place(
            (A, 1),
            Piece::new(PieceKind::Pawn, PieceColor::White).touched(),
        );

        let change = change_state(&board, &move_of(&board, (A, 1), (A, 0)), false);

        assert!(change.promotion_pending);
        assert_eq!(change.board.kind_at((A, 0)), Some(PieceKind::Pawn));

        let promoted =
            transform_pawn_to_figure(&change.board, (A, 0), PieceKind::Queen);

        assert_eq!(promoted.kind_at((A, 0)), Some(PieceKind::Queen));
        assert_eq!(
            promoted.color_at((A, 0)),
            Some(PieceColor::White),
        );
    }
}
