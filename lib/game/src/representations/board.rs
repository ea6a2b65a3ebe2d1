//! # board.rs
//!
//! Defines the board structure and cell-level queries.
//!
//! This file contains the implementation of the `Board` struct, a square grid
//! of cells each holding an optional piece and an en-passant marker. The
//! board is a plain value: every modifying operation elsewhere in the crate
//! builds a fresh `Board`, so callers are free to probe hypothetical
//! positions without any rollback. All square-taking queries answer
//! `false`/`None` for out-of-bounds input, since walking off the edge is the
//! ordinary terminating condition for ray scans, not an error.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/03/2026

use crate::constants::*;
use crate::representations::piece::{Piece, PieceColor, PieceKind};

/// A board coordinate as `(file, row)`. Row 0 is the top row (rank 8 in FEN
/// terms), matching the reading order of a FEN placement field. Signed so
/// that ray walking may step outside the board.
pub type Pos = (i8, i8);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub piece: Option<Piece>,

    /// Set on the square a pawn skipped over on its two-square first move.
    /// Lives for exactly one ply; applying any move clears every flag
    /// before a new double-step sets a fresh one.
    pub en_passant_target: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// An empty board of the given side length.
    pub fn empty(size: i8) -> Board {
        assert!(size > 0, "Board size {size} must be positive.");

        Board {
            cells: vec![vec![Cell::default(); size as usize]; size as usize],
        }
    }

    /// The standard starting position, every piece untouched.
    pub fn initial() -> Board {
        let mut board = Board::empty(BOARD_SIZE);

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (i, &kind) in back_rank.iter().enumerate() {
            let file = i as i8;

            board.place((file, 0), Piece::new(kind, PieceColor::Black));
            board.place((file, 1), Piece::new(
                PieceKind::Pawn,
                PieceColor::Black,
            ));

            board.place((file, BOARD_SIZE - 2), Piece::new(
                PieceKind::Pawn,
                PieceColor::White,
            ));
            board.place((file, BOARD_SIZE - 1), Piece::new(
                kind,
                PieceColor::White,
            ));
        }

        board
    }

    pub fn size(&self) -> i8 {
        self.cells.len() as i8
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.0 >= 0
            && pos.0 < self.size()
            && pos.1 >= 0
            && pos.1 < self.size()
    }

    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        if !self.in_bounds(pos) {
            return None;
        }

        Some(&self.cells[pos.1 as usize][pos.0 as usize])
    }

    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        self.cell(pos).and_then(|cell| cell.piece)
    }

    pub fn has_piece(&self, pos: Pos) -> bool {
        self.piece_at(pos).is_some()
    }

    pub fn color_at(&self, pos: Pos) -> Option<PieceColor> {
        self.piece_at(pos).map(|piece| piece.color)
    }

    pub fn kind_at(&self, pos: Pos) -> Option<PieceKind> {
        self.piece_at(pos).map(|piece| piece.kind)
    }

    pub fn is_en_passant_target(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(|cell| cell.en_passant_target)
    }

    /// Whether `target` holds a piece of the opposite color to the piece at
    /// `pos`. False when either square is empty or out of bounds.
    pub fn is_enemy(&self, pos: Pos, target: Pos) -> bool {
        match (self.color_at(pos), self.color_at(target)) {
            (Some(color), Some(target_color)) => color != target_color,
            _ => false,
        }
    }

    /// Whether `target` holds a piece of the same color as the piece at
    /// `pos`. False when either square is empty or out of bounds.
    pub fn is_ally(&self, pos: Pos, target: Pos) -> bool {
        match (self.color_at(pos), self.color_at(target)) {
            (Some(color), Some(target_color)) => color == target_color,
            _ => false,
        }
    }

    pub fn is_enemy_king(&self, pos: Pos, target: Pos) -> bool {
        self.kind_at(target) == Some(PieceKind::King)
            && self.is_enemy(pos, target)
    }

    /// Position of the king of `color`, if the position holds one. A board
    /// with zero or several kings of one color is outside the reachable
    /// state space and callers get whichever answer the scan produces.
    pub fn find_king(&self, color: PieceColor) -> Option<Pos> {
        self.pieces()
            .into_iter()
            .find(|(_, piece)| {
                piece.kind == PieceKind::King && piece.color == color
            })
            .map(|(pos, _)| pos)
    }

    /// Every square holding a piece of `color`.
    pub fn positions_of_color(&self, color: PieceColor) -> Vec<Pos> {
        self.pieces()
            .into_iter()
            .filter(|(_, piece)| piece.color == color)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Every square holding a piece hostile to the piece at `pos`. Empty
    /// when `pos` itself is empty.
    pub fn enemy_positions(&self, pos: Pos) -> Vec<Pos> {
        match self.color_at(pos) {
            Some(color) => self.positions_of_color(color.opposite()),
            None => Vec::new(),
        }
    }

    /// Flat listing of every occupied square, in reading order. This is the
    /// figure-list view presentation layers consume.
    pub fn pieces(&self) -> Vec<(Pos, Piece)> {
        let mut found = Vec::new();

        for (j, row) in self.cells.iter().enumerate() {
            for (i, cell) in row.iter().enumerate() {
                if let Some(piece) = cell.piece {
                    found.push(((i as i8, j as i8), piece));
                }
            }
        }

        found
    }

    /// The board as seen from the other side: both axes flipped.
    pub fn reversed(&self) -> Board {
        let mut cells = self.cells.clone();
        cells.reverse();

        for row in cells.iter_mut() {
            row.reverse();
        }

        Board { cells }
    }

    pub fn place(&mut self, pos: Pos, piece: Piece) {
        assert!(
            self.in_bounds(pos),
            "Cannot place a piece outside the board at {pos:?}."
        );

        self.cells[pos.1 as usize][pos.0 as usize].piece = Some(piece);
    }

    pub fn clear(&mut self, pos: Pos) {
        if self.in_bounds(pos) {
            self.cells[pos.1 as usize][pos.0 as usize] = Cell::default();
        }
    }

    pub fn mark_en_passant_target(&mut self, pos: Pos) {
        assert!(
            self.in_bounds(pos),
            "Cannot mark a square outside the board at {pos:?}."
        );

        self.cells[pos.1 as usize][pos.0 as usize].en_passant_target = true;
    }

    /// A copy with every en-passant marker dropped. The capture window is
    /// one ply wide, so every move application starts from this.
    pub fn without_en_passant_targets(&self) -> Board {
        let mut board = self.clone();

        for row in board.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell.en_passant_target = false;
            }
        }

        board
    }
}
