//! # piece.rs
//!
//! Defines piece representation and properties.
//!
//! This file contains the implementation of the `Piece` struct, a plain value
//! pairing a piece kind with its color and a `touched` flag. The flag records
//! whether the piece has ever been the subject of a move; it is consulted
//! exclusively for castling rights and the pawn's two-square first move and
//! is never reset.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/03/2026

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Bishops, rooks and queens attack along full rays; everything else
    /// leaps or steps.
    pub fn is_long_range(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
    pub touched: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: PieceColor) -> Piece {
        Piece {
            kind,
            color,
            touched: false,
        }
    }

    /// The same piece after it has been moved at least once.
    pub fn touched(self) -> Piece {
        Piece {
            touched: true,
            ..self
        }
    }
}
