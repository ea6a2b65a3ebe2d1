//! # constants.rs
//!
//! Defines game-wide constants and configuration values.
//!
//! This file contains constant definitions for the board dimensions, file
//! indices, castling target squares, and the standard piece complement used
//! for captured-piece accounting. These constants are used throughout the
//! codebase to ensure consistency and allow for easy modification of game
//! parameters.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/03/2026

pub const BOARD_SIZE: i8 = 8;

pub const A: i8 = 0;
pub const B: i8 = 1;
pub const C: i8 = 2;
pub const D: i8 = 3;
pub const E: i8 = 4;
pub const F: i8 = 5;
pub const G: i8 = 6;
pub const H: i8 = 7;

pub const KING_HOME_FILE: i8 = E;

/* Post-castle files for king and rook, normal and reversed orientation.     */

pub const KINGSIDE_KING_FILE : i8 = G;
pub const KINGSIDE_ROOK_FILE : i8 = F;
pub const QUEENSIDE_KING_FILE: i8 = C;
pub const QUEENSIDE_ROOK_FILE: i8 = D;

pub const KINGSIDE_KING_FILE_REVERSED : i8 = B;
pub const KINGSIDE_ROOK_FILE_REVERSED : i8 = C;
pub const QUEENSIDE_KING_FILE_REVERSED: i8 = F;
pub const QUEENSIDE_ROOK_FILE_REVERSED: i8 = E;

/* Standard starting complement, used when counting captured pieces.         */

pub const PAWNS_COUNT  : usize = 8;
pub const KNIGHTS_COUNT: usize = 2;
pub const BISHOPS_COUNT: usize = 2;
pub const ROOKS_COUNT  : usize = 2;
pub const QUEENS_COUNT : usize = 1;
pub const KINGS_COUNT  : usize = 1;
