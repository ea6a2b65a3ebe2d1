pub mod fen;
pub mod board_io;
