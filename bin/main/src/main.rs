//! # main.rs
//!
//! Command-line driver: reads a FEN from the first argument (or falls back
//! to the starting position), renders the board, lists every legal move for
//! the side to move, optionally applies a move given in coordinate notation
//! as the second argument, and reports the game result if the position is
//! terminal.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/03/2026

use std::env;

use timed::timed;

use game::moves::apply::{change_state, transform_pawn_to_figure};
use game::moves::move_gen::get_next_moves;
use game::representations::board::{Board, Pos};
use game::representations::moves::{GameResultKind, MoveData};
use game::representations::piece::{PieceColor, PieceKind};
use game::result::{get_game_result, get_lines_with_check};

use io::board_io::{format_board, format_square};
use io::fen::{fen_to_game_state, state_to_fen, GameState};

const START_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_square(text: &str, size: i8) -> Option<Pos> {
    let mut chars = text.chars();

    let file = chars.next()? as i8 - 'a' as i8;
    let rank = chars.next()?.to_digit(10)? as i8;

    if file < 0 || file >= size || rank < 1 || rank > size {
        return None;
    }

    Some((file, size - rank))
}

fn color_name(color: PieceColor) -> &'static str {
    match color {
        PieceColor::White => "White",
        PieceColor::Black => "Black",
    }
}

fn report_position(state: &GameState) {
    let board = &state.board;
    let size = board.size();

    println!("{}", format_board(board));
    println!("FEN: {}", state_to_fen(state));

    let lines_with_check =
        get_lines_with_check(board, state.active_color.opposite(), false);

    if !lines_with_check.is_empty() {
        println!(
            "Check from: {}",
            lines_with_check
                .iter()
                .filter_map(|line| line.last())
                .map(|&pos| format_square(pos, size))
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    println!("{} to move:", color_name(state.active_color));

    for pos in board.positions_of_color(state.active_color) {
        let moves = get_next_moves(board, pos, &lines_with_check, false);

        if moves.is_empty() {
            continue;
        }

        println!(
            "  {}: {}",
            format_square(pos, size),
            moves
                .iter()
                .map(|&target| format_square(target, size))
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    if let Some(result) =
        get_game_result(board, &lines_with_check, state.active_color, false)
    {
        let verdict = match result.kind {
            GameResultKind::Checkmate => match result.winner {
                Some(PieceColor::White) => "Checkmate, White wins",
                _ => "Checkmate, Black wins",
            },
            GameResultKind::Stalemate => "Stalemate",
            GameResultKind::Draw => "Draw by insufficient material",
        };

        println!("Result: {}", verdict);
    }
}

/// Applies a coordinate-notation move such as `e2e4` to the state, promoting
/// to a queen when the move carries a pawn onto its final row. Reports and
/// skips moves that are malformed or illegal in the position.
fn apply_move(state: &GameState, move_text: &str) -> Option<GameState> {
    let board = &state.board;
    let size = board.size();

    let (Some(from), Some(to)) = (
        parse_square(move_text.get(..2)?, size),
        parse_square(move_text.get(2..4)?, size),
    ) else {
        println!("Malformed move: {}", move_text);
        return None;
    };

    let Some(piece) = board.piece_at(from) else {
        println!("No piece on {}", format_square(from, size));
        return None;
    };

    if piece.color != state.active_color {
        println!("It is not {}'s turn.", color_name(piece.color));
        return None;
    }

    let lines_with_check =
        get_lines_with_check(board, state.active_color.opposite(), false);

    if !get_next_moves(board, from, &lines_with_check, false).contains(&to) {
        println!("Illegal move: {}", move_text);
        return None;
    }

    let move_data = MoveData {
        from,
        to,
        piece,
        kind: None,
    };

    let change = change_state(board, &move_data, false);

    let next_board: Board = if change.promotion_pending {
        transform_pawn_to_figure(&change.board, to, PieceKind::Queen)
    } else {
        change.board
    };

    for &pos in &change.attacked_positions {
        println!("Captured on {}", format_square(pos, size));
    }

    Some(GameState {
        board: next_board,
        active_color: state.active_color.opposite(),
        fullmove_number: state.fullmove_number
            + (state.active_color == PieceColor::Black) as u32,
    })
}

#[timed]
fn run(fen: &str, move_text: Option<&str>) {
    let state = fen_to_game_state(fen);

    report_position(&state);

    if let Some(move_text) = move_text {
        if let Some(next_state) = apply_move(&state, move_text) {
            println!();
            report_position(&next_state);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let fen = args
        .get(1)
        .map(String::as_str)
        .unwrap_or(START_FEN);

    run(fen, args.get(2).map(String::as_str));
}
