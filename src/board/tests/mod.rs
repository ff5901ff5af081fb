//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `attacks.rs` - Ray casting and attack detection
//! - `movegen.rs` - Piece movement and king-safety filtering
//! - `special_moves.rs` - Castling, en passant and promotion
//! - `situation.rs` - Check, checkmate and stalemate classification
//! - `lifecycle.rs` - Board setup, state transitions and error handling
//! - `proptest.rs` - Property-based tests

mod lifecycle;
mod proptest;

use crate::board::{
    AppliedMove, Board, BoardBuilder, CandidateMove, Color, PieceId, PieceKind, Position,
};

/// Square from file/rank notation, e.g. "e4" -> row 3, column 4.
pub(super) fn sq(name: &str) -> Position {
    let bytes = name.as_bytes();
    assert_eq!(bytes.len(), 2, "bad square name {name}");
    Position::new(i32::from(bytes[1] - b'1'), i32::from(bytes[0] - b'a'))
}

pub(super) fn id_at(board: &Board, square: &str) -> PieceId {
    board
        .piece_at(sq(square))
        .unwrap_or_else(|| panic!("no piece on {square}"))
        .id()
}

pub(super) fn moves_from(board: &Board, square: &str) -> Vec<CandidateMove> {
    board.legal_moves(id_at(board, square)).unwrap()
}

/// Sorted destination squares of the piece on `square`.
pub(super) fn targets(board: &Board, square: &str) -> Vec<Position> {
    let mut targets: Vec<Position> = moves_from(board, square)
        .iter()
        .map(|m| m.target_position)
        .collect();
    targets.sort();
    targets
}

pub(super) fn squares(names: &[&str]) -> Vec<Position> {
    let mut squares: Vec<Position> = names.iter().map(|n| sq(n)).collect();
    squares.sort();
    squares
}

pub(super) fn find_move(board: &Board, from: &str, to: &str) -> CandidateMove {
    moves_from(board, from)
        .into_iter()
        .find(|m| m.target_position == sq(to))
        .unwrap_or_else(|| panic!("expected move {from}-{to} not found"))
}

pub(super) fn play(board: &mut Board, from: &str, to: &str) -> AppliedMove {
    let mv = find_move(board, from, to);
    board.apply_move(&mv).unwrap()
}

/// Kings on e1 and e8 plus the given pieces.
pub(super) fn with_kings(pieces: &[(&str, Color, PieceKind)]) -> Board {
    pieces
        .iter()
        .fold(
            BoardBuilder::new()
                .piece(sq("e1"), Color::White, PieceKind::King)
                .piece(sq("e8"), Color::Black, PieceKind::King),
            |builder, &(square, color, kind)| builder.piece(sq(square), color, kind),
        )
        .build()
        .unwrap()
}

pub(super) fn started() -> Board {
    let mut board = Board::new();
    board.generate();
    board
}
