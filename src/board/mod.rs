//! Chess board state and rules.
//!
//! Pieces are kept in an arena and addressed by [`PieceId`]. Move generation
//! casts rays over the piece placement, filters out moves that would expose
//! the own king, and every applied move is followed by a fresh
//! [`Situation`] for the side to move next. Castling, en passant and
//! promotion (with a deferred piece choice) are supported.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, PieceKind};
//!
//! let mut board = Board::new();
//! board.generate();
//! let knight = board
//!     .pieces()
//!     .find(|p| p.kind() == PieceKind::Knight && p.color() == Color::White)
//!     .map(|p| p.id())
//!     .unwrap();
//! let moves = board.legal_moves(knight).unwrap();
//! println!("A starting knight has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
mod config;
mod error;
mod movegen;
mod pieces;
mod situation;
mod snapshot;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attacks::AttackAnalyzer;
pub use builder::BoardBuilder;
pub use config::BoardConfig;
pub use error::{EngineError, Inconsistency, SetupError};
pub use movegen::MoveGenerator;
pub use pieces::{Hypothesis, Placement};
pub use situation::SituationEvaluator;
pub use snapshot::BoardSnapshot;
pub use state::{Board, GameState};
pub use types::{
    AppliedKind, AppliedMove, CandidateKind, CandidateMove, Color, Direction, Outcome, Piece,
    PieceId, PieceKind, PieceSnapshot, Position, Situation, BISHOP_DIRECTIONS, BLACK_PAWN_ATTACKS,
    KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS, WHITE_PAWN_ATTACKS,
};
