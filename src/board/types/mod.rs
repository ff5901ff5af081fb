//! Core rules-engine types.
//!
//! - `Position` and `Direction` - coordinates and move vectors
//! - `Piece`, `PieceSnapshot`, `PieceKind`, `Color` - pieces and their identity
//! - `CandidateMove`, `AppliedMove`, `Situation` - moves and their results

mod moves;
mod piece;
mod position;

pub use moves::{AppliedKind, AppliedMove, CandidateKind, CandidateMove, Outcome, Situation};
pub use piece::{Color, Piece, PieceId, PieceKind, PieceSnapshot};
pub use position::{
    Direction, Position, BISHOP_DIRECTIONS, BLACK_PAWN_ATTACKS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS,
    ROOK_DIRECTIONS, WHITE_PAWN_ATTACKS,
};
