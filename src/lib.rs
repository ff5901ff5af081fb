pub mod board;
pub mod game;

pub use board::{
    AppliedMove, Board, BoardBuilder, CandidateMove, Color, EngineError, PieceId, PieceKind,
    Position, Situation,
};
pub use game::{Game, GameEvent, MoveOutcome};
