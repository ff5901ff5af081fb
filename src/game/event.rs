//! Messages passed from the engine to the presentation layer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{AppliedMove, BoardSnapshot, CandidateMove, PieceId};

/// Result of choosing a move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    /// The move promotes a pawn; pick its piece with
    /// [`Game::resolve_promotion`](super::Game::resolve_promotion).
    PendingPromotion(CandidateMove),
    Applied(AppliedMove),
}

/// Everything the engine reports, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameEvent {
    /// A new game was set up
    NewGame(BoardSnapshot),
    /// Legal moves of a selected piece
    LegalMoves {
        piece: PieceId,
        moves: Vec<CandidateMove>,
    },
    /// A promotion move is waiting for its piece choice
    PromotionPending(CandidateMove),
    /// A move was committed to the board
    MoveApplied(AppliedMove),
}
