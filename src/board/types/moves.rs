//! Proposed and committed moves, plus the post-move situation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, PieceId, PieceKind, PieceSnapshot};
use super::position::Position;

/// What a proposed move does besides relocating its piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CandidateKind {
    Normal,
    Take(PieceId),
    TakeEnPassant(PieceId),
    /// `kind: None` means the promotion piece still has to be chosen.
    /// `take` is set when the promoting pawn captures on the last rank.
    Promotion {
        kind: Option<PieceKind>,
        take: Option<PieceId>,
    },
    /// Carries the rook that moves alongside the king.
    Castling(PieceId),
}

impl CandidateKind {
    /// The piece this move removes from the board, if any.
    #[must_use]
    pub fn captured(self) -> Option<PieceId> {
        match self {
            CandidateKind::Take(id) | CandidateKind::TakeEnPassant(id) => Some(id),
            CandidateKind::Promotion { take, .. } => take,
            CandidateKind::Normal | CandidateKind::Castling(_) => None,
        }
    }
}

/// A move a piece may make from the current position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CandidateMove {
    pub piece: PieceSnapshot,
    pub target_position: Position,
    pub kind: CandidateKind,
}

impl CandidateMove {
    #[inline]
    #[must_use]
    pub const fn new(piece: PieceSnapshot, target_position: Position, kind: CandidateKind) -> Self {
        CandidateMove {
            piece,
            target_position,
            kind,
        }
    }

    /// True while this is a promotion whose piece has not been chosen.
    #[must_use]
    pub fn is_pending_promotion(&self) -> bool {
        matches!(self.kind, CandidateKind::Promotion { kind: None, .. })
    }

    /// The same move with its promotion piece fixed to `kind`.
    ///
    /// Non-promotion moves are returned unchanged.
    #[must_use]
    pub fn with_promotion(self, kind: PieceKind) -> Self {
        match self.kind {
            CandidateKind::Promotion { take, .. } => CandidateMove {
                kind: CandidateKind::Promotion {
                    kind: Some(kind),
                    take,
                },
                ..self
            },
            _ => self,
        }
    }

    /// The move with any promotion choice cleared, i.e. in the form the
    /// generator produces it.
    #[must_use]
    pub(crate) fn unresolved(self) -> Self {
        match self.kind {
            CandidateKind::Promotion { take, .. } => CandidateMove {
                kind: CandidateKind::Promotion { kind: None, take },
                ..self
            },
            _ => self,
        }
    }
}

/// What an applied move did to a second piece. Snapshots are taken after the
/// move was carried out.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AppliedKind {
    Normal,
    Taken(PieceSnapshot),
    Promotion {
        promoted: PieceSnapshot,
        taken: Option<PieceSnapshot>,
    },
    Castling(PieceSnapshot),
}

/// A committed move as recorded in the board history.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppliedMove {
    /// The moving piece as it was before the move.
    pub piece: PieceSnapshot,
    pub target_position: Position,
    pub situation: Situation,
    pub kind: AppliedKind,
}

impl AppliedMove {
    /// True if this was a pawn advancing two rows.
    #[must_use]
    pub fn is_double_step(&self) -> bool {
        self.piece.kind == PieceKind::Pawn
            && (self.target_position.row - self.piece.position.row).abs() == 2
    }
}

/// Classification of the position for the side about to move.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Situation {
    #[default]
    Normal,
    Check {
        king: PieceId,
        attackers: Vec<PieceSnapshot>,
    },
    Checkmate {
        king: PieceId,
        side: Color,
    },
    Stalemate,
}

impl Situation {
    /// The game result this situation ends the game with, if any.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match *self {
            Situation::Checkmate { king, side } => Some(Outcome::Checkmate { king, side }),
            Situation::Stalemate => Some(Outcome::Stalemate),
            Situation::Normal | Situation::Check { .. } => None,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}

/// How a finished game ended. `side` is the checkmated color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Checkmate { king: PieceId, side: Color },
    Stalemate,
}
