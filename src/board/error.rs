//! Error types for rules-engine operations.

use std::fmt;

use super::types::{Color, PieceId, PieceKind, Position};

/// A move or board that does not agree with the live game state.
///
/// These are contract violations by the caller (stale or foreign move
/// objects) or malformed boards; they are never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    /// No live piece carries this id
    UnknownPiece(PieceId),
    /// The piece exists but no longer matches the snapshot in the move
    StalePiece(PieceId),
    /// A side has no king on the board
    MissingKing(Color),
    /// The move is not among the piece's current legal moves
    IllegalMove { piece: PieceId, target: Position },
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inconsistency::UnknownPiece(id) => write!(f, "no live piece with id {id}"),
            Inconsistency::StalePiece(id) => {
                write!(f, "piece {id} has changed since the move was generated")
            }
            Inconsistency::MissingKing(color) => write!(f, "{color} has no king on the board"),
            Inconsistency::IllegalMove { piece, target } => write!(
                f,
                "piece {piece} cannot move to ({}, {})",
                target.row, target.column
            ),
        }
    }
}

impl std::error::Error for Inconsistency {}

/// Error type for board construction and configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// Row or column count outside the supported range
    InvalidDimensions { rows: i32, columns: i32 },
    /// A piece was placed outside the board
    OutOfBounds { position: Position },
    /// Two pieces were placed on the same square
    SquareOccupied { position: Position },
    /// A side must have exactly one king
    KingCount { color: Color, found: usize },
    /// A double step was recorded for a square without a pawn
    NotAPawn { position: Position },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::InvalidDimensions { rows, columns } => {
                write!(f, "unsupported board size {rows}x{columns}")
            }
            SetupError::OutOfBounds { position } => write!(
                f,
                "square ({}, {}) is outside the board",
                position.row, position.column
            ),
            SetupError::SquareOccupied { position } => write!(
                f,
                "square ({}, {}) is already occupied",
                position.row, position.column
            ),
            SetupError::KingCount { color, found } => {
                write!(f, "{color} needs exactly one king, found {found}")
            }
            SetupError::NotAPawn { position } => write!(
                f,
                "no pawn on ({}, {}) to have double-stepped",
                position.row, position.column
            ),
        }
    }
}

impl std::error::Error for SetupError {}

/// Error type for engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board state and the request disagree; see [`Inconsistency`]
    InternalInconsistency(Inconsistency),
    /// A promotion move was applied before its piece was chosen
    InvalidPromotionState { piece: PieceId },
    /// A pawn may only promote to a queen, rook, bishop or knight
    InvalidPromotionPiece { kind: PieceKind },
    /// The game has ended in checkmate or stalemate
    GameOver,
    /// The board could not be set up
    Setup(SetupError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InternalInconsistency(inner) => {
                write!(f, "internal inconsistency: {inner}")
            }
            EngineError::InvalidPromotionState { piece } => {
                write!(f, "promotion of piece {piece} has no piece chosen")
            }
            EngineError::InvalidPromotionPiece { kind } => {
                write!(f, "cannot promote to a {kind}")
            }
            EngineError::GameOver => write!(f, "the game is over"),
            EngineError::Setup(inner) => write!(f, "invalid setup: {inner}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InternalInconsistency(inner) => Some(inner),
            EngineError::Setup(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<Inconsistency> for EngineError {
    fn from(inner: Inconsistency) -> Self {
        EngineError::InternalInconsistency(inner)
    }
}

impl From<SetupError> for EngineError {
    fn from(inner: SetupError) -> Self {
        EngineError::Setup(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> PieceId {
        PieceId { slot: 3, game: 7 }
    }

    #[test]
    fn test_unknown_piece_mentions_id() {
        let err = EngineError::from(Inconsistency::UnknownPiece(id()));
        assert!(err.to_string().contains("#7/3"));
        assert!(err.to_string().starts_with("internal inconsistency"));
    }

    #[test]
    fn test_missing_king_names_color() {
        let err = Inconsistency::MissingKing(Color::Black);
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_promotion_errors_are_distinct() {
        let pending = EngineError::InvalidPromotionState { piece: id() };
        let wrong = EngineError::InvalidPromotionPiece {
            kind: PieceKind::King,
        };
        assert_ne!(pending, wrong);
        assert!(wrong.to_string().contains("king"));
    }

    #[test]
    fn test_setup_error_is_source() {
        let err = EngineError::from(SetupError::InvalidDimensions {
            rows: 3,
            columns: 8,
        });
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("3x8"));
    }

    #[test]
    fn test_error_clone() {
        let err = EngineError::GameOver;
        assert_eq!(err.clone(), err);
    }
}
