//! Fluent builder for constructing arbitrary positions.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Position};
//!
//! let board = BoardBuilder::new()
//!     .piece(Position::new(0, 4), Color::White, PieceKind::King)
//!     .piece(Position::new(7, 4), Color::Black, PieceKind::King)
//!     .piece(Position::new(1, 0), Color::White, PieceKind::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::config::BoardConfig;
use super::error::{EngineError, SetupError};
use super::pieces::PieceSet;
use super::state::{Board, GameState};
use super::types::{
    AppliedKind, AppliedMove, Color, Direction, PieceKind, PieceSnapshot, Position, Situation,
};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 32 pieces of the standard starting position, on the first eight
/// files of the outermost two rows of each side.
pub(crate) fn standard_layout(config: BoardConfig) -> Vec<(Position, Color, PieceKind)> {
    let mut layout = Vec::with_capacity(32);
    for color in Color::BOTH {
        let back = color.back_rank(config.row_count());
        let pawns = back + color.pawn_direction();
        for (column, &kind) in BACK_RANK.iter().enumerate() {
            layout.push((Position::new(back, column as i32), color, kind));
        }
        for column in 0..BACK_RANK.len() as i32 {
            layout.push((Position::new(pawns, column), color, PieceKind::Pawn));
        }
    }
    layout
}

/// Whether a piece standing on `position` would still be on its starting
/// square in the standard layout.
fn on_home_square(config: BoardConfig, position: Position, color: Color, kind: PieceKind) -> bool {
    standard_layout(config)
        .into_iter()
        .any(|(home, c, k)| home == position && c == color && k == kind)
}

#[derive(Clone, Debug)]
struct Placed {
    position: Position,
    color: Color,
    kind: PieceKind,
    has_moved: Option<bool>,
}

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    config: BoardConfig,
    pieces: Vec<Placed>,
    double_step: Option<Position>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty 8x8 board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            config: BoardConfig::default(),
            pieces: Vec::new(),
            double_step: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        Self::new().with_standard_layout()
    }

    /// Use different board dimensions. Call before placing pieces.
    #[must_use]
    pub fn config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_standard_layout(mut self) -> Self {
        for (position, color, kind) in standard_layout(self.config) {
            self = self.piece_with_state(position, color, kind, false);
        }
        self
    }

    /// Place a piece. It counts as unmoved only if it stands on its
    /// standard starting square.
    #[must_use]
    pub fn piece(mut self, position: Position, color: Color, kind: PieceKind) -> Self {
        self.pieces.push(Placed {
            position,
            color,
            kind,
            has_moved: None,
        });
        self
    }

    /// Place a piece with an explicit `has_moved` flag.
    #[must_use]
    pub fn piece_with_state(
        mut self,
        position: Position,
        color: Color,
        kind: PieceKind,
        has_moved: bool,
    ) -> Self {
        self.pieces.push(Placed {
            position,
            color,
            kind,
            has_moved: Some(has_moved),
        });
        self
    }

    /// Remove whatever was placed on `position`.
    #[must_use]
    pub fn clear(mut self, position: Position) -> Self {
        self.pieces.retain(|p| p.position != position);
        self
    }

    /// Record that the pawn on `position` arrived there by a double step on
    /// the previous move, so it can be taken en passant.
    #[must_use]
    pub fn last_double_step(mut self, position: Position) -> Self {
        self.double_step = Some(position);
        self
    }

    /// Validate the setup and produce a board in progress.
    pub fn build(self) -> Result<Board, EngineError> {
        let config = self.config;
        for (i, placed) in self.pieces.iter().enumerate() {
            if !config.contains(placed.position) {
                return Err(SetupError::OutOfBounds {
                    position: placed.position,
                }
                .into());
            }
            if self.pieces[..i].iter().any(|p| p.position == placed.position) {
                return Err(SetupError::SquareOccupied {
                    position: placed.position,
                }
                .into());
            }
        }
        for color in Color::BOTH {
            let found = self
                .pieces
                .iter()
                .filter(|p| p.color == color && p.kind == PieceKind::King)
                .count();
            if found != 1 {
                return Err(SetupError::KingCount { color, found }.into());
            }
        }

        let mut pieces = PieceSet::new();
        for placed in &self.pieces {
            let has_moved = placed.has_moved.unwrap_or_else(|| {
                !on_home_square(config, placed.position, placed.color, placed.kind)
            });
            pieces.insert(placed.color, placed.kind, placed.position, has_moved);
        }

        let history = match self.double_step {
            Some(landed) => vec![double_step_record(&pieces, landed)?],
            None => Vec::new(),
        };

        Ok(Board {
            config,
            pieces,
            history,
            situation: Situation::Normal,
            state: GameState::InProgress,
        })
    }
}

/// History entry for a pawn that just double-stepped onto `landed`.
fn double_step_record(pieces: &PieceSet, landed: Position) -> Result<AppliedMove, EngineError> {
    let pawn = pieces
        .at(landed)
        .filter(|p| p.kind() == PieceKind::Pawn)
        .ok_or(SetupError::NotAPawn { position: landed })?;
    let back = Direction::new(-pawn.color().pawn_direction(), 0);
    let before = PieceSnapshot {
        position: landed.offset(back, 2),
        has_moved: false,
        ..pawn.snapshot()
    };
    Ok(AppliedMove {
        piece: before,
        target_position: landed,
        situation: Situation::Normal,
        kind: AppliedKind::Normal,
    })
}
