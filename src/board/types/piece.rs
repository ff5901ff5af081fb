//! Piece identity, kinds and colors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::position::{
    Direction, Position, BISHOP_DIRECTIONS, BLACK_PAWN_ATTACKS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS,
    ROOK_DIRECTIONS, WHITE_PAWN_ATTACKS,
};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to, queen first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Returns true if this piece is a slider (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Directions this kind moves along. Pawns are handled separately.
    #[must_use]
    pub fn directions(self) -> &'static [Direction] {
        match self {
            PieceKind::Knight => &KNIGHT_OFFSETS,
            PieceKind::Bishop => &BISHOP_DIRECTIONS,
            PieceKind::Rook => &ROOK_DIRECTIONS,
            PieceKind::Queen | PieceKind::King => &QUEEN_DIRECTIONS,
            PieceKind::Pawn => &[],
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    #[must_use]
    pub fn pawn_attacks(self) -> &'static [Direction; 2] {
        match self {
            Color::White => &WHITE_PAWN_ATTACKS,
            Color::Black => &BLACK_PAWN_ATTACKS,
        }
    }

    /// Back rank row for this color on a board with `row_count` rows.
    #[inline]
    #[must_use]
    pub const fn back_rank(self, row_count: i32) -> i32 {
        match self {
            Color::White => 0,
            Color::Black => row_count - 1,
        }
    }

    /// The row where this color's pawns promote.
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self, row_count: i32) -> i32 {
        self.opponent().back_rank(row_count)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Stable handle of a piece inside a board's arena.
///
/// `game` tags the game the piece was created for, so handles never resolve
/// against a later game even though slots are reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId {
    pub(crate) slot: u32,
    pub(crate) game: u32,
}

impl PieceId {
    #[inline]
    #[must_use]
    pub(crate) const fn slot(self) -> usize {
        self.slot as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}/{}", self.game, self.slot)
    }
}

/// A live piece owned by a [`Board`](crate::board::Board).
///
/// Position, `has_moved` and (on promotion) `kind` change as moves are
/// applied; everything else is fixed for the piece's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) color: Color,
    pub(crate) kind: PieceKind,
    pub(crate) position: Position,
    pub(crate) has_moved: bool,
}

impl Piece {
    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[must_use]
    pub fn snapshot(&self) -> PieceSnapshot {
        PieceSnapshot {
            id: self.id,
            color: self.color,
            kind: self.kind,
            position: self.position,
            has_moved: self.has_moved,
        }
    }
}

/// Immutable copy of a piece, taken whenever move computation needs a stable
/// view of it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceSnapshot {
    pub id: PieceId,
    pub color: Color,
    pub kind: PieceKind,
    pub position: Position,
    pub has_moved: bool,
}

impl PieceSnapshot {
    #[inline]
    #[must_use]
    pub(crate) fn at(self, position: Position) -> PieceSnapshot {
        PieceSnapshot { position, ..self }
    }
}
