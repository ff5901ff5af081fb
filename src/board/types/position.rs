//! Board coordinates and move vectors.

use std::ops::{Add, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A square on the board, addressed by 0-based row and column.
///
/// Row 0 is White's back rank; White pawns advance towards higher rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Position { row, column }
    }

    /// The square `distance` steps away along `direction`.
    #[inline]
    #[must_use]
    pub fn offset(self, direction: Direction, distance: i32) -> Position {
        self + direction * distance
    }
}

/// A move vector. Both deltas stay within `-2..=2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction {
    pub row_delta: i32,
    pub column_delta: i32,
}

impl Direction {
    #[inline]
    #[must_use]
    pub const fn new(row_delta: i32, column_delta: i32) -> Self {
        Direction {
            row_delta,
            column_delta,
        }
    }

    /// The unit linear direction leading from `from` to `to`, if the two
    /// squares share a row, column or diagonal.
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        let dr = to.row - from.row;
        let dc = to.column - from.column;
        if (dr, dc) == (0, 0) {
            return None;
        }
        if dr == 0 || dc == 0 || dr.abs() == dc.abs() {
            Some(Direction::new(dr.signum(), dc.signum()))
        } else {
            None
        }
    }

    /// Number of unit steps needed to go from `from` to `to` along this
    /// direction, if `to` lies on the ray.
    #[must_use]
    pub fn steps(self, from: Position, to: Position) -> Option<i32> {
        if Direction::between(from, to) != Some(self) {
            return None;
        }
        Some((to.row - from.row).abs().max((to.column - from.column).abs()))
    }

    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.row_delta != 0 && self.column_delta != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_knight_jump(self) -> bool {
        let r = self.row_delta.abs();
        let c = self.column_delta.abs();
        (r == 1 && c == 2) || (r == 2 && c == 1)
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Direction) -> Position {
        Position::new(self.row + rhs.row_delta, self.column + rhs.column_delta)
    }
}

impl Mul<i32> for Direction {
    type Output = Direction;

    #[inline]
    fn mul(self, rhs: i32) -> Direction {
        Direction::new(self.row_delta * rhs, self.column_delta * rhs)
    }
}

pub const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::new(1, 0),
    Direction::new(-1, 0),
    Direction::new(0, 1),
    Direction::new(0, -1),
];

pub const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::new(1, 1),
    Direction::new(1, -1),
    Direction::new(-1, 1),
    Direction::new(-1, -1),
];

/// All eight linear directions, shared by queens and kings.
pub const QUEEN_DIRECTIONS: [Direction; 8] = [
    Direction::new(1, 0),
    Direction::new(-1, 0),
    Direction::new(0, 1),
    Direction::new(0, -1),
    Direction::new(1, 1),
    Direction::new(1, -1),
    Direction::new(-1, 1),
    Direction::new(-1, -1),
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    Direction::new(2, 1),
    Direction::new(1, 2),
    Direction::new(-1, 2),
    Direction::new(-2, 1),
    Direction::new(-2, -1),
    Direction::new(-1, -2),
    Direction::new(1, -2),
    Direction::new(2, -1),
];

pub const WHITE_PAWN_ATTACKS: [Direction; 2] = [Direction::new(1, -1), Direction::new(1, 1)];

pub const BLACK_PAWN_ATTACKS: [Direction; 2] = [Direction::new(-1, -1), Direction::new(-1, 1)];
