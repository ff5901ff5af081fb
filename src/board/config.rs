//! Board dimensions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::types::Position;

/// Row and column counts of a board.
///
/// The standard layout needs eight files and two ranks per side, so widths
/// below 8 and heights below 4 are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    row_count: i32,
    column_count: i32,
}

impl BoardConfig {
    pub const STANDARD_ROWS: i32 = 8;
    pub const STANDARD_COLUMNS: i32 = 8;
    pub const MIN_ROWS: i32 = 4;
    pub const MAX_SIDE: i32 = 16;

    pub fn new(row_count: i32, column_count: i32) -> Result<Self, SetupError> {
        let rows_ok = (Self::MIN_ROWS..=Self::MAX_SIDE).contains(&row_count);
        let columns_ok = (Self::STANDARD_COLUMNS..=Self::MAX_SIDE).contains(&column_count);
        if !rows_ok || !columns_ok {
            return Err(SetupError::InvalidDimensions {
                rows: row_count,
                columns: column_count,
            });
        }
        Ok(BoardConfig {
            row_count,
            column_count,
        })
    }

    #[inline]
    pub fn row_count(&self) -> i32 {
        self.row_count
    }

    #[inline]
    pub fn column_count(&self) -> i32 {
        self.column_count
    }

    /// Longest distance a sliding piece can travel.
    #[inline]
    pub fn span(&self) -> i32 {
        self.row_count.max(self.column_count)
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        (0..self.row_count).contains(&position.row)
            && (0..self.column_count).contains(&position.column)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            row_count: Self::STANDARD_ROWS,
            column_count: Self::STANDARD_COLUMNS,
        }
    }
}
