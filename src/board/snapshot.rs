#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::BoardConfig;
use super::types::{Piece, PieceSnapshot, Position};

/// Everything a view needs to draw the board.
///
/// Pieces are ordered by position, row first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSnapshot {
    pub row_count: i32,
    pub column_count: i32,
    pub pieces: Vec<PieceSnapshot>,
}

impl BoardSnapshot {
    pub(crate) fn from_pieces<'a>(
        config: BoardConfig,
        pieces: impl Iterator<Item = &'a Piece>,
    ) -> Self {
        let mut pieces: Vec<PieceSnapshot> = pieces.map(Piece::snapshot).collect();
        pieces.sort_by_key(|p| p.position);
        BoardSnapshot {
            row_count: config.row_count(),
            column_count: config.column_count(),
            pieces,
        }
    }

    pub fn get(&self, position: Position) -> Option<&PieceSnapshot> {
        self.pieces
            .binary_search_by_key(&position, |p| p.position)
            .ok()
            .map(|i| &self.pieces[i])
    }
}
