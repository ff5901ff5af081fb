use super::super::types::{CandidateMove, PieceSnapshot, KNIGHT_OFFSETS};
use super::MoveGenerator;

impl MoveGenerator<'_> {
    pub(crate) fn generate_knight_moves(
        &self,
        knight: &PieceSnapshot,
        moves: &mut Vec<CandidateMove>,
    ) {
        self.generate_along(knight, &KNIGHT_OFFSETS, 1, moves);
    }
}
