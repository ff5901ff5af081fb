use super::super::types::{CandidateMove, PieceSnapshot};
use super::MoveGenerator;

impl MoveGenerator<'_> {
    /// Bishops, rooks and queens: rays along the kind's directions, as far as
    /// the board reaches.
    pub(crate) fn generate_sliding_moves(
        &self,
        slider: &PieceSnapshot,
        moves: &mut Vec<CandidateMove>,
    ) {
        let span = self.placement.config().span();
        self.generate_along(slider, slider.kind.directions(), span, moves);
    }
}
