use super::super::attacks::AttackAnalyzer;
use super::super::pieces::Hypothesis;
use super::super::types::{
    CandidateKind, CandidateMove, Direction, PieceKind, PieceSnapshot, Position, QUEEN_DIRECTIONS,
};
use super::MoveGenerator;

const CASTLING_SIDES: [Direction; 2] = [Direction::new(0, -1), Direction::new(0, 1)];

/// The rook must leave room for the king's two-square step.
const MIN_ROOK_DISTANCE: i32 = 3;

impl MoveGenerator<'_> {
    /// One step in every direction plus castling. Attacked destinations are
    /// dropped by the legality filter, not here.
    pub(crate) fn generate_king_moves(&self, king: &PieceSnapshot, moves: &mut Vec<CandidateMove>) {
        self.generate_along(king, &QUEEN_DIRECTIONS, 1, moves);
        self.generate_castling(king, moves);
    }

    fn generate_castling(&self, king: &PieceSnapshot, moves: &mut Vec<CandidateMove>) {
        if king.has_moved || !self.king_safe_on(king, king.position) {
            return;
        }
        for direction in CASTLING_SIDES {
            let Some(rook) = self.castling_rook(king, direction) else {
                continue;
            };
            let crossing = king.position.offset(direction, 1);
            let target = king.position.offset(direction, 2);
            if self.king_safe_on(king, crossing) && self.king_safe_on(king, target) {
                moves.push(CandidateMove::new(
                    *king,
                    target,
                    CandidateKind::Castling(rook.id),
                ));
            }
        }
    }

    /// The unmoved friendly rook closing off the row in `direction`, with
    /// nothing standing between it and the king.
    fn castling_rook(&self, king: &PieceSnapshot, direction: Direction) -> Option<PieceSnapshot> {
        let mut distance = 1;
        loop {
            let square = king.position.offset(direction, distance);
            if !self.placement.contains(square) {
                return None;
            }
            if let Some(piece) = self.placement.occupant(square) {
                let eligible = piece.color == king.color
                    && piece.kind == PieceKind::Rook
                    && !piece.has_moved
                    && distance >= MIN_ROOK_DISTANCE;
                return eligible.then_some(piece);
            }
            distance += 1;
        }
    }

    fn king_safe_on(&self, king: &PieceSnapshot, square: Position) -> bool {
        let view = self.placement.assuming(Hypothesis {
            piece: king.id,
            to: square,
            removes: None,
        });
        !AttackAnalyzer::new(view).is_under_attack(square, king.color)
    }
}
