use super::super::types::{
    CandidateKind, CandidateMove, Direction, PieceKind, PieceSnapshot, Position,
};
use super::MoveGenerator;

impl MoveGenerator<'_> {
    pub(crate) fn generate_pawn_moves(&self, pawn: &PieceSnapshot, moves: &mut Vec<CandidateMove>) {
        let promotion_rank = pawn
            .color
            .promotion_rank(self.placement.config().row_count());
        let forward = Direction::new(pawn.color.pawn_direction(), 0);
        let steps = if pawn.has_moved { 1 } else { 2 };

        for distance in 1..=steps {
            let target = pawn.position.offset(forward, distance);
            if !self.placement.contains(target) || !self.placement.is_empty(target) {
                break;
            }
            let kind = if target.row == promotion_rank {
                CandidateKind::Promotion {
                    kind: None,
                    take: None,
                }
            } else {
                CandidateKind::Normal
            };
            moves.push(CandidateMove::new(*pawn, target, kind));
            if target.row == promotion_rank {
                break;
            }
        }

        for &attack in pawn.color.pawn_attacks() {
            let target = pawn.position + attack;
            if !self.placement.contains(target) {
                continue;
            }
            let Some(other) = self.placement.occupant(target) else {
                continue;
            };
            if other.color == pawn.color || other.kind == PieceKind::King {
                continue;
            }
            let kind = if target.row == promotion_rank {
                CandidateKind::Promotion {
                    kind: None,
                    take: Some(other.id),
                }
            } else {
                CandidateKind::Take(other.id)
            };
            moves.push(CandidateMove::new(*pawn, target, kind));
        }

        if let Some(mv) = self.en_passant(pawn) {
            moves.push(mv);
        }
    }

    /// Capture of an enemy pawn that double-stepped on the previous move and
    /// now stands right beside this one.
    fn en_passant(&self, pawn: &PieceSnapshot) -> Option<CandidateMove> {
        let last = self.last_move?;
        if !last.is_double_step() || last.piece.color == pawn.color {
            return None;
        }
        let landed = last.target_position;
        if landed.row != pawn.position.row || (landed.column - pawn.position.column).abs() != 1 {
            return None;
        }
        let victim = self.placement.occupant(landed)?;
        if victim.id != last.piece.id || victim.kind != PieceKind::Pawn {
            return None;
        }
        let target = Position::new(landed.row + pawn.color.pawn_direction(), landed.column);
        if !self.placement.contains(target) || !self.placement.is_empty(target) {
            return None;
        }
        Some(CandidateMove::new(
            *pawn,
            target,
            CandidateKind::TakeEnPassant(victim.id),
        ))
    }
}
