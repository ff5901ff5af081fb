//! Move generation.
//!
//! Candidates are produced per piece family (see the submodules) and then
//! filtered so that no move leaves the mover's own king attacked. The filter
//! reads the board through a hypothetical [`Placement`] and never mutates it.

mod kings;
mod knights;
mod pawns;
mod sliders;

use log::trace;

use super::attacks::AttackAnalyzer;
use super::error::EngineError;
use super::pieces::{Hypothesis, Placement};
use super::types::{
    AppliedMove, CandidateKind, CandidateMove, Direction, PieceKind, PieceSnapshot,
};

#[derive(Clone, Copy, Debug)]
pub struct MoveGenerator<'a> {
    placement: Placement<'a>,
    last_move: Option<&'a AppliedMove>,
}

impl<'a> MoveGenerator<'a> {
    /// `last_move` is the most recent history entry; en passant depends on it.
    pub fn new(placement: Placement<'a>, last_move: Option<&'a AppliedMove>) -> Self {
        MoveGenerator {
            placement,
            last_move,
        }
    }

    #[inline]
    pub fn placement(&self) -> Placement<'a> {
        self.placement
    }

    #[inline]
    pub fn attacks(&self) -> AttackAnalyzer<'a> {
        AttackAnalyzer::new(self.placement)
    }

    /// Every move the piece's movement rules allow, before king safety.
    pub fn pseudo_legal_moves(&self, piece: &PieceSnapshot) -> Vec<CandidateMove> {
        let mut moves = Vec::new();
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(piece, &mut moves),
            PieceKind::Knight => self.generate_knight_moves(piece, &mut moves),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.generate_sliding_moves(piece, &mut moves)
            }
            PieceKind::King => self.generate_king_moves(piece, &mut moves),
        }
        moves
    }

    /// Pseudo-legal moves minus those that would leave the own king attacked.
    ///
    /// Fails only when the piece's side has no king.
    pub fn legal_moves(&self, piece: &PieceSnapshot) -> Result<Vec<CandidateMove>, EngineError> {
        let king = self.placement.king(piece.color)?;
        let in_check = self.attacks().is_under_attack(king.position, king.color);
        let mut moves = self.pseudo_legal_moves(piece);
        moves.retain(|mv| {
            let safe = self.keeps_king_safe(&king, mv, in_check);
            if !safe {
                trace!(
                    "rejecting {:?} {:?} -> {:?}: exposes king",
                    mv.piece.kind,
                    mv.piece.position,
                    mv.target_position
                );
            }
            safe
        });
        Ok(moves)
    }

    fn keeps_king_safe(&self, king: &PieceSnapshot, mv: &CandidateMove, in_check: bool) -> bool {
        let after = AttackAnalyzer::new(self.placement.assuming(Hypothesis {
            piece: mv.piece.id,
            to: mv.target_position,
            removes: mv.kind.captured(),
        }));

        if mv.piece.id == king.id {
            return !after.is_under_attack(mv.target_position, king.color);
        }
        // Evading a check, or an en-passant capture emptying two squares, can
        // change any ray around the king.
        if in_check || matches!(mv.kind, CandidateKind::TakeEnPassant(_)) {
            return !after.is_under_attack(king.position, king.color);
        }
        // Otherwise only a piece standing on a line from the king can be
        // pinned, and it stays a shield as long as it stays on that line.
        let Some(cover) = Direction::between(king.position, mv.piece.position) else {
            return true;
        };
        if Direction::between(king.position, mv.target_position) == Some(cover) {
            return true;
        }
        after.attacker(king.position, king.color, cover).is_none()
    }

    /// Walks each direction up to `limit` steps, stopping at the first
    /// occupied square. An enemy there is a capture; a king is never one.
    fn generate_along(
        &self,
        piece: &PieceSnapshot,
        directions: &[Direction],
        limit: i32,
        moves: &mut Vec<CandidateMove>,
    ) {
        for &direction in directions {
            for distance in 1..=limit {
                let target = piece.position.offset(direction, distance);
                if !self.placement.contains(target) {
                    break;
                }
                match self.placement.occupant(target) {
                    None => moves.push(CandidateMove::new(*piece, target, CandidateKind::Normal)),
                    Some(other) => {
                        if other.color != piece.color && other.kind != PieceKind::King {
                            moves.push(CandidateMove::new(
                                *piece,
                                target,
                                CandidateKind::Take(other.id),
                            ));
                        }
                        break;
                    }
                }
            }
        }
    }
}
