//! Post-move classification: normal, check, checkmate or stalemate.

use super::error::EngineError;
use super::movegen::MoveGenerator;
use super::types::{CandidateMove, Color, Direction, PieceKind, PieceSnapshot, Situation};

/// Judges the position for the side about to move.
///
/// Results are never cached; the board asks again after every move.
#[derive(Clone, Copy, Debug)]
pub struct SituationEvaluator<'a> {
    generator: MoveGenerator<'a>,
}

impl<'a> SituationEvaluator<'a> {
    pub fn new(generator: MoveGenerator<'a>) -> Self {
        SituationEvaluator { generator }
    }

    /// Classifies the position for the opponent of `moved_side`.
    pub fn evaluate(&self, moved_side: Color) -> Result<Situation, EngineError> {
        let side = moved_side.opponent();
        let placement = self.generator.placement();
        let king = placement.king(side)?;
        let attackers = self.generator.attacks().attackers(king.position, side);

        let mut replies = Vec::new();
        for piece in placement.pieces_of(side) {
            replies.extend(self.generator.legal_moves(&piece)?);
        }

        if attackers.is_empty() {
            return Ok(if replies.is_empty() {
                Situation::Stalemate
            } else {
                Situation::Normal
            });
        }

        let king_can_move = replies.iter().any(|mv| mv.piece.id == king.id);
        let escapes = match attackers.as_slice() {
            [attacker] => {
                king_can_move
                    || replies
                        .iter()
                        .any(|mv| mv.kind.captured() == Some(attacker.id))
                    || (attacker.kind.is_slider() && can_interpose(&king, attacker, &replies))
            }
            // Double check: only a king move helps.
            _ => king_can_move,
        };

        Ok(if escapes {
            Situation::Check {
                king: king.id,
                attackers,
            }
        } else {
            Situation::Checkmate {
                king: king.id,
                side,
            }
        })
    }
}

/// Whether some non-king reply lands strictly between king and attacker.
fn can_interpose(
    king: &PieceSnapshot,
    attacker: &PieceSnapshot,
    replies: &[CandidateMove],
) -> bool {
    let Some(direction) = Direction::between(king.position, attacker.position) else {
        return false;
    };
    let Some(distance) = direction.steps(king.position, attacker.position) else {
        return false;
    };
    replies.iter().any(|mv| {
        mv.piece.kind != PieceKind::King
            && direction
                .steps(king.position, mv.target_position)
                .is_some_and(|steps| steps < distance)
    })
}
