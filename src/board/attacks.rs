//! Attack detection by ray casting.
//!
//! Every query walks outwards from the attacked square: one step along each
//! knight offset and as far as the board allows along each linear direction.
//! The first piece met decides the ray; it attacks only if it is an enemy
//! whose movement covers that direction at that distance.

use super::pieces::Placement;
use super::types::{
    Color, Direction, PieceKind, PieceSnapshot, Position, KNIGHT_OFFSETS, QUEEN_DIRECTIONS,
};

#[derive(Clone, Copy, Debug)]
pub struct AttackAnalyzer<'a> {
    placement: Placement<'a>,
}

impl<'a> AttackAnalyzer<'a> {
    #[inline]
    pub fn new(placement: Placement<'a>) -> Self {
        AttackAnalyzer { placement }
    }

    /// The enemy of `side` attacking `at` from direction `along`, if any.
    ///
    /// `along` points from `at` towards the attacker. Knight offsets are
    /// checked one jump deep; linear directions run to the board edge.
    pub fn attacker(&self, at: Position, side: Color, along: Direction) -> Option<PieceSnapshot> {
        let limit = if along.is_knight_jump() {
            1
        } else {
            self.placement.config().span()
        };
        let (distance, occupant) = self.first_occupant(at, along, limit)?;
        if occupant.color == side || !reaches(&occupant, along, distance) {
            return None;
        }
        Some(occupant)
    }

    /// All enemies of `side` attacking `at`.
    pub fn attackers(&self, at: Position, side: Color) -> Vec<PieceSnapshot> {
        KNIGHT_OFFSETS
            .iter()
            .chain(QUEEN_DIRECTIONS.iter())
            .filter_map(|&along| self.attacker(at, side, along))
            .collect()
    }

    pub fn is_under_attack(&self, at: Position, side: Color) -> bool {
        KNIGHT_OFFSETS
            .iter()
            .chain(QUEEN_DIRECTIONS.iter())
            .any(|&along| self.attacker(at, side, along).is_some())
    }

    fn first_occupant(
        &self,
        from: Position,
        direction: Direction,
        limit: i32,
    ) -> Option<(i32, PieceSnapshot)> {
        for distance in 1..=limit {
            let square = from.offset(direction, distance);
            if !self.placement.contains(square) {
                return None;
            }
            if let Some(piece) = self.placement.occupant(square) {
                return Some((distance, piece));
            }
        }
        None
    }
}

/// Whether `piece`, met `distance` steps from the target along `along`,
/// covers the target.
fn reaches(piece: &PieceSnapshot, along: Direction, distance: i32) -> bool {
    if along.is_knight_jump() {
        return piece.kind == PieceKind::Knight && distance == 1;
    }
    match piece.kind {
        // A pawn attacks the diagonal squares ahead of it, so it sits one row
        // behind the target from its own point of view.
        PieceKind::Pawn => {
            distance == 1 && along.is_diagonal() && along.row_delta == -piece.color.pawn_direction()
        }
        PieceKind::Knight => false,
        PieceKind::King => distance == 1,
        PieceKind::Bishop => along.is_diagonal(),
        PieceKind::Rook => !along.is_diagonal(),
        PieceKind::Queen => true,
    }
}
