//! Piece storage.
//!
//! Pieces live in a slot arena owned by the board and are addressed by
//! [`PieceId`]. Rules code never touches the arena directly; it reads through
//! a [`Placement`], which can overlay one hypothetical move so that "would my
//! king be attacked after this?" is answered without mutating anything.

use std::sync::atomic::{AtomicU32, Ordering};

use super::config::BoardConfig;
use super::error::{EngineError, Inconsistency};
use super::types::{Color, Piece, PieceId, PieceKind, PieceSnapshot, Position};

static NEXT_GAME: AtomicU32 = AtomicU32::new(1);

#[derive(Clone, Debug)]
pub(crate) struct PieceSet {
    game: u32,
    slots: Vec<Option<Piece>>,
}

impl PieceSet {
    /// An empty arena tagged with a fresh, process-unique game number.
    pub(crate) fn new() -> Self {
        PieceSet {
            game: NEXT_GAME.fetch_add(1, Ordering::Relaxed),
            slots: Vec::with_capacity(32),
        }
    }

    pub(crate) fn insert(
        &mut self,
        color: Color,
        kind: PieceKind,
        position: Position,
        has_moved: bool,
    ) -> PieceId {
        let id = PieceId {
            slot: self.slots.len() as u32,
            game: self.game,
        };
        self.slots.push(Some(Piece {
            id,
            color,
            kind,
            position,
            has_moved,
        }));
        id
    }

    pub(crate) fn get(&self, id: PieceId) -> Option<&Piece> {
        if id.game != self.game {
            return None;
        }
        self.slots.get(id.slot()).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        if id.game != self.game {
            return None;
        }
        self.slots.get_mut(id.slot()).and_then(Option::as_mut)
    }

    pub(crate) fn remove(&mut self, id: PieceId) -> Option<Piece> {
        if id.game != self.game {
            return None;
        }
        self.slots.get_mut(id.slot())?.take()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.slots.iter().flatten()
    }

    pub(crate) fn len(&self) -> usize {
        self.iter().count()
    }

    /// Linear scan; boards hold at most a few dozen pieces.
    pub(crate) fn at(&self, position: Position) -> Option<&Piece> {
        self.iter().find(|p| p.position == position)
    }
}

/// A single move overlaid on a [`Placement`].
///
/// `piece` is shown on `to`; `removes` (and whatever stood on `to`) is hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hypothesis {
    pub piece: PieceId,
    pub to: Position,
    pub removes: Option<PieceId>,
}

/// Read-only view of where the pieces stand.
#[derive(Clone, Copy, Debug)]
pub struct Placement<'a> {
    pieces: &'a PieceSet,
    config: BoardConfig,
    hypothesis: Option<Hypothesis>,
}

impl<'a> Placement<'a> {
    pub(crate) fn new(pieces: &'a PieceSet, config: BoardConfig) -> Self {
        Placement {
            pieces,
            config,
            hypothesis: None,
        }
    }

    /// The same view with `hypothesis` applied on top of the live pieces.
    #[must_use]
    pub fn assuming(self, hypothesis: Hypothesis) -> Self {
        Placement {
            hypothesis: Some(hypothesis),
            ..self
        }
    }

    #[inline]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        self.config.contains(position)
    }

    fn resolve(&self, piece: &Piece) -> Option<PieceSnapshot> {
        let snapshot = piece.snapshot();
        match self.hypothesis {
            Some(h) if h.piece == piece.id => Some(snapshot.at(h.to)),
            Some(h) if h.removes == Some(piece.id) || piece.position == h.to => None,
            _ => Some(snapshot),
        }
    }

    /// Every piece on the board, as seen through the hypothesis.
    pub fn pieces(&self) -> impl Iterator<Item = PieceSnapshot> + 'a {
        let view = *self;
        let pieces: &'a PieceSet = self.pieces;
        pieces.iter().filter_map(move |p| view.resolve(p))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = PieceSnapshot> + 'a {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn piece(&self, id: PieceId) -> Option<PieceSnapshot> {
        self.pieces.get(id).and_then(|p| self.resolve(p))
    }

    pub fn occupant(&self, position: Position) -> Option<PieceSnapshot> {
        if let Some(h) = self.hypothesis {
            if h.to == position {
                return self.pieces.get(h.piece).map(|p| p.snapshot().at(position));
            }
        }
        self.pieces().find(|p| p.position == position)
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.occupant(position).is_none()
    }

    /// The king of `color`. A board without one is malformed.
    pub fn king(&self, color: Color) -> Result<PieceSnapshot, EngineError> {
        self.pieces_of(color)
            .find(|p| p.kind == PieceKind::King)
            .ok_or(EngineError::InternalInconsistency(
                Inconsistency::MissingKing(color),
            ))
    }
}
