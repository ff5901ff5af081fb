//! Presentation-facing game controller.
//!
//! Wraps a [`Board`] behind the four verbs a user interface needs: start a
//! game, select a piece, choose a move and, for promotions, pick the new
//! piece. Each result is returned directly and also queued as a
//! [`GameEvent`] for hosts that prefer to consume a stream.

mod event;

use std::collections::VecDeque;

use log::debug;

use crate::board::{
    AppliedMove, Board, BoardConfig, BoardSnapshot, CandidateMove, EngineError, Inconsistency,
    PieceId, PieceKind,
};

pub use event::{GameEvent, MoveOutcome};

/// Game controller owning the board and the outgoing event queue.
///
/// The queue is unbounded: hosts that use events should call
/// [`Game::drain_events`] after every verb. Hosts that only use the returned
/// values can call it occasionally to discard the backlog.
#[derive(Debug, Clone, Default)]
pub struct Game {
    /// Current board
    board: Board,
    /// Events not yet taken by the host
    events: VecDeque<GameEvent>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self::from_board(Board::with_config(config))
    }

    /// Continue from an existing board, e.g. one made with
    /// [`BoardBuilder`](crate::board::BoardBuilder).
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            events: VecDeque::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Start over from the standard layout.
    pub fn new_game(&mut self) -> BoardSnapshot {
        self.board.generate();
        let snapshot = self.board.snapshot();
        self.events.push_back(GameEvent::NewGame(snapshot.clone()));
        snapshot
    }

    /// Legal moves for the piece; empty if the game is over or `id` is
    /// unknown.
    pub fn select_piece(&mut self, id: PieceId) -> Result<Vec<CandidateMove>, EngineError> {
        let moves = self.board.legal_moves(id)?;
        self.events.push_back(GameEvent::LegalMoves {
            piece: id,
            moves: moves.clone(),
        });
        Ok(moves)
    }

    /// Apply `candidate`, unless it is a promotion still waiting for its piece.
    ///
    /// A pending promotion is validated like any other move first, so a
    /// finished game or a stale move fails here rather than at
    /// [`Game::resolve_promotion`].
    pub fn choose_move(&mut self, candidate: CandidateMove) -> Result<MoveOutcome, EngineError> {
        if candidate.is_pending_promotion() {
            self.board.validate(&candidate)?;
            debug!("promotion of {} awaits a piece choice", candidate.piece.id);
            self.events.push_back(GameEvent::PromotionPending(candidate));
            return Ok(MoveOutcome::PendingPromotion(candidate));
        }
        self.commit(&candidate).map(MoveOutcome::Applied)
    }

    /// Finish a pending promotion with `kind` and apply it.
    pub fn resolve_promotion(
        &mut self,
        kind: PieceKind,
        candidate: CandidateMove,
    ) -> Result<AppliedMove, EngineError> {
        if !candidate.is_pending_promotion() {
            return Err(Inconsistency::IllegalMove {
                piece: candidate.piece.id,
                target: candidate.target_position,
            }
            .into());
        }
        if !kind.is_promotion_choice() {
            return Err(EngineError::InvalidPromotionPiece { kind });
        }
        self.commit(&candidate.with_promotion(kind))
    }

    /// Take all events queued since the last call.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    fn commit(&mut self, candidate: &CandidateMove) -> Result<AppliedMove, EngineError> {
        let applied = self.board.apply_move(candidate)?;
        self.events.push_back(GameEvent::MoveApplied(applied.clone()));
        Ok(applied)
    }
}
