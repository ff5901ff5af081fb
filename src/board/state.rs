use log::{debug, warn};

use super::attacks::AttackAnalyzer;
use super::builder::standard_layout;
use super::config::BoardConfig;
use super::error::{EngineError, Inconsistency};
use super::movegen::MoveGenerator;
use super::pieces::{PieceSet, Placement};
use super::situation::SituationEvaluator;
use super::snapshot::BoardSnapshot;
use super::types::{
    AppliedKind, AppliedMove, CandidateKind, CandidateMove, Color, Direction, Outcome, Piece,
    PieceId, PieceKind, PieceSnapshot, Position, Situation,
};

/// Lifecycle of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// No pieces yet; call [`Board::generate`].
    Uninitialized,
    InProgress,
    /// Checkmate or stalemate; no piece has legal moves any more.
    Terminal(Outcome),
}

impl GameState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Terminal(_))
    }
}

/// Owns the pieces and move history of one game and enforces the rules on
/// every change.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) config: BoardConfig,
    pub(crate) pieces: PieceSet,
    pub(crate) history: Vec<AppliedMove>,
    pub(crate) situation: Situation,
    pub(crate) state: GameState,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An uninitialized 8x8 board.
    pub fn new() -> Self {
        Board::with_config(BoardConfig::default())
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Board {
            config,
            pieces: PieceSet::new(),
            history: Vec::new(),
            situation: Situation::Normal,
            state: GameState::Uninitialized,
        }
    }

    /// Resets to the standard starting layout and clears history.
    ///
    /// Pieces from a previous game get fresh ids, so handles held from
    /// before no longer resolve.
    pub fn generate(&mut self) {
        let mut pieces = PieceSet::new();
        for (position, color, kind) in standard_layout(self.config) {
            pieces.insert(color, kind, position, false);
        }
        self.pieces = pieces;
        self.history.clear();
        self.situation = Situation::Normal;
        self.state = GameState::InProgress;
        debug!(
            "new game on a {}x{} board with {} pieces",
            self.config.row_count(),
            self.config.column_count(),
            self.pieces.len()
        );
    }

    #[inline]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The situation for the side to move after the last applied move.
    #[inline]
    pub fn situation(&self) -> &Situation {
        &self.situation
    }

    #[inline]
    pub fn history(&self) -> &[AppliedMove] {
        &self.history
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.pieces.at(position)
    }

    pub fn placement(&self) -> Placement<'_> {
        Placement::new(&self.pieces, self.config)
    }

    pub fn attacks(&self) -> AttackAnalyzer<'_> {
        AttackAnalyzer::new(self.placement())
    }

    pub fn move_generator(&self) -> MoveGenerator<'_> {
        MoveGenerator::new(self.placement(), self.history.last())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_pieces(self.config, self.pieces.iter())
    }

    /// Legal moves of the piece with `id`.
    ///
    /// Empty when the game is not in progress or the id is unknown; fails
    /// only for a board missing the piece's king.
    pub fn legal_moves(&self, id: PieceId) -> Result<Vec<CandidateMove>, EngineError> {
        if self.state != GameState::InProgress {
            return Ok(Vec::new());
        }
        match self.pieces.get(id) {
            Some(piece) => self.move_generator().legal_moves(&piece.snapshot()),
            None => Ok(Vec::new()),
        }
    }

    /// Classifies the current position for the opponent of `moved_side`.
    pub fn evaluate_situation(&self, moved_side: Color) -> Result<Situation, EngineError> {
        SituationEvaluator::new(self.move_generator()).evaluate(moved_side)
    }

    /// Checks that `candidate` could be applied right now, ignoring any
    /// missing promotion choice, and returns its piece as currently stored.
    ///
    /// Fails with `GameOver` once the game has ended, and with
    /// `UnknownPiece`, `StalePiece` or `IllegalMove` for a move that no
    /// longer fits the board.
    pub fn validate(&self, candidate: &CandidateMove) -> Result<PieceSnapshot, EngineError> {
        if self.state.is_terminal() {
            return Err(EngineError::GameOver);
        }
        let piece = self.live(candidate.piece.id)?;
        if piece != candidate.piece {
            warn!("rejecting move of {}: piece changed since generation", piece.id);
            return Err(Inconsistency::StalePiece(piece.id).into());
        }
        let legal = self.move_generator().legal_moves(&piece)?;
        if !legal.contains(&candidate.unresolved()) {
            warn!(
                "rejecting move of {} to {:?}: not a legal move",
                piece.id, candidate.target_position
            );
            return Err(Inconsistency::IllegalMove {
                piece: piece.id,
                target: candidate.target_position,
            }
            .into());
        }
        Ok(piece)
    }

    /// Applies a legal move and returns its record.
    ///
    /// The move is fully validated before anything changes: its piece must be
    /// live and unchanged since the move was generated, a promotion must name
    /// its piece, and the move must be among the piece's legal moves. The new
    /// placement is built on a copy and only replaces the board once the
    /// resulting situation is known.
    pub fn apply_move(&mut self, candidate: &CandidateMove) -> Result<AppliedMove, EngineError> {
        let piece = self.validate(candidate)?;
        let promotion = match candidate.kind {
            CandidateKind::Promotion { kind: None, .. } => {
                return Err(EngineError::InvalidPromotionState { piece: piece.id });
            }
            CandidateKind::Promotion {
                kind: Some(kind), ..
            } if !kind.is_promotion_choice() => {
                return Err(EngineError::InvalidPromotionPiece { kind });
            }
            CandidateKind::Promotion { kind, .. } => kind,
            _ => None,
        };
        let taken = candidate.kind.captured().map(|id| self.live(id)).transpose()?;
        let rook = match candidate.kind {
            CandidateKind::Castling(id) => {
                let toward = Direction::between(piece.position, candidate.target_position)
                    .ok_or(Inconsistency::IllegalMove {
                        piece: piece.id,
                        target: candidate.target_position,
                    })?;
                Some((self.live(id)?, piece.position.offset(toward, 1)))
            }
            _ => None,
        };

        let mut pieces = self.pieces.clone();
        if let Some(taken) = taken {
            pieces.remove(taken.id);
        }
        let moved = relocate(&mut pieces, piece.id, candidate.target_position, promotion)?;
        let rook = rook
            .map(|(rook, to)| relocate(&mut pieces, rook.id, to, None))
            .transpose()?;

        let kind = match (candidate.kind, taken, rook) {
            (CandidateKind::Promotion { .. }, taken, _) => AppliedKind::Promotion {
                promoted: moved,
                taken,
            },
            (_, Some(taken), _) => AppliedKind::Taken(taken),
            (_, _, Some(rook)) => AppliedKind::Castling(rook),
            _ => AppliedKind::Normal,
        };
        let mut applied = AppliedMove {
            piece,
            target_position: candidate.target_position,
            situation: Situation::Normal,
            kind,
        };

        // The reply side may answer this very move en passant.
        let generator = MoveGenerator::new(Placement::new(&pieces, self.config), Some(&applied));
        let situation = SituationEvaluator::new(generator).evaluate(piece.color)?;
        applied.situation = situation.clone();
        debug!(
            "{} {} {:?} -> {:?}: {:?}",
            piece.color, piece.kind, piece.position, candidate.target_position, situation
        );
        if let Some(outcome) = situation.outcome() {
            debug!("game over: {outcome:?}");
            self.state = GameState::Terminal(outcome);
        }
        self.pieces = pieces;
        self.situation = situation;
        self.history.push(applied.clone());
        Ok(applied)
    }

    fn live(&self, id: PieceId) -> Result<PieceSnapshot, EngineError> {
        self.pieces
            .get(id)
            .map(Piece::snapshot)
            .ok_or(Inconsistency::UnknownPiece(id).into())
    }
}

fn relocate(
    pieces: &mut PieceSet,
    id: PieceId,
    to: Position,
    promotion: Option<PieceKind>,
) -> Result<PieceSnapshot, EngineError> {
    let piece = pieces.get_mut(id).ok_or(Inconsistency::UnknownPiece(id))?;
    piece.position = to;
    piece.has_moved = true;
    if let Some(kind) = promotion {
        piece.kind = kind;
    }
    Ok(piece.snapshot())
}
