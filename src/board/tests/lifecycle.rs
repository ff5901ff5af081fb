//! Board setup, lifecycle and move validation tests.

use super::{find_move, id_at, play, sq, started, with_kings};
use crate::board::{
    AppliedKind, Board, BoardBuilder, BoardConfig, CandidateKind, CandidateMove, Color,
    EngineError, GameState, Inconsistency, PieceKind, Position, SetupError,
};

#[test]
fn test_new_board_is_uninitialized() {
    let board = Board::new();
    assert_eq!(board.state(), GameState::Uninitialized);
    assert_eq!(board.pieces().count(), 0);
    assert!(board.history().is_empty());
}

#[test]
fn test_generate_standard_layout() {
    let board = started();
    assert_eq!(board.state(), GameState::InProgress);
    assert_eq!(board.pieces().count(), 32);
    for color in Color::BOTH {
        assert_eq!(board.pieces().filter(|p| p.color() == color).count(), 16);
        assert!(board.pieces().all(|p| !p.has_moved()));
    }
    assert_eq!(board.piece_at(sq("e1")).unwrap().kind(), PieceKind::King);
    assert_eq!(board.piece_at(sq("d8")).unwrap().kind(), PieceKind::Queen);
    assert_eq!(board.piece_at(sq("d8")).unwrap().color(), Color::Black);
    assert_eq!(board.piece_at(sq("h7")).unwrap().kind(), PieceKind::Pawn);
    assert!(board.piece_at(sq("e4")).is_none());
}

#[test]
fn test_generate_on_wider_board_fills_first_files() {
    let mut board = Board::with_config(BoardConfig::new(10, 12).unwrap());
    board.generate();
    assert_eq!(board.pieces().count(), 32);
    let black_king = board.piece_at(Position::new(9, 4)).unwrap();
    assert_eq!(black_king.kind(), PieceKind::King);
    assert!(board.piece_at(Position::new(0, 8)).is_none());
}

#[test]
fn test_regenerate_invalidates_old_ids() {
    let mut board = started();
    let knight = id_at(&board, "g1");
    let stale = find_move(&board, "g1", "f3");
    play(&mut board, "e2", "e4");

    board.generate();
    assert!(board.history().is_empty());
    assert!(board.piece_at(sq("e4")).is_none());
    assert!(board.piece(knight).is_none());
    assert!(board.legal_moves(knight).unwrap().is_empty());
    assert_eq!(
        board.apply_move(&stale),
        Err(EngineError::from(Inconsistency::UnknownPiece(knight)))
    );
}

#[test]
fn test_history_records_applied_moves() {
    let mut board = started();
    let first = play(&mut board, "e2", "e4");
    let second = play(&mut board, "e7", "e5");
    assert_eq!(board.history(), &[first.clone(), second]);
    assert_eq!(first.piece.position, sq("e2"));
    assert!(!first.piece.has_moved);
    assert!(board.piece_at(sq("e4")).unwrap().has_moved());
}

#[test]
fn test_reapplying_a_move_is_stale() {
    let mut board = started();
    let knight = id_at(&board, "b1");
    let mv = find_move(&board, "b1", "c3");
    board.apply_move(&mv).unwrap();
    assert_eq!(
        board.apply_move(&mv),
        Err(EngineError::InternalInconsistency(Inconsistency::StalePiece(knight)))
    );
    assert_eq!(board.history().len(), 1);
}

#[test]
fn test_made_up_move_is_illegal() {
    let mut board = started();
    let pawn = board.piece_at(sq("e2")).unwrap().snapshot();
    let before = board.snapshot();
    let bogus = CandidateMove::new(pawn, sq("e5"), CandidateKind::Normal);
    assert_eq!(
        board.apply_move(&bogus),
        Err(EngineError::from(Inconsistency::IllegalMove {
            piece: pawn.id,
            target: sq("e5")
        }))
    );
    assert_eq!(board.snapshot(), before);
}

#[test]
fn test_move_from_another_board_is_unknown() {
    let source = started();
    let mut target = started();
    let mv = find_move(&source, "g1", "f3");
    assert_eq!(
        target.apply_move(&mv),
        Err(EngineError::from(Inconsistency::UnknownPiece(mv.piece.id)))
    );
}

#[test]
fn test_capture_removes_piece() {
    let mut board = started();
    play(&mut board, "e2", "e4");
    play(&mut board, "d7", "d5");
    let victim = id_at(&board, "d5");
    let applied = play(&mut board, "e4", "d5");
    assert!(board.piece(victim).is_none());
    assert_eq!(board.pieces().count(), 31);
    assert!(matches!(applied.kind, AppliedKind::Taken(t) if t.id == victim));
}

#[test]
fn test_snapshot_lists_every_piece() {
    let board = started();
    let snapshot = board.snapshot();
    assert_eq!(snapshot.row_count, 8);
    assert_eq!(snapshot.column_count, 8);
    assert_eq!(snapshot.pieces.len(), 32);
    assert_eq!(snapshot.get(sq("e1")).map(|p| p.kind), Some(PieceKind::King));
    assert!(snapshot.get(sq("e4")).is_none());
}

#[test]
fn test_failed_apply_leaves_board_unchanged() {
    let mut board = started();
    let mv = find_move(&board, "e2", "e4");
    let king = id_at(&board, "e8");
    board.pieces.remove(king);
    let before = board.snapshot();

    assert_eq!(
        board.apply_move(&mv),
        Err(EngineError::from(Inconsistency::MissingKing(Color::Black)))
    );
    assert_eq!(board.snapshot(), before);
    assert!(board.history().is_empty());
    assert_eq!(board.state(), GameState::InProgress);
    assert!(board.piece(mv.piece.id).is_some_and(|p| !p.has_moved()));
}

#[test]
fn test_validate_accepts_pending_promotion() {
    let mut board = with_kings(&[("a7", Color::White, PieceKind::Pawn)]);
    let pending = find_move(&board, "a7", "a8");
    assert!(pending.is_pending_promotion());
    assert_eq!(board.validate(&pending), Ok(pending.piece));

    board.generate();
    assert_eq!(
        board.validate(&pending),
        Err(EngineError::from(Inconsistency::UnknownPiece(pending.piece.id)))
    );
}

#[test]
fn test_builder_rejects_bad_setups() {
    let two_white_kings = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("d1"), Color::White, PieceKind::King)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .build();
    assert_eq!(
        two_white_kings.err(),
        Some(EngineError::Setup(SetupError::KingCount {
            color: Color::White,
            found: 2
        }))
    );

    let no_black_king = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .build();
    assert_eq!(
        no_black_king.err(),
        Some(EngineError::from(SetupError::KingCount {
            color: Color::Black,
            found: 0
        }))
    );

    let off_board = BoardBuilder::new()
        .piece(Position::new(8, 0), Color::White, PieceKind::Rook)
        .build();
    assert_eq!(
        off_board.err(),
        Some(EngineError::from(SetupError::OutOfBounds {
            position: Position::new(8, 0)
        }))
    );

    let stacked = BoardBuilder::starting_position()
        .piece(sq("e2"), Color::White, PieceKind::Queen)
        .build();
    assert_eq!(
        stacked.err(),
        Some(EngineError::from(SetupError::SquareOccupied { position: sq("e2") }))
    );

    let no_pawn = BoardBuilder::starting_position()
        .last_double_step(sq("e4"))
        .build();
    assert_eq!(
        no_pawn.err(),
        Some(EngineError::from(SetupError::NotAPawn { position: sq("e4") }))
    );
}

#[test]
fn test_builder_infers_moved_flag() {
    let board = BoardBuilder::starting_position()
        .clear(sq("e2"))
        .piece(sq("e4"), Color::White, PieceKind::Pawn)
        .build()
        .unwrap();
    assert!(board.piece_at(sq("e4")).unwrap().has_moved());
    assert!(!board.piece_at(sq("d2")).unwrap().has_moved());
    assert_eq!(board.state(), GameState::InProgress);
}

#[test]
fn test_builder_starting_position_matches_generate() {
    let built = BoardBuilder::starting_position().build().unwrap();
    let generated = started();
    let kinds = |board: &Board| {
        board
            .snapshot()
            .pieces
            .iter()
            .map(|p| (p.position, p.color, p.kind, p.has_moved))
            .collect::<Vec<_>>()
    };
    assert_eq!(kinds(&built), kinds(&generated));
}
