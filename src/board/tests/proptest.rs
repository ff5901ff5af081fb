//! Property-based tests using proptest.

use crate::board::{Board, CandidateMove, Color, GameState, PieceKind, Situation};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random game length in plies
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    1..=60usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn side_moves(board: &Board, side: Color) -> Vec<CandidateMove> {
    let ids: Vec<_> = board
        .pieces()
        .filter(|p| p.color() == side)
        .map(|p| p.id())
        .collect();
    ids.into_iter()
        .flat_map(|id| board.legal_moves(id).unwrap())
        .collect()
}

fn king_attacked(board: &Board, side: Color) -> bool {
    let king = board.placement().king(side).unwrap();
    board.attacks().is_under_attack(king.position, side)
}

/// Plays up to `plies` random moves, alternating colors from White.
/// Returns the board and the side to move.
fn random_game(seed: u64, plies: usize) -> (Board, Color) {
    let mut board = Board::new();
    board.generate();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut side = Color::White;

    for _ in 0..plies {
        let moves = side_moves(&board, side);
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        let mv = if mv.is_pending_promotion() {
            let kind = *PieceKind::PROMOTIONS.choose(&mut rng).unwrap();
            mv.with_promotion(kind)
        } else {
            *mv
        };
        board.apply_move(&mv).unwrap();
        side = side.opponent();
    }
    (board, side)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (board, side) = random_game(seed, plies);
        for mv in side_moves(&board, side) {
            let mv = mv.with_promotion(PieceKind::Queen);
            let mut after = board.clone();
            after.apply_move(&mv).unwrap();
            prop_assert!(!king_attacked(&after, side), "{:?} exposes the {} king", mv, side);
        }
    }

    /// Property: boards stay well formed: one king each, no shared squares
    #[test]
    fn prop_board_stays_well_formed(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (board, _) = random_game(seed, plies);
        for color in Color::BOTH {
            let kings = board
                .pieces()
                .filter(|p| p.color() == color && p.kind() == PieceKind::King)
                .count();
            prop_assert_eq!(kings, 1);
        }
        let snapshot = board.snapshot();
        prop_assert_eq!(snapshot.pieces.len(), board.pieces().count());
        for pair in snapshot.pieces.windows(2) {
            prop_assert_ne!(pair[0].position, pair[1].position);
        }
        prop_assert!(snapshot.pieces.iter().all(|p| board.config().contains(p.position)));
    }

    /// Property: the recorded situation agrees with the position it describes
    #[test]
    fn prop_situation_matches_position(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (board, side) = random_game(seed, plies);
        let in_check = king_attacked(&board, side);
        let has_moves = match board.state() {
            GameState::Terminal(_) => false,
            _ => !side_moves(&board, side).is_empty(),
        };
        match board.situation() {
            Situation::Normal => prop_assert!(!in_check && has_moves),
            Situation::Check { attackers, .. } => {
                prop_assert!(in_check && has_moves);
                prop_assert!(!attackers.is_empty());
            }
            Situation::Checkmate { side: mated, .. } => {
                prop_assert!(in_check);
                prop_assert_eq!(*mated, side);
            }
            Situation::Stalemate => prop_assert!(!in_check),
        }
    }

    /// Property: asking for legal moves never changes the board
    #[test]
    fn prop_legal_moves_are_pure(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (board, _) = random_game(seed, plies);
        let before = board.snapshot();
        let first: Vec<_> = Color::BOTH.iter().map(|&c| side_moves(&board, c)).collect();
        let second: Vec<_> = Color::BOTH.iter().map(|&c| side_moves(&board, c)).collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(board.snapshot(), before);
    }
}
