//! Property-based tests using proptest.

use crate::board::Board;
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    0..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves from the starting position.
fn random_playout(seed: u64, plies: usize) -> Board {
    use rand::prelude::*;

    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..plies {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        board = board.apply(&moves[idx]);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: FEN round-trip preserves position exactly
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), plies in ply_count_strategy()) {
        let board = random_playout(seed, plies);
        let fen = board.to_fen();
        let restored = Board::from_fen(&fen);

        prop_assert_eq!(&restored, &board);
        prop_assert_eq!(restored.to_fen(), fen);
        prop_assert_eq!(restored.position_key(), board.position_key());
    }

    /// Property: no legal move leaves the mover in check, and every
    /// pseudo-legal move that does is filtered out
    #[test]
    fn prop_self_check_rejected(seed in seed_strategy(), plies in ply_count_strategy()) {
        let board = random_playout(seed, plies);
        let mover = board.active_color();
        let legal = board.legal_moves();

        for mv in board.all_pseudo_legal_moves() {
            let exposes_king = board.apply(&mv).is_in_check(mover);
            if exposes_king {
                prop_assert!(!legal.contains(&mv), "{} left the king in check", mv);
            }
        }
        for mv in &legal {
            prop_assert!(!board.apply(mv).is_in_check(mover));
        }
    }

    /// Property: no legal moves iff exactly one of checkmate and stalemate
    #[test]
    fn prop_no_moves_iff_mate_or_stalemate(seed in seed_strategy(), plies in 0..=120usize) {
        let board = random_playout(seed, plies);
        let no_moves = board.legal_moves().is_empty();
        let mate = board.is_checkmate();
        let stalemate = board.is_stalemate();

        prop_assert!(!(mate && stalemate));
        prop_assert_eq!(no_moves, mate || stalemate);
    }

    /// Property: apply never mutates the board it is called on
    #[test]
    fn prop_apply_is_pure(seed in seed_strategy(), plies in ply_count_strategy()) {
        let board = random_playout(seed, plies);
        let before = board.clone();

        for mv in board.legal_moves() {
            let next = board.apply(&mv);
            prop_assert_ne!(next.active_color(), board.active_color());
        }
        prop_assert_eq!(board, before);
    }
}
