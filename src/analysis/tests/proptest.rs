//! Property-based tests using proptest.

use crate::analysis::{analyze, analyze_preview, AnalysisCache, AnalysisParams, PreviewGuard};
use crate::board::masks::{ADJACENT_FILES, FILE_MASKS};
use crate::board::{Bitboard, Board, BoardBuilder, Color, Piece, Square};
use crate::oracle::PositionOracle;
use proptest::prelude::*;

/// Strategy for a random placement of up to 24 pieces, kings included
fn placement_strategy() -> impl Strategy<Value = Vec<(usize, bool, usize)>> {
    prop::collection::vec((0..64usize, any::<bool>(), 0..6usize), 0..24)
}

fn build(placement: &[(usize, bool, usize)], white_to_move: bool) -> Board {
    let mut builder = BoardBuilder::new().side_to_move(if white_to_move {
        Color::White
    } else {
        Color::Black
    });
    for &(idx, white, kind) in placement {
        let color = if white { Color::White } else { Color::Black };
        builder = builder.piece(Square::from_index(idx), color, Piece::ALL[kind]);
    }
    builder.build()
}

fn is_ascending(list: &[Square]) -> bool {
    list.windows(2).all(|w| w[0] < w[1])
}

fn set_of(list: &[Square]) -> Bitboard {
    list.iter().copied().collect()
}

proptest! {
    /// Property: hanging pieces are always attacked
    #[test]
    fn prop_hanging_subset_of_attacked(placement in placement_strategy(), stm in any::<bool>()) {
        let board = build(&placement, stm);
        let snapshot = analyze_preview(&board);
        for color in Color::BOTH {
            let attacked = set_of(snapshot.attacked(color));
            for sq in snapshot.hanging(color) {
                prop_assert!(attacked.contains(*sq));
            }
        }
    }

    /// Property: every reported list is strictly ascending
    #[test]
    fn prop_lists_ascending(placement in placement_strategy()) {
        let board = build(&placement, true);
        let snapshot = analyze_preview(&board);
        for color in Color::BOTH {
            let side = snapshot.side(color);
            prop_assert!(is_ascending(&side.hanging));
            prop_assert!(is_ascending(&side.attacked));
            prop_assert!(is_ascending(&side.pinned));
            prop_assert!(is_ascending(&side.skewered));
            prop_assert!(is_ascending(&side.developed));
            prop_assert!(is_ascending(&side.pawns.all));
            prop_assert!(is_ascending(&side.pawns.passed));
        }
        prop_assert!(is_ascending(&snapshot.interesting_squares()));
    }

    /// Property: doubled pawns share a file, isolated pawns have no neighbours
    #[test]
    fn prop_pawn_structure_consistent(placement in placement_strategy()) {
        let board = build(&placement, true);
        let snapshot = analyze_preview(&board);
        for color in Color::BOTH {
            let pawns = snapshot.pawn_structure(color);
            let all = set_of(&pawns.all);
            prop_assert_eq!(all, board.pieces(color, Piece::Pawn));

            for sq in &pawns.doubled {
                prop_assert!(all.intersect(FILE_MASKS[sq.file()]).count() >= 2);
            }
            for sq in &pawns.isolated {
                prop_assert!(all.intersect(ADJACENT_FILES[sq.file()]).is_empty());
                prop_assert!(!pawns.backward.contains(sq));
            }
            for sq in &pawns.backward {
                prop_assert!(!all.intersect(ADJACENT_FILES[sq.file()]).is_empty());
            }
        }
    }

    /// Property: a passed pawn has no enemy pawn ahead on its own or an adjacent file
    #[test]
    fn prop_passed_pawns_unopposed(placement in placement_strategy()) {
        let board = build(&placement, true);
        let snapshot = analyze_preview(&board);
        for color in Color::BOTH {
            let enemy = board.pieces(color.opponent(), Piece::Pawn);
            for sq in &snapshot.pawn_structure(color).passed {
                for blocker in enemy {
                    let near = blocker.file().abs_diff(sq.file()) <= 1;
                    let ahead = match color {
                        Color::White => blocker.rank() >= sq.rank(),
                        Color::Black => blocker.rank() <= sq.rank(),
                    };
                    prop_assert!(!(near && ahead), "{} passed despite {}", sq, blocker);
                }
            }
        }
    }

    /// Property: pinned and skewered pieces are friendly non-pawns
    #[test]
    fn prop_pins_and_skewers_are_own_pieces(placement in placement_strategy()) {
        let board = build(&placement, true);
        let snapshot = analyze_preview(&board);
        for color in Color::BOTH {
            for sq in snapshot.pinned(color).iter().chain(snapshot.skewered(color)) {
                let (owner, piece) = board.piece_at(*sq).expect("occupied");
                prop_assert_eq!(owner, color);
                prop_assert_ne!(piece, Piece::Pawn);
            }
            for sq in snapshot.skewered(color) {
                prop_assert!(!board.attackers_of(color.opponent(), *sq).is_empty());
            }
        }
    }

    /// Property: two reads without a mutation return the same snapshot
    #[test]
    fn prop_cache_idempotent(placement in placement_strategy()) {
        let board = build(&placement, true);
        let mut cache = AnalysisCache::default();
        let first = cache.get_hanging(&board, Color::White);
        let second = cache.get_hanging(&board, Color::White);
        prop_assert_eq!(first, second);
        prop_assert_eq!(cache.computations(), 1);
        prop_assert_eq!(&*cache.snapshot(&board), &analyze(&board, &AnalysisParams::default()));
    }

    /// Property: previewing any pseudo-move leaves the board and cache untouched
    #[test]
    fn prop_preview_restores(placement in placement_strategy(), from in 0..64usize, to in 0..64usize) {
        let mut board = build(&placement, true);
        let mut cache = AnalysisCache::default();
        let canonical = cache.snapshot(&board);
        let before = board.clone();

        let uci = format!("{}{}", Square::from_index(from), Square::from_index(to));
        if let Ok(mv) = board.parse_uci(&uci) {
            let hypothetical = board.apply_hypothetical(mv);
            {
                let guard = PreviewGuard::new(&mut board, mv);
                prop_assert_eq!(guard.hash(), hypothetical.hash());
                prop_assert_eq!(analyze_preview(&*guard), analyze_preview(&hypothetical));
            }
            prop_assert_eq!(hypothetical.hash(), hypothetical.calculate_initial_hash());
        }

        prop_assert_eq!(&board, &before);
        prop_assert!(std::sync::Arc::ptr_eq(&canonical, &cache.snapshot(&board)));
        prop_assert_eq!(cache.computations(), 1);
    }
}
