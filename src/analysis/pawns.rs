//! Pawn structure classification.

use crate::board::masks::{ADJACENT_FILES, FILE_MASKS, PASSED_SPAN, SUPPORT_SPAN};
use crate::board::{Bitboard, Color, Piece};
use crate::oracle::PositionOracle;

use super::PawnStructure;

/// Classify every pawn of `color`.
///
/// - doubled: another own pawn on the same file
/// - isolated: no own pawn on either adjacent file
/// - backward: not isolated, and no own pawn on an adjacent file level with
///   or behind it
/// - passed: no enemy pawn in front of it on its own or an adjacent file
///
/// A pawn can carry several labels at once. With `classify` off only the
/// `all` list is filled in.
pub(super) fn pawn_structure<P: PositionOracle>(
    position: &P,
    color: Color,
    classify: bool,
) -> PawnStructure {
    let own = position.pieces(color, Piece::Pawn);
    let enemy = position.pieces(color.opponent(), Piece::Pawn);

    let mut doubled = Bitboard::EMPTY;
    let mut isolated = Bitboard::EMPTY;
    let mut backward = Bitboard::EMPTY;
    let mut passed = Bitboard::EMPTY;

    if classify {
        let side = color.index();
        for sq in own {
            let file = sq.file();
            let idx = sq.index();

            if own.intersect(FILE_MASKS[file]).count() > 1 {
                doubled = doubled.with(sq);
            }
            let is_isolated = own.intersect(ADJACENT_FILES[file]).is_empty();
            if is_isolated {
                isolated = isolated.with(sq);
            } else if own.intersect(SUPPORT_SPAN[side][idx]).is_empty() {
                backward = backward.with(sq);
            }
            if enemy.intersect(PASSED_SPAN[side][idx]).is_empty() {
                passed = passed.with(sq);
            }
        }
    }

    PawnStructure {
        all: own.to_squares(),
        doubled: doubled.to_squares(),
        isolated: isolated.to_squares(),
        backward: backward.to_squares(),
        passed: passed.to_squares(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Square};

    fn squares(list: &[&str]) -> Vec<Square> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_start_position_has_no_flaws() {
        let board = Board::new();
        let white = pawn_structure(&board, Color::White, true);
        assert_eq!(white.all.len(), 8);
        assert!(white.doubled.is_empty());
        assert!(white.isolated.is_empty());
        assert!(white.backward.is_empty());
        assert!(white.passed.is_empty());
    }

    #[test]
    fn test_doubled_and_isolated() {
        // White: c2, c3 doubled and isolated; h2 isolated
        let board: Board = "4k3/8/8/8/8/2P5/2P4P/4K3 w - - 0 1".parse().unwrap();
        let white = pawn_structure(&board, Color::White, true);
        assert_eq!(white.doubled, squares(&["c2", "c3"]));
        assert_eq!(white.isolated, squares(&["c2", "h2", "c3"]));
        assert!(white.backward.is_empty());
        // No enemy pawns at all: every pawn is passed
        assert_eq!(white.passed, white.all);
    }

    #[test]
    fn test_backward_pawn() {
        // d3 has neighbours only on c4/e4, both ahead of it
        let board: Board = "4k3/8/8/8/2P1P3/3P4/8/4K3 w - - 0 1".parse().unwrap();
        let white = pawn_structure(&board, Color::White, true);
        assert_eq!(white.backward, squares(&["d3"]));
        assert!(white.isolated.is_empty());
    }

    #[test]
    fn test_passed_pawn_blocked_by_adjacent_enemy() {
        // Black pawn on f6 guards e5's path; a5 is free
        let board: Board = "4k3/8/5p2/P3P3/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let white = pawn_structure(&board, Color::White, true);
        assert_eq!(white.passed, squares(&["a5"]));
        let black = pawn_structure(&board, Color::Black, true);
        assert!(black.passed.is_empty());
    }

    #[test]
    fn test_black_perspective_backward() {
        // Mirror of the white backward case
        let board: Board = "4k3/8/3p4/2p1p3/8/8/8/4K3 b - - 0 1".parse().unwrap();
        let black = pawn_structure(&board, Color::Black, true);
        assert_eq!(black.backward, squares(&["d6"]));
    }

    #[test]
    fn test_classification_disabled_keeps_all() {
        let board: Board = "4k3/8/8/8/8/2P5/2P4P/4K3 w - - 0 1".parse().unwrap();
        let white = pawn_structure(&board, Color::White, false);
        assert_eq!(white.all.len(), 3);
        assert!(white.doubled.is_empty());
        assert!(white.isolated.is_empty());
        assert!(white.passed.is_empty());
    }
}
