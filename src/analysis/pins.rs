//! Pin and skewer detection.

use crate::board::masks::ray;
use crate::board::{Bitboard, Color, Piece, Square};
use crate::oracle::PositionOracle;

/// Non-pawn pieces of `color` that the oracle reports as pinned.
pub(super) fn pinned<P: PositionOracle>(position: &P, color: Color) -> Bitboard {
    let mut pinned = Bitboard::EMPTY;
    for piece in Piece::NON_PAWN {
        for sq in position.pieces(color, piece) {
            if position.is_pinned(color, sq) {
                pinned = pinned.with(sq);
            }
        }
    }
    pinned
}

/// Nearest occupied square of `beyond` when walking away from `origin`.
///
/// Along a line, square indices move monotonically, so the nearest square
/// is the lowest index when walking upwards and the highest otherwise.
#[inline]
fn nearest_beyond(origin: Square, front: Square, beyond: Bitboard) -> Option<Square> {
    if front > origin {
        beyond.lsb()
    } else {
        beyond.msb()
    }
}

/// Pieces of `color` skewered by an enemy slider.
///
/// A front piece is skewered when an enemy bishop, rook or queen attacks it
/// and the first piece behind it on the same line is another non-pawn piece
/// of `color` worth no more than the front piece (any value behind a king).
/// A pawn or enemy piece directly behind ends the scan for that line.
pub(super) fn skewered<P: PositionOracle>(position: &P, color: Color) -> Bitboard {
    let enemy = color.opponent();
    let occupied = position.occupied();
    let targets = position
        .occupied_by(color)
        .without(position.pieces(color, Piece::Pawn));

    let mut skewered = Bitboard::EMPTY;
    for slider in Piece::SLIDERS {
        for attacker in position.pieces(enemy, slider) {
            let fronts = position.sliding_attacks_of(attacker).intersect(targets);
            for front in fronts {
                if skewered.contains(front) {
                    continue;
                }
                let Some((_, front_piece)) = position.piece_at(front) else {
                    continue;
                };

                let beyond = ray(attacker, front)
                    .without(position.between(attacker, front))
                    .without(Bitboard::from_square(front));
                let Some(back) = nearest_beyond(attacker, front, beyond.intersect(occupied)) else {
                    continue;
                };
                let Some((back_color, back_piece)) = position.piece_at(back) else {
                    continue;
                };

                let clear = position.between(front, back).intersect(occupied).is_empty();
                let valuable = front_piece == Piece::King
                    || front_piece.material() >= back_piece.material();
                if back_color == color && back_piece != Piece::Pawn && clear && valuable {
                    skewered = skewered.with(front);
                }
            }
        }
    }

    log::trace!("skewer pass: {color} has {} skewered", skewered.count());
    skewered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn make_board(fen: &str) -> Board {
        fen.parse().expect("valid fen")
    }

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_nearest_beyond_direction() {
        let beyond = Bitboard::from_square(sq("a6")).with(sq("a8"));
        assert_eq!(nearest_beyond(sq("a1"), sq("a4"), beyond), Some(sq("a6")));
        let beyond = Bitboard::from_square(sq("a1")).with(sq("a3"));
        assert_eq!(nearest_beyond(sq("a8"), sq("a5"), beyond), Some(sq("a3")));
    }

    #[test]
    fn test_rook_in_front_of_bishop() {
        let board = make_board("8/b7/8/8/r7/8/8/Q7 w - - 0 1");
        assert_eq!(skewered(&board, Color::Black).to_squares(), vec![sq("a4")]);
        assert!(skewered(&board, Color::White).is_empty());
    }

    #[test]
    fn test_pawn_behind_blocks() {
        let board = make_board("8/b7/8/p7/r7/8/8/Q7 w - - 0 1");
        assert!(skewered(&board, Color::Black).is_empty());
    }

    #[test]
    fn test_cheaper_front_piece_is_not_skewered() {
        // Bishop in front of a queen is a pin-like pattern, not a skewer
        let board = make_board("8/8/8/8/3q4/8/1b6/Q7 w - - 0 1");
        assert!(skewered(&board, Color::Black).is_empty());
    }

    #[test]
    fn test_king_in_front_is_always_skewered() {
        // Rook e1 checks the king on e4 with the queen behind on e8
        let board = make_board("4q3/8/8/8/4k3/8/8/4R1K1 b - - 0 1");
        assert_eq!(skewered(&board, Color::Black).to_squares(), vec![sq("e4")]);
    }

    #[test]
    fn test_equal_value_is_skewered() {
        // Knight in front of a bishop, then rook in front of a rook
        let board = make_board("8/b7/8/8/n7/8/8/Q7 w - - 0 1");
        assert_eq!(skewered(&board, Color::Black).to_squares(), vec![sq("a4")]);
        let board = make_board("r7/8/8/8/r7/8/8/Q7 w - - 0 1");
        assert_eq!(skewered(&board, Color::Black).to_squares(), vec![sq("a4")]);
    }

    #[test]
    fn test_piece_shielding_king_is_not_skewered() {
        // Rook e5 stands between the e1 rook and its own king
        let board = make_board("4k3/8/8/4r3/8/8/8/4RK2 w - - 0 1");
        assert!(skewered(&board, Color::Black).is_empty());
        let board = make_board("4k3/8/8/4q3/8/8/8/4RK2 w - - 0 1");
        assert!(skewered(&board, Color::Black).is_empty());
        assert_eq!(pinned(&board, Color::Black).to_squares(), vec![sq("e5")]);
    }

    #[test]
    fn test_enemy_piece_behind_blocks() {
        let board = make_board("8/b7/8/N7/r7/8/8/Q7 w - - 0 1");
        assert!(skewered(&board, Color::Black).is_empty());
    }

    #[test]
    fn test_pinned_skips_pawns() {
        // Bishop b4 lines up against both the d2 pawn and the king
        let board = make_board("4k3/8/8/8/1b6/8/3P4/4K3 w - - 0 1");
        assert!(pinned(&board, Color::White).is_empty());
        let board = make_board("4k3/8/8/8/1b6/8/3N4/4K3 w - - 0 1");
        assert_eq!(pinned(&board, Color::White).to_squares(), vec![sq("d2")]);
    }
}
