//! Attacker, pin and slider queries on a `Board`.

use super::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, piece_attacks, rook_attacks,
};
use super::masks::between;
use super::state::Board;
use super::types::{Bitboard, Color, Piece, Square};

impl Board {
    /// All pieces of one color on the board
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.all_occupied
    }

    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    /// Bishops and queens of `color`
    #[inline]
    fn diagonal_sliders(&self, color: Color) -> Bitboard {
        self.pieces(color, Piece::Bishop)
            .union(self.pieces(color, Piece::Queen))
    }

    /// Rooks and queens of `color`
    #[inline]
    fn straight_sliders(&self, color: Color) -> Bitboard {
        self.pieces(color, Piece::Rook)
            .union(self.pieces(color, Piece::Queen))
    }

    /// Every piece of `color` attacking `sq` under the current occupancy.
    ///
    /// Whatever stands on `sq` (friend, foe or nothing) does not matter, so
    /// this answers both "who attacks this piece" and "who defends it".
    #[must_use]
    pub fn attackers_of(&self, color: Color, sq: Square) -> Bitboard {
        let occupancy = self.all_occupied;

        // Look backwards from the target: a pawn of `color` attacks `sq` iff a
        // pawn of the other color on `sq` would attack it.
        let pawns = pawn_attacks(color.opponent(), sq).intersect(self.pieces(color, Piece::Pawn));
        let knights = knight_attacks(sq).intersect(self.pieces(color, Piece::Knight));
        let kings = king_attacks(sq).intersect(self.pieces(color, Piece::King));
        let diagonal = bishop_attacks(sq, occupancy).intersect(self.diagonal_sliders(color));
        let straight = rook_attacks(sq, occupancy).intersect(self.straight_sliders(color));

        pawns
            .union(knights)
            .union(kings)
            .union(diagonal)
            .union(straight)
    }

    /// True if the piece of `color` on `sq` is pinned to its own king by an
    /// enemy slider. Empty squares, enemy pieces and the king itself are
    /// never pinned.
    #[must_use]
    pub fn is_pinned(&self, color: Color, sq: Square) -> bool {
        if !self.occupied_by(color).contains(sq) {
            return false;
        }
        let Some(king_sq) = self.pieces(color, Piece::King).lsb() else {
            return false;
        };
        if king_sq == sq {
            return false;
        }

        // X-ray from the king with the candidate lifted off the board
        let occupancy = self.all_occupied.without(Bitboard::from_square(sq));
        let enemy = color.opponent();
        let pinners = bishop_attacks(king_sq, occupancy)
            .intersect(self.diagonal_sliders(enemy))
            .union(rook_attacks(king_sq, occupancy).intersect(self.straight_sliders(enemy)));

        pinners
            .iter()
            .any(|pinner| between(king_sq, pinner).contains(sq))
    }

    /// Attack set of the slider standing on `sq`; empty for anything else
    #[must_use]
    pub fn sliding_attacks_of(&self, sq: Square) -> Bitboard {
        match self.piece_at(sq) {
            Some((color, piece)) if piece.is_slider() => {
                piece_attacks(piece, color, sq, self.all_occupied)
            }
            _ => Bitboard::EMPTY,
        }
    }

    /// Attack set of whatever piece stands on `sq`; empty for empty squares
    #[must_use]
    pub fn attacks_from(&self, sq: Square) -> Bitboard {
        self.piece_at(sq).map_or(Bitboard::EMPTY, |(color, piece)| {
            piece_attacks(piece, color, sq, self.all_occupied)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_board(fen: &str) -> Board {
        fen.parse().expect("valid fen")
    }

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_attackers_of_mixed() {
        // d5 pawn attacked by e4 pawn, c3 knight and a2 bishop (through b3, c4)
        let board = make_board("4k3/8/8/3p4/4P3/2N5/B7/4K3 w - - 0 1");
        let attackers = board.attackers_of(Color::White, sq("d5"));
        assert_eq!(attackers.to_squares(), vec![sq("a2"), sq("c3"), sq("e4")]);
        assert!(board.attackers_of(Color::Black, sq("d5")).is_empty());
    }

    #[test]
    fn test_attackers_include_defenders() {
        // The black rook defends its own knight
        let board = make_board("4k3/8/8/3n4/8/8/8/3rK3 w - - 0 1");
        assert_eq!(
            board.attackers_of(Color::Black, sq("d5")).to_squares(),
            vec![sq("d1")]
        );
    }

    #[test]
    fn test_sliders_blocked() {
        let board = make_board("4k3/8/8/3n4/8/3P4/8/3RK3 w - - 0 1");
        assert!(board.attackers_of(Color::White, sq("d5")).is_empty());
    }

    #[test]
    fn test_absolute_pin() {
        // Black bishop b4 pins the white knight on c3 to the king on e1
        let board = make_board("4k3/8/8/8/1b6/2N5/8/4K3 w - - 0 1");
        assert!(board.is_pinned(Color::White, sq("c3")));
        assert!(!board.is_pinned(Color::Black, sq("b4")));
        assert!(!board.is_pinned(Color::White, Square::E1));
    }

    #[test]
    fn test_no_pin_with_two_blockers() {
        let board = make_board("4k3/8/8/8/1b6/2N5/3P4/4K3 w - - 0 1");
        assert!(!board.is_pinned(Color::White, sq("c3")));
        assert!(!board.is_pinned(Color::White, sq("d2")));
    }

    #[test]
    fn test_wrong_slider_type_does_not_pin() {
        // A rook on a diagonal pins nothing
        let board = make_board("4k3/8/8/8/1r6/2N5/8/4K3 w - - 0 1");
        assert!(!board.is_pinned(Color::White, sq("c3")));
    }

    #[test]
    fn test_sliding_attacks_of() {
        let board = Board::new();
        // Blockers are included in the attack set, whoever owns them
        assert_eq!(
            board.sliding_attacks_of(sq("a1")).to_squares(),
            vec![sq("b1"), sq("a2")]
        );
        assert!(board.sliding_attacks_of(sq("b1")).is_empty()); // knight
        let board = make_board("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1");
        assert_eq!(board.sliding_attacks_of(sq("d4")).count(), 27);
    }
}
