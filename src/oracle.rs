//! The read-only position interface the analysis passes consume.

use crate::board::{masks, Bitboard, Board, Color, Move, Piece, Square};

/// Read-only view of a chess position.
///
/// The analysis passes never mutate a position; everything they know about
/// piece placement, attacks and pins comes through this trait. [`Board`] is
/// the reference implementation; a host application with its own rules
/// engine can implement it instead.
pub trait PositionOracle {
    /// Squares holding `piece`s of `color`
    fn pieces(&self, color: Color, piece: Piece) -> Bitboard;

    fn occupied(&self) -> Bitboard;

    fn occupied_by(&self, color: Color) -> Bitboard;

    fn piece_at(&self, sq: Square) -> Option<(Color, Piece)>;

    fn side_to_move(&self) -> Color;

    /// Pieces of `color` attacking `sq`, regardless of what stands on it
    fn attackers_of(&self, color: Color, sq: Square) -> Bitboard;

    /// Is the piece of `color` on `sq` pinned to its king?
    fn is_pinned(&self, color: Color, sq: Square) -> bool;

    /// Attack set of the sliding piece on `sq` (empty for anything else)
    fn sliding_attacks_of(&self, sq: Square) -> Bitboard;

    /// Attack set of any piece on `sq` (empty for an empty square)
    fn attacks_from(&self, sq: Square) -> Bitboard;

    /// Squares strictly between `a` and `b` on a shared line
    fn between(&self, a: Square, b: Square) -> Bitboard {
        masks::between(a, b)
    }

    /// Identity of the position, used to catch stale cache reads
    fn position_key(&self) -> u64;

    /// A detached copy with `mv` applied. `self` is untouched.
    fn apply_hypothetical(&self, mv: Move) -> Self
    where
        Self: Sized;
}

impl PositionOracle for Board {
    #[inline]
    fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        Board::pieces(self, color, piece)
    }

    #[inline]
    fn occupied(&self) -> Bitboard {
        Board::occupied(self)
    }

    #[inline]
    fn occupied_by(&self, color: Color) -> Bitboard {
        Board::occupied_by(self, color)
    }

    #[inline]
    fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        Board::piece_at(self, sq)
    }

    #[inline]
    fn side_to_move(&self) -> Color {
        self.current_color()
    }

    #[inline]
    fn attackers_of(&self, color: Color, sq: Square) -> Bitboard {
        Board::attackers_of(self, color, sq)
    }

    #[inline]
    fn is_pinned(&self, color: Color, sq: Square) -> bool {
        Board::is_pinned(self, color, sq)
    }

    #[inline]
    fn sliding_attacks_of(&self, sq: Square) -> Bitboard {
        Board::sliding_attacks_of(self, sq)
    }

    #[inline]
    fn attacks_from(&self, sq: Square) -> Bitboard {
        Board::attacks_from(self, sq)
    }

    #[inline]
    fn position_key(&self) -> u64 {
        self.hash()
    }

    fn apply_hypothetical(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }
}
