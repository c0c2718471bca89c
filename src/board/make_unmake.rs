use crate::zobrist::ZOBRIST;

use super::types::{Color, Move, Piece, Square};
use super::{Board, UnmakeInfo};

/// Rook origin and destination files for a castling move landing on `king_to`
fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    let rank = king_to.rank();
    if king_to.file() == 6 {
        (Square::at(rank, 7), Square::at(rank, 5))
    } else {
        (Square::at(rank, 0), Square::at(rank, 3))
    }
}

/// Square of the pawn taken by an en passant capture landing on `to`
fn en_passant_victim(to: Square, mover: Color) -> Square {
    Square::at((to.rank() as isize - mover.pawn_direction()) as usize, to.file())
}

impl Board {
    /// Apply `m` for the side to move and return what is needed to revert it.
    ///
    /// Moves are trusted: legality is the caller's business.
    ///
    /// # Panics
    /// Panics if the origin square is empty, or if a castling move finds no
    /// rook on its corner. Both mean the move was not produced for this
    /// position.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let previous_hash = self.hash;
        let previous_en_passant_target = self.en_passant_target;
        let previous_castling_rights = self.castling_rights;
        let previous_halfmove_clock = self.halfmove_clock;

        let color = self.current_color();
        let mut hash = self.hash ^ ZOBRIST.side();
        if let Some(old_ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant(old_ep);
        }

        let (moving_color, moving_piece) = self
            .piece_at(m.from())
            .expect("make_move: origin square is empty");

        let captured = if m.is_en_passant() {
            let victim_sq = en_passant_victim(m.to(), color);
            let victim = self.piece_at(victim_sq);
            if let Some((cap_color, cap_piece)) = victim {
                self.remove_piece(victim_sq, cap_color, cap_piece);
                hash ^= ZOBRIST.piece(cap_color, cap_piece, victim_sq);
            }
            victim
        } else if m.is_castling() {
            None
        } else {
            let victim = self.piece_at(m.to());
            if let Some((cap_color, cap_piece)) = victim {
                self.remove_piece(m.to(), cap_color, cap_piece);
                hash ^= ZOBRIST.piece(cap_color, cap_piece, m.to());
            }
            victim
        };

        self.remove_piece(m.from(), moving_color, moving_piece);
        hash ^= ZOBRIST.piece(moving_color, moving_piece, m.from());

        let placed = m.promoted_to().unwrap_or(moving_piece);
        self.set_piece(m.to(), moving_color, placed);
        hash ^= ZOBRIST.piece(moving_color, placed, m.to());

        if m.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(m.to());
            let (rook_color, rook) = self
                .piece_at(rook_from)
                .expect("make_move: castling without rook");
            self.remove_piece(rook_from, rook_color, rook);
            self.set_piece(rook_to, rook_color, rook);
            hash ^= ZOBRIST.piece(rook_color, rook, rook_from);
            hash ^= ZOBRIST.piece(rook_color, rook, rook_to);
        }

        self.en_passant_target = None;
        if moving_piece == Piece::Pawn && m.from().rank().abs_diff(m.to().rank()) == 2 {
            let ep_sq = Square::at((m.from().rank() + m.to().rank()) / 2, m.from().file());
            self.en_passant_target = Some(ep_sq);
            hash ^= ZOBRIST.en_passant(ep_sq);
        }

        if moving_piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        hash ^= ZOBRIST.castling(self.castling_rights);
        self.castling_rights.revoke_touching(m.from());
        self.castling_rights.revoke_touching(m.to());
        hash ^= ZOBRIST.castling(self.castling_rights);

        self.white_to_move = !self.white_to_move;
        self.hash = hash;

        UnmakeInfo {
            captured,
            previous_en_passant_target,
            previous_castling_rights,
            previous_hash,
            previous_halfmove_clock,
        }
    }

    /// Revert `m`, which must be the last move made with `make_move`.
    ///
    /// # Panics
    /// Panics if the destination square is empty, i.e. `m` was not the last
    /// move applied to this board.
    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        self.white_to_move = !self.white_to_move;
        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.hash = info.previous_hash;
        self.halfmove_clock = info.previous_halfmove_clock;

        let color = self.current_color();
        let (placed_color, placed) = self
            .piece_at(m.to())
            .expect("unmake_move: destination square is empty");
        self.remove_piece(m.to(), placed_color, placed);
        let original = if m.promoted_to().is_some() {
            Piece::Pawn
        } else {
            placed
        };
        self.set_piece(m.from(), placed_color, original);

        if m.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(m.to());
            if let Some((rook_color, rook)) = self.piece_at(rook_to) {
                self.remove_piece(rook_to, rook_color, rook);
                self.set_piece(rook_from, rook_color, rook);
            }
        } else if let Some((cap_color, cap_piece)) = info.captured {
            let victim_sq = if m.is_en_passant() {
                en_passant_victim(m.to(), color)
            } else {
                m.to()
            };
            self.set_piece(victim_sq, cap_color, cap_piece);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_make_unmake_restores_position() {
        let mut board = Board::new();
        let before = board.clone();
        let mv = Move::double_pawn_push(sq("e2"), sq("e4"));
        let info = board.make_move(mv);
        assert_eq!(board.en_passant_target(), Some(sq("e3")));
        assert!(!board.white_to_move());
        assert_eq!(board.hash(), board.calculate_initial_hash());
        board.unmake_move(mv, info);
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_round_trip() {
        let mut board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 5 1");
        let before = board.clone();
        let mv = Move::capture(sq("e4"), sq("d5"));
        let info = board.make_move(mv);
        assert_eq!(info.captured(), Some((Color::Black, Piece::Pawn)));
        assert_eq!(board.piece_at(sq("d5")), Some((Color::White, Piece::Pawn)));
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.hash(), board.calculate_initial_hash());
        board.unmake_move(mv, info);
        assert_eq!(board, before);
    }

    #[test]
    fn test_en_passant_round_trip() {
        let mut board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let before = board.clone();
        let mv = Move::en_passant(sq("e5"), sq("d6"));
        let info = board.make_move(mv);
        assert_eq!(board.piece_at(sq("d5")), None);
        assert_eq!(board.hash(), board.calculate_initial_hash());
        board.unmake_move(mv, info);
        assert_eq!(board, before);
    }

    #[test]
    fn test_castling_round_trip() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let before = board.clone();
        let mv = Move::castle_kingside(Square::E1, sq("g1"));
        let info = board.make_move(mv);
        assert_eq!(board.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
        assert!(!board.castling_rights().has(Color::White, true));
        assert!(!board.castling_rights().has(Color::White, false));
        assert!(board.castling_rights().has(Color::Black, true));
        assert_eq!(board.hash(), board.calculate_initial_hash());
        board.unmake_move(mv, info);
        assert_eq!(board, before);
    }

    #[test]
    fn test_promotion_capture_round_trip() {
        let mut board = Board::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let before = board.clone();
        let mv = Move::promotion(sq("a7"), sq("b8"), Piece::Queen, true);
        let info = board.make_move(mv);
        assert_eq!(board.piece_at(sq("b8")), Some((Color::White, Piece::Queen)));
        assert_eq!(board.hash(), board.calculate_initial_hash());
        board.unmake_move(mv, info);
        assert_eq!(board, before);
    }
}
