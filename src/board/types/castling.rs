//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Drop whatever rights depend on a piece standing on `sq`
    /// (king or rook home squares). Called for both ends of every move.
    pub fn revoke_touching(&mut self, sq: Square) {
        match sq {
            Square::E1 => {
                self.remove(Color::White, true);
                self.remove(Color::White, false);
            }
            Square::E8 => {
                self.remove(Color::Black, true);
                self.remove(Color::Black, false);
            }
            Square::H1 => self.remove(Color::White, true),
            Square::A1 => self.remove(Color::White, false),
            Square::H8 => self.remove(Color::Black, true),
            Square::A8 => self.remove(Color::Black, false),
            _ => {}
        }
    }

    /// Raw bitmask, used as a Zobrist table index
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Parse the castling field of a FEN record (`KQkq`, `-`, ...)
    #[must_use]
    pub fn from_fen_field(field: &str) -> Option<Self> {
        let mut rights = CastlingRights::none();
        if field == "-" {
            return Some(rights);
        }
        for c in field.chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                _ => return None,
            }
        }
        Some(rights)
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

/// FEN castling field
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("-");
        }
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.has(color, kingside) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_field() {
        let rights = CastlingRights::from_fen_field("Kq").unwrap();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(rights.has(Color::Black, false));
        assert_eq!(rights.to_string(), "Kq");
        assert_eq!(CastlingRights::from_fen_field("-"), Some(CastlingRights::none()));
        assert_eq!(CastlingRights::from_fen_field("KX"), None);
    }

    #[test]
    fn test_revoke_touching() {
        let mut rights = CastlingRights::all();
        rights.revoke_touching(Square::H1);
        assert!(!rights.has(Color::White, true));
        assert!(rights.has(Color::White, false));
        rights.revoke_touching(Square::E8);
        assert_eq!(rights.to_string(), "Q");
    }
}
