//! Core chess types.
//!
//! - `Piece` and `Color`
//! - `Square` - board square (u8 index, a1 = 0)
//! - `Bitboard` - square set
//! - `Move` - compact move representation
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
