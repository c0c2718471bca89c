//! Bitboard chess position: the reference position oracle.
//!
//! Provides piece placement, FEN parsing, coordinate move parsing,
//! make/unmake with incremental Zobrist keys, and the attack/pin queries the
//! analysis passes rely on. Legal move generation is deliberately absent.
//!
//! # Example
//! ```
//! use chess_tactics::board::{Board, Color};
//!
//! let mut board = Board::new();
//! board.make_move_uci("e2e4").unwrap();
//! assert!(!board.white_to_move());
//! assert!(board.attackers_of(Color::White, "d5".parse().unwrap()).count() == 1);
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod error;
mod fen;
mod make_unmake;
pub mod masks;
mod state;
mod types;

pub use attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, piece_attacks, queen_attacks,
    rook_attacks,
};
pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use state::{Board, UnmakeInfo};
pub use types::{Bitboard, BitboardIter, CastlingRights, Color, Move, Piece, Square};
