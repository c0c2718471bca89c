//! Real-time tactical annotation for chess positions.
//!
//! The [`analysis`] passes classify hanging, attacked, pinned, skewered and
//! developed pieces plus pawn structure for both sides of a position, reading
//! it through the [`PositionOracle`] trait. [`board::Board`] is the bundled
//! reference oracle and [`Session`] ties a canonical game to its analysis
//! cache.

pub mod analysis;
pub mod board;
pub mod oracle;
pub mod session;
mod zobrist;

pub use analysis::{analyze, analyze_preview, AnalysisParams, AnalysisSnapshot};
pub use board::{Board, Color, Move, Piece, Square};
pub use oracle::PositionOracle;
pub use session::{Session, SessionError};
