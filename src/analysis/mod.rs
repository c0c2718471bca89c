//! Tactical annotation passes.
//!
//! [`analyze`] runs the piece-level, pin/skewer and pawn-structure passes
//! against any [`PositionOracle`] and merges their output into one immutable
//! [`AnalysisSnapshot`]. The [`AnalysisCache`] holds at most one snapshot for
//! the canonical position; [`analyze_preview`] and [`PreviewGuard`] evaluate
//! hypothetical positions without touching it.
//!
//! All square lists are in ascending square order (a1 = 0, h8 = 63).
//!
//! # Example
//! ```
//! use chess_tactics::analysis::analyze_preview;
//! use chess_tactics::board::{Board, Color};
//!
//! let board = Board::new();
//! let snapshot = analyze_preview(&board);
//! assert!(snapshot.hanging(Color::White).is_empty());
//! assert_eq!(snapshot.pawn_count(Color::Black), 8);
//! ```

mod cache;
mod params;
mod pawns;
mod pieces;
mod pins;
mod preview;
mod scoreboard;

#[cfg(test)]
mod tests;

pub use cache::{AnalysisCache, SharedAnalysisCache};
pub use params::AnalysisParams;
pub use preview::PreviewGuard;
pub use scoreboard::{Favor, Scoreboard, StatKind, StatRow};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Bitboard, Color, Square};
use crate::oracle::PositionOracle;

/// Who attacks and who defends an occupied square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttackInfo {
    /// Enemy pieces attacking the square
    pub attackers: Bitboard,
    /// Friendly pieces defending the square
    pub defenders: Bitboard,
}

impl AttackInfo {
    #[inline]
    pub fn attacker_count(&self) -> u32 {
        self.attackers.count()
    }

    #[inline]
    pub fn defender_count(&self) -> u32 {
        self.defenders.count()
    }

    #[inline]
    pub fn is_attacked(&self) -> bool {
        !self.attackers.is_empty()
    }

    /// Count heuristic: attacked and either undefended or outnumbered.
    ///
    /// Equal counts are not hanging. Piece values play no part; this is
    /// not an exchange evaluation.
    #[inline]
    pub fn is_hanging(&self) -> bool {
        let attackers = self.attacker_count();
        let defenders = self.defender_count();
        attackers > 0 && (defenders == 0 || attackers > defenders)
    }
}

/// Pawn classifications for one side. A pawn may appear in several lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PawnStructure {
    pub all: Vec<Square>,
    pub doubled: Vec<Square>,
    pub isolated: Vec<Square>,
    pub backward: Vec<Square>,
    pub passed: Vec<Square>,
}

/// Everything computed for one side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SideAnalysis {
    pub hanging: Vec<Square>,
    pub attacked: Vec<Square>,
    pub pinned: Vec<Square>,
    pub skewered: Vec<Square>,
    pub developed: Vec<Square>,
    pub pawns: PawnStructure,
    /// Distinct squares attacked by non-pawn pieces
    pub activity: u32,
}

/// Immutable result of a full analysis of one position.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisSnapshot {
    sides: [SideAnalysis; 2],
    /// One entry per occupied square, ascending
    attack_map: Vec<(Square, AttackInfo)>,
    key: u64,
}

impl AnalysisSnapshot {
    #[inline]
    pub fn side(&self, color: Color) -> &SideAnalysis {
        &self.sides[color.index()]
    }

    pub fn hanging(&self, color: Color) -> &[Square] {
        &self.side(color).hanging
    }

    pub fn attacked(&self, color: Color) -> &[Square] {
        &self.side(color).attacked
    }

    pub fn attacked_count(&self, color: Color) -> usize {
        self.side(color).attacked.len()
    }

    pub fn pinned(&self, color: Color) -> &[Square] {
        &self.side(color).pinned
    }

    pub fn skewered(&self, color: Color) -> &[Square] {
        &self.side(color).skewered
    }

    pub fn pawn_structure(&self, color: Color) -> &PawnStructure {
        &self.side(color).pawns
    }

    pub fn developed_count(&self, color: Color) -> usize {
        self.side(color).developed.len()
    }

    pub fn activity(&self, color: Color) -> u32 {
        self.side(color).activity
    }

    pub fn pawn_count(&self, color: Color) -> usize {
        self.side(color).pawns.all.len()
    }

    /// Attackers and defenders of the piece on `sq`; `None` for empty squares.
    pub fn attack_info(&self, sq: Square) -> Option<&AttackInfo> {
        self.attack_map
            .binary_search_by_key(&sq, |(s, _)| *s)
            .ok()
            .map(|i| &self.attack_map[i].1)
    }

    /// Occupied squares attacked by the enemy, both sides, ascending.
    pub fn interesting_squares(&self) -> Vec<Square> {
        self.attack_map
            .iter()
            .filter(|(_, info)| info.is_attacked())
            .map(|(sq, _)| *sq)
            .collect()
    }

    /// Key of the position this snapshot was computed from
    #[inline]
    pub fn key(&self) -> u64 {
        self.key
    }
}

/// Run every enabled pass against `position`.
pub fn analyze<P: PositionOracle>(position: &P, params: &AnalysisParams) -> AnalysisSnapshot {
    let piece_level = pieces::piece_pass(position);

    let sides = Color::BOTH.map(|color| {
        let side = color.index();
        SideAnalysis {
            hanging: piece_level.hanging[side].to_squares(),
            attacked: piece_level.attacked[side].to_squares(),
            pinned: if params.detect_pins {
                pins::pinned(position, color).to_squares()
            } else {
                Vec::new()
            },
            skewered: if params.detect_skewers {
                pins::skewered(position, color).to_squares()
            } else {
                Vec::new()
            },
            developed: piece_level.developed[side].to_squares(),
            pawns: pawns::pawn_structure(position, color, params.pawn_structure),
            activity: piece_level.reach[side].count(),
        }
    });

    AnalysisSnapshot {
        sides,
        attack_map: piece_level.attack_map,
        key: position.position_key(),
    }
}

/// Analyze a detached hypothetical position with default parameters.
///
/// Pure: no cache is read or written, so the result can never be confused
/// with the canonical snapshot.
pub fn analyze_preview<P: PositionOracle>(position: &P) -> AnalysisSnapshot {
    log::trace!("preview analysis of {:016x}", position.position_key());
    analyze(position, &AnalysisParams::default())
}

