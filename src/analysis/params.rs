#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Switches for the optional analysis passes.
///
/// The piece-level pass (hanging, attacked, developed, activity) always runs;
/// a disabled pass leaves its classifications empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisParams {
    pub detect_pins: bool,
    pub detect_skewers: bool,
    pub pawn_structure: bool,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        AnalysisParams {
            detect_pins: true,
            detect_skewers: true,
            pawn_structure: true,
        }
    }
}

impl AnalysisParams {
    /// Only the piece-level pass
    #[must_use]
    pub fn piece_level_only() -> Self {
        AnalysisParams {
            detect_pins: false,
            detect_skewers: false,
            pawn_structure: false,
        }
    }
}
