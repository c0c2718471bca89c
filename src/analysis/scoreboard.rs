//! Side-by-side summary of a snapshot from one player's point of view.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Color;

use super::AnalysisSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StatKind {
    Activity,
    Development,
    Pawns,
    Backward,
    Isolated,
    Doubled,
    Passed,
}

impl StatKind {
    pub const ALL: [StatKind; 7] = [
        StatKind::Activity,
        StatKind::Development,
        StatKind::Pawns,
        StatKind::Backward,
        StatKind::Isolated,
        StatKind::Doubled,
        StatKind::Passed,
    ];

    /// Does a larger count favour its owner?
    pub const fn higher_is_better(self) -> bool {
        matches!(
            self,
            StatKind::Activity | StatKind::Development | StatKind::Pawns | StatKind::Passed
        )
    }

    /// Raw count of this statistic for `color`
    pub fn value(self, snapshot: &AnalysisSnapshot, color: Color) -> u32 {
        let pawns = snapshot.pawn_structure(color);
        let count = match self {
            StatKind::Activity => return snapshot.activity(color),
            StatKind::Development => snapshot.developed_count(color),
            StatKind::Pawns => pawns.all.len(),
            StatKind::Backward => pawns.backward.len(),
            StatKind::Isolated => pawns.isolated.len(),
            StatKind::Doubled => pawns.doubled.len(),
            StatKind::Passed => pawns.passed.len(),
        };
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatKind::Activity => "Activity",
            StatKind::Development => "Development",
            StatKind::Pawns => "Pawns",
            StatKind::Backward => "Backward",
            StatKind::Isolated => "Isolated",
            StatKind::Doubled => "Doubled",
            StatKind::Passed => "Passed",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Favor {
    Favorable,
    Unfavorable,
    Even,
}

impl Favor {
    fn judge(kind: StatKind, player: u32, opponent: u32) -> Favor {
        use std::cmp::Ordering;

        let ord = if kind.higher_is_better() {
            player.cmp(&opponent)
        } else {
            opponent.cmp(&player)
        };
        match ord {
            Ordering::Greater => Favor::Favorable,
            Ordering::Less => Favor::Unfavorable,
            Ordering::Equal => Favor::Even,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatRow {
    pub kind: StatKind,
    pub player: u32,
    pub opponent: u32,
    pub favor: Favor,
}

/// One row per [`StatKind`], in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scoreboard {
    pub player: Color,
    pub rows: Vec<StatRow>,
}

impl Scoreboard {
    pub fn from_perspective(snapshot: &AnalysisSnapshot, player: Color) -> Self {
        let rows = StatKind::ALL
            .iter()
            .map(|&kind| {
                let mine = kind.value(snapshot, player);
                let theirs = kind.value(snapshot, player.opponent());
                StatRow {
                    kind,
                    player: mine,
                    opponent: theirs,
                    favor: Favor::judge(kind, mine, theirs),
                }
            })
            .collect();
        Scoreboard { player, rows }
    }

    pub fn row(&self, kind: StatKind) -> Option<&StatRow> {
        self.rows.iter().find(|row| row.kind == kind)
    }

    /// Rows where the player is ahead
    pub fn favorable(&self) -> impl Iterator<Item = &StatRow> {
        self.rows.iter().filter(|row| row.favor == Favor::Favorable)
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12} {:>5} {:>5}", self.player.to_string(), "you", "them")?;
        for row in &self.rows {
            let mark = match row.favor {
                Favor::Favorable => "+",
                Favor::Unfavorable => "-",
                Favor::Even => "=",
            };
            writeln!(
                f,
                "{:<12} {:>5} {:>5} {}",
                row.kind.to_string(),
                row.player,
                row.opponent,
                mark
            )?;
        }
        Ok(())
    }
}
