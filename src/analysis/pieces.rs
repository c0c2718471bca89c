//! Piece-level pass: attackers, defenders, hanging, attacked, developed.

use crate::board::{Bitboard, Color, Piece, Square};
use crate::oracle::PositionOracle;

use super::AttackInfo;

/// Output of one sweep over the occupied squares.
#[derive(Debug, Default)]
pub(super) struct PieceLevel {
    /// Every occupied square with its attack info, ascending
    pub(super) attack_map: Vec<(Square, AttackInfo)>,
    pub(super) hanging: [Bitboard; 2],
    pub(super) attacked: [Bitboard; 2],
    pub(super) developed: [Bitboard; 2],
    /// Union of squares attacked by each side's non-pawn pieces
    pub(super) reach: [Bitboard; 2],
}

/// Knights and bishops count as developed once they leave their back rank.
/// A piece that returns home is undeveloped again.
#[inline]
fn is_developed(color: Color, piece: Piece, sq: Square) -> bool {
    piece.is_minor() && sq.rank() != color.back_rank()
}

pub(super) fn piece_pass<P: PositionOracle>(position: &P) -> PieceLevel {
    let occupied = position.occupied();
    let mut out = PieceLevel {
        attack_map: Vec::with_capacity(occupied.count() as usize),
        ..PieceLevel::default()
    };

    for sq in occupied {
        let Some((color, piece)) = position.piece_at(sq) else {
            continue;
        };
        let side = color.index();

        let info = AttackInfo {
            attackers: position.attackers_of(color.opponent(), sq),
            defenders: position.attackers_of(color, sq),
        };

        if info.is_attacked() {
            out.attacked[side] = out.attacked[side].with(sq);
        }
        if info.is_hanging() {
            out.hanging[side] = out.hanging[side].with(sq);
        }
        if is_developed(color, piece, sq) {
            out.developed[side] = out.developed[side].with(sq);
        }
        if piece != Piece::Pawn {
            out.reach[side] = out.reach[side].union(position.attacks_from(sq));
        }

        out.attack_map.push((sq, info));
    }

    log::trace!(
        "piece pass: {} occupied, hanging w={} b={}",
        out.attack_map.len(),
        out.hanging[0].count(),
        out.hanging[1].count()
    );
    out
}
