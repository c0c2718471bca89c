//! Pre-computed square masks.
//!
//! File, rank and adjacent-file masks are evaluated at compile time. The
//! pawn-span masks used by the pawn-structure pass are likewise `const`. The
//! two 64x64 line tables (`between` and `ray`) are built once on first use.

use once_cell::sync::Lazy;

use super::types::{Bitboard, Square};

/// File masks, index 0 = file a
pub const FILE_MASKS: [Bitboard; 8] = {
    let mut masks = [Bitboard(0); 8];
    let mut f = 0;
    while f < 8 {
        masks[f] = Bitboard(Bitboard::FILE_A.0 << f);
        f += 1;
    }
    masks
};

/// Rank masks, index 0 = rank 1
pub const RANK_MASKS: [Bitboard; 8] = {
    let mut masks = [Bitboard(0); 8];
    let mut r = 0;
    while r < 8 {
        masks[r] = Bitboard(Bitboard::RANK_1.0 << (r * 8));
        r += 1;
    }
    masks
};

/// Files adjacent to each file (0-7)
/// e.g., `ADJACENT_FILES`[3] = files c and e for file d
pub const ADJACENT_FILES: [Bitboard; 8] = {
    let mut masks = [Bitboard(0); 8];
    let mut f = 0;
    while f < 8 {
        let mut adj = 0u64;
        if f > 0 {
            adj |= Bitboard::FILE_A.0 << (f - 1);
        }
        if f < 7 {
            adj |= Bitboard::FILE_A.0 << (f + 1);
        }
        masks[f] = Bitboard(adj);
        f += 1;
    }
    masks
};

/// Ranks at or ahead of a rank, per color. `RANKS_AHEAD`[color][rank]
const RANKS_AHEAD: [[u64; 8]; 2] = {
    let mut masks = [[0u64; 8]; 2];
    let mut rank = 0;
    while rank < 8 {
        let mut r = 0;
        while r < 8 {
            let row = Bitboard::RANK_1.0 << (r * 8);
            if r >= rank {
                masks[0][rank] |= row;
            }
            if r <= rank {
                masks[1][rank] |= row;
            }
            r += 1;
        }
        rank += 1;
    }
    masks
};

/// Passed-pawn span: enemy pawns on these squares deny passed status.
///
/// `PASSED_SPAN`[color][square] covers the pawn's file and both adjacent
/// files, from the pawn's own rank forward in its direction of advance.
pub const PASSED_SPAN: [[Bitboard; 64]; 2] = {
    let mut masks = [[Bitboard(0); 64]; 2];
    let mut sq = 0;
    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;
        let files = FILE_MASKS[file].0 | ADJACENT_FILES[file].0;
        masks[0][sq] = Bitboard(files & RANKS_AHEAD[0][rank]);
        masks[1][sq] = Bitboard(files & RANKS_AHEAD[1][rank]);
        sq += 1;
    }
    masks
};

/// Support span: friendly pawns here are level with or behind the pawn on an
/// adjacent file, so they can still defend its advance.
pub const SUPPORT_SPAN: [[Bitboard; 64]; 2] = {
    let mut masks = [[Bitboard(0); 64]; 2];
    let mut sq = 0;
    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;
        // "Behind" for White is "ahead" for Black and vice versa
        masks[0][sq] = Bitboard(ADJACENT_FILES[file].0 & RANKS_AHEAD[1][rank]);
        masks[1][sq] = Bitboard(ADJACENT_FILES[file].0 & RANKS_AHEAD[0][rank]);
        sq += 1;
    }
    masks
};

/// Unit step from `a` towards `b` if the two share a rank, file or diagonal
fn line_step(a: Square, b: Square) -> Option<(isize, isize)> {
    if a == b {
        return None;
    }
    let dr = b.rank() as isize - a.rank() as isize;
    let df = b.file() as isize - a.file() as isize;
    if dr == 0 || df == 0 || dr.abs() == df.abs() {
        Some((dr.signum(), df.signum()))
    } else {
        None
    }
}

fn build_line_tables() -> (Box<[[Bitboard; 64]; 64]>, Box<[[Bitboard; 64]; 64]>) {
    let mut between = Box::new([[Bitboard::EMPTY; 64]; 64]);
    let mut ray = Box::new([[Bitboard::EMPTY; 64]; 64]);

    for a in (0..64).map(Square::from_index) {
        for b in (0..64).map(Square::from_index) {
            let Some((dr, df)) = line_step(a, b) else {
                continue;
            };

            let mut inner = Bitboard::EMPTY;
            let mut full = Bitboard::EMPTY;
            let mut passed_b = false;
            let mut cur = a.offset(dr, df);
            while let Some(sq) = cur {
                if sq == b {
                    passed_b = true;
                } else if !passed_b {
                    inner = inner.with(sq);
                }
                full = full.with(sq);
                cur = sq.offset(dr, df);
            }

            between[a.index()][b.index()] = inner;
            ray[a.index()][b.index()] = full;
        }
    }

    (between, ray)
}

static LINE_TABLES: Lazy<(Box<[[Bitboard; 64]; 64]>, Box<[[Bitboard; 64]; 64]>)> =
    Lazy::new(build_line_tables);

/// Squares strictly between `a` and `b` if they share a rank, file or
/// diagonal; empty otherwise (and for `a == b` or adjacent squares).
#[inline]
#[must_use]
pub fn between(a: Square, b: Square) -> Bitboard {
    LINE_TABLES.0[a.index()][b.index()]
}

/// The line starting just past `a`, running through `b` and on to the board
/// edge. `b` is included, `a` is not. Empty if `a` and `b` are not aligned.
#[inline]
#[must_use]
pub fn ray(a: Square, b: Square) -> Bitboard {
    LINE_TABLES.1[a.index()][b.index()]
}
