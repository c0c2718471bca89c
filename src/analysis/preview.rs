//! Scoped make/unmake for hover previews.

use std::ops::Deref;

use crate::board::{Board, Move, UnmakeInfo};

/// A move made on a borrowed board, taken back when the guard drops.
///
/// While the guard lives the board shows the hypothetical position; the
/// exclusive borrow keeps anything else from reading the canonical position
/// in the meantime. Dropping the guard, including during a panic unwind,
/// restores the board exactly.
///
/// ```
/// use chess_tactics::analysis::{analyze_preview, PreviewGuard};
/// use chess_tactics::board::Board;
///
/// let mut board = Board::new();
/// let before = board.clone();
/// let mv = board.parse_uci("e2e4").unwrap();
/// {
///     let preview = PreviewGuard::new(&mut board, mv);
///     let snapshot = analyze_preview(&*preview);
///     assert_eq!(snapshot.pawn_structure(chess_tactics::board::Color::White).all.len(), 8);
/// }
/// assert_eq!(board, before);
/// ```
pub struct PreviewGuard<'a> {
    board: &'a mut Board,
    mv: Move,
    info: Option<UnmakeInfo>,
}

impl<'a> PreviewGuard<'a> {
    /// Make `mv` on `board`.
    ///
    /// # Panics
    ///
    /// Panics if the origin square of `mv` is empty, as `Board::make_move` does.
    pub fn new(board: &'a mut Board, mv: Move) -> Self {
        let info = board.make_move(mv);
        log::trace!("preview make {mv}");
        PreviewGuard {
            board,
            mv,
            info: Some(info),
        }
    }

    /// The move being previewed
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for PreviewGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for PreviewGuard<'_> {
    fn drop(&mut self) {
        if let Some(info) = self.info.take() {
            self.board.unmake_move(self.mv, info);
            log::trace!("preview unmake {}", self.mv);
        }
    }
}
