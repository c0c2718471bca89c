//! The canonical game: one board, its analysis cache and move history.

use std::fmt;
use std::sync::Arc;

use crate::analysis::{
    analyze_preview, AnalysisCache, AnalysisParams, AnalysisSnapshot, AttackInfo, PawnStructure,
    PreviewGuard, Scoreboard,
};
use crate::board::{Board, Color, FenError, Move, MoveParseError, Square, UnmakeInfo};

/// Error setting up a session from a `position` command
#[derive(Debug, Clone)]
pub enum SessionError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Invalid move in the move list
    InvalidMove { move_str: String, error: MoveParseError },
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            SessionError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            SessionError::MissingParts => write!(f, "Missing required parts in position command"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<FenError> for SessionError {
    fn from(e: FenError) -> Self {
        SessionError::InvalidFen(e)
    }
}

/// A game being annotated.
///
/// Every mutation (apply, undo, redo, parameter change) empties the analysis
/// cache before returning, so reads always describe the current position.
///
/// ```
/// use chess_tactics::board::{Color, Square};
/// use chess_tactics::Session;
///
/// let mut session = Session::default();
/// for mv in ["e2e4", "e7e5", "d1h5"] {
///     session.play_uci(mv).unwrap();
/// }
/// let e5: Square = "e5".parse().unwrap();
/// assert_eq!(session.hanging(Color::Black), vec![e5]);
/// ```
#[derive(Debug)]
pub struct Session {
    board: Board,
    cache: AnalysisCache,
    undo: Vec<(Move, UnmakeInfo)>,
    redo: Vec<Move>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Board::new())
    }
}

impl Session {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Session::with_params(board, AnalysisParams::default())
    }

    #[must_use]
    pub fn with_params(board: Board, params: AnalysisParams) -> Self {
        Session {
            board,
            cache: AnalysisCache::new(params),
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Build a session from a `position` command.
    ///
    /// Accepts "position startpos" and "position fen <fen>", optionally
    /// followed by "moves <move1> <move2> ...". The listed moves become the
    /// undo history.
    pub fn from_position_command(line: &str) -> Result<Self, SessionError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let mut i = 1;

        if i >= parts.len() {
            return Err(SessionError::MissingParts);
        }

        let board = if parts[i] == "startpos" {
            i += 1;
            Board::new()
        } else if parts[i] == "fen" {
            if i + 6 >= parts.len() {
                return Err(SessionError::MissingParts);
            }
            let fen = parts[i + 1..i + 7].join(" ");
            i += 7;
            Board::try_from_fen(&fen)?
        } else {
            return Err(SessionError::MissingParts);
        };

        let mut session = Session::new(board);
        if i < parts.len() && parts[i] == "moves" {
            for move_str in &parts[i + 1..] {
                session
                    .play_uci(move_str)
                    .map_err(|error| SessionError::InvalidMove {
                        move_str: (*move_str).to_string(),
                        error,
                    })?;
            }
        }
        Ok(session)
    }

    /// The canonical position
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn params(&self) -> &AnalysisParams {
        self.cache.params()
    }

    pub fn set_params(&mut self, params: AnalysisParams) {
        self.cache.set_params(params);
    }

    /// Full recomputations so far
    pub fn computations(&self) -> u64 {
        self.cache.computations()
    }

    /// Drop the cached snapshot. Mutators already call this.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Commit `mv` and forget any redo history.
    ///
    /// # Panics
    ///
    /// Panics if the origin square of `mv` is empty.
    pub fn apply_move(&mut self, mv: Move) {
        let info = self.board.make_move(mv);
        self.undo.push((mv, info));
        self.redo.clear();
        self.cache.invalidate();
        log::debug!("applied {mv}");
    }

    /// Parse coordinate notation against the current position and commit it.
    pub fn play_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.board.parse_uci(uci)?;
        self.apply_move(mv);
        Ok(mv)
    }

    /// Take back the last move. The cache is emptied even when there is
    /// nothing to take back.
    pub fn undo(&mut self) -> Option<Move> {
        self.cache.invalidate();
        let (mv, info) = self.undo.pop()?;
        self.board.unmake_move(mv, info);
        self.redo.push(mv);
        log::debug!("undid {mv}");
        Some(mv)
    }

    /// Replay the last undone move. The cache is emptied even when there is
    /// nothing to replay.
    pub fn redo(&mut self) -> Option<Move> {
        self.cache.invalidate();
        let mv = self.redo.pop()?;
        let info = self.board.make_move(mv);
        self.undo.push((mv, info));
        log::debug!("redid {mv}");
        Some(mv)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Moves played from the initial position, oldest first
    pub fn history(&self) -> impl Iterator<Item = Move> + '_ {
        self.undo.iter().map(|(mv, _)| *mv)
    }

    /// Snapshot of the canonical position, computed on first read after a
    /// mutation.
    pub fn snapshot(&mut self) -> Arc<AnalysisSnapshot> {
        self.cache.snapshot(&self.board)
    }

    pub fn hanging(&mut self, color: Color) -> Vec<Square> {
        self.cache.get_hanging(&self.board, color)
    }

    pub fn attacked_count(&mut self, color: Color) -> usize {
        self.cache.get_attacked_count(&self.board, color)
    }

    pub fn pinned(&mut self, color: Color) -> Vec<Square> {
        self.cache.get_pinned(&self.board, color)
    }

    pub fn skewered(&mut self, color: Color) -> Vec<Square> {
        self.cache.get_skewered(&self.board, color)
    }

    pub fn pawn_structure(&mut self, color: Color) -> PawnStructure {
        self.cache.get_pawn_structure(&self.board, color)
    }

    pub fn developed_count(&mut self, color: Color) -> usize {
        self.cache.get_developed_count(&self.board, color)
    }

    pub fn activity(&mut self, color: Color) -> u32 {
        self.snapshot().activity(color)
    }

    pub fn pawn_count(&mut self, color: Color) -> usize {
        self.snapshot().pawn_count(color)
    }

    pub fn attack_info(&mut self, sq: Square) -> Option<AttackInfo> {
        self.snapshot().attack_info(sq).copied()
    }

    pub fn interesting_squares(&mut self) -> Vec<Square> {
        self.snapshot().interesting_squares()
    }

    pub fn scoreboard(&mut self, player: Color) -> Scoreboard {
        Scoreboard::from_perspective(&self.snapshot(), player)
    }

    /// Analyze the position after `mv` without committing it.
    ///
    /// The move is made and taken back on the canonical board; the cache is
    /// neither read nor written.
    ///
    /// # Panics
    ///
    /// Panics if the origin square of `mv` is empty.
    pub fn preview(&mut self, mv: Move) -> AnalysisSnapshot {
        let params = self.cache.params().clone();
        let guard = PreviewGuard::new(&mut self.board, mv);
        crate::analysis::analyze(&*guard, &params)
    }

    /// [`Session::preview`] for a move in coordinate notation.
    pub fn preview_uci(&mut self, uci: &str) -> Result<AnalysisSnapshot, MoveParseError> {
        let mv = self.board.parse_uci(uci)?;
        Ok(self.preview(mv))
    }

    /// Preview on a detached copy, leaving the canonical board untouched
    /// even transiently. Always uses default parameters.
    pub fn preview_detached(&self, mv: Move) -> AnalysisSnapshot {
        use crate::oracle::PositionOracle;

        analyze_preview(&self.board.apply_hypothetical(mv))
    }
}
