use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::masks::between;
use super::types::{CastlingRights, Color, Move, Piece, Square};
use super::Board;

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The halfmove clock and fullmove number are optional.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(FenError::InvalidFileCount {
                        rank: rank + 1,
                        files: file + 1,
                    });
                }
                board.set_piece(Square::at(rank, file), color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::InvalidFileCount {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        board.white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights =
            CastlingRights::from_fen_field(parts[2]).ok_or_else(|| FenError::InvalidCastling {
                found: parts[2].to_string(),
            })?;

        board.en_passant_target = match parts[3] {
            "-" => None,
            field => Some(field.parse().map_err(|_| FenError::InvalidEnPassant {
                found: field.to_string(),
            })?),
        };

        if let Some(clock) = parts.get(4) {
            board.halfmove_clock =
                clock
                    .parse()
                    .map_err(|_| FenError::InvalidHalfmoveClock {
                        found: (*clock).to_string(),
                    })?;
        }

        board.hash = board.calculate_initial_hash();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::at(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} 1",
            rows.join("/"),
            active,
            self.castling_rights,
            ep,
            self.halfmove_clock
        )
    }

    /// Parse a move in coordinate notation (e.g. "e2e4", "e7e8q") for the
    /// side to move.
    ///
    /// The move kind (capture, double push, en passant, castling, promotion)
    /// is inferred from the position. A pawn reaching the last rank without a
    /// promotion letter promotes to a queen. Legality is not checked.
    pub fn parse_uci(&self, uci: &str) -> Result<Move, MoveParseError> {
        if uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        let from: Square = uci
            .get(0..2)
            .and_then(|s| s.parse().ok())
            .ok_or_else(invalid_square)?;
        let to: Square = uci
            .get(2..4)
            .and_then(|s| s.parse().ok())
            .ok_or_else(invalid_square)?;

        let promotion = match uci.get(4..).and_then(|s| s.chars().next()) {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => {
                    Some(piece)
                }
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        let mover = self.current_color();
        let (color, piece) = self.piece_at(from).ok_or_else(|| MoveParseError::EmptyOrigin {
            notation: uci.to_string(),
        })?;
        if color != mover {
            return Err(MoveParseError::WrongSide {
                notation: uci.to_string(),
            });
        }

        let target = self.piece_at(to);
        if matches!(target, Some((c, _)) if c == mover) {
            return Err(MoveParseError::OwnPieceOnTarget {
                notation: uci.to_string(),
            });
        }
        let is_capture = target.is_some();

        let mv = match piece {
            Piece::King if self.is_castling_step(mover, from, to) => {
                if to.file() == 6 {
                    Move::castle_kingside(from, to)
                } else {
                    Move::castle_queenside(from, to)
                }
            }
            Piece::Pawn if to.rank() == mover.opponent().back_rank() => {
                Move::promotion(from, to, promotion.unwrap_or(Piece::Queen), is_capture)
            }
            Piece::Pawn if Some(to) == self.en_passant_target && from.file() != to.file() => {
                Move::en_passant(from, to)
            }
            Piece::Pawn if from.file() == to.file() && from.rank().abs_diff(to.rank()) == 2 => {
                Move::double_pawn_push(from, to)
            }
            _ if is_capture => Move::capture(from, to),
            _ => Move::quiet(from, to),
        };
        Ok(mv)
    }

    /// A king stepping two files from its home square towards an own rook
    /// on the corner, with nothing in between.
    fn is_castling_step(&self, mover: Color, from: Square, to: Square) -> bool {
        let rank = mover.back_rank();
        if from != Square::at(rank, 4) || to.rank() != rank || from.file().abs_diff(to.file()) != 2
        {
            return false;
        }
        let corner = Square::at(rank, if to.file() == 6 { 7 } else { 0 });
        self.piece_at(corner) == Some((mover, Piece::Rook))
            && between(from, corner).intersect(self.all_occupied).is_empty()
    }

    /// Parse a coordinate move and make it on the board in one call.
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_uci(uci)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
