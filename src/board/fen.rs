use std::str::FromStr;

use super::error::BoardError;
use super::piece::Piece;
use super::square::Square;
use super::Board;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parses the piece placement field of a FEN string. Any fields after
    /// the first (turn, castling, clocks) are ignored, since the board does
    /// not track them.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let invalid = |reason| BoardError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };

        let placement = fen.split_whitespace().next().ok_or_else(|| invalid("empty input"))?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("expected 8 ranks separated by `/`"));
        }

        let mut board = Self::new();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0u8;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(invalid("empty square counts must be 1-8"));
                    }
                    if u32::from(col) + skip > 8 {
                        return Err(invalid("rank has more than 8 squares"));
                    }
                    col += skip as u8;
                    continue;
                }

                let (piece, color) = Piece::from_fen(c).ok_or_else(|| invalid("unknown piece"))?;
                let square =
                    Square::new(row as u8, col).map_err(|_| invalid("rank has more than 8 squares"))?;
                board.put(square, piece, color)?;
                col += 1;
            }
            if col != 8 {
                return Err(invalid("rank does not describe exactly 8 squares"));
            }
        }

        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(8);
        for row in 0..8u8 {
            let mut rank = String::new();
            let mut empty = 0;
            for col in 0..8u8 {
                let occupant = Square::new(row, col).ok().and_then(|square| self.get(square));
                match occupant {
                    Some((piece, color)) => {
                        if empty > 0 {
                            rank.push_str(&empty.to_string());
                            empty = 0;
                        }
                        rank.push(piece.to_fen(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            ranks.push(rank);
        }
        ranks.join("/")
    }
}

// used for parsing cli args
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Self::from_fen(fen)
    }
}
