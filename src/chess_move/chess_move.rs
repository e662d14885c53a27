use core::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::square::Square;
use crate::board::Board;

use super::capture::Capture;

static COORDINATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-h][1-8])([a-h][1-8])$").expect("COORDINATE_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq)]
pub enum ChessMoveParseError {
    #[error("move {input:?} must be exactly 4 characters, e.g. `e2e4`")]
    WrongLength { input: String },
    #[error("move {input:?} must be two squares with files a-h and ranks 1-8, e.g. `e2e4`")]
    InvalidCoordinates { input: String },
}

/// A move from one square to another. Moves are plain values: they do not
/// record which piece moves, and they only make sense against the board they
/// were generated from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChessMove {
    from_square: Square,
    to_square: Square,
}

impl ChessMove {
    pub fn new(from_square: Square, to_square: Square) -> Self {
        Self {
            from_square,
            to_square,
        }
    }

    pub fn from_square(&self) -> Square {
        self.from_square
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    /// Moves the piece on the origin square to the destination square and
    /// returns whatever was overwritten there.
    pub fn apply(&self, board: &mut Board) -> Capture {
        board.apply(*self)
    }

    /// Reverses a prior `apply` of this same move.
    pub fn undo(&self, board: &mut Board, capture: Capture) {
        board.undo(*self, capture)
    }

    pub fn to_coordinates(&self) -> String {
        format!(
            "{}{}",
            self.from_square.to_algebraic(),
            self.to_square.to_algebraic()
        )
    }
}

impl FromStr for ChessMove {
    type Err = ChessMoveParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.chars().count() != 4 {
            return Err(ChessMoveParseError::WrongLength {
                input: input.to_string(),
            });
        }

        let invalid = || ChessMoveParseError::InvalidCoordinates {
            input: input.to_string(),
        };
        let caps = COORDINATE_RE.captures(input).ok_or_else(invalid)?;
        let from_square = Square::from_algebraic(&caps[1]).map_err(|_| invalid())?;
        let to_square = Square::from_algebraic(&caps[2]).map_err(|_| invalid())?;

        Ok(Self::new(from_square, to_square))
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinates())
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChessMove({:?} -> {:?})",
            (self.from_square.row(), self.from_square.col()),
            (self.to_square.row(), self.to_square.col())
        )
    }
}

#[macro_export]
macro_rules! std_move {
    ($from:expr, $to:expr) => {
        $crate::chess_move::ChessMove::new($from, $to)
    };
}
