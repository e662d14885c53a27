use std::fmt;

use super::error::BoardError;

/// A coordinate on the 8x8 grid. Row 0 is the eighth rank (Black's back rank)
/// and row 7 is the first rank; column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Result<Self, BoardError> {
        if row > 7 || col > 7 {
            return Err(BoardError::SquareOutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Only used for the compile time constants below, where the
    /// coordinates are known to be in range.
    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Returns the square displaced by the given deltas, or `None` if it
    /// falls off the board.
    pub fn offset(&self, row_delta: i8, col_delta: i8) -> Option<Self> {
        let row = self.row as i8 + row_delta;
        let col = self.col as i8 + col_delta;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Parses a square like `e2`. The file maps to the column, and rank `r`
    /// maps to row `8 - r`.
    pub fn from_algebraic(algebraic: &str) -> Result<Self, BoardError> {
        let mut chars = algebraic.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => {
                return Err(BoardError::InvalidAlgebraicSquare {
                    input: algebraic.to_string(),
                })
            }
        };

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(BoardError::InvalidAlgebraicSquare {
                input: algebraic.to_string(),
            });
        }

        let col = file as u8 - b'a';
        let row = 8 - (rank as u8 - b'0');
        Self::new(row, col)
    }

    pub fn to_algebraic(&self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        format!("{}{}", file, rank)
    }

    /// Every square in row-major order, starting from a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::at(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

macro_rules! squares {
    ($($name:ident = ($row:expr, $col:expr)),+ $(,)?) => {
        $(pub const $name: Square = Square::at($row, $col);)+
    };
}

squares! {
    A8 = (0, 0), B8 = (0, 1), C8 = (0, 2), D8 = (0, 3), E8 = (0, 4), F8 = (0, 5), G8 = (0, 6), H8 = (0, 7),
    A7 = (1, 0), B7 = (1, 1), C7 = (1, 2), D7 = (1, 3), E7 = (1, 4), F7 = (1, 5), G7 = (1, 6), H7 = (1, 7),
    A6 = (2, 0), B6 = (2, 1), C6 = (2, 2), D6 = (2, 3), E6 = (2, 4), F6 = (2, 5), G6 = (2, 6), H6 = (2, 7),
    A5 = (3, 0), B5 = (3, 1), C5 = (3, 2), D5 = (3, 3), E5 = (3, 4), F5 = (3, 5), G5 = (3, 6), H5 = (3, 7),
    A4 = (4, 0), B4 = (4, 1), C4 = (4, 2), D4 = (4, 3), E4 = (4, 4), F4 = (4, 5), G4 = (4, 6), H4 = (4, 7),
    A3 = (5, 0), B3 = (5, 1), C3 = (5, 2), D3 = (5, 3), E3 = (5, 4), F3 = (5, 5), G3 = (5, 6), H3 = (5, 7),
    A2 = (6, 0), B2 = (6, 1), C2 = (6, 2), D2 = (6, 3), E2 = (6, 4), F2 = (6, 5), G2 = (6, 6), H2 = (6, 7),
    A1 = (7, 0), B1 = (7, 1), C1 = (7, 2), D1 = (7, 3), E1 = (7, 4), F1 = (7, 5), G1 = (7, 6), H1 = (7, 7),
}
