use std::fmt;

use super::square::Square;
use super::Board;

const FILES: &str = "   a b c d e f g h";
const BORDER: &str = "  -----------------";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", FILES)?;
        writeln!(f, "{}", BORDER)?;
        for row in 0..8u8 {
            let rank = 8 - row;
            write!(f, "{}| ", rank)?;
            for col in 0..8u8 {
                let square = Square::new(row, col).map_err(|_| fmt::Error)?;
                let c = match self.get(square) {
                    Some((piece, color)) => piece.to_fen(color),
                    None => '.',
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f, "| {}", rank)?;
        }
        writeln!(f, "{}", BORDER)?;
        write!(f, "{}", FILES)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

/// Builds a board from an 8x8 grid of FEN piece characters, with `.` for
/// empty squares. The first row of the grid is row 0 (the eighth rank).
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (piece, color) = $crate::board::piece::Piece::from_fen(c)
                    .expect("Invalid character in chess position");
                let square = $crate::board::square::Square::new((i / 8) as u8, (i % 8) as u8)
                    .expect("square index should be on the board");
                board.put(square, piece, color).expect("square should be empty");
            }
        }
        board
    }};
}
