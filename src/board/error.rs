use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot put a piece on a square that is already occupied")]
    SquareOccupiedBoardPutError,
    #[error("Square ({row}, {col}) is off the board, rows and columns must be in 0..=7")]
    SquareOutOfBounds { row: u8, col: u8 },
    #[error("Invalid square {input:?}, expected a file a-h followed by a rank 1-8")]
    InvalidAlgebraicSquare { input: String },
    #[error("Invalid FEN piece placement {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: &'static str },
}
