pub mod capture;
pub mod chess_move;

pub use capture::Capture;
pub use chess_move::{ChessMove, ChessMoveParseError};
