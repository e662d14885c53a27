//! Chess move generation.

pub mod generator;


pub use generator::{ChessMoveList, MoveGenerator, ROOK_DIRECTIONS};
