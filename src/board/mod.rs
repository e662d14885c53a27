pub mod color;
pub mod error;
pub mod piece;
pub mod square;

mod display;
mod fen;


use color::Color;
use error::BoardError;
use piece::{Piece, BACK_RANK};
use square::Square;

use crate::chess_move::{Capture, ChessMove};

pub use fen::STARTING_POSITION_FEN;

/// The contents of a single square. `None` is an empty square, so an empty
/// square can never carry a side.
pub type Occupant = Option<(Piece, Color)>;

/// Represents the state of a chess board: an 8x8 grid indexed by
/// `(row, col)`, where row 0 holds Black's back rank.
///
/// The board is the single piece of mutable state the search works on. Moves
/// are applied and undone in place, so a board must not be shared between
/// concurrent searches; clone it instead.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Occupant; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn starting_position() -> Self {
        let mut board = Self::new();
        board.initialize();
        board
    }

    /// Resets the grid to the standard starting position.
    pub fn initialize(&mut self) {
        self.squares = [[None; 8]; 8];
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            self.squares[0][col] = Some((piece, Color::Black));
            self.squares[1][col] = Some((Piece::Pawn, Color::Black));
            self.squares[6][col] = Some((Piece::Pawn, Color::White));
            self.squares[7][col] = Some((piece, Color::White));
        }
    }

    pub fn get(&self, square: Square) -> Occupant {
        self.squares[square.row() as usize][square.col() as usize]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    pub fn put(&mut self, square: Square, piece: Piece, color: Color) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupiedBoardPutError);
        }
        self.set(square, Some((piece, color)));
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Occupant {
        let occupant = self.get(square);
        self.set(square, None);
        occupant
    }

    fn set(&mut self, square: Square, occupant: Occupant) {
        self.squares[square.row() as usize][square.col() as usize] = occupant;
    }

    /// Moves whatever sits on the origin square onto the destination square,
    /// overwriting it, and returns the overwritten occupant. No legality
    /// checks are made; callers are expected to pass a generated move.
    pub fn apply(&mut self, chess_move: ChessMove) -> Capture {
        let captured = self.get(chess_move.to_square());
        let moving = self.remove(chess_move.from_square());
        self.set(chess_move.to_square(), moving);
        captured
    }

    /// Inverts `apply`. Must be called exactly once with the capture returned
    /// by the matching `apply`, before any other mutation of the board.
    pub fn undo(&mut self, chess_move: ChessMove, captured: Capture) {
        let moved = self.get(chess_move.to_square());
        self.set(chess_move.from_square(), moved);
        self.set(chess_move.to_square(), captured);
    }

    /// Every occupied square in row-major order, starting from a8.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece, Color)> + '_ {
        Square::all().filter_map(move |square| {
            self.get(square)
                .map(|(piece, color)| (square, piece, color))
        })
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.occupied_squares()
            .filter(|&(_, _, piece_color)| piece_color == color)
            .count()
    }
}
