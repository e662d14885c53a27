use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

use crate::alpha_beta_searcher::{SearchContext, SearchError, DEFAULT_SEARCH_DEPTH};
use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::square::Square;
use crate::board::Board;
use crate::chess_move::{Capture, ChessMove, ChessMoveParseError};
use crate::chess_search::search_best_move;
use crate::evaluate;
use crate::input_handler::MoveInput;
use crate::move_generator::{ChessMoveList, MoveGenerator};

/// Core engine configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub parallel: bool,
    pub starting_position: Board,
    pub starting_turn: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            parallel: false,
            starting_position: Board::default(),
            starting_turn: Color::White,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("there is no piece on {square}")]
    NoPieceToMove { square: Square },
    #[error("a move must leave {square}")]
    NullMove { square: Square },
    #[error("the piece on {square} belongs to {color}")]
    WrongColor { square: Square, color: Color },
    #[error("invalid move: {0}")]
    InvalidMove(#[from] ChessMoveParseError),
    #[error("board error: {0}")]
    BoardError(#[from] BoardError),
    #[error("search error: {0}")]
    SearchError(#[from] SearchError),
}

/// Owns the game position and the side to move, and runs the search on
/// behalf of the side to move.
pub struct Engine {
    board: Board,
    turn: Color,
    move_history: Vec<ChessMove>,
    move_generator: MoveGenerator,
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            turn: config.starting_turn,
            move_history: Vec::new(),
            move_generator: MoveGenerator::default(),
            search_context: SearchContext::with_parallel(config.search_depth, config.parallel),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn move_history(&self) -> &[ChessMove] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<ChessMove> {
        self.move_history.last().copied()
    }

    /// Replaces the position with the given FEN piece placement. The side to
    /// move is kept and the move history is cleared.
    pub fn load_position(&mut self, fen: &str) -> Result<(), EngineError> {
        self.board = Board::from_fen(fen)?;
        self.move_history.clear();
        Ok(())
    }

    pub fn valid_moves(&self) -> ChessMoveList {
        self.move_generator.generate_moves(&self.board, self.turn)
    }

    pub fn has_moves(&self) -> bool {
        !self.valid_moves().is_empty()
    }

    /// Material score of the current position from White's point of view.
    pub fn score(&self) -> i32 {
        evaluate::board_material_score(&self.board)
    }

    /// Plays a move for the side to move. The origin square must hold one of
    /// its pieces; beyond that the move is not checked against the generated
    /// move set.
    pub fn make_move(&mut self, chess_move: ChessMove) -> Result<Capture, EngineError> {
        let from_square = chess_move.from_square();
        if chess_move.to_square() == from_square {
            return Err(EngineError::NullMove {
                square: from_square,
            });
        }

        match self.board.get(from_square) {
            None => {
                return Err(EngineError::NoPieceToMove {
                    square: from_square,
                })
            }
            Some((_, color)) if color != self.turn => {
                return Err(EngineError::WrongColor {
                    square: from_square,
                    color,
                })
            }
            Some(_) => {}
        }

        let capture = self.board.apply(chess_move);
        debug!("{} played {} (captured: {:?})", self.turn, chess_move, capture);

        self.move_history.push(chess_move);
        self.turn = self.turn.opposite();
        Ok(capture)
    }

    /// Parses coordinate notation such as `e2e4` and plays it.
    pub fn make_move_from_str(&mut self, coordinates: &str) -> Result<Capture, EngineError> {
        let chess_move = coordinates.trim().parse::<ChessMove>()?;
        self.make_move(chess_move)
    }

    /// Searches for the best move for the side to move without playing it.
    pub fn best_move(&mut self) -> Result<ChessMove, EngineError> {
        let best_move = search_best_move(&mut self.search_context, &mut self.board, self.turn)?;
        info!(
            "engine chose {} for {} (score: {:?})",
            best_move,
            self.turn,
            self.search_context.last_score()
        );
        Ok(best_move)
    }

    pub fn make_engine_move(&mut self) -> Result<ChessMove, EngineError> {
        let best_move = self.best_move()?;
        self.make_move(best_move)?;
        Ok(best_move)
    }

    /// Plays the move described by `input` and returns it. Quit requests
    /// are not moves and yield `None`.
    pub fn make_move_from_input(
        &mut self,
        input: MoveInput,
    ) -> Result<Option<ChessMove>, EngineError> {
        match input {
            MoveInput::Coordinate(chess_move) => {
                self.make_move(chess_move)?;
                Ok(Some(chess_move))
            }
            MoveInput::UseEngine => self.make_engine_move().map(Some),
            MoveInput::Quit => Ok(None),
        }
    }

    pub fn search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            depth: self.search_context.search_depth(),
            last_score: self.search_context.last_score(),
            last_search_duration: self.search_context.last_search_duration(),
        }
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub depth: u8,
    pub last_score: Option<i32>,
    pub last_search_duration: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::Piece;
    use crate::board::square::*;
    use crate::{chess_position, std_move};

    #[test]
    fn test_new_engine_starts_with_white() {
        let engine = Engine::new();
        assert_eq!(&Board::starting_position(), engine.board());
        assert_eq!(Color::White, engine.turn());
        assert_eq!(None, engine.last_move());
        assert_eq!(0, engine.score());
    }

    #[test]
    fn test_make_move_toggles_turn() {
        let mut engine = Engine::new();

        // double pushes are never generated but the shell accepts them
        assert_eq!(Ok(None), engine.make_move(std_move!(E2, E4)));
        assert_eq!(Some((Piece::Pawn, Color::White)), engine.board().get(E4));
        assert_eq!(None, engine.board().get(E2));
        assert_eq!(Color::Black, engine.turn());
        assert_eq!(Some(std_move!(E2, E4)), engine.last_move());

        assert_eq!(Ok(None), engine.make_move_from_str("d7d5"));
        assert_eq!(Color::White, engine.turn());

        assert_eq!(
            Ok(Some((Piece::Pawn, Color::Black))),
            engine.make_move(std_move!(E4, D5))
        );
        assert_eq!(10, engine.score());
        assert_eq!(3, engine.move_history().len());
    }

    #[test]
    fn test_make_move_from_empty_square() {
        let mut engine = Engine::new();
        assert_eq!(
            Err(EngineError::NoPieceToMove { square: E3 }),
            engine.make_move(std_move!(E3, E4))
        );
        assert_eq!(Color::White, engine.turn());
        assert_eq!(&Board::starting_position(), engine.board());
    }

    #[test]
    fn test_make_move_with_opponent_piece() {
        let mut engine = Engine::new();
        assert_eq!(
            Err(EngineError::WrongColor {
                square: E7,
                color: Color::Black
            }),
            engine.make_move(std_move!(E7, E5))
        );
        assert!(engine.move_history().is_empty());
    }

    #[test]
    fn test_make_move_to_same_square() {
        let mut engine = Engine::new();
        assert_eq!(
            Err(EngineError::NullMove { square: E2 }),
            engine.make_move_from_str("e2e2")
        );
        assert_eq!(Color::White, engine.turn());
        assert_eq!(&Board::starting_position(), engine.board());
        assert!(engine.move_history().is_empty());
    }

    #[test]
    fn test_make_move_from_invalid_str() {
        let mut engine = Engine::new();
        assert_eq!(
            Err(EngineError::InvalidMove(ChessMoveParseError::WrongLength {
                input: "e2".to_string()
            })),
            engine.make_move_from_str("e2")
        );
    }

    #[test]
    fn test_best_move_from_starting_position() {
        let mut engine = Engine::new();

        assert_eq!(Ok(std_move!(A2, A3)), engine.best_move());
        assert_eq!(&Board::starting_position(), engine.board());
        assert_eq!(Color::White, engine.turn());

        let stats = engine.search_stats();
        assert_eq!(DEFAULT_SEARCH_DEPTH, stats.depth);
        assert_eq!(Some(0), stats.last_score);
        assert!(stats.positions_searched > 0);
        assert!(stats.last_search_duration.is_some());
    }

    #[test]
    fn test_engine_move_is_played_for_the_side_to_move() {
        let mut engine = Engine::with_config(EngineConfig {
            starting_turn: Color::Black,
            ..EngineConfig::default()
        });

        assert_eq!(Ok(std_move!(A7, A6)), engine.make_engine_move());
        assert_eq!(Color::White, engine.turn());
        assert_eq!(Some((Piece::Pawn, Color::Black)), engine.board().get(A6));
    }

    #[test]
    fn test_engine_captures_hanging_queen() {
        let mut engine = Engine::with_config(EngineConfig {
            starting_position: chess_position! {
                ....k...
                ........
                ........
                q.......
                ........
                ........
                ........
                R...K...
            },
            parallel: true,
            ..EngineConfig::default()
        });

        assert_eq!(
            Ok(Some(std_move!(A1, A5))),
            engine.make_move_from_input(MoveInput::UseEngine)
        );
        assert_eq!(Some((Piece::Rook, Color::White)), engine.board().get(A5));
        assert_eq!(Color::Black, engine.turn());
    }

    #[test]
    fn test_best_move_without_moves() {
        let mut engine = Engine::with_config(EngineConfig {
            starting_position: chess_position! {
                ....k...
                ........
                ........
                ........
                ........
                ........
                ........
                ...QK...
            },
            ..EngineConfig::default()
        });

        assert!(!engine.has_moves());
        assert_eq!(
            Err(EngineError::SearchError(SearchError::NoAvailableMoves)),
            engine.best_move()
        );
    }

    #[test]
    fn test_quit_input_is_not_a_move() {
        let mut engine = Engine::new();
        assert_eq!(Ok(None), engine.make_move_from_input(MoveInput::Quit));
        assert_eq!(Color::White, engine.turn());
    }

    #[test]
    fn test_load_position() {
        let mut engine = Engine::new();
        engine.make_move(std_move!(A2, A3)).unwrap();

        assert!(engine.load_position("8/8/8/8/8/8/8/R3K3").is_ok());
        assert_eq!(Some((Piece::Rook, Color::White)), engine.board().get(A1));
        assert!(engine.move_history().is_empty());

        assert!(matches!(
            engine.load_position("not a fen"),
            Err(EngineError::BoardError(BoardError::InvalidFen { .. }))
        ));
    }
}
