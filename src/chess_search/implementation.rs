//! Chess-specific trait implementations for the alpha-beta search.

use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, MoveCollection, MoveGenerator, SearchContext,
    SearchError, Searcher,
};
use crate::board::{color::Color, Board};
use crate::chess_move::{Capture, ChessMove};
use crate::evaluate;
use crate::move_generator::{ChessMoveList, MoveGenerator as ChessMoveGen};

impl GameMove for ChessMove {
    type State = Board;
    type Undo = Capture;

    #[inline]
    fn apply(&self, state: &mut Board) -> Capture {
        ChessMove::apply(self, state)
    }

    #[inline]
    fn undo(&self, state: &mut Board, capture: Capture) {
        ChessMove::undo(self, state, capture)
    }
}

impl MoveCollection<ChessMove> for ChessMoveList {}

#[derive(Clone, Default)]
pub struct ChessMoveGenerator {
    inner: ChessMoveGen,
}

impl ChessMoveGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner(&self) -> &ChessMoveGen {
        &self.inner
    }
}

impl MoveGenerator<Board> for ChessMoveGenerator {
    type Move = ChessMove;
    type MoveList = ChessMoveList;

    #[inline]
    fn generate_moves(&self, state: &Board, maximizing: bool) -> ChessMoveList {
        self.inner
            .generate_moves(state, Color::from_maximizing(maximizing))
    }
}

#[derive(Clone, Default)]
pub struct ChessEvaluator;

impl ChessEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator<Board> for ChessEvaluator {
    #[inline]
    fn evaluate(&self, state: &Board) -> i32 {
        evaluate::board_material_score(state)
    }
}

/// Searches for the best chess move for `color` from the given position.
/// White keeps the highest scoring move and Black the lowest, with ties
/// going to the first move in generation order. The board is restored
/// before returning.
#[must_use = "search returns the best move found"]
pub fn search_best_move(
    context: &mut SearchContext,
    board: &mut Board,
    color: Color,
) -> Result<ChessMove, SearchError> {
    let move_generator = ChessMoveGenerator::default();
    let evaluator = ChessEvaluator::default();

    alpha_beta_search(
        context,
        board,
        &move_generator,
        &evaluator,
        color.maximize_score(),
    )
}

/// Returns the alpha-beta minimax score of the position `depth` plies deep
/// with `color` to move.
pub fn search_score(
    context: &SearchContext,
    board: &mut Board,
    depth: u8,
    color: Color,
    alpha: i32,
    beta: i32,
) -> i32 {
    let move_generator = ChessMoveGenerator::default();
    let evaluator = ChessEvaluator::default();

    Searcher::new(context, &move_generator, &evaluator).minimax(
        board,
        depth,
        color.maximize_score(),
        alpha,
        beta,
    )
}
