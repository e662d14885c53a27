//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

/// Represents an action that can be applied to and undone from a game state.
///
/// Applying a move hands back whatever is needed to invert it; undoing takes
/// that value back. The pair must be used exactly once and in LIFO order, so
/// the searcher never calls these directly and goes through
/// [`AppliedMove`](super::AppliedMove) instead.
pub trait GameMove: Clone + Send + Sync + PartialEq + Debug {
    type State;
    type Undo;

    /// Applies this move to the given state.
    fn apply(&self, state: &mut Self::State) -> Self::Undo;

    /// Undoes this move on the given state.
    fn undo(&self, state: &mut Self::State, undo: Self::Undo);
}

/// Generates the candidate moves for one side of a game state.
pub trait MoveGenerator<S>: Clone + Send + Sync {
    type Move: GameMove<State = S>;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates all moves for the maximizing side if `maximizing`, otherwise
    /// for the minimizing side.
    fn generate_moves(&self, state: &S, maximizing: bool) -> Self::MoveList;
}

/// Evaluates a game position and returns a score.
pub trait Evaluator<S>: Clone + Send + Sync {
    /// Evaluates the given state. Higher scores favor the maximizing player.
    fn evaluate(&self, state: &S) -> i32;
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> + Send {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M: Send> MoveCollection<M> for Vec<M> {}
