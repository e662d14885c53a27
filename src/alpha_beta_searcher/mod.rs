//! Generic alpha-beta search over any two-player zero-sum game.
//!
//! Games plug in by implementing [`GameMove`], [`MoveGenerator`] and
//! [`Evaluator`]. The searcher itself knows nothing about chess.

mod applied_move;
mod search;
mod traits;


pub use applied_move::AppliedMove;
pub use search::{
    alpha_beta_search, full_minimax, SearchContext, SearchError, Searcher, DEFAULT_SEARCH_DEPTH,
    INFINITY,
};
pub use traits::{Evaluator, GameMove, MoveCollection, MoveGenerator};
