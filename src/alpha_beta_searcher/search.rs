//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Once `beta <= alpha` at a node, the remaining
//! moves there cannot change the result and are skipped. The algorithm returns the same value
//! as plain minimax but explores fewer nodes.
//!
//! # State discipline
//!
//! A single state is shared by every frame of the recursion. Each frame applies one move through
//! an [`AppliedMove`] guard and the guard undoes it on drop, so the state is restored on every
//! exit path, including the early `break` taken when a branch is pruned.
//!
//! # Root search
//!
//! Each root move is scored with a fresh, fully open window. The best score wins and ties keep
//! the first move in generation order. Root moves can optionally be scored in parallel, with
//! every task searching its own clone of the state.

use std::cmp::{max, min};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info, trace};
use rayon::prelude::*;
use thiserror::Error;

use super::{AppliedMove, Evaluator, MoveCollection, MoveGenerator};

/// Larger than any reachable evaluation. Negating it cannot overflow.
pub const INFINITY: i32 = i32::MAX;

/// Search depth used below each root move when none is configured.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
}

/// Search configuration parameters.
#[derive(Clone, Copy, Debug)]
struct SearchConfig {
    depth: u8,
    parallel: bool,
}

/// Statistics collected during search.
struct SearchStats {
    position_count: AtomicUsize,
    cutoff_count: AtomicUsize,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn new() -> Self {
        Self {
            position_count: AtomicUsize::new(0),
            cutoff_count: AtomicUsize::new(0),
            last_score: None,
            last_duration: None,
        }
    }

    fn increment(&self) {
        self.position_count.fetch_add(1, Ordering::Relaxed);
    }

    fn increment_cutoffs(&self) {
        self.cutoff_count.fetch_add(1, Ordering::Relaxed);
    }

    fn reset(&mut self) {
        self.last_score = None;
        self.last_duration = None;
        self.position_count.store(0, Ordering::Relaxed);
        self.cutoff_count.store(0, Ordering::Relaxed);
    }

    fn record_result(&mut self, score: i32, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }

    fn count(&self) -> usize {
        self.position_count.load(Ordering::Relaxed)
    }

    fn cutoffs(&self) -> usize {
        self.cutoff_count.load(Ordering::Relaxed)
    }
}

/// Configuration and statistics for a series of searches.
pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl SearchContext {
    /// `depth` is the number of plies searched below each root move.
    pub fn new(depth: u8) -> Self {
        Self::with_parallel(depth, false)
    }

    pub fn with_parallel(depth: u8, parallel: bool) -> Self {
        Self {
            config: SearchConfig { depth, parallel },
            stats: SearchStats::new(),
        }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Nodes visited since the last reset, leaves included.
    pub fn searched_position_count(&self) -> usize {
        self.stats.count()
    }

    /// Number of times move enumeration stopped early on `beta <= alpha`.
    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoffs()
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }
}

/// Depth-limited minimax with alpha-beta pruning over a move generator and
/// evaluator pair.
pub struct Searcher<'a, G, E> {
    context: &'a SearchContext,
    move_generator: &'a G,
    evaluator: &'a E,
}

impl<'a, G, E> Searcher<'a, G, E> {
    pub fn new(context: &'a SearchContext, move_generator: &'a G, evaluator: &'a E) -> Self {
        Self {
            context,
            move_generator,
            evaluator,
        }
    }

    /// Returns the minimax value of `state` searched `depth` plies deep with
    /// the given side to move. A side with no moves is scored as a leaf.
    ///
    /// `state` is left exactly as it was passed in.
    pub fn minimax<S>(
        &self,
        state: &mut S,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32
    where
        G: MoveGenerator<S>,
        E: Evaluator<S>,
    {
        self.context.stats.increment();

        if depth == 0 {
            return self.evaluator.evaluate(state);
        }

        let candidates = self.move_generator.generate_moves(state, maximizing);
        if candidates.is_empty() {
            return self.evaluator.evaluate(state);
        }

        let mut best_score = if maximizing { -INFINITY } else { INFINITY };

        for game_move in candidates.as_ref() {
            let score = {
                let mut applied = AppliedMove::new(state, game_move);
                self.minimax(&mut *applied, depth - 1, !maximizing, alpha, beta)
            };

            if maximizing {
                best_score = max(best_score, score);
                alpha = max(alpha, score);
            } else {
                best_score = min(best_score, score);
                beta = min(beta, score);
            }

            if beta <= alpha {
                self.context.stats.increment_cutoffs();
                trace!("pruned after {:?} at depth {}", game_move, depth);
                break;
            }
        }

        best_score
    }
}

/// Searches for the best move for the given side. Every root move is applied
/// and scored by `minimax` at the context's depth with the opponent to move;
/// the maximizing side keeps the highest score and the minimizing side the
/// lowest, ties going to the earliest generated move.
pub fn alpha_beta_search<S, G, E>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    maximizing: bool,
) -> Result<G::Move, SearchError>
where
    S: Clone + Send + Sync,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.reset_stats();
    let depth = context.search_depth();
    debug!(
        "alpha-beta search depth: {} (maximizing: {}, parallel: {})",
        depth,
        maximizing,
        context.is_parallel()
    );

    let start = Instant::now();
    let candidates = move_generator.generate_moves(state, maximizing);
    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let scores = {
        let searcher = Searcher::new(context, move_generator, evaluator);
        if context.is_parallel() {
            let snapshot: &S = state;
            candidates
                .as_ref()
                .par_iter()
                .map(|game_move| {
                    let mut local_state = snapshot.clone();
                    let mut applied = AppliedMove::new(&mut local_state, game_move);
                    searcher.minimax(&mut *applied, depth, !maximizing, -INFINITY, INFINITY)
                })
                .collect::<Vec<i32>>()
        } else {
            candidates
                .as_ref()
                .iter()
                .map(|game_move| {
                    let mut applied = AppliedMove::new(state, game_move);
                    searcher.minimax(&mut *applied, depth, !maximizing, -INFINITY, INFINITY)
                })
                .collect::<Vec<i32>>()
        }
    };

    let mut best: Option<(&G::Move, i32)> = None;
    for (game_move, &score) in candidates.as_ref().iter().zip(scores.iter()) {
        debug!("root move {:?} scored {}", game_move, score);
        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((game_move, score));
        }
    }

    let (best_move, best_score) = best.ok_or(SearchError::NoAvailableMoves)?;
    let best_move = best_move.clone();
    let duration = start.elapsed();
    context.stats.record_result(best_score, duration);

    info!(
        "best move {:?} (score: {}, positions searched: {}, cutoffs: {}, took: {:?})",
        best_move,
        best_score,
        context.searched_position_count(),
        context.cutoff_count(),
        duration
    );

    Ok(best_move)
}

/// Plain minimax over the same move set without any pruning. Much slower than
/// [`Searcher::minimax`] and only meant as a reference for checking it.
pub fn full_minimax<S, G, E>(
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    depth: u8,
    maximizing: bool,
) -> i32
where
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    if depth == 0 {
        return evaluator.evaluate(state);
    }

    let candidates = move_generator.generate_moves(state, maximizing);
    if candidates.is_empty() {
        return evaluator.evaluate(state);
    }

    let scores = candidates.as_ref().iter().map(|game_move| {
        let mut applied = AppliedMove::new(state, game_move);
        full_minimax(&mut *applied, move_generator, evaluator, depth - 1, !maximizing)
    });

    if maximizing {
        scores.fold(-INFINITY, max)
    } else {
        scores.fold(INFINITY, min)
    }
}
