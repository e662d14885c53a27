use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::alpha_beta_searcher::SearchContext;
use crate::board::color::Color;
use crate::board::Board;
use crate::chess_search::search_best_move;
use crate::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountPositionsStrategy {
    All,
    AlphaBeta,
}

impl FromStr for CountPositionsStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CountPositionsStrategy::All),
            "alpha-beta" => Ok(CountPositionsStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: all, alpha-beta"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DepthCount {
    pub depth: u8,
    pub positions: usize,
    pub duration: Duration,
}

/// Counts positions from the starting position for every depth in
/// `1..=depth`, with White to move.
pub fn count_positions(depth: u8, strategy: CountPositionsStrategy) -> Vec<DepthCount> {
    let move_generator = MoveGenerator::default();

    (1..=depth)
        .map(|depth| {
            let mut board = Board::default();
            let start = Instant::now();
            let positions = match strategy {
                CountPositionsStrategy::All => {
                    move_generator.count_positions(&mut board, depth, Color::White)
                }
                CountPositionsStrategy::AlphaBeta => {
                    let mut search_context = SearchContext::new(depth - 1);
                    search_best_move(&mut search_context, &mut board, Color::White)
                        .map(|_| search_context.searched_position_count())
                        .unwrap_or(0)
                }
            };

            DepthCount {
                depth,
                positions,
                duration: start.elapsed(),
            }
        })
        .collect()
}

pub fn run_count_positions(depth: u8, strategy: CountPositionsStrategy) {
    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for count in count_positions(depth, strategy) {
        total_positions += count.positions;
        total_duration += count.duration;

        println!(
            "depth: {}, positions: {}, positions per second: {:.0}",
            count.depth,
            count.positions,
            count.positions as f64 / count.duration.as_secs_f64()
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {:.0}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
}
