use std::fmt::Write as _;
use std::io::{self, Write as _};
use std::time::Duration;

use crate::board::color::Color;
use crate::game::engine::Engine;

pub trait GameRenderer {
    fn render(&self, engine: &Engine);
    fn frame_delay(&self) -> Option<Duration>;

    fn report_error(&self, message: &str) {
        println!("{}", message);
    }
}

/// Formats the board, side to move, last move and, optionally, the stats of
/// the most recent search.
pub fn format_game_state(engine: &Engine, with_stats: bool) -> String {
    let mut buffer = String::with_capacity(512);

    // infallible for String
    let _ = writeln!(buffer, "{}", engine.board());
    let _ = writeln!(buffer, "Turn: {}", engine.turn());
    if let Some(last_move) = engine.last_move() {
        let _ = writeln!(buffer, "Last move: {}", last_move);
    }

    if with_stats {
        let stats = engine.search_stats();
        let _ = writeln!(
            buffer,
            "\n* Score: {}\n* Positions searched: {} (depth: {}, cutoffs: {})\n* Move took: {}",
            stats.last_score.map_or("-".to_string(), |s| s.to_string()),
            stats.positions_searched,
            stats.depth,
            stats.cutoffs,
            stats
                .last_search_duration
                .map_or("-".to_string(), |d| format!("{:?}", d))
        );
    }

    buffer
}

/// Renders a human vs computer game, prompting when it is the human's turn.
pub struct ConditionalStatsRenderer {
    pub human_color: Color,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(&self, engine: &Engine) {
        print!("{}", format_game_state(engine, engine.last_move().is_some()));

        if engine.turn() == self.human_color {
            print!("Enter your move (e.g., e2e4): ");
            io::stdout().flush().ok();
        } else {
            println!("Computer is thinking...");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

pub struct StatsRenderer {
    /// The engine can calculate moves very quickly, so adding a slight delay
    /// between moves makes the game easier to observe.
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, engine: &Engine) {
        print!("{}", format_game_state(engine, true));
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;
    use crate::std_move;

    #[test]
    fn test_format_starting_position() {
        let engine = Engine::new();
        let output = format_game_state(&engine, false);

        assert!(output.starts_with(&engine.board().to_string()));
        assert!(output.contains("Turn: white"));
        assert!(!output.contains("Last move"));
        assert!(!output.contains("Score"));
    }

    #[test]
    fn test_format_with_last_move_and_stats() {
        let mut engine = Engine::new();
        engine.make_move(std_move!(E2, E4)).unwrap();
        engine.make_engine_move().unwrap();

        let output = format_game_state(&engine, true);
        assert!(output.contains("Turn: white"));
        assert!(output.contains("Last move: a7a6"));
        assert!(output.contains("* Score: 0"));
        assert!(output.contains("(depth: 3"));
    }
}
