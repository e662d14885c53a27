//! Watch command - watch the computer play against itself.

use std::time::Duration;

use alphabeta_chess::board::color::Color;
use alphabeta_chess::board::{Board, STARTING_POSITION_FEN};
use alphabeta_chess::game::input_source::EngineInput;
use alphabeta_chess::game::renderer::StatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Board,
    #[structopt(
        short = "m",
        long = "max-moves",
        default_value = "100",
        help = "Stop the game after this many moves"
    )]
    pub max_moves: usize,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long = "parallel", help = "Score root moves on multiple threads")]
    pub parallel: bool,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(
            self.depth,
            self.parallel,
            self.starting_position,
            Color::White,
        );
        let renderer = StatsRenderer {
            delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
        };

        run_game_loop(EngineInput, renderer, config, Some(self.max_moves));
    }
}
