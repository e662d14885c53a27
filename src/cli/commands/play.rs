//! Play command - play a game against the computer.

use alphabeta_chess::board::color::Color;
use alphabeta_chess::board::{Board, STARTING_POSITION_FEN};
use alphabeta_chess::game::input_source::ConditionalInput;
use alphabeta_chess::game::renderer::ConditionalStatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "white")]
    pub color: Color,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Board,
    #[structopt(long = "parallel", help = "Score root moves on multiple threads")]
    pub parallel: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(
            self.depth,
            self.parallel,
            self.starting_position,
            Color::White,
        );
        run_game_loop(
            ConditionalInput::stdin(self.color),
            ConditionalStatsRenderer {
                human_color: self.color,
            },
            config,
            None,
        );
    }
}
