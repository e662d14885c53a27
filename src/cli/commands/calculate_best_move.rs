//! Calculate best move command - determine the best move from a position.

use alphabeta_chess::board::color::Color;
use alphabeta_chess::board::Board;
use alphabeta_chess::game::engine::Engine;
use structopt::StructOpt;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(long = "fen")]
    pub starting_position: Board,
    #[structopt(
        short = "c",
        long = "color",
        default_value = "white",
        help = "The side to move"
    )]
    pub color: Color,
    #[structopt(long = "parallel", help = "Score root moves on multiple threads")]
    pub parallel: bool,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let config = create_config(
            self.depth,
            self.parallel,
            self.starting_position,
            self.color,
        );
        let mut engine = Engine::with_config(config);

        if !engine.has_moves() {
            eprintln!("There are no valid moves in the given position.");
            return;
        }

        match engine.best_move() {
            Ok(best_move) => println!("{}", best_move),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
