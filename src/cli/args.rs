//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, count_positions::CountPositionsArgs,
    play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "alphabeta-chess",
    about = "A small chess engine that plays pawns and rooks with alpha-beta search ♜"
)]
pub enum Chess {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which will search for the best move using alpha-beta pruning at the given `--depth` (default: 3). You play White unless you specify otherwise with `--color` (white, black or random). Moves are entered in coordinate notation such as `e2e4`; enter `quit` to stop."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 3). The game stops when a side has no moves or after `--max-moves` moves (default: 100)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Use the chess engine to determine the best move from a given position, provided as a FEN piece placement with `--fen` (required). The side to move is given with `--color` (default: white) and the search depth with `--depth` (default: 3)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the number of possible positions from the starting position for each depth up to `--depth` (default: 4), and reports the time it took to do so. By default, this counts all positions. The routine can be run with alpha-beta pruning by selecting `--strategy alpha-beta`."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            CountPositions(cmd),
        }
    }
}
