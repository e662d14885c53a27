//! Shared utilities for CLI commands.

use alphabeta_chess::board::color::Color;
use alphabeta_chess::board::Board;
use alphabeta_chess::game::engine::EngineConfig;
use alphabeta_chess::game::input_source::InputSource;
use alphabeta_chess::game::r#loop::GameLoop;
use alphabeta_chess::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(
    input_source: I,
    renderer: R,
    config: EngineConfig,
    max_moves: Option<usize>,
) where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config);
    if let Some(max_moves) = max_moves {
        game = game.with_max_moves(max_moves);
    }
    game.run();
}

pub(crate) fn create_config(
    depth: u8,
    parallel: bool,
    starting_position: Board,
    starting_turn: Color,
) -> EngineConfig {
    EngineConfig {
        search_depth: depth,
        parallel,
        starting_position,
        starting_turn,
    }
}
