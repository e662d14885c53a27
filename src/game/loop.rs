use log::{info, warn};

use crate::board::color::Color;
use crate::game::engine::{Engine, EngineConfig};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::{InputError, MoveInput};

/// Why a game loop stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameOutcome {
    /// The side to move had no generated moves.
    NoMoves(Color),
    Quit,
    MoveLimitReached,
}

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    input_source: I,
    renderer: R,
    max_moves: Option<usize>,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            input_source,
            renderer,
            max_moves: None,
        }
    }

    /// Stops the game once this many moves have been played.
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = Some(max_moves);
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn run(&mut self) -> GameOutcome {
        let outcome = loop {
            if let Some(limit) = self.max_moves {
                if self.engine.move_history().len() >= limit {
                    break GameOutcome::MoveLimitReached;
                }
            }

            let current_turn = self.engine.turn();
            if !self.engine.has_moves() {
                break GameOutcome::NoMoves(current_turn);
            }

            self.renderer.render(&self.engine);

            let input = match self.input_source.get_move(current_turn) {
                Ok(input) => input,
                Err(error @ InputError::InvalidInput { .. }) => {
                    self.renderer
                        .report_error(&format!("Invalid input format! ({})", error));
                    continue;
                }
                Err(error) => {
                    warn!("stopping game: {}", error);
                    break GameOutcome::Quit;
                }
            };

            if input == MoveInput::Quit {
                break GameOutcome::Quit;
            }

            match self.engine.make_move_from_input(input) {
                Ok(_) => {
                    if let Some(delay) = self.renderer.frame_delay() {
                        std::thread::sleep(delay);
                    }
                }
                Err(error) => self.renderer.report_error(&format!("error: {}", error)),
            }
        };

        self.renderer.render(&self.engine);
        match outcome {
            GameOutcome::NoMoves(color) => println!("{} has no moves left. Game over.", color),
            GameOutcome::Quit => println!("Goodbye!"),
            GameOutcome::MoveLimitReached => println!(
                "Stopped after {} moves.",
                self.engine.move_history().len()
            ),
        }
        info!(
            "game finished: {:?} after {} moves (final score: {})",
            outcome,
            self.engine.move_history().len(),
            self.engine.score()
        );

        outcome
    }
}
