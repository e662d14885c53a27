use std::io::{self, BufRead, BufReader, Stdin};

use crate::board::color::Color;
use crate::input_handler::{read_move_input, InputError, MoveInput};

pub trait InputSource {
    fn get_move(&mut self, current_turn: Color) -> Result<MoveInput, InputError>;
}

/// Reads coordinate moves typed by a human, one per line.
pub struct HumanInput<R: BufRead> {
    reader: R,
}

impl HumanInput<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> HumanInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for HumanInput<R> {
    fn get_move(&mut self, _current_turn: Color) -> Result<MoveInput, InputError> {
        read_move_input(&mut self.reader)
    }
}

pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_move(&mut self, _current_turn: Color) -> Result<MoveInput, InputError> {
        Ok(MoveInput::UseEngine)
    }
}

/// A human plays `human_color` and the engine plays the other side.
pub struct ConditionalInput<R: BufRead> {
    pub human_color: Color,
    human: HumanInput<R>,
}

impl ConditionalInput<BufReader<Stdin>> {
    pub fn stdin(human_color: Color) -> Self {
        Self::new(human_color, HumanInput::stdin())
    }
}

impl<R: BufRead> ConditionalInput<R> {
    pub fn new(human_color: Color, human: HumanInput<R>) -> Self {
        Self { human_color, human }
    }
}

impl<R: BufRead> InputSource for ConditionalInput<R> {
    fn get_move(&mut self, current_turn: Color) -> Result<MoveInput, InputError> {
        if current_turn == self.human_color {
            self.human.get_move(current_turn)
        } else {
            Ok(MoveInput::UseEngine)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;
    use crate::std_move;
    use std::io::Cursor;

    #[test]
    fn test_conditional_input_defers_to_engine_off_turn() {
        let mut input = ConditionalInput::new(Color::White, HumanInput::new(Cursor::new("e2e4\n")));

        assert_eq!(Ok(MoveInput::UseEngine), input.get_move(Color::Black));
        assert_eq!(
            Ok(MoveInput::Coordinate(std_move!(E2, E4))),
            input.get_move(Color::White)
        );
        assert_eq!(Ok(MoveInput::Quit), input.get_move(Color::White));
    }

    #[test]
    fn test_engine_input_always_uses_engine() {
        for &color in &Color::ALL {
            assert_eq!(Ok(MoveInput::UseEngine), EngineInput.get_move(color));
        }
    }
}
