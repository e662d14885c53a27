//! Move input parsing and validation.

use std::io::{self, BufRead};
use std::str::FromStr;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::chess_move::{ChessMove, ChessMoveParseError};

static QUIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(?i)(q|quit|exit)$").expect("QUIT_RE regex should be valid"));

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input {input:?}: {error}")]
    InvalidInput {
        input: String,
        error: ChessMoveParseError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveInput {
    Coordinate(ChessMove),
    UseEngine,
    Quit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if QUIT_RE.is_match(trimmed) {
            return Ok(MoveInput::Quit);
        }

        trimmed
            .parse::<ChessMove>()
            .map(MoveInput::Coordinate)
            .map_err(|error| InputError::InvalidInput {
                input: trimmed.to_string(),
                error,
            })
    }
}

/// Reads one line of move input from `reader`. End of input is treated the
/// same as an explicit quit.
pub fn read_move_input<R: BufRead>(reader: &mut R) -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let bytes_read = reader
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if bytes_read == 0 {
        debug!("end of input");
        return Ok(MoveInput::Quit);
    }

    input.parse()
}

/// Reads one line of move input (e.g. `e2e4`) from stdin.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    read_move_input(&mut handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;
    use crate::std_move;
    use std::io::Cursor;

    #[test]
    fn test_parse_coordinate_move() {
        assert_eq!(
            Ok(MoveInput::Coordinate(std_move!(E2, E4))),
            "e2e4".parse::<MoveInput>()
        );
        assert_eq!(
            Ok(MoveInput::Coordinate(std_move!(A7, A8))),
            "  a7a8\n".parse::<MoveInput>()
        );
    }

    #[test]
    fn test_parse_quit() {
        for input in &["q", "quit", "QUIT", "exit", " quit \n"] {
            assert_eq!(Ok(MoveInput::Quit), input.parse::<MoveInput>(), "{:?}", input);
        }
    }

    #[test]
    fn test_parse_invalid_input() {
        for input in &["e2e", "e2e4e", "i2e4", "e9e4", "Nf3", ""] {
            match input.parse::<MoveInput>() {
                Err(InputError::InvalidInput { input: raw, .. }) => {
                    assert_eq!(input.trim(), raw)
                }
                other => panic!("expected invalid input for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_read_move_input_sequence() {
        let mut reader = Cursor::new("e2e4\nbogus\nd7d5\n");

        assert_eq!(
            Ok(MoveInput::Coordinate(std_move!(E2, E4))),
            read_move_input(&mut reader)
        );
        assert!(read_move_input(&mut reader).is_err());
        assert_eq!(
            Ok(MoveInput::Coordinate(std_move!(D7, D5))),
            read_move_input(&mut reader)
        );
        assert_eq!(Ok(MoveInput::Quit), read_move_input(&mut reader));
    }

    #[test]
    fn test_end_of_input_is_quit() {
        let mut reader = Cursor::new("");
        assert_eq!(Ok(MoveInput::Quit), read_move_input(&mut reader));
    }
}
