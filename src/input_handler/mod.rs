//! Move input parsing for human players.

mod input;

pub use input::{parse_move_input, read_move_input, InputError, MoveInput};
