use crate::board::color::Color;
use crate::board::Board;

mod piece_values;

pub use piece_values::material_value;

/// Returns the material balance of the board. White's pieces add to the
/// score and Black's pieces subtract from it, so positive scores favor White.
/// There is no positional or mobility term, and losing a king is just another
/// 900 points of material rather than the end of the game.
#[inline(always)]
pub fn board_material_score(board: &Board) -> i32 {
    player_material_score(board, Color::White) - player_material_score(board, Color::Black)
}

/// Returns the summed material value of one side's pieces.
#[inline(always)]
pub fn player_material_score(board: &Board, color: Color) -> i32 {
    board
        .occupied_squares()
        .filter(|&(_, _, piece_color)| piece_color == color)
        .map(|(_, piece, _)| material_value(piece))
        .sum()
}
