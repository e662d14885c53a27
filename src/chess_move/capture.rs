use crate::board::{color::Color, piece::Piece};

/// Whatever occupied a move's destination square before the move was
/// applied. `None` for a quiet move onto an empty square.
pub type Capture = Option<(Piece, Color)>;
