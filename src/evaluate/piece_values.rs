use crate::board::piece::Piece;

pub fn material_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 10,
        Piece::Knight => 30,
        Piece::Bishop => 30,
        Piece::Rook => 50,
        Piece::Queen => 90,
        Piece::King => 900,
    }
}
