//! Move generation implementation.
//!
//! Only pawns and rooks produce moves. Knights, bishops, queens and kings sit
//! on the board, count towards material and can be captured, but never move.
//! Moves are pseudo-legal: there is no check detection, castling, en passant,
//! double pawn step or promotion.

use log::trace;
use smallvec::SmallVec;

use crate::board::{color::Color, piece::Piece, square::Square, Board};
use crate::chess_move::ChessMove;

/// A list of chess moves that is optimized for small sizes.
pub type ChessMoveList = SmallVec<[ChessMove; 32]>;

/// Pawn capture columns, in the order they are emitted: towards the a-file
/// first, then towards the h-file.
const PAWN_CAPTURE_COL_DELTAS: [i8; 2] = [-1, 1];

/// Rook slide directions as `(row, col)` deltas, in emission order.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Generates the pseudo-legal moves for one side of a board.
#[derive(Clone, Copy, Default, Debug)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Moves are ordered by origin square in row-major order (a8 first), then
    /// by the per-piece order: pawn push, capture left, capture right; rook
    /// slides down, up, right, left, nearest square first.
    pub fn generate_moves(&self, board: &Board, player: Color) -> ChessMoveList {
        let mut moves = ChessMoveList::new();

        for (square, piece, color) in board.occupied_squares() {
            if color != player {
                continue;
            }
            match piece {
                Piece::Pawn => generate_pawn_moves(board, square, player, &mut moves),
                Piece::Rook => generate_rook_moves(board, square, player, &mut moves),
                Piece::Knight | Piece::Bishop | Piece::Queen | Piece::King => {}
            }
        }

        trace!("generated {} moves for {}", moves.len(), player);
        moves
    }

    /// Counts the leaf positions reachable in exactly `depth` plies with
    /// sides alternating, starting with `player`. A side with no moves ends
    /// its branch early and counts as a single leaf.
    pub fn count_positions(&self, board: &mut Board, depth: u8, player: Color) -> usize {
        if depth == 0 {
            return 1;
        }

        let candidates = self.generate_moves(board, player);
        if candidates.is_empty() {
            return 1;
        }

        candidates
            .iter()
            .map(|chess_move| {
                let capture = chess_move.apply(board);
                let count = self.count_positions(board, depth - 1, player.opposite());
                chess_move.undo(board, capture);
                count
            })
            .sum()
    }
}

fn generate_pawn_moves(board: &Board, from: Square, player: Color, moves: &mut ChessMoveList) {
    let forward = player.forward();

    if let Some(to) = from.offset(forward, 0) {
        if !board.is_occupied(to) {
            moves.push(ChessMove::new(from, to));
        }
    }

    for &col_delta in PAWN_CAPTURE_COL_DELTAS.iter() {
        let to = match from.offset(forward, col_delta) {
            Some(to) => to,
            None => continue,
        };
        if let Some((_, color)) = board.get(to) {
            if color != player {
                moves.push(ChessMove::new(from, to));
            }
        }
    }
}

fn generate_rook_moves(board: &Board, from: Square, player: Color, moves: &mut ChessMoveList) {
    for &(row_delta, col_delta) in ROOK_DIRECTIONS.iter() {
        let mut current = from.offset(row_delta, col_delta);
        while let Some(to) = current {
            match board.get(to) {
                None => moves.push(ChessMove::new(from, to)),
                Some((_, color)) => {
                    if color != player {
                        moves.push(ChessMove::new(from, to));
                    }
                    break;
                }
            }
            current = to.offset(row_delta, col_delta);
        }
    }
}
