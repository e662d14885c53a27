//! Chess-specific tests for the alpha-beta search.
//!
//! Test coverage:
//! - Material-greedy captures within the search horizon
//! - Avoiding captures that lose material to a recapture
//! - First-wins tie-breaking on quiet positions
//! - Pruned search equals unpruned minimax on chess positions
//! - Board restoration after search

use crate::alpha_beta_searcher::{full_minimax, SearchContext, SearchError, INFINITY};
use crate::board::{color::Color, square::*, Board};
use crate::evaluate::board_material_score;
use crate::{chess_position, std_move};

use super::*;

#[test]
fn test_rook_captures_hanging_queen() {
    let mut context = SearchContext::default();
    let mut board = chess_position! {
        ....k...
        ........
        ........
        q.......
        ........
        ........
        ........
        R...K...
    };

    let chess_move = search_best_move(&mut context, &mut board, Color::White).unwrap();
    assert_eq!(std_move!(A1, A5), chess_move);
}

#[test]
fn test_pawn_takes_queen_despite_recapture() {
    let mut context = SearchContext::default();
    let mut board = chess_position! {
        ....k...
        ........
        ..p.....
        ...q....
        ....P...
        ........
        ........
        ....K...
    };
    let original = board.clone();

    // pushing to e5 gives up the capture for good, so exd5 cxd5 is best
    let chess_move = search_best_move(&mut context, &mut board, Color::White).unwrap();
    assert_eq!(std_move!(E4, D5), chess_move);
    assert_eq!(Some(-10), context.last_score());
    assert_eq!(original, board, "search must leave the board untouched");
}

#[test]
fn test_black_captures_queen() {
    let mut context = SearchContext::default();
    let mut board = chess_position! {
        ....k...
        ......pp
        ........
        ........
        ........
        ........
        ...r.Q..
        ....K...
    };

    let chess_move = search_best_move(&mut context, &mut board, Color::Black).unwrap();
    assert_eq!(std_move!(D2, F2), chess_move);
    assert_eq!(Some(-70), context.last_score());
}

#[test]
fn test_avoids_capture_that_loses_the_rook() {
    let mut context = SearchContext::default();
    let mut board = chess_position! {
        ...r...k
        ...p....
        ........
        ........
        ...R..n.
        ........
        ........
        .......K
    };

    let chess_move = search_best_move(&mut context, &mut board, Color::White).unwrap();
    assert_ne!(std_move!(D4, D7), chess_move, "Rxd7 loses the rook to Rxd7");
    assert_eq!(std_move!(D4, G4), chess_move);
}

#[test]
fn test_quiet_starting_position_keeps_first_move() {
    let mut context = SearchContext::default();
    let mut board = Board::starting_position();

    let white_move = search_best_move(&mut context, &mut board, Color::White).unwrap();
    assert_eq!(std_move!(A2, A3), white_move);
    assert_eq!(Some(0), context.last_score());

    let black_move = search_best_move(&mut context, &mut board, Color::Black).unwrap();
    assert_eq!(std_move!(A7, A6), black_move);
    assert_eq!(Board::starting_position(), board);
}

#[test]
fn test_king_capture_is_not_terminal() {
    let mut context = SearchContext::default();
    let mut board = chess_position! {
        ....k...
        p.......
        ........
        ........
        ........
        ........
        ........
        ....R..K
    };

    let before = board_material_score(&board);
    board.apply(std_move!(E1, E8));
    assert_eq!(before + 900, board_material_score(&board));

    // the game carries on without a black king
    let replies = ChessMoveGenerator::new()
        .inner()
        .generate_moves(&board, Color::Black);
    assert_eq!(vec![std_move!(A7, A6)], replies.to_vec());
    assert_eq!(
        Ok(std_move!(A7, A6)),
        search_best_move(&mut context, &mut board, Color::Black)
    );
}

#[test]
fn test_no_moves_is_an_error() {
    let mut context = SearchContext::default();
    let mut board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        ...QK...
    };

    assert_eq!(
        Err(SearchError::NoAvailableMoves),
        search_best_move(&mut context, &mut board, Color::White)
    );
}

#[test]
fn test_depth_zero_is_evaluation() {
    let context = SearchContext::default();
    let mut board = chess_position! {
        r...k...
        .pp.....
        ........
        ...q....
        ....P...
        ........
        PP......
        R...K...
    };

    for &color in &Color::ALL {
        assert_eq!(
            board_material_score(&board),
            search_score(&context, &mut board, 0, color, -INFINITY, INFINITY)
        );
    }
}

#[test]
fn test_side_without_moves_is_scored_as_leaf() {
    let context = SearchContext::default();
    let mut board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        ..NBQK..
    };

    assert_eq!(
        board_material_score(&board),
        search_score(&context, &mut board, 3, Color::White, -INFINITY, INFINITY)
    );
}

#[test]
fn test_pruning_matches_unpruned_minimax_on_chess_positions() {
    let positions = vec![
        Board::starting_position(),
        chess_position! {
            r...k..r
            .p....p.
            ..P..p..
            ...q....
            R..p.R..
            ..p.....
            .P....P.
            ....K...
        },
        chess_position! {
            ...r...k
            ...p....
            ........
            ........
            ...R..n.
            ........
            ........
            .......K
        },
    ];

    let move_generator = ChessMoveGenerator::new();
    let evaluator = ChessEvaluator::new();

    for board in positions {
        for depth in 0..=3 {
            for &color in &Color::ALL {
                let mut board = board.clone();
                let context = SearchContext::default();
                let pruned =
                    search_score(&context, &mut board, depth, color, -INFINITY, INFINITY);
                let unpruned = full_minimax(
                    &mut board,
                    &move_generator,
                    &evaluator,
                    depth,
                    color.maximize_score(),
                );
                assert_eq!(unpruned, pruned, "depth {} color {}\n{}", depth, color, board);
            }
        }
    }
}

#[test]
fn test_parallel_search_matches_sequential() {
    let board = chess_position! {
        r...k..r
        .p....p.
        ..P..p..
        ...q....
        R..p.R..
        ..p.....
        .P....P.
        ....K...
    };

    for &color in &Color::ALL {
        let mut sequential = SearchContext::with_parallel(3, false);
        let mut parallel = SearchContext::with_parallel(3, true);

        let sequential_move =
            search_best_move(&mut sequential, &mut board.clone(), color).unwrap();
        let parallel_move = search_best_move(&mut parallel, &mut board.clone(), color).unwrap();

        assert_eq!(sequential_move, parallel_move);
        assert_eq!(sequential.last_score(), parallel.last_score());
    }
}
