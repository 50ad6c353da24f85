//! Performance Test (perft)
//!
//! Tests to ensure the rules substrate matches pre-determined perft results.
//! [Perft Results](https://www.chessprogramming.org/Perft_Results)

use fianchetto_engine::coretypes::Alliance::*;
use fianchetto_engine::coretypes::Square::*;
use fianchetto_engine::perft::perft;
use fianchetto_engine::pieces::{Piece, PieceKind::*};
use fianchetto_engine::Board;

/// Run perft `expected_nodes.len()` times.
/// The index of each expected_node value is its depth.
fn perft_tester(board: &Board, expected_nodes: Vec<u64>) {
    for (depth, expected_node) in expected_nodes.into_iter().enumerate() {
        let result = perft(board, depth as u8);
        println!("perft({depth}): {result:?}");
        assert_eq!(result.nodes, expected_node);
    }
}

#[test]
fn perft_starting_position() {
    perft_tester(&Board::start_position(), vec![1, 20, 400, 8_902]);
}

#[test]
#[ignore]
fn perft_starting_position_expensive() {
    let board = Board::start_position();
    let depth4 = perft(&board, 4);
    println!("perft(4): {depth4:?}");
    assert_eq!(depth4.nodes, 197_281);
}

/// Sparse endgame with pinned-pawn and en-passant traps.
/// https://www.chessprogramming.org/Perft_Results#Position_3
fn endgame_position() -> Board {
    let mut builder = Board::builder();
    builder.set_piece(Piece::placed(King, White, A5, true));
    builder.set_piece(Piece::placed(Pawn, White, B5, true));
    builder.set_piece(Piece::placed(Rook, White, B4, true));
    builder.set_piece(Piece::new(Pawn, White, E2));
    builder.set_piece(Piece::new(Pawn, White, G2));
    builder.set_piece(Piece::new(Pawn, Black, C7));
    builder.set_piece(Piece::placed(Pawn, Black, D6, true));
    builder.set_piece(Piece::placed(Pawn, Black, F4, true));
    builder.set_piece(Piece::placed(Rook, Black, H5, true));
    builder.set_piece(Piece::placed(King, Black, H4, true));
    builder.set_move_maker(White);
    builder.build()
}

#[test]
fn perft_endgame_position() {
    perft_tester(&endgame_position(), vec![1, 14, 191, 2_812]);
}

#[test]
#[ignore]
fn perft_endgame_position_expensive() {
    let board = endgame_position();
    let depth4 = perft(&board, 4);
    println!("perft(4): {depth4:?}");
    assert_eq!(depth4.nodes, 43_238);
}
