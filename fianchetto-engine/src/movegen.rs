//! Coordinate utilities and the move generation walks shared by the piece kinds.
//!
//! Offsets are board-index deltas in little-endian rank-file order
//! (A1 = 0, H8 = 63, north = +8). Every walk consults the precomputed
//! file membership tables before applying an offset, so no candidate
//! ever wraps across a board edge.

use crate::board::Board;
use crate::coretypes::{Alliance, Square, NUM_FILES, NUM_SQUARES};
use crate::movelist::MoveList;
use crate::moves::Move;
use crate::pieces::{Piece, PieceKind};

/////////////////////////////////////
// Precomputed Membership Tables   //
/////////////////////////////////////

// Square indexed. FILE_A[square] is true iff square is on the a-file.
pub const FILE_A: [bool; NUM_SQUARES] = file_members(0);
pub const FILE_B: [bool; NUM_SQUARES] = file_members(1);
pub const FILE_G: [bool; NUM_SQUARES] = file_members(6);
pub const FILE_H: [bool; NUM_SQUARES] = file_members(7);

// Square indexed. RANK_N[square] is true iff square is on rank N.
pub const RANK_1: [bool; NUM_SQUARES] = rank_members(0);
pub const RANK_2: [bool; NUM_SQUARES] = rank_members(1);
pub const RANK_3: [bool; NUM_SQUARES] = rank_members(2);
pub const RANK_4: [bool; NUM_SQUARES] = rank_members(3);
pub const RANK_5: [bool; NUM_SQUARES] = rank_members(4);
pub const RANK_6: [bool; NUM_SQUARES] = rank_members(5);
pub const RANK_7: [bool; NUM_SQUARES] = rank_members(6);
pub const RANK_8: [bool; NUM_SQUARES] = rank_members(7);

const fn file_members(file: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let mut square = file;
    while square < NUM_SQUARES {
        table[square] = true;
        square += NUM_FILES;
    }
    table
}

const fn rank_members(rank: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let mut file = 0;
    while file < NUM_FILES {
        table[rank * NUM_FILES + file] = true;
        file += 1;
    }
    table
}

//////////////////////////
// Direction Offset Sets //
//////////////////////////

pub const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
pub const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
pub const BISHOP_DIRECTIONS: [i8; 4] = [-9, -7, 7, 9];
pub const ROOK_DIRECTIONS: [i8; 4] = [-8, -1, 1, 8];
pub const QUEEN_DIRECTIONS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

///////////////////////////
// Coordinate Arithmetic //
///////////////////////////

/// Returns true if index is a square on the board.
pub const fn is_valid_square(index: i16) -> bool {
    0 <= index && index < NUM_SQUARES as i16
}

/// Apply a board-index offset to a square, None if the result is off board.
/// Does not account for file wrapping, which callers must exclude first.
pub fn offset_square(square: Square, offset: i8) -> Option<Square> {
    let index = square.index() as i16 + offset as i16;
    if is_valid_square(index) {
        Square::from_u8(index as u8)
    } else {
        None
    }
}

/// True if applying offset once from square would cross the a- or h-file edge.
/// Covers every single-step lateral or diagonal offset (king and ray walks).
const fn ray_wraps(square: Square, offset: i8) -> bool {
    (FILE_A[square.index()] && matches!(offset, -9 | -1 | 7))
        || (FILE_H[square.index()] && matches!(offset, -7 | 1 | 9))
}

/// True if a knight offset from square would cross a board edge.
/// Knight jumps change file by one or two, so the two columns nearest
/// each edge have their own exclusion sets.
const fn knight_wraps(square: Square, offset: i8) -> bool {
    (FILE_A[square.index()] && matches!(offset, -17 | -10 | 6 | 15))
        || (FILE_B[square.index()] && matches!(offset, -10 | 6))
        || (FILE_G[square.index()] && matches!(offset, -6 | 10))
        || (FILE_H[square.index()] && matches!(offset, -15 | -6 | 10 | 17))
}

/// True if a pawn capture offset from square would cross a board edge.
const fn pawn_capture_wraps(square: Square, offset: i8) -> bool {
    (FILE_A[square.index()] && matches!(offset, 7 | -9))
        || (FILE_H[square.index()] && matches!(offset, 9 | -7))
}

fn on_pawn_start_rank(alliance: Alliance, square: Square) -> bool {
    match alliance {
        Alliance::White => RANK_2[square.index()],
        Alliance::Black => RANK_7[square.index()],
    }
}

fn on_promotion_rank(alliance: Alliance, square: Square) -> bool {
    match alliance {
        Alliance::White => RANK_8[square.index()],
        Alliance::Black => RANK_1[square.index()],
    }
}

//////////////////////////////
// Per-Piece Move Functions //
//////////////////////////////

pub fn knight_moves(board: &Board, piece: &Piece) -> MoveList {
    stepping_moves(board, piece, &KNIGHT_OFFSETS, knight_wraps)
}

pub fn king_moves(board: &Board, piece: &Piece) -> MoveList {
    stepping_moves(board, piece, &KING_OFFSETS, ray_wraps)
}

pub fn bishop_moves(board: &Board, piece: &Piece) -> MoveList {
    sliding_moves(board, piece, &BISHOP_DIRECTIONS)
}

pub fn rook_moves(board: &Board, piece: &Piece) -> MoveList {
    sliding_moves(board, piece, &ROOK_DIRECTIONS)
}

pub fn queen_moves(board: &Board, piece: &Piece) -> MoveList {
    sliding_moves(board, piece, &QUEEN_DIRECTIONS)
}

/// Evaluate each offset once: empty destinations are quiet moves,
/// enemy-occupied destinations are captures.
fn stepping_moves(
    board: &Board,
    piece: &Piece,
    offsets: &[i8],
    wraps: fn(Square, i8) -> bool,
) -> MoveList {
    let mut moves = MoveList::new();

    for &offset in offsets {
        if wraps(piece.square(), offset) {
            continue;
        }
        let to = match offset_square(piece.square(), offset) {
            Some(to) => to,
            None => continue,
        };
        match board.tile(to).piece() {
            None => moves.push(Move::Major { piece: *piece, to }),
            Some(target) if target.alliance() != piece.alliance() => {
                moves.push(Move::MajorCapture {
                    piece: *piece,
                    to,
                    captured: target,
                });
            }
            Some(_) => (),
        }
    }
    moves
}

/// Walk each direction repeatedly from the piece's square: stop before a
/// friendly blocker, stop on an enemy blocker with a capture, continue
/// over empty tiles while the ray stays on the board.
fn sliding_moves(board: &Board, piece: &Piece, directions: &[i8]) -> MoveList {
    let mut moves = MoveList::new();

    for &direction in directions {
        let mut current = piece.square();
        loop {
            if ray_wraps(current, direction) {
                break;
            }
            let to = match offset_square(current, direction) {
                Some(to) => to,
                None => break,
            };
            match board.tile(to).piece() {
                None => {
                    moves.push(Move::Major { piece: *piece, to });
                    current = to;
                }
                Some(target) => {
                    if target.alliance() != piece.alliance() {
                        moves.push(Move::MajorCapture {
                            piece: *piece,
                            to,
                            captured: target,
                        });
                    }
                    break;
                }
            }
        }
    }
    moves
}

/// Direction-dependent pawn generation: single push, double step from the
/// start rank, diagonal captures, en passant against the board's recorded
/// pawn, and promotion on reaching the far rank.
pub fn pawn_moves(board: &Board, piece: &Piece) -> MoveList {
    debug_assert_eq!(piece.kind(), PieceKind::Pawn);
    let mut moves = MoveList::new();
    let alliance = piece.alliance();
    let from = piece.square();
    let advance = alliance.direction();

    if let Some(to) = offset_square(from, advance) {
        if !board.tile(to).is_occupied() {
            if on_promotion_rank(alliance, to) {
                moves.push(Move::Promotion {
                    piece: *piece,
                    to,
                    captured: None,
                    promoted: PieceKind::Queen,
                });
            } else {
                moves.push(Move::PawnPush { piece: *piece, to });

                // Double step: start rank only, both squares ahead empty.
                if on_pawn_start_rank(alliance, from) {
                    if let Some(jump_to) = offset_square(from, 2 * advance) {
                        if !board.tile(jump_to).is_occupied() {
                            moves.push(Move::PawnJump {
                                piece: *piece,
                                to: jump_to,
                            });
                        }
                    }
                }
            }
        }
    }

    for offset in [advance - 1, advance + 1] {
        if pawn_capture_wraps(from, offset) {
            continue;
        }
        let to = match offset_square(from, offset) {
            Some(to) => to,
            None => continue,
        };
        if let Some(target) = board.tile(to).piece() {
            if target.alliance() != alliance {
                if on_promotion_rank(alliance, to) {
                    moves.push(Move::Promotion {
                        piece: *piece,
                        to,
                        captured: Some(target),
                        promoted: PieceKind::Queen,
                    });
                } else {
                    moves.push(Move::PawnCapture {
                        piece: *piece,
                        to,
                        captured: target,
                    });
                }
            }
        } else if let Some(ep_pawn) = board.en_passant_pawn() {
            // The capturable pawn sits beside the capturer on the same
            // rank; the capture lands on the square behind it.
            let beside = offset_square(from, offset - advance);
            if ep_pawn.alliance() != alliance && beside == Some(ep_pawn.square()) {
                moves.push(Move::EnPassant {
                    piece: *piece,
                    to,
                    captured: ep_pawn,
                });
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Alliance::*;
    use crate::coretypes::Square::*;
    use crate::pieces::PieceKind::*;

    fn lone_piece_board(piece: Piece) -> Board {
        let mut builder = Board::builder();
        builder.set_piece(piece);
        builder.set_piece(Piece::new(King, White, H1));
        builder.set_piece(Piece::new(King, Black, H8));
        builder.build()
    }

    #[test]
    fn file_tables_membership() {
        for square in Square::iter() {
            assert_eq!(FILE_A[square.index()], square.file_u8() == 0);
            assert_eq!(FILE_B[square.index()], square.file_u8() == 1);
            assert_eq!(FILE_G[square.index()], square.file_u8() == 6);
            assert_eq!(FILE_H[square.index()], square.file_u8() == 7);
        }
    }

    #[test]
    fn rank_tables_membership() {
        let tables = [
            RANK_1, RANK_2, RANK_3, RANK_4, RANK_5, RANK_6, RANK_7, RANK_8,
        ];
        for (rank, table) in tables.iter().enumerate() {
            for square in Square::iter() {
                assert_eq!(table[square.index()], square.rank_u8() as usize == rank);
            }
        }
    }

    #[test]
    fn valid_square_bounds() {
        assert!(is_valid_square(0));
        assert!(is_valid_square(63));
        assert!(!is_valid_square(-1));
        assert!(!is_valid_square(64));
    }

    #[test]
    fn knight_moves_corner_and_center() {
        let knight = Piece::new(Knight, White, A1);
        let board = lone_piece_board(knight);
        let moves = knight_moves(&board, &knight);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.to() == Some(B3)));
        assert!(moves.iter().any(|m| m.to() == Some(C2)));

        let knight = Piece::new(Knight, White, D4);
        let board = lone_piece_board(knight);
        let moves = knight_moves(&board, &knight);
        assert_eq!(moves.len(), 8);
        for expected in [E6, F5, F3, E2, C2, B3, B5, C6] {
            assert!(moves.iter().any(|m| m.to() == Some(expected)));
        }
    }

    #[test]
    fn rook_on_a_file_never_wraps() {
        let rook = Piece::new(Rook, White, A4);
        let board = lone_piece_board(rook);
        let moves = rook_moves(&board, &rook);
        assert_eq!(moves.len(), 14);
        for move_ in &moves {
            let to = move_.to().unwrap();
            assert!(to.file_u8() == 0 || to.rank_u8() == 3);
        }
    }

    #[test]
    fn bishop_corner_diagonal() {
        let bishop = Piece::new(Bishop, Black, A8);
        let board = lone_piece_board(bishop);
        let moves = bishop_moves(&board, &bishop);
        assert_eq!(moves.len(), 7);
        for expected in [B7, C6, D5, E4, F3, G2] {
            assert!(moves.iter().any(|m| m.to() == Some(expected)));
        }
        // H1 is occupied by the white king, so the ray ends in a capture.
        assert!(moves
            .iter()
            .any(|m| m.to() == Some(H1) && m.is_attack()));
    }

    #[test]
    fn sliding_ray_stops_at_blockers() {
        let mut builder = Board::builder();
        let rook = Piece::new(Rook, White, D4);
        builder.set_piece(rook);
        builder.set_piece(Piece::new(Pawn, White, D6)); // friendly blocker
        builder.set_piece(Piece::new(Pawn, Black, F4)); // enemy blocker
        builder.set_piece(Piece::new(King, White, H1));
        builder.set_piece(Piece::new(King, Black, H8));
        let board = builder.build();

        let moves = rook_moves(&board, &rook);
        // North stops under the friendly pawn, east captures the enemy pawn.
        assert!(moves.iter().any(|m| m.to() == Some(D5)));
        assert!(!moves.iter().any(|m| m.to() == Some(D6)));
        assert!(!moves.iter().any(|m| m.to() == Some(D7)));
        assert!(moves
            .iter()
            .any(|m| m.to() == Some(F4) && m.is_attack()));
        assert!(!moves.iter().any(|m| m.to() == Some(G4)));
    }

    #[test]
    fn pawn_start_rank_has_push_and_jump() {
        let pawn = Piece::new(Pawn, White, E2);
        let board = lone_piece_board(pawn);
        let moves = pawn_moves(&board, &pawn);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.to() == Some(E3)));
        assert!(moves.iter().any(|m| m.to() == Some(E4)));

        let pawn = Piece::new(Pawn, Black, D7);
        let board = lone_piece_board(pawn);
        let moves = pawn_moves(&board, &pawn);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.to() == Some(D6)));
        assert!(moves.iter().any(|m| m.to() == Some(D5)));
    }

    #[test]
    fn pawn_jump_blocked_by_either_square() {
        for blocker_square in [E3, E4] {
            let mut builder = Board::builder();
            let pawn = Piece::new(Pawn, White, E2);
            builder.set_piece(pawn);
            builder.set_piece(Piece::new(Knight, Black, blocker_square));
            builder.set_piece(Piece::new(King, White, H1));
            builder.set_piece(Piece::new(King, Black, H8));
            let board = builder.build();

            let moves = pawn_moves(&board, &pawn);
            assert!(!moves.iter().any(|m| m.to() == Some(E4)));
        }
    }

    #[test]
    fn pawn_captures_diagonally_only_enemies() {
        let mut builder = Board::builder();
        let pawn = Piece::new(Pawn, White, D4);
        builder.set_piece(pawn);
        builder.set_piece(Piece::new(Knight, Black, C5));
        builder.set_piece(Piece::new(Bishop, White, E5));
        builder.set_piece(Piece::new(King, White, H1));
        builder.set_piece(Piece::new(King, Black, H8));
        let board = builder.build();

        let moves = pawn_moves(&board, &pawn);
        assert!(moves.iter().any(|m| m.to() == Some(C5) && m.is_attack()));
        assert!(!moves.iter().any(|m| m.to() == Some(E5)));
        assert!(moves.iter().any(|m| m.to() == Some(D5)));
    }

    #[test]
    fn pawn_on_h_file_cannot_capture_around_the_edge() {
        let mut builder = Board::builder();
        let pawn = Piece::new(Pawn, White, H4);
        builder.set_piece(pawn);
        // A6 would be the wrapped destination of the +9 offset from H4.
        builder.set_piece(Piece::new(Knight, Black, A6));
        builder.set_piece(Piece::new(King, White, H1));
        builder.set_piece(Piece::new(King, Black, H8));
        let board = builder.build();

        let moves = pawn_moves(&board, &pawn);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to(), Some(H5));
    }

    #[test]
    fn pawn_promotes_on_far_rank() {
        let mut builder = Board::builder();
        let pawn = Piece::new(Pawn, White, B7);
        builder.set_piece(pawn);
        builder.set_piece(Piece::new(Rook, Black, A8));
        builder.set_piece(Piece::new(King, White, H1));
        builder.set_piece(Piece::new(King, Black, H8));
        let board = builder.build();

        let moves = pawn_moves(&board, &pawn);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| matches!(
            m,
            Move::Promotion {
                promoted: PieceKind::Queen,
                ..
            }
        )));
        assert!(moves
            .iter()
            .any(|m| m.to() == Some(B8) && !m.is_attack()));
        assert!(moves.iter().any(|m| m.to() == Some(A8) && m.is_attack()));
    }

    #[test]
    fn pawn_en_passant_against_recorded_pawn() {
        let mut builder = Board::builder();
        let capturer = Piece::new(Pawn, White, E5);
        let jumped = Piece::new(Pawn, Black, D7).transit(D5);
        builder.set_piece(capturer);
        builder.set_piece(jumped);
        builder.set_piece(Piece::new(King, White, H1));
        builder.set_piece(Piece::new(King, Black, H8));
        builder.set_en_passant_pawn(jumped);
        let board = builder.build();

        let moves = pawn_moves(&board, &capturer);
        let ep = moves
            .iter()
            .find(|m| matches!(m, Move::EnPassant { .. }))
            .expect("en passant capture should be generated");
        assert_eq!(ep.to(), Some(D6));
        assert_eq!(ep.captured_piece(), Some(jumped));
    }
}
