//! The Move sum type: one variant per concrete move behavior, plus the
//! null sentinel returned when no move matches a coordinate pair.
//!
//! A move does not hold the board it was generated against. Execution
//! takes the source board explicitly and assembles the successor board
//! through a fresh builder, leaving the source untouched.

use std::fmt::{self, Display};

use crate::board::{Board, BoardBuilder};
use crate::coretypes::Square;
use crate::error::{self, ErrorKind};
use crate::pieces::{Piece, PieceKind};

/// A single chess move, carrying the moving piece by value with its
/// pre-move square. Capture variants carry the captured piece; castle
/// variants carry the rook and its destination.
#[derive(Debug, Copy, Clone)]
pub enum Move {
    /// Quiet move of any non-pawn piece.
    Major { piece: Piece, to: Square },
    /// Capture by any non-pawn piece.
    MajorCapture {
        piece: Piece,
        to: Square,
        captured: Piece,
    },
    /// Single pawn advance.
    PawnPush { piece: Piece, to: Square },
    /// Double pawn advance from the start rank. Marks the moved pawn as
    /// the resulting board's en-passant pawn.
    PawnJump { piece: Piece, to: Square },
    /// Diagonal pawn capture.
    PawnCapture {
        piece: Piece,
        to: Square,
        captured: Piece,
    },
    /// En passant: the captured pawn stands beside the destination, not
    /// on it.
    EnPassant {
        piece: Piece,
        to: Square,
        captured: Piece,
    },
    /// Pawn move reaching the far rank. The promoted kind defaults to
    /// queen at generation; callers may construct an under-promotion.
    Promotion {
        piece: Piece,
        to: Square,
        captured: Option<Piece>,
        promoted: PieceKind,
    },
    /// King two squares toward the h-file rook.
    KingSideCastle {
        piece: Piece,
        to: Square,
        rook: Piece,
        rook_to: Square,
    },
    /// King two squares toward the a-file rook.
    QueenSideCastle {
        piece: Piece,
        to: Square,
        rook: Piece,
        rook_to: Square,
    },
    /// Sentinel for "no matching move". Never executable.
    Null,
}

impl Move {
    /// The moving piece, with its pre-move square. None for the null move.
    pub const fn moved_piece(&self) -> Option<Piece> {
        match self {
            Move::Major { piece, .. }
            | Move::MajorCapture { piece, .. }
            | Move::PawnPush { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::PawnCapture { piece, .. }
            | Move::EnPassant { piece, .. }
            | Move::Promotion { piece, .. }
            | Move::KingSideCastle { piece, .. }
            | Move::QueenSideCastle { piece, .. } => Some(*piece),
            Move::Null => None,
        }
    }

    /// Source square. None for the null move.
    pub const fn from(&self) -> Option<Square> {
        match self.moved_piece() {
            Some(piece) => Some(piece.square()),
            None => None,
        }
    }

    /// Destination square. None for the null move.
    pub const fn to(&self) -> Option<Square> {
        match self {
            Move::Major { to, .. }
            | Move::MajorCapture { to, .. }
            | Move::PawnPush { to, .. }
            | Move::PawnJump { to, .. }
            | Move::PawnCapture { to, .. }
            | Move::EnPassant { to, .. }
            | Move::Promotion { to, .. }
            | Move::KingSideCastle { to, .. }
            | Move::QueenSideCastle { to, .. } => Some(*to),
            Move::Null => None,
        }
    }

    /// The piece removed from play by this move, if any.
    pub const fn captured_piece(&self) -> Option<Piece> {
        match self {
            Move::MajorCapture { captured, .. }
            | Move::PawnCapture { captured, .. }
            | Move::EnPassant { captured, .. } => Some(*captured),
            Move::Promotion { captured, .. } => *captured,
            _ => None,
        }
    }

    pub const fn is_attack(&self) -> bool {
        self.captured_piece().is_some()
    }

    pub const fn is_castling(&self) -> bool {
        matches!(
            self,
            Move::KingSideCastle { .. } | Move::QueenSideCastle { .. }
        )
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// Produce the board resulting from this move: every piece of both
    /// sides carries over except the mover, the captured piece, and the
    /// castling rook; the mover's successor is placed; the side to move
    /// flips. Only `PawnJump` records an en-passant pawn on the result.
    ///
    /// Executing the null move is a programmer error and always fails.
    pub fn execute(&self, board: &Board) -> error::Result<Board> {
        let mut builder = match *self {
            Move::Null => {
                return Err((
                    ErrorKind::NullMoveExecution,
                    "the null move sentinel cannot be applied to a board",
                )
                    .into())
            }
            Move::Major { piece, .. }
            | Move::PawnPush { piece, .. }
            | Move::PawnJump { piece, .. } => carried_over(board, &[piece], None),
            Move::MajorCapture {
                piece, captured, ..
            }
            | Move::PawnCapture {
                piece, captured, ..
            }
            | Move::EnPassant {
                piece, captured, ..
            } => carried_over(board, &[piece], Some(captured)),
            Move::Promotion {
                piece, captured, ..
            } => carried_over(board, &[piece], captured),
            Move::KingSideCastle { piece, rook, .. }
            | Move::QueenSideCastle { piece, rook, .. } => {
                carried_over(board, &[piece, rook], None)
            }
        };

        match *self {
            Move::Null => unreachable!(),
            Move::Major { piece, to }
            | Move::PawnPush { piece, to }
            | Move::MajorCapture { piece, to, .. }
            | Move::PawnCapture { piece, to, .. }
            | Move::EnPassant { piece, to, .. } => {
                builder.set_piece(piece.transit(to));
            }
            Move::PawnJump { piece, to } => {
                let pawn = piece.transit(to);
                builder.set_piece(pawn);
                builder.set_en_passant_pawn(pawn);
            }
            Move::Promotion {
                piece, to, promoted, ..
            } => {
                builder.set_piece(piece.transit(to).promote_to(promoted));
            }
            Move::KingSideCastle {
                piece,
                to,
                rook,
                rook_to,
            }
            | Move::QueenSideCastle {
                piece,
                to,
                rook,
                rook_to,
            } => {
                builder.set_piece(piece.transit(to));
                builder.set_piece(Piece::placed(
                    PieceKind::Rook,
                    rook.alliance(),
                    rook_to,
                    true,
                ));
            }
        }
        builder.set_move_maker(!board.side_to_move());

        Ok(builder.build())
    }
}

/// Moves of the same variant are equal when they move the same piece to
/// the same destination, extended with the captured piece for captures.
/// The promoted kind is deliberately not part of equality: an
/// under-promotion submitted by a caller matches the generated candidate
/// for the same pawn and squares.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self.moved_piece() == other.moved_piece()
            && self.to() == other.to()
            && self.captured_piece() == other.captured_piece()
    }
}

impl Eq for Move {}

/// Seed a builder with every active piece of both sides, minus the
/// mover's excluded pieces and the opponent's captured piece.
fn carried_over(board: &Board, excluded: &[Piece], captured: Option<Piece>) -> BoardBuilder {
    let mover = board.side_to_move();
    let mut builder = Board::builder();

    for piece in board
        .pieces(mover)
        .iter()
        .copied()
        .filter(|piece| !excluded.contains(piece))
    {
        builder.set_piece(piece);
    }
    for piece in board
        .pieces(!mover)
        .iter()
        .copied()
        .filter(|piece| captured != Some(*piece))
    {
        builder.set_piece(piece);
    }
    builder
}

/// Resolve a (from, to) coordinate pair against the side to move's
/// candidate moves. This is the boundary external callers use to submit
/// a move; the null move sentinel signals that nothing matched.
pub fn create_move(board: &Board, from: Square, to: Square) -> Move {
    board
        .current_player()
        .candidate_moves()
        .iter()
        .find(|move_| move_.from() == Some(from) && move_.to() == Some(to))
        .copied()
        .unwrap_or(Move::Null)
}

/// Castles render as the standard castle symbols, the null move as the
/// conventional `0000`, everything else in pure coordinate form.
///
/// # Example
/// Promotion from A7 to B8 -> `a7b8q`.
impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::KingSideCastle { .. } => write!(f, "O-O"),
            Move::QueenSideCastle { .. } => write!(f, "O-O-O"),
            Move::Null => write!(f, "0000"),
            Move::Promotion { promoted, .. } => write!(
                f,
                "{}{}{}",
                self.from().unwrap(),
                self.to().unwrap(),
                promoted.to_char().to_ascii_lowercase()
            ),
            _ => write!(f, "{}{}", self.from().unwrap(), self.to().unwrap()),
        }
    }
}
