//! The player view of a board: one side's king, its candidate moves
//! (pseudo-legal plus castles), and the legality machinery that filters
//! candidates down by king safety.
//!
//! A Player is derived from a Board on demand and borrows it; boards do
//! not store players, so no reference cycle exists.

use std::fmt::{self, Display};

use crate::board::Board;
use crate::coretypes::{Alliance, File, Square};
use crate::movelist::MoveList;
use crate::moves::Move;
use crate::pieces::{Piece, PieceKind};

/// Outcome class of a move attempt.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveStatus {
    /// The move was applied and the transition holds the resulting board.
    Done,
    /// The move is not a member of the player's candidate set.
    IllegalMove,
    /// The move is well formed but would leave the mover's king attacked.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    pub const fn is_done(&self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

impl Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            MoveStatus::Done => "done",
            MoveStatus::IllegalMove => "illegal move",
            MoveStatus::LeavesPlayerInCheck => "leaves player in check",
        };
        write!(f, "{text}")
    }
}

/// Result of attempting a move: the board to continue from (the prior
/// board when the move was rejected), the attempted move, and the status.
#[derive(Debug, Clone)]
pub struct MoveTransition {
    board: Board,
    move_: Move,
    status: MoveStatus,
}

impl MoveTransition {
    pub(crate) fn new(board: Board, move_: Move, status: MoveStatus) -> Self {
        MoveTransition {
            board,
            move_,
            status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn move_(&self) -> Move {
        self.move_
    }

    pub fn status(&self) -> MoveStatus {
        self.status
    }
}

/// Returns true if any move in the list has the square as its destination.
pub fn attacks_on_square(square: Square, moves: &[Move]) -> bool {
    moves.iter().any(|move_| move_.to() == Some(square))
}

/// One side's view of a board.
#[derive(Debug)]
pub struct Player<'a> {
    board: &'a Board,
    alliance: Alliance,
    king: Piece,
    candidates: MoveList,
    in_check: bool,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, alliance: Alliance) -> Self {
        let king = board
            .king(alliance)
            .expect("a playable board has one king per side");
        let opponent_moves = board.pseudo_legal_moves(!alliance);
        let in_check = attacks_on_square(king.square(), &opponent_moves);

        let mut candidates = board.pseudo_legal_moves(alliance);
        candidates.extend(king_castles(board, &king, in_check, &opponent_moves));

        Player {
            board,
            alliance,
            king,
            candidates,
            in_check,
        }
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn king(&self) -> Piece {
        self.king
    }

    /// The opposing player view of the same board.
    pub fn opponent(&self) -> Player<'a> {
        self.board.player(!self.alliance)
    }

    /// Candidate moves: pseudo-legal moves plus castles, before king
    /// safety filtering. This is the membership set for `make_move`.
    pub fn candidate_moves(&self) -> &MoveList {
        &self.candidates
    }

    /// Candidates that survive king safety simulation.
    pub fn legal_moves(&self) -> MoveList {
        self.candidates
            .iter()
            .copied()
            .filter(|move_| self.make_move(*move_).status().is_done())
            .collect()
    }

    /// True iff the king square is a destination of the opponent's
    /// pseudo-legal moves on the current board.
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.in_check && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.in_check && !self.has_escape_moves()
    }

    fn has_escape_moves(&self) -> bool {
        self.candidates
            .iter()
            .any(|move_| self.make_move(*move_).status().is_done())
    }

    /// Attempt a move: reject non-members of the candidate set, then
    /// simulate execution and reject results that leave this player's
    /// king attacked. Rejected transitions keep the prior board.
    pub fn make_move(&self, move_: Move) -> MoveTransition {
        if move_.is_null() || !self.candidates.contains(&move_) {
            return MoveTransition::new(self.board.clone(), move_, MoveStatus::IllegalMove);
        }

        let next = match move_.execute(self.board) {
            Ok(board) => board,
            Err(_) => {
                return MoveTransition::new(self.board.clone(), move_, MoveStatus::IllegalMove)
            }
        };

        let king = next
            .king(self.alliance)
            .expect("the mover's king survives its own move");
        let opponent_moves = next.pseudo_legal_moves(!self.alliance);

        if attacks_on_square(king.square(), &opponent_moves) {
            MoveTransition::new(self.board.clone(), move_, MoveStatus::LeavesPlayerInCheck)
        } else {
            MoveTransition::new(next, move_, MoveStatus::Done)
        }
    }
}

/// Castle moves available to a king, mirrored per alliance.
///
/// Requirements on either wing: unmoved king standing on its home square
/// and not in check, unmoved rook of the same side on its corner, every
/// square strictly between them empty, and the two squares the king
/// crosses or lands on free of opponent attack. On the queen side the
/// b-file square must be empty but may be attacked; the king never
/// touches it.
fn king_castles(board: &Board, king: &Piece, in_check: bool, opponent_moves: &[Move]) -> MoveList {
    let mut castles = MoveList::new();
    let alliance = king.alliance();
    let back = alliance.back_rank();
    let home = Square::from((File::E, back));

    if king.has_moved() || in_check || king.square() != home {
        return castles;
    }

    // King side: f and g empty and unattacked, unmoved rook on h.
    let f = Square::from((File::F, back));
    let g = Square::from((File::G, back));
    let h = Square::from((File::H, back));
    if !board.tile(f).is_occupied() && !board.tile(g).is_occupied() {
        if let Some(rook) = board.tile(h).piece() {
            if rook.kind() == PieceKind::Rook
                && rook.alliance() == alliance
                && !rook.has_moved()
                && !attacks_on_square(f, opponent_moves)
                && !attacks_on_square(g, opponent_moves)
            {
                castles.push(Move::KingSideCastle {
                    piece: *king,
                    to: g,
                    rook,
                    rook_to: f,
                });
            }
        }
    }

    // Queen side: b, c, d empty, c and d unattacked, unmoved rook on a.
    let b = Square::from((File::B, back));
    let c = Square::from((File::C, back));
    let d = Square::from((File::D, back));
    let a = Square::from((File::A, back));
    if !board.tile(b).is_occupied()
        && !board.tile(c).is_occupied()
        && !board.tile(d).is_occupied()
    {
        if let Some(rook) = board.tile(a).piece() {
            if rook.kind() == PieceKind::Rook
                && rook.alliance() == alliance
                && !rook.has_moved()
                && !attacks_on_square(c, opponent_moves)
                && !attacks_on_square(d, opponent_moves)
            {
                castles.push(Move::QueenSideCastle {
                    piece: *king,
                    to: c,
                    rook,
                    rook_to: d,
                });
            }
        }
    }

    castles
}
