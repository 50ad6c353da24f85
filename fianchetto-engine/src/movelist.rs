//! Bounded list types used across the engine.
//!
//! Move generation and piece bookkeeping have small, known maximum sizes,
//! so fixed-capacity vectors avoid heap traffic on the hot paths.

use arrayvec::ArrayVec;

use crate::coretypes::{MAX_HISTORY, MAX_MOVES, MAX_PIECES_PER_SIDE};
use crate::moves::Move;
use crate::pieces::Piece;

/// MoveList holds at most `MAX_MOVES`, the most moves of any chess position.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// PieceList holds one side's active pieces.
pub type PieceList = ArrayVec<Piece, MAX_PIECES_PER_SIDE>;

/// MoveHistory is the sequence of moves applied over a recorded game.
pub type MoveHistory = ArrayVec<Move, MAX_HISTORY>;
