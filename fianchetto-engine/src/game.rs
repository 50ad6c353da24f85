//! Game structure.
//!
//! A Game holds the base position it started from, the sequence of moves
//! that were played, and the current position. Because boards are
//! immutable values, undo is a replay of the recorded history from the
//! base board.

use crate::board::Board;
use crate::coretypes::Square;
use crate::error::{self, ErrorKind};
use crate::movelist::MoveHistory;
use crate::moves::{self, Move};
use crate::player::MoveStatus;

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    base_board: Board,
    history: MoveHistory,
    board: Board,
}

impl Game {
    /// Begin a game from an arbitrary base position.
    pub fn new(base_board: Board) -> Self {
        let board = base_board.clone();
        Game {
            base_board,
            history: MoveHistory::new(),
            board,
        }
    }

    /// Begin a game in the standard chess start position.
    pub fn start_position() -> Self {
        Self::new(Board::start_position())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Resolve a coordinate pair through the move factory and apply it
    /// for the side to move. The board advances only on success.
    pub fn make_move(&mut self, from: Square, to: Square) -> error::Result<()> {
        let move_ = moves::create_move(&self.board, from, to);
        if move_.is_null() {
            return Err((
                ErrorKind::GameIllegalMove,
                format!("no playable move from {from} to {to}"),
            )
                .into());
        }

        let transition = self.board.current_player().make_move(move_);
        match transition.status() {
            MoveStatus::Done => {
                self.history.try_push(move_).map_err(|_| {
                    error::Error::from((
                        ErrorKind::MoveHistoryExceeded,
                        "game exceeded the maximum recorded moves",
                    ))
                })?;
                self.board = transition.into_board();
                Ok(())
            }
            MoveStatus::IllegalMove => Err((
                ErrorKind::GameIllegalMove,
                format!("{move_} is not legal here"),
            )
                .into()),
            MoveStatus::LeavesPlayerInCheck => Err((
                ErrorKind::GameIllegalMove,
                format!(
                    "{move_} would leave the {} king in check",
                    self.board.side_to_move().name()
                ),
            )
                .into()),
        }
    }

    /// Take back the most recent move by replaying the remaining history
    /// from the base board. Returns the undone move, if any.
    pub fn undo_move(&mut self) -> Option<Move> {
        let undone = self.history.pop()?;

        let mut board = self.base_board.clone();
        for move_ in &self.history {
            let transition = board.current_player().make_move(*move_);
            board = transition.into_board();
        }
        self.board = board;

        Some(undone)
    }
}

/// A fresh game from the standard start position.
impl Default for Game {
    fn default() -> Self {
        Self::start_position()
    }
}
