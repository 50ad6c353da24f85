//! Fianchetto engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Fianchetto engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the fianchetto engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Square parse string malformed.
    ParseSquareMalformed,
    /// File parse string malformed.
    ParseFileMalformed,
    /// Rank parse string malformed.
    ParseRankMalformed,

    /// A raw board index was outside of 0-63.
    SquareOutOfRange,

    /// The null move sentinel was asked to produce a board.
    NullMoveExecution,

    /// The engine can only record games with a finite static number of moves.
    /// That limit has been exceeded.
    MoveHistoryExceeded,

    /// An illegal move was provided, and could not be applied to some base position.
    GameIllegalMove,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ParseSquareMalformed => "parse square malformed",
            ErrorKind::ParseFileMalformed => "parse file malformed",
            ErrorKind::ParseRankMalformed => "parse rank malformed",

            ErrorKind::SquareOutOfRange => "square index out of range",

            ErrorKind::NullMoveExecution => "null move cannot be executed",

            ErrorKind::MoveHistoryExceeded => "move history exceeded",

            ErrorKind::GameIllegalMove => "game illegal move",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the fianchetto engine.
#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind) => *error_kind,
            Error::Message(error_kind, _) => *error_kind,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_round_trip() {
        let simple = Error::from(ErrorKind::SquareOutOfRange);
        assert_eq!(simple.kind(), ErrorKind::SquareOutOfRange);

        let message = Error::from((ErrorKind::GameIllegalMove, "e2e5"));
        assert_eq!(message.kind(), ErrorKind::GameIllegalMove);
        assert!(message.to_string().contains("e2e5"));
    }
}
