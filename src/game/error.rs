//! Error types for game operations.

use std::fmt;

use super::Outcome;
use crate::board::FenError;

/// Error type for rejected moves. The game is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Text is not `0-0`, `0-0-0` or `<from><to>[promotion]`
    InvalidNotation { notation: String },
    /// Well-formed move that is not legal in the current position
    IllegalMove { notation: String },
    /// The game has already ended
    GameOver { outcome: Outcome },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidNotation { notation } => {
                write!(f, "Cannot parse move '{notation}'")
            }
            MoveError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
            MoveError::GameOver { outcome } => {
                write!(f, "Game is over: {outcome}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for rebuilding a game from a [`GameRecord`](super::GameRecord)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A stored FEN does not parse
    Fen(FenError),
    /// A stored move does not replay
    Move(MoveError),
    /// Replaying the moves does not reach the stored position
    FenMismatch { stored: String, replayed: String },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Fen(err) => write!(f, "Invalid record position: {err}"),
            RecordError::Move(err) => write!(f, "Invalid record move: {err}"),
            RecordError::FenMismatch { stored, replayed } => {
                write!(
                    f,
                    "Record position '{stored}' does not match replay '{replayed}'"
                )
            }
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Fen(err) => Some(err),
            RecordError::Move(err) => Some(err),
            RecordError::FenMismatch { .. } => None,
        }
    }
}

impl From<FenError> for RecordError {
    fn from(err: FenError) -> Self {
        RecordError::Fen(err)
    }
}

impl From<MoveError> for RecordError {
    fn from(err: MoveError) -> Self {
        RecordError::Move(err)
    }
}
