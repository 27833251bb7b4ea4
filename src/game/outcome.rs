//! Game outcome types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Color;

/// Same position this many times: a draw may be claimed.
pub const THREEFOLD: u32 = 3;
/// Same position this many times: the game is drawn.
pub const FIVEFOLD: u32 = 5;
/// Plies without a capture or pawn move before a draw may be claimed.
pub const FIFTY_MOVE_PLIES: u32 = 100;
/// Plies without a capture or pawn move before the game is drawn.
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Why a game ended drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// The same position occurred five times.
    FivefoldRepetition,
    /// Neither side has enough material to mate.
    InsufficientMaterial,
    /// 75 moves by each side without a capture or pawn move.
    SeventyFiveMoveRule,
}

impl DrawReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::FivefoldRepetition => "fivefold repetition",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::SeventyFiveMoveRule => "seventy-five move rule",
        }
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a game. Every variant except `InProgress` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The draw reason, counting stalemate as a draw.
    #[must_use]
    pub const fn draw_reason(self) -> Option<DrawReason> {
        match self {
            Outcome::Stalemate => Some(DrawReason::Stalemate),
            Outcome::Draw(reason) => Some(reason),
            Outcome::InProgress | Outcome::Checkmate { .. } => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            Outcome::Stalemate => write!(f, "draw by stalemate"),
            Outcome::Draw(reason) => write!(f, "draw by {reason}"),
        }
    }
}
