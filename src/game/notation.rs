//! Player move notation.
//!
//! `0-0` and `0-0-0` castle; anything else is a from square, a to square and
//! an optional promotion letter (`e2e4`, `a7a8Q`). Letters are case-insensitive.

use std::fmt;
use std::str::FromStr;

use super::MoveError;
use crate::board::{CastleSide, PieceKind, Square, PROMOTION_PIECES};

/// A parsed, not yet resolved, move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    Castle(CastleSide),
    Coordinate {
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
}

impl FromStr for Notation {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || MoveError::InvalidNotation {
            notation: s.to_string(),
        };

        match text {
            "0-0" => return Ok(Notation::Castle(CastleSide::Kingside)),
            "0-0-0" => return Ok(Notation::Castle(CastleSide::Queenside)),
            _ => {}
        }

        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(invalid());
        }

        let from = text[0..2].parse::<Square>().map_err(|_| invalid())?;
        let to = text[2..4].parse::<Square>().map_err(|_| invalid())?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if PROMOTION_PIECES.contains(&kind) => Some(kind),
                _ => return Err(invalid()),
            },
        };

        Ok(Notation::Coordinate {
            from,
            to,
            promotion,
        })
    }
}

/// Canonical text, identical to the `Display` form of the matching `Move`.
impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Castle(side) => write!(f, "{}", side.notation()),
            Notation::Coordinate {
                from,
                to,
                promotion,
            } => {
                write!(f, "{from}{to}")?;
                if let Some(kind) = promotion {
                    write!(f, "{}", kind.to_char().to_ascii_uppercase())?;
                }
                Ok(())
            }
        }
    }
}
