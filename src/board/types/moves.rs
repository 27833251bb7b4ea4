//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::PieceKind;
use super::square::Square;

/// One piece relocation inside a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Leg {
    pub from: Square,
    pub to: Square,
}

/// A single ply.
///
/// A move relocates one piece, or two for castling (king first, then rook).
/// `captured` names the square whose occupant is removed; it differs from the
/// destination only for en passant. Moves hold no reference to a board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    leg: Leg,
    rook_leg: Option<Leg>,
    captured: Option<Square>,
    promotion: Option<PieceKind>,
    castle: Option<CastleSide>,
}

impl Move {
    /// A plain move, capturing on `to` when `captured` is set.
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, captured: Option<Square>) -> Self {
        Move {
            leg: Leg { from, to },
            rook_leg: None,
            captured,
            promotion: None,
            castle: None,
        }
    }

    /// A pawn move that promotes on arrival.
    #[inline]
    #[must_use]
    pub const fn promotion_to(
        from: Square,
        to: Square,
        captured: Option<Square>,
        piece: PieceKind,
    ) -> Self {
        Move {
            promotion: Some(piece),
            ..Move::new(from, to, captured)
        }
    }

    /// An en passant capture; the captured pawn stands beside the mover.
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square, captured: Square) -> Self {
        Move::new(from, to, Some(captured))
    }

    /// A castle: king and rook move together.
    #[inline]
    #[must_use]
    pub const fn castle(side: CastleSide, king: Leg, rook: Leg) -> Self {
        Move {
            leg: king,
            rook_leg: Some(rook),
            captured: None,
            promotion: None,
            castle: Some(side),
        }
    }

    /// Get the source square of the primary piece
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.leg.from
    }

    /// Get the destination square of the primary piece
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.leg.to
    }

    /// All piece relocations, primary first.
    pub fn legs(&self) -> impl Iterator<Item = Leg> {
        std::iter::once(self.leg).chain(self.rook_leg)
    }

    /// Square whose occupant this move removes
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<Square> {
        self.captured
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.captured, Some(sq) if sq != self.leg.to)
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    /// The castle side, if this move is castling
    #[inline]
    #[must_use]
    pub const fn castle_side(&self) -> Option<CastleSide> {
        self.castle
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.castle.is_some()
    }
}

/// Move notation: `0-0`, `0-0-0`, or from/to squares with an optional
/// uppercase promotion letter (`e2e4`, `a7a8Q`).
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(side) = self.castle {
            return write!(f, "{}", side.notation());
        }
        write!(f, "{}{}", self.leg.from, self.leg.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_plain_and_promotion() {
        assert_eq!(Move::new(sq("e2"), sq("e4"), None).to_string(), "e2e4");
        let promo = Move::promotion_to(sq("a7"), sq("a8"), None, PieceKind::Queen);
        assert_eq!(promo.to_string(), "a7a8Q");
    }

    #[test]
    fn test_display_castles() {
        let ks = Move::castle(
            CastleSide::Kingside,
            Leg {
                from: sq("e1"),
                to: sq("g1"),
            },
            Leg {
                from: sq("h1"),
                to: sq("f1"),
            },
        );
        assert_eq!(ks.to_string(), "0-0");
        assert_eq!(ks.legs().count(), 2);
        assert!(!ks.is_capture());
    }

    #[test]
    fn test_en_passant_captures_beside_destination() {
        let mv = Move::en_passant(sq("b6"), sq("a7"), sq("a6"));
        assert!(mv.is_en_passant());
        assert!(mv.is_capture());
        assert_eq!(mv.captured(), Some(sq("a6")));
        assert_eq!(mv.to_string(), "b6a7");

        let plain = Move::new(sq("b6"), sq("a7"), Some(sq("a7")));
        assert!(!plain.is_en_passant());
    }
}
