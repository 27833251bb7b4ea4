//! Core chess types.
//!
//! This module contains the fundamental value types of the rules engine:
//! - `PieceKind`, `Color` and `Piece` - piece kinds, colors and placed pieces
//! - `Square` - (rank, file) board coordinate
//! - `Move` - one ply, possibly moving two pieces
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Leg, Move};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
