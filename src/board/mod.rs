//! Chess board representation and rules.
//!
//! A [`Board`] is an immutable snapshot of a position. Pieces move according to
//! the declarative templates in the piece catalog; move generation expands
//! them into pseudo-legal moves, and the legality filter rejects any move that
//! leaves the mover's own king attacked. Supports full chess rules including
//! castling, en passant and promotions.
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let board = Board::new();
//! let moves = board.legal_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let e4 = moves.iter().find(|m| m.to_string() == "e2e4").unwrap();
//! let next = board.apply(e4);
//! assert_eq!(
//!     next.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 0"
//! );
//! ```

mod apply;
mod builder;
pub mod catalog;
mod error;
mod fen;
mod movegen;
mod perft;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, SquareError};
pub use state::{Board, STARTING_FEN};
pub use types::{CastleSide, CastlingRights, Color, Leg, Move, Piece, PieceKind, Square};

pub(crate) use types::PROMOTION_PIECES;
