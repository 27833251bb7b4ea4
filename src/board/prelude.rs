//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut game = Game::new();
//! game.make_move("e2e4").unwrap();
//! assert_eq!(game.current_player(), Color::Black);
//! ```

pub use super::{
    Board, BoardBuilder, CastleSide, CastlingRights, Color, FenError, Move, Piece, PieceKind,
    Square, SquareError,
};
pub use crate::game::{DrawReason, Game, GameRecord, MoveError, Outcome};
