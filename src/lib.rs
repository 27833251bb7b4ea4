pub mod board;
pub mod game;
mod zobrist;

pub use board::{Board, Color, Move, Piece, PieceKind, Square};
pub use game::{Game, MoveError, Outcome};
