//! Zobrist hashing for chess positions.
//!
//! Produces the canonical position key used for repetition counting: piece
//! placement, side to move, castling rights and en passant target. Move
//! clocks are not part of the key.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, CastleSide, Color};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_kind][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // castling_keys[color][side] : 0=White, 1=Black; 0=Kingside, 1=Queenside
    pub(crate) castling_keys: [[u64; 2]; 2],
    // en_passant_keys[square_index]
    pub(crate) en_passant_keys: [u64; 64],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 64];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

impl Board {
    /// Canonical position key: equal for positions that count as a repetition.
    #[must_use]
    pub fn position_key(&self) -> u64 {
        let keys = &*ZOBRIST;
        let mut hash: u64 = 0;

        for piece in self.pieces() {
            let squares = &keys.piece_keys[piece.kind.index()][piece.color.index()];
            hash ^= squares[piece.square.as_index()];
        }

        if self.active_color() == Color::Black {
            hash ^= keys.black_to_move_key;
        }

        let rights = self.castling_rights();
        for color in Color::BOTH {
            for (side_idx, side) in CastleSide::BOTH.into_iter().enumerate() {
                if rights.has(color, side) {
                    hash ^= keys.castling_keys[color.index()][side_idx];
                }
            }
        }

        if let Some(ep_square) = self.en_passant_target() {
            hash ^= keys.en_passant_keys[ep_square.as_index()];
        }

        hash
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;

    #[test]
    fn test_key_ignores_clocks() {
        let a = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        let b = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 37 60");
        assert_eq!(a.position_key(), b.position_key());
    }

    #[test]
    fn test_key_distinguishes_side_castling_and_en_passant() {
        let base = Board::from_fen("4k3/8/8/8/4P3/8/8/4K2R b K - 0 1");
        let white = Board::from_fen("4k3/8/8/8/4P3/8/8/4K2R w K - 0 1");
        let no_rights = Board::from_fen("4k3/8/8/8/4P3/8/8/4K2R b - - 0 1");
        let with_ep = Board::from_fen("4k3/8/8/8/4P3/8/8/4K2R b K e3 0 1");
        assert_ne!(base.position_key(), white.position_key());
        assert_ne!(base.position_key(), no_rights.position_key());
        assert_ne!(base.position_key(), with_ep.position_key());
    }

    #[test]
    fn test_key_is_stable_across_transpositions() {
        let start = Board::new();
        let play = |board: &Board, text: &str| {
            let mv = board
                .legal_moves()
                .into_iter()
                .find(|m| m.to_string() == text)
                .unwrap();
            board.apply(&mv)
        };
        let mut board = start.clone();
        for text in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            board = play(&board, text);
        }
        assert_eq!(board.position_key(), start.position_key());
        assert_ne!(board, start);
    }
}
