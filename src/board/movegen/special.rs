use super::super::{Board, CastleSide, Leg, Move, Piece, PieceKind, Square};

impl Board {
    /// Castling moves for a king on its home square.
    ///
    /// Requires the castling right, the own rook in its corner and every
    /// square between king and rook empty. Attacked squares are the legality
    /// filter's concern.
    pub(crate) fn generate_castles(&self, king: &Piece, moves: &mut Vec<Move>) {
        let rank = king.color.back_rank();
        if king.square != Square::at(rank, 4) {
            return;
        }

        for side in CastleSide::BOTH {
            if !self.castling_rights.has(king.color, side) {
                continue;
            }

            let rook_home = side.rook_home(king.color);
            let rook_in_place = matches!(
                self.piece_at(rook_home),
                Some(p) if p.kind == PieceKind::Rook && p.color == king.color
            );
            if !rook_in_place {
                continue;
            }

            let (low, high) = match side {
                CastleSide::Kingside => (5, 6),
                CastleSide::Queenside => (1, 3),
            };
            if !(low..=high).all(|file| self.is_empty(Square::at(rank, file))) {
                continue;
            }

            moves.push(Move::castle(
                side,
                Leg {
                    from: king.square,
                    to: Square::at(rank, side.king_file()),
                },
                Leg {
                    from: rook_home,
                    to: Square::at(rank, side.rook_file()),
                },
            ));
        }
    }

    /// En passant captures onto the board's en passant target.
    ///
    /// The captured pawn stands beside the capturer, not on the target.
    pub(crate) fn generate_en_passant(&self, pawn: &Piece, moves: &mut Vec<Move>) {
        let Some(target) = self.en_passant_target else {
            return;
        };

        for d_file in [-1, 1] {
            let Some(to) = pawn.square.offset(pawn.color.pawn_direction(), d_file) else {
                continue;
            };
            if to != target {
                continue;
            }
            let Some(beside) = pawn.square.offset(0, d_file) else {
                continue;
            };
            let victim_is_enemy_pawn = matches!(
                self.piece_at(beside),
                Some(p) if p.kind == PieceKind::Pawn && p.color != pawn.color
            );
            if victim_is_enemy_pawn && self.is_empty(to) {
                moves.push(Move::en_passant(pawn.square, to, beside));
            }
        }
    }
}
