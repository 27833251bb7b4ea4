use super::{Board, CastleSide, Color, Move, Piece, PieceKind};

impl Board {
    /// Apply a move, returning the resulting position. `self` is unchanged.
    ///
    /// # Panics
    /// Panics if the move does not fit the position: a leg starting on an
    /// empty square or on a piece of the side not to move, or a capture of a
    /// missing or friendly piece. Moves produced by the generator never do.
    #[must_use]
    pub fn apply(&self, mv: &Move) -> Board {
        let mover = self.active;
        let mut next = self.clone();

        if let Some(captured_sq) = mv.captured() {
            match next.take(captured_sq) {
                Some(victim) if victim.color != mover => {}
                Some(_) => panic!("move {mv} captures a friendly piece on {captured_sq}"),
                None => panic!("move {mv} captures on empty square {captured_sq}"),
            }
        }

        let mut pawn_moved = false;
        let mut double_push_over = None;
        for leg in mv.legs() {
            let piece = match next.take(leg.from) {
                Some(p) if p.color == mover => p,
                Some(p) => panic!("move {mv} moves a {} piece out of turn", p.color),
                None => panic!("move {mv} starts on empty square {}", leg.from),
            };

            if piece.kind == PieceKind::Pawn {
                pawn_moved = true;
                if leg.from.rank().abs_diff(leg.to.rank()) == 2 {
                    double_push_over = leg.from.offset(mover.pawn_direction(), 0);
                }
            }
            if piece.kind == PieceKind::King {
                next.castling_rights.remove(mover, CastleSide::Kingside);
                next.castling_rights.remove(mover, CastleSide::Queenside);
            }

            let placed = match mv.promotion() {
                Some(kind) => Piece::new(kind, mover, leg.to),
                None => piece.moved_to(leg.to),
            };
            next.put(placed);
        }

        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                let home = side.rook_home(color);
                let rook_left = color == mover && mv.legs().any(|leg| leg.from == home);
                let rook_taken = color != mover && mv.captured() == Some(home);
                if rook_left || rook_taken {
                    next.castling_rights.remove(color, side);
                }
            }
        }

        next.en_passant_target = double_push_over;
        next.halfmove_clock = if pawn_moved || mv.is_capture() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if mover == Color::Black {
            next.fullmove_number += 1;
        }
        next.active = mover.opponent();
        next
    }
}
