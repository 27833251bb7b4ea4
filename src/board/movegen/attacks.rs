use super::super::{Board, Color, Piece, Square};

impl Board {
    /// Whether any piece of `attacker` attacks `target`.
    ///
    /// Walks the same catalog templates as move generation, keeping only the
    /// ones that can capture. Pawn diagonals count even onto an empty square;
    /// pushes and special moves never attack. Never consults legality.
    #[must_use]
    pub fn is_attacked(&self, target: Square, attacker: Color) -> bool {
        self.pieces_of(attacker)
            .any(|piece| self.piece_attacks(&piece, target))
    }

    /// Whether `color`'s king is attacked. A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_attacked(king_sq, color.opponent()),
            None => false,
        }
    }

    fn piece_attacks(&self, piece: &Piece, target: Square) -> bool {
        piece
            .move_templates()
            .iter()
            .filter(|t| t.blocking.can_capture())
            .any(|template| {
                template.steps.iter().any(|&(d_rank, d_file)| {
                    let mut current = piece.square;
                    for _ in 0..template.max_repeat {
                        let Some(next) = current.offset(d_rank, d_file) else {
                            return false;
                        };
                        if next == target {
                            return true;
                        }
                        if !self.is_empty(next) {
                            return false;
                        }
                        current = next;
                    }
                    false
                })
            })
    }
}
