//! Move generation.
//!
//! Pseudo-legal moves come from walking each piece's catalog templates and
//! running the templates' special generators. The legality filter then drops
//! every move that leaves the mover's king attacked.

mod attacks;
mod special;

use super::catalog::{BlockingPolicy, MoveTemplate, SpecialMove};
use super::{Board, Move, Piece, Square, PROMOTION_PIECES};

impl Board {
    /// Pseudo-legal moves of one piece: geometry and occupancy only.
    #[must_use]
    pub fn pseudo_legal_moves(&self, piece: &Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        for template in piece.move_templates() {
            for &(d_rank, d_file) in template.steps {
                self.walk_step(piece, &template, d_rank, d_file, &mut moves);
            }
            for special in template.specials {
                match special {
                    SpecialMove::Castle => self.generate_castles(piece, &mut moves),
                    SpecialMove::EnPassant => self.generate_en_passant(piece, &mut moves),
                }
            }
        }
        moves
    }

    /// Pseudo-legal moves of every piece of the side to move.
    #[must_use]
    pub fn all_pseudo_legal_moves(&self) -> Vec<Move> {
        self.pieces_of(self.active)
            .flat_map(|piece| self.pseudo_legal_moves(&piece))
            .collect()
    }

    /// Whether a pseudo-legal move keeps the mover's king safe.
    ///
    /// Castling additionally requires the king not to start, pass through or
    /// land on an attacked square.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        let mover = self.active;
        let attacker = mover.opponent();

        if let Some(side) = mv.castle_side() {
            let rank = mv.from().rank();
            let (start, end) = (mv.from().file(), side.king_file());
            let path = if start < end {
                start..=end
            } else {
                end..=start
            };
            if path
                .map(|file| Square::at(rank, file))
                .any(|sq| self.is_attacked(sq, attacker))
            {
                return false;
            }
        }

        !self.apply(mv).is_in_check(mover)
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.all_pseudo_legal_moves()
            .into_iter()
            .filter(|mv| self.is_legal(mv))
            .collect()
    }

    /// Legal moves of the active side's piece on `sq`; empty for an empty
    /// square or an opponent piece.
    #[must_use]
    pub fn legal_moves_from(&self, sq: Square) -> Vec<Move> {
        match self.piece_at(sq) {
            Some(piece) if piece.color == self.active => self
                .pseudo_legal_moves(&piece)
                .into_iter()
                .filter(|mv| self.is_legal(mv))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Whether the side to move has at least one legal move.
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.all_pseudo_legal_moves()
            .iter()
            .any(|mv| self.is_legal(mv))
    }

    /// Whether the side to move is in check with no legal move.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.active) && !self.has_legal_moves()
    }

    /// Whether the side to move is not in check but has no legal move.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.active) && !self.has_legal_moves()
    }

    fn walk_step(
        &self,
        piece: &Piece,
        template: &MoveTemplate,
        d_rank: isize,
        d_file: isize,
        moves: &mut Vec<Move>,
    ) {
        let from = piece.square;
        let mut current = from;
        for _ in 0..template.max_repeat {
            let Some(to) = current.offset(d_rank, d_file) else {
                break;
            };
            current = to;

            let occupant = self.piece_at(to);
            let blocked = match (template.blocking, occupant) {
                (_, Some(other)) if other.color == piece.color => true,
                (BlockingPolicy::AnyPiece, Some(_)) => true,
                (BlockingPolicy::EmptyOrSameColor, None) => true,
                _ => false,
            };
            if blocked {
                break;
            }

            let captured = occupant.map(|_| to);
            if template.promotable && to.rank() == piece.color.pawn_promotion_rank() {
                for promo in PROMOTION_PIECES {
                    moves.push(Move::promotion_to(from, to, captured, promo));
                }
            } else {
                moves.push(Move::new(from, to, captured));
            }

            if occupant.is_some() {
                break;
            }
        }
    }
}
