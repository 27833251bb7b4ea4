//! Piece catalog: declarative movement rules per piece kind.
//!
//! Each kind is described by one or more [`MoveTemplate`]s. Templates only
//! describe geometry and occupancy; they never look at check status.

use super::{Color, Piece, PieceKind};

/// A (rank, file) increment.
pub type Step = (isize, isize);

/// Repeat limit for sliding pieces; walks stop at the board edge first.
pub const UNBOUNDED: usize = usize::MAX;

const ORTHOGONAL: &[Step] = &[(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: &[Step] = &[(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ALL_DIRECTIONS: &[Step] = &[
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const KNIGHT_JUMPS: &[Step] = &[
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-2, 1),
    (-2, -1),
    (-1, 2),
    (-1, -2),
];
const WHITE_PAWN_PUSH: &[Step] = &[(-1, 0)];
const BLACK_PAWN_PUSH: &[Step] = &[(1, 0)];
const WHITE_PAWN_CAPTURES: &[Step] = &[(-1, 1), (-1, -1)];
const BLACK_PAWN_CAPTURES: &[Step] = &[(1, 1), (1, -1)];

/// Which occupants stop a walk or forbid landing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockingPolicy {
    /// Cannot land on a friendly piece; captures an enemy piece and stops.
    SameColor,
    /// Any occupant blocks; the template never captures.
    AnyPiece,
    /// Lands only on an enemy piece.
    EmptyOrSameColor,
}

impl BlockingPolicy {
    /// Whether a walk with this policy can end on an enemy piece.
    #[inline]
    #[must_use]
    pub const fn can_capture(self) -> bool {
        !matches!(self, BlockingPolicy::AnyPiece)
    }
}

/// Generators run in addition to the geometric walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialMove {
    Castle,
    EnPassant,
}

/// One movement rule of a piece kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveTemplate {
    pub steps: &'static [Step],
    pub max_repeat: usize,
    pub blocking: BlockingPolicy,
    pub specials: &'static [SpecialMove],
    pub promotable: bool,
}

impl MoveTemplate {
    const fn geometric(steps: &'static [Step], max_repeat: usize) -> Self {
        MoveTemplate {
            steps,
            max_repeat,
            blocking: BlockingPolicy::SameColor,
            specials: &[],
            promotable: false,
        }
    }
}

const KNIGHT: [MoveTemplate; 1] = [MoveTemplate::geometric(KNIGHT_JUMPS, 1)];
const BISHOP: [MoveTemplate; 1] = [MoveTemplate::geometric(DIAGONAL, UNBOUNDED)];
const ROOK: [MoveTemplate; 1] = [MoveTemplate::geometric(ORTHOGONAL, UNBOUNDED)];
const QUEEN: [MoveTemplate; 1] = [MoveTemplate::geometric(ALL_DIRECTIONS, UNBOUNDED)];
const KING: [MoveTemplate; 1] = [MoveTemplate {
    specials: &[SpecialMove::Castle],
    ..MoveTemplate::geometric(ALL_DIRECTIONS, 1)
}];

fn pawn_templates(color: Color, push_repeat: usize) -> [MoveTemplate; 2] {
    let (push, captures) = match color {
        Color::White => (WHITE_PAWN_PUSH, WHITE_PAWN_CAPTURES),
        Color::Black => (BLACK_PAWN_PUSH, BLACK_PAWN_CAPTURES),
    };
    [
        MoveTemplate {
            steps: push,
            max_repeat: push_repeat,
            blocking: BlockingPolicy::AnyPiece,
            specials: &[SpecialMove::EnPassant],
            promotable: true,
        },
        MoveTemplate {
            steps: captures,
            max_repeat: 1,
            blocking: BlockingPolicy::EmptyOrSameColor,
            specials: &[],
            promotable: true,
        },
    ]
}

/// Movement templates for a piece kind of the given color.
///
/// Pawns push twice from their starting rank; pass `on_start_rank` for that.
#[must_use]
pub fn templates(kind: PieceKind, color: Color, on_start_rank: bool) -> Vec<MoveTemplate> {
    match kind {
        PieceKind::Pawn => pawn_templates(color, if on_start_rank { 2 } else { 1 }).to_vec(),
        PieceKind::Knight => KNIGHT.to_vec(),
        PieceKind::Bishop => BISHOP.to_vec(),
        PieceKind::Rook => ROOK.to_vec(),
        PieceKind::Queen => QUEEN.to_vec(),
        PieceKind::King => KING.to_vec(),
    }
}

impl Piece {
    /// Movement templates for this piece where it stands.
    #[must_use]
    pub fn move_templates(&self) -> Vec<MoveTemplate> {
        let on_start_rank = self.square.rank() == self.color.pawn_start_rank();
        templates(self.kind, self.color, on_start_rank)
    }
}
