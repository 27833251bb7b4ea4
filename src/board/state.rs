use super::{CastlingRights, Color, Piece, PieceKind, Square};

/// Standard starting position, with the fullmove number starting at 0.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0";

/// An immutable chess position.
///
/// Holds piece placement, side to move, castling rights, the en passant
/// target and both move clocks. The only way to get a different position is
/// [`Board::apply`], which returns a new `Board`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) active: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.into_iter().enumerate() {
            let (black_pawn, white_pawn) = (Square::at(1, file), Square::at(6, file));
            board.put(Piece::new(kind, Color::Black, Square::at(0, file)));
            board.put(Piece::new(PieceKind::Pawn, Color::Black, black_pawn));
            board.put(Piece::new(PieceKind::Pawn, Color::White, white_pawn));
            board.put(Piece::new(kind, Color::White, Square::at(7, file)));
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            active: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 0,
        }
    }

    /// Place a piece on its own square, replacing any occupant.
    pub(crate) fn put(&mut self, piece: Piece) {
        self.squares[piece.square.as_index()] = Some(piece);
    }

    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.as_index()].take()
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.as_index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.as_index()].is_none()
    }

    /// All pieces on the board, in a8..h1 order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().copied()
    }

    /// Pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.square)
    }

    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Piece placement as an 8x8 grid indexed `[rank][file]`, rank 0 on top.
    #[must_use]
    pub fn grid(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for piece in self.pieces() {
            grid[piece.square.rank()][piece.square.file()] = Some(piece);
        }
        grid
    }

    /// Whether neither side can possibly deliver mate.
    ///
    /// True when no pawns, rooks or queens remain and either at most one minor
    /// piece is left or every remaining minor is a bishop on one square color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = Vec::new();
        for piece in self.pieces() {
            match piece.kind {
                PieceKind::King => {}
                kind if kind.is_minor() => minors.push(piece),
                _ => return false,
            }
        }

        if minors.len() <= 1 {
            return true;
        }

        minors.iter().all(|p| p.kind == PieceKind::Bishop)
            && bishops_all_same_color(minors.iter().map(|p| p.square))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

fn bishops_all_same_color(mut squares: impl Iterator<Item = Square>) -> bool {
    match squares.next() {
        Some(first) => squares.all(|sq| sq.is_light() == first.is_light()),
        None => true,
    }
}
