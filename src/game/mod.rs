//! Game state machine.
//!
//! A [`Game`] owns the current [`Board`], the applied moves, and how often each
//! position has occurred. Moves arrive as text (`e2e4`, `a7a8Q`, `0-0`) and are
//! resolved against the legal moves of the current position before anything
//! changes. Once checkmate, stalemate or an automatic draw is reached every
//! further move is refused.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, Outcome};
//! use chess_rules::Color;
//!
//! let mut game = Game::new();
//! game.make_moves(["f2f3", "e7e5", "g2g4", "d8h4"]).unwrap();
//! assert!(game.is_checkmate());
//! assert_eq!(game.outcome(), Outcome::Checkmate { winner: Color::Black });
//! assert!(game.make_move("e1f2").is_err());
//! ```

mod error;
mod notation;
mod outcome;
mod record;
mod repetition;

pub use error::{MoveError, RecordError};
pub use notation::Notation;
pub use outcome::{
    DrawReason, Outcome, FIFTY_MOVE_PLIES, FIVEFOLD, SEVENTY_FIVE_MOVE_PLIES, THREEFOLD,
};
pub use record::GameRecord;

use repetition::RepetitionTable;

use crate::board::{Board, Color, FenError, Move, Piece, Square};

/// A chess game from a starting position to its outcome.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    starting_board: Board,
    history: Vec<Move>,
    repetitions: RepetitionTable,
}

impl Game {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// A game starting from a FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Board::try_from_fen(fen).map(Self::from_board)
    }

    /// A game starting from `board`. The starting position counts as the
    /// first occurrence for repetition purposes.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let mut repetitions = RepetitionTable::new();
        repetitions.increment(board.position_key());
        Game {
            starting_board: board.clone(),
            board,
            history: Vec::new(),
            repetitions,
        }
    }

    /// Rebuild a game from a record.
    ///
    /// With `replay` the game restarts from `starting_fen` and replays every
    /// stored move, restoring history and repetition counts. The replay must
    /// end on the position stored in `fen`. Without it only `fen` is loaded.
    ///
    /// # Errors
    /// [`RecordError::Fen`] for an unparsable FEN, [`RecordError::Move`] for a
    /// move that does not replay, and [`RecordError::FenMismatch`] when the
    /// replay ends somewhere other than `fen`.
    pub fn from_record(record: &GameRecord, replay: bool) -> Result<Self, RecordError> {
        let stored = Board::try_from_fen(&record.fen)?;
        if !replay {
            return Ok(Self::from_board(stored));
        }

        let mut game = Self::from_fen(&record.starting_fen)?;
        game.make_moves(&record.moves)?;

        #[cfg(feature = "logging")]
        log::debug!(
            "replayed {} moves from {}",
            record.moves.len(),
            record.starting_fen
        );

        if game.board != stored {
            return Err(RecordError::FenMismatch {
                stored: record.fen.clone(),
                replayed: game.board_as_fen(),
            });
        }

        Ok(game)
    }

    /// Snapshot of this game for persistence.
    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord {
            starting_fen: self.starting_fen(),
            moves: self.history_notation(),
            fen: self.board_as_fen(),
        }
    }

    /// Play one move given in text notation.
    ///
    /// # Errors
    /// [`MoveError::InvalidNotation`] for unparsable text,
    /// [`MoveError::GameOver`] once the game has ended, and
    /// [`MoveError::IllegalMove`] when no legal move matches. The game is left
    /// unchanged on error.
    pub fn make_move(&mut self, notation: &str) -> Result<Move, MoveError> {
        let mv = self.resolve(notation)?;

        self.board = self.board.apply(&mv);
        self.history.push(mv);
        self.repetitions.increment(self.board.position_key());

        #[cfg(feature = "logging")]
        {
            let mover = self.current_player().opponent();
            log::debug!("{mover} played {mv}: {}", self.board.to_fen());
            let outcome = self.outcome();
            if outcome.is_terminal() {
                log::info!("game over after {} plies: {outcome}", self.history.len());
            }
        }

        Ok(mv)
    }

    /// Play moves in order, stopping at the first failure. Moves before the
    /// failing one stay applied.
    pub fn make_moves<I, S>(&mut self, moves: I) -> Result<Vec<Move>, MoveError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        moves
            .into_iter()
            .map(|notation| self.make_move(notation.as_ref()))
            .collect()
    }

    /// Whether `make_move(notation)` would succeed.
    #[must_use]
    pub fn is_valid_move(&self, notation: &str) -> bool {
        self.resolve(notation).is_ok()
    }

    fn resolve(&self, text: &str) -> Result<Move, MoveError> {
        let notation: Notation = match text.parse() {
            Ok(notation) => notation,
            Err(err) => {
                #[cfg(feature = "logging")]
                log::trace!("rejected notation '{text}'");
                return Err(err);
            }
        };

        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(MoveError::GameOver { outcome });
        }

        let found = match notation {
            Notation::Castle(side) => self
                .board
                .find_king(self.current_player())
                .map(|king| self.board.legal_moves_from(king))
                .unwrap_or_default()
                .into_iter()
                .find(|mv| mv.castle_side() == Some(side)),
            Notation::Coordinate { from, .. } => {
                let canonical = notation.to_string();
                self.board
                    .legal_moves_from(from)
                    .into_iter()
                    .find(|mv| mv.to_string() == canonical)
            }
        };

        found.ok_or_else(|| MoveError::IllegalMove {
            notation: text.to_string(),
        })
    }

    /// Legal moves of the current player's piece on `sq`.
    #[must_use]
    pub fn legal_moves_at(&self, sq: Square) -> Vec<Move> {
        self.board.legal_moves_from(sq)
    }

    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves()
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.board.active_color()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn board_as_fen(&self) -> String {
        self.board.to_fen()
    }

    /// Squares indexed `[rank][file]`, rank 0 being rank 8.
    #[must_use]
    pub fn board_as_grid(&self) -> [[Option<Piece>; 8]; 8] {
        self.board.grid()
    }

    #[must_use]
    pub fn starting_fen(&self) -> String {
        self.starting_board.to_fen()
    }

    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn history_notation(&self) -> Vec<String> {
        self.history.iter().map(Move::to_string).collect()
    }

    /// Whether the current player's king is attacked.
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.board.is_in_check(self.current_player())
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.board.is_checkmate()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.board.is_stalemate()
    }

    /// How often the current position has occurred.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.get(self.board.position_key())
    }

    /// Some position occurred at least three times. A draw may be claimed
    /// but the game goes on.
    #[must_use]
    pub fn is_threefold(&self) -> bool {
        self.repetitions.peak() >= THREEFOLD
    }

    #[must_use]
    pub fn is_fivefold(&self) -> bool {
        self.repetitions.peak() >= FIVEFOLD
    }

    /// A draw may be claimed under the fifty-move rule.
    #[must_use]
    pub fn is_fifty_move(&self) -> bool {
        self.board.halfmove_clock() >= FIFTY_MOVE_PLIES
    }

    #[must_use]
    pub fn is_seventy_five_move(&self) -> bool {
        self.board.halfmove_clock() >= SEVENTY_FIVE_MOVE_PLIES
    }

    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        self.board.is_insufficient_material()
    }

    /// Automatic draws only; checkmate takes precedence.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    #[must_use]
    pub fn draw_reason(&self) -> Option<DrawReason> {
        self.outcome().draw_reason()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Current state of the game.
    ///
    /// Positions without legal moves are decided first. Otherwise automatic
    /// draws are checked in order: fivefold repetition, insufficient
    /// material, seventy-five move rule.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if !self.board.has_legal_moves() {
            return if self.is_check() {
                Outcome::Checkmate {
                    winner: self.current_player().opponent(),
                }
            } else {
                Outcome::Stalemate
            };
        }

        if self.is_fivefold() {
            Outcome::Draw(DrawReason::FivefoldRepetition)
        } else if self.is_insufficient_material() {
            Outcome::Draw(DrawReason::InsufficientMaterial)
        } else if self.is_seventy_five_move() {
            Outcome::Draw(DrawReason::SeventyFiveMoveRule)
        } else {
            Outcome::InProgress
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Board> for Game {
    fn from(board: Board) -> Self {
        Self::from_board(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, STARTING_FEN};

    const SHUFFLE: [&str; 4] = ["b1c3", "b8c6", "c3b1", "c6b8"];

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.board_as_fen(), STARTING_FEN);
        assert_eq!(game.starting_fen(), STARTING_FEN);
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.all_legal_moves().len(), 20);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.repetition_count(), 1);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_make_move_updates_state() {
        let mut game = Game::new();
        let mv = game.make_move("e2e4").unwrap();
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.history_notation(), vec!["e2e4"]);
        assert_eq!(
            game.board_as_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 0"
        );
    }

    #[test]
    fn test_notation_is_case_insensitive() {
        let mut game = Game::new();
        assert!(game.make_move("G1F3").is_ok());
        assert!(game.make_move("  g8f6 ").is_ok());
    }

    #[test]
    fn test_rejections_leave_game_untouched() {
        let mut game = Game::new();
        let before = game.board_as_fen();

        assert!(matches!(
            game.make_move("hello"),
            Err(MoveError::InvalidNotation { .. })
        ));
        assert!(matches!(
            game.make_move("e2e5"),
            Err(MoveError::IllegalMove { .. })
        ));
        assert!(matches!(
            game.make_move("e7e5"),
            Err(MoveError::IllegalMove { .. })
        ));
        assert!(matches!(
            game.make_move("0-0"),
            Err(MoveError::IllegalMove { .. })
        ));

        assert_eq!(game.board_as_fen(), before);
        assert!(game.history().is_empty());
        assert_eq!(game.repetition_count(), 1);
    }

    #[test]
    fn test_is_valid_move_is_a_dry_run() {
        let game = Game::new();
        assert!(game.is_valid_move("e2e4"));
        assert!(!game.is_valid_move("e2e5"));
        assert!(!game.is_valid_move("xx"));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_fools_mate() {
        let mut game = Game::new();
        game.make_moves(["f2f3", "e7e5", "g2g4", "d8h4"]).unwrap();
        assert!(game.is_check());
        assert!(game.is_checkmate());
        assert!(!game.is_stalemate());
        assert!(!game.is_draw());
        assert_eq!(
            game.outcome(),
            Outcome::Checkmate {
                winner: Color::Black
            }
        );
        assert!(matches!(
            game.make_move("a2a3"),
            Err(MoveError::GameOver { .. })
        ));
    }

    #[test]
    fn test_make_moves_stops_at_first_error() {
        let mut game = Game::new();
        let result = game.make_moves(["e2e4", "e7e5", "e4e5", "d7d5"]);
        assert!(matches!(result, Err(MoveError::IllegalMove { .. })));
        assert_eq!(game.history_notation(), vec!["e2e4", "e7e5"]);
    }

    #[test]
    fn test_threefold_then_fivefold() {
        let mut game = Game::new();
        game.make_moves(SHUFFLE).unwrap();
        assert_eq!(game.repetition_count(), 2);
        assert!(!game.is_threefold());

        game.make_moves(SHUFFLE).unwrap();
        assert!(game.is_threefold());
        assert!(!game.is_draw());

        game.make_moves(SHUFFLE).unwrap();
        game.make_moves(SHUFFLE).unwrap();
        assert_eq!(game.repetition_count(), 5);
        assert!(game.is_fivefold());
        assert_eq!(game.draw_reason(), Some(DrawReason::FivefoldRepetition));
        assert!(matches!(
            game.make_move("e2e4"),
            Err(MoveError::GameOver { .. })
        ));
    }

    #[test]
    fn test_record_replay_restores_repetitions() {
        let mut game = Game::new();
        game.make_moves(SHUFFLE).unwrap();
        game.make_moves(SHUFFLE).unwrap();

        let record = game.record();
        assert_eq!(record.starting_fen, STARTING_FEN);
        assert_eq!(record.moves.len(), 8);

        let replayed = Game::from_record(&record, true).unwrap();
        assert_eq!(replayed.board_as_fen(), game.board_as_fen());
        assert_eq!(replayed.history(), game.history());
        assert!(replayed.is_threefold());

        let loaded = Game::from_record(&record, false).unwrap();
        assert_eq!(loaded.board_as_fen(), game.board_as_fen());
        assert!(loaded.history().is_empty());
        assert!(!loaded.is_threefold());
    }

    #[test]
    fn test_record_errors() {
        let bad_fen = GameRecord {
            starting_fen: "not a fen".to_string(),
            moves: Vec::new(),
            fen: "not a fen".to_string(),
        };
        assert!(matches!(
            Game::from_record(&bad_fen, true),
            Err(RecordError::Fen(_))
        ));
        assert!(matches!(
            Game::from_record(&bad_fen, false),
            Err(RecordError::Fen(_))
        ));

        let bad_move = GameRecord {
            starting_fen: STARTING_FEN.to_string(),
            moves: vec!["e2e4".to_string(), "e2e4".to_string()],
            fen: STARTING_FEN.to_string(),
        };
        assert!(matches!(
            Game::from_record(&bad_move, true),
            Err(RecordError::Move(MoveError::IllegalMove { .. }))
        ));
    }

    #[test]
    fn test_record_replay_must_reach_stored_position() {
        let corrupt = GameRecord {
            starting_fen: STARTING_FEN.to_string(),
            moves: vec!["e2e4".to_string()],
            fen: "8/8/8/8/8/8/8/K6k w - - 0 1".to_string(),
        };
        match Game::from_record(&corrupt, true) {
            Err(RecordError::FenMismatch { stored, replayed }) => {
                assert_eq!(stored, corrupt.fen);
                assert_eq!(
                    replayed,
                    "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 0"
                );
            }
            other => panic!("expected a position mismatch, got {other:?}"),
        }

        let loaded = Game::from_record(&corrupt, false).unwrap();
        assert_eq!(loaded.board_as_fen(), corrupt.fen);
    }

    #[test]
    fn test_grid_matches_board() {
        let game = Game::new();
        let grid = game.board_as_grid();
        let white_king = grid[7][4].unwrap();
        assert_eq!(white_king.kind, PieceKind::King);
        assert_eq!(white_king.color, Color::White);
        assert!(grid[4][4].is_none());
    }
}
