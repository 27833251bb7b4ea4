use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastlingRights, Color, Piece, PieceKind, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Exactly six fields separated by single spaces are required. Returns an
    /// error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split(' ').collect();
        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut board = Board::empty();

        // Parse piece placement
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run @ 1..=8) = c.to_digit(10) {
                    file += run as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(FenError::RankLength {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                board.put(Piece::new(kind, color, Square::at(rank_idx, file)));
                file += 1;
            }
            if file != 8 {
                return Err(FenError::RankLength {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        // Parse side to move
        board.active = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights
        board.castling_rights = parse_castling(parts[2])?;

        // Parse en passant target
        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?,
            )
        };

        board.halfmove_clock = parse_clock(parts[4], "halfmove clock")?;
        board.fullmove_number = parse_clock(parts[5], "fullmove number")?;
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in 0..8 {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some(piece) = self.piece_at(Square::at(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.letter());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.active {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let invalid = || FenError::InvalidCastling {
        found: field.to_string(),
    };
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let (color, side) = CastlingRights::from_fen_char(c).ok_or_else(invalid)?;
        if rights.has(color, side) {
            return Err(invalid());
        }
        rights.set(color, side);
    }
    Ok(rights)
}

fn parse_clock(field: &str, name: &'static str) -> Result<u32, FenError> {
    // u32 parsing accepts a leading '+', which is not valid FEN.
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FenError::InvalidClock {
            field: name,
            found: field.to_string(),
        });
    }
    field.parse().map_err(|_| FenError::InvalidClock {
        field: name,
        found: field.to_string(),
    })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
