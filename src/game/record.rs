#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Persistable snapshot of a game.
///
/// `starting_fen` plus `moves` rebuilds the game exactly, repetition history
/// included; `fen` alone restores only the current position.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameRecord {
    pub starting_fen: String,
    pub moves: Vec<String>,
    pub fen: String,
}
