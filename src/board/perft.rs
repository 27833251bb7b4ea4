use super::Board;

impl Board {
    /// Count the leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves.iter().map(|m| self.apply(m).perft(depth - 1)).sum()
    }
}
