use std::collections::HashMap;

/// Occurrence counts keyed by canonical position key.
#[derive(Clone, Debug, Default)]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
    peak: u32,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self, key: u64) -> u32 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Records one more occurrence of `key` and returns its new count.
    pub(crate) fn increment(&mut self, key: u64) -> u32 {
        let next = self.get(key).saturating_add(1);
        self.counts.insert(key, next);
        self.peak = self.peak.max(next);
        next
    }

    /// Highest count of any position seen so far.
    pub(crate) fn peak(&self) -> u32 {
        self.peak
    }
}
