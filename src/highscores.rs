//! Score ledger and ranked run history
//!
//! The ledger accrues the live score each Playing tick and, when a run
//! ends, commits the truncated value into a ranked in-memory history. The
//! history spans restarts within one process; the backing store is
//! released exactly once when the session shuts down.

use serde::{Deserialize, Serialize};

/// Ranked multiset of committed scores, best first
///
/// Ties sit next to each other in unspecified relative order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreStore {
    entries: Vec<u64>,
}

impl ScoreStore {
    /// Insert keeping descending order; returns the 1-indexed rank
    fn insert(&mut self, score: u64) -> usize {
        let pos = self
            .entries
            .iter()
            .position(|&e| score > e)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, score);
        pos + 1
    }

    fn top_n(&self, n: usize) -> Vec<u64> {
        self.entries.iter().take(n).copied().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Live score accumulator plus the session's ranked history
#[derive(Debug)]
pub struct ScoreLedger {
    live: f32,
    store: Option<ScoreStore>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self {
            live: 0.0,
            store: Some(ScoreStore::default()),
        }
    }

    /// Add one tick's worth of score to the live run
    pub fn accrue(&mut self, amount: f32) {
        self.live += amount;
    }

    /// Live score truncated for display and commit
    pub fn live_score(&self) -> u64 {
        self.live as u64
    }

    /// Zero the live score for a fresh run
    pub fn reset_live(&mut self) {
        self.live = 0.0;
    }

    /// Finalize the current run: truncate the live score, rank it into the
    /// history, and zero the accumulator. Returns the 1-indexed rank.
    pub fn commit(&mut self) -> Option<usize> {
        let score = self.live_score();
        self.live = 0.0;

        let Some(store) = self.store.as_mut() else {
            log::error!("commit after ledger close; score {score} dropped");
            return None;
        };
        let rank = store.insert(score);
        log::info!("committed score {score} at rank {rank}");
        Some(rank)
    }

    /// The n best committed scores, descending
    pub fn top_n(&self, n: usize) -> Vec<u64> {
        self.store.as_ref().map(|s| s.top_n(n)).unwrap_or_default()
    }

    /// Number of committed runs in the history
    pub fn history_len(&self) -> usize {
        self.store.as_ref().map(ScoreStore::len).unwrap_or(0)
    }

    /// Release the backing store. Called once at session shutdown.
    pub fn close(&mut self) {
        match self.store.take() {
            Some(store) => log::info!("score store released ({} entries)", store.len()),
            None => log::warn!("score store already released"),
        }
    }
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::new()
    }
}
