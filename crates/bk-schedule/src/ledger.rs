//! `Ledger` — idle inventory per level.
//!
//! Index `0` holds raw input; index `top_level` holds finished units.  Units
//! assigned to an in-flight activity are not in the ledger.

use bk_core::{Level, RAW_LEVEL};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    /// `counts[level]` for `level in 0..=top_level`.
    counts: Vec<u32>,
}

impl Ledger {
    /// A ledger holding `goal` raw units and nothing else.
    pub fn new(goal: u32, top_level: Level) -> Self {
        let mut counts = vec![0; top_level as usize + 1];
        counts[RAW_LEVEL as usize] = goal;
        Self { counts }
    }

    /// Idle units at `level` (zero outside the ledger).
    #[inline]
    pub fn get(&self, level: Level) -> u32 {
        self.counts.get(level as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub fn raw(&self) -> u32 {
        self.counts[RAW_LEVEL as usize]
    }

    /// Units that have reached the top level.
    #[inline]
    pub fn finished(&self) -> u32 {
        self.counts[self.counts.len() - 1]
    }

    pub fn top_level(&self) -> Level {
        (self.counts.len() - 1) as Level
    }

    /// Add `count` units at `level`.
    ///
    /// # Panics
    /// Panics if `level > top_level`.
    pub fn credit(&mut self, level: Level, count: u32) {
        self.counts[level as usize] += count;
    }

    /// Remove `count` units from `level`.
    ///
    /// # Panics
    /// Panics in debug mode if fewer than `count` units are present.
    pub fn debit(&mut self, level: Level, count: u32) {
        let slot = &mut self.counts[level as usize];
        debug_assert!(*slot >= count, "debit {count} from level {level} holding {slot}");
        *slot -= count;
    }

    /// Lowest trained level strictly below `below` holding at least
    /// `min_count` units.  Raw input is never a promotion source.
    pub fn lowest_stock_below(&self, below: Level, min_count: u32) -> Option<Level> {
        (RAW_LEVEL + 1..below.min(self.counts.len() as Level))
            .find(|&level| self.counts[level as usize] >= min_count.max(1))
    }

    /// Idle units across every level.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Read-only view indexed by level.
    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }
}
