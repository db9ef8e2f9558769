//! Derived rate tables.
//!
//! Both tables are computed once before a run and are read-only during the
//! simulation.

use bk_core::{Level, MAX_LEVEL, MIN_LEVEL};

use crate::{PromoteSample, RateError, RateResult, TrainSample};

// ── RateTable ─────────────────────────────────────────────────────────────────

/// Seconds per unit of fresh training, for every level in `1..=max_level`.
#[derive(Clone, Debug, PartialEq)]
pub struct RateTable {
    /// `rates[i]` is the rate for level `i + 1`.
    rates: Vec<f64>,
}

impl RateTable {
    /// Extrapolate a full table from one sample.
    ///
    /// The table covers `1..=max(sample.level, max_level)`, so the sampled
    /// level is always present even if no producer has it.
    pub fn derive(sample: &TrainSample, max_level: Level) -> RateResult<Self> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&sample.level) {
            return Err(RateError::Config(format!(
                "training sample level {} outside {MIN_LEVEL}..={MAX_LEVEL}",
                sample.level
            )));
        }

        let base = sample.level;
        let top = base.max(max_level);
        let mut rates = vec![0.0; top as usize];
        rates[slot(base)] = sample.secs_per_unit()?;

        for level in base..top {
            rates[slot(level + 1)] = rates[slot(level)] * (level + 2) as f64 / (level + 1) as f64;
        }
        for level in (MIN_LEVEL + 1..=base).rev() {
            rates[slot(level - 1)] = rates[slot(level)] * level as f64 / (level + 1) as f64;
        }

        Ok(Self { rates })
    }

    /// Seconds per unit at `level`, or `None` outside the table.
    pub fn rate(&self, level: Level) -> Option<f64> {
        if level < MIN_LEVEL {
            return None;
        }
        self.rates.get(slot(level)).copied()
    }

    /// Cost in seconds of training `count` units at `level`.
    pub fn train_cost(&self, level: Level, count: u32) -> Option<f64> {
        self.rate(level).map(|rate| rate * count as f64)
    }

    /// Highest level covered by the table.
    pub fn max_level(&self) -> Level {
        self.rates.len() as Level
    }

    /// `(level, rate)` pairs in ascending level order.
    pub fn iter(&self) -> impl Iterator<Item = (Level, f64)> + '_ {
        self.rates
            .iter()
            .enumerate()
            .map(|(i, &rate)| (i as Level + MIN_LEVEL, rate))
    }
}

#[inline]
fn slot(level: Level) -> usize {
    (level - MIN_LEVEL) as usize
}

// ── PromotionRate ─────────────────────────────────────────────────────────────

/// Seconds per unit per level climbed.  Independent of the starting level.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PromotionRate(pub f64);

impl PromotionRate {
    pub fn derive(sample: &PromoteSample) -> RateResult<Self> {
        Ok(Self(sample.secs_per_unit_level()?))
    }

    #[inline]
    pub fn secs_per_unit_level(self) -> f64 {
        self.0
    }

    /// Cost in seconds of promoting `count` units by `levels` levels.
    #[inline]
    pub fn promote_cost(self, count: u32, levels: Level) -> f64 {
        count as f64 * levels as f64 * self.0
    }
}
