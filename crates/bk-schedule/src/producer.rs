//! Producers (barracks) and the registry that orders them.
//!
//! # Ordering
//!
//! `Producer` derives `Ord` over `(level, capacity, id)` in that field order.
//! The ready queue pops the *lowest* producer first, so low-level barracks
//! get work before high-level ones and equal barracks are served in registry
//! order.

use std::fmt;

use bk_core::{Level, MAX_LEVEL, MIN_LEVEL, ProducerId};

use crate::{ScheduleError, ScheduleResult};

// ── ProducerSpec ──────────────────────────────────────────────────────────────

/// One configured barrack, before the registry assigns it an identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProducerSpec {
    pub level:    Level,
    /// Units per batch.  Zero-capacity producers are dropped by the registry.
    pub capacity: u32,
}

impl ProducerSpec {
    pub fn new(level: Level, capacity: u32) -> Self {
        Self { level, capacity }
    }
}

// ── Producer ──────────────────────────────────────────────────────────────────

/// A schedulable barrack.  Immutable once registered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Producer {
    pub level:    Level,
    pub capacity: u32,
    pub id:       ProducerId,
}

impl Producer {
    /// Human-facing label used in reports, e.g. `"Barrack 2"`.
    pub fn label(&self) -> String {
        format!("Barrack {}", self.id.0)
    }
}

impl fmt::Display for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Barrack {} (L{} x{})", self.id.0, self.level, self.capacity)
    }
}

// ── ProducerRegistry ──────────────────────────────────────────────────────────

/// The ordered, validated set of producers taking part in a run.
#[derive(Clone, Debug)]
pub struct ProducerRegistry {
    /// Sorted ascending by `(level, capacity)`; `producers[i].id == ProducerId(i)`.
    producers: Vec<Producer>,
}

impl ProducerRegistry {
    /// Drop zero-capacity entries, sort by `(level, capacity)` (stable, so
    /// equal specs keep their input order), and assign identities.
    ///
    /// Fails if no producer remains or a level falls outside
    /// `MIN_LEVEL..=MAX_LEVEL`.
    pub fn new(specs: &[ProducerSpec]) -> ScheduleResult<Self> {
        if let Some(bad) = specs.iter().find(|s| !(MIN_LEVEL..=MAX_LEVEL).contains(&s.level)) {
            return Err(ScheduleError::Config(format!(
                "producer level {} outside {MIN_LEVEL}..={MAX_LEVEL}",
                bad.level
            )));
        }

        let mut active: Vec<ProducerSpec> =
            specs.iter().copied().filter(|s| s.capacity > 0).collect();
        if active.is_empty() {
            return Err(ScheduleError::Config(
                "at least one producer with capacity > 0 is required".into(),
            ));
        }
        active.sort_by_key(|s| (s.level, s.capacity));

        let producers = active
            .into_iter()
            .enumerate()
            .map(|(i, s)| Producer {
                level:    s.level,
                capacity: s.capacity,
                id:       ProducerId(i as u32),
            })
            .collect();

        Ok(Self { producers })
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    /// Always `false` for a constructed registry; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    /// Read-only slice, sorted by `(level, capacity, id)`.
    pub fn as_slice(&self) -> &[Producer] {
        &self.producers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Producer> {
        self.producers.iter()
    }

    /// Lowest producer level.
    pub fn min_level(&self) -> Level {
        self.producers.first().map_or(MIN_LEVEL, |p| p.level)
    }

    /// Highest producer level; also the level the goal must reach.
    pub fn max_level(&self) -> Level {
        self.producers.iter().map(|p| p.level).max().unwrap_or(MIN_LEVEL)
    }
}
