//! Scheduled units of work.
//!
//! An `Activity` is created when a producer is allocated work, never mutated
//! afterwards, and retired exactly once when it becomes the earliest pending
//! completion.

use std::fmt;

use bk_core::{ActivityId, Level, SimTime, format_duration};

use crate::Producer;

// ── ActivityKind ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityKind {
    /// Raw input → trained units at `target_level`.
    Train,
    /// Units at `source_level` → units at the producer's level.
    Promote,
}

impl ActivityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Train   => "Train",
            ActivityKind::Promote => "Promote",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Activity ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    /// Creation order within one run.
    pub id:           ActivityId,
    pub kind:         ActivityKind,
    pub producer:     Producer,
    pub count:        u32,
    /// Ledger level the units were taken from (`RAW_LEVEL` for training).
    pub source_level: Level,
    /// Ledger level credited on retirement.
    pub target_level: Level,
    pub start:        SimTime,
    pub finish:       SimTime,
    /// `finish - start`, in seconds.
    pub duration:     f64,
}

impl Activity {
    pub fn is_promotion(&self) -> bool {
        self.kind == ActivityKind::Promote
    }

    /// One-line task description, e.g.
    /// `"Barracks 0 - train 647 troops at level 8 at cost 1d 04:13:04"`.
    pub fn description(&self) -> String {
        let cost = format_duration(self.duration);
        match self.kind {
            ActivityKind::Train => format!(
                "Barracks {} - train {} troops at level {} at cost {cost}",
                self.producer.id.0, self.count, self.target_level,
            ),
            ActivityKind::Promote => format!(
                "Barracks {} - promote {} troops from level {} to level {} at cost {cost}",
                self.producer.id.0, self.count, self.source_level, self.target_level,
            ),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} → {}] {}", self.start, self.finish, self.description())
    }
}
