//! Priority queues driving the event loop.
//!
//! - [`ReadyQueue`]: idle producers, lowest `(level, capacity, id)` first.
//! - [`PendingQueue`]: in-flight activities, earliest `finish` first; ties go
//!   to the earlier `start`, then to the lexically smaller task description.
//!
//! `BinaryHeap` is a max-heap, so both queues invert the natural ordering.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::{Activity, Producer};

// ── ReadyQueue ────────────────────────────────────────────────────────────────

#[derive(Default, Debug)]
pub struct ReadyQueue {
    inner: BinaryHeap<Reverse<Producer>>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, producer: Producer) {
        self.inner.push(Reverse(producer));
    }

    /// Remove and return the lowest-ordered idle producer.
    pub fn pop(&mut self) -> Option<Producer> {
        self.inner.pop().map(|Reverse(p)| p)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromIterator<Producer> for ReadyQueue {
    fn from_iter<I: IntoIterator<Item = Producer>>(iter: I) -> Self {
        Self { inner: iter.into_iter().map(Reverse).collect() }
    }
}

// ── PendingQueue ──────────────────────────────────────────────────────────────

/// Heap entry: orders by `finish`, then `start`, then task description, then
/// creation order, all reversed so the heap yields the earliest first.
///
/// Descriptions compare as text, so `"Barracks 10 - …"` precedes
/// `"Barracks 2 - …"`.  No two in-flight activities share a producer, so the
/// creation-order fallback only applies to hand-built queues.
#[derive(Debug)]
struct Pending {
    key:      String,
    activity: Activity,
}

impl Pending {
    fn new(activity: Activity) -> Self {
        Self { key: activity.description(), activity }
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (&self.activity, &other.activity);
        b.finish
            .cmp(&a.finish)
            .then_with(|| b.start.cmp(&a.start))
            .then_with(|| other.key.cmp(&self.key))
            .then_with(|| b.id.cmp(&a.id))
    }
}

#[derive(Default, Debug)]
pub struct PendingQueue {
    inner: BinaryHeap<Pending>,
    /// Cached sum of `count` over queued activities.
    in_flight: u64,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, activity: Activity) {
        self.in_flight += activity.count as u64;
        self.inner.push(Pending::new(activity));
    }

    /// Remove and return the activity that finishes first.
    pub fn pop(&mut self) -> Option<Activity> {
        let Pending { activity, .. } = self.inner.pop()?;
        self.in_flight -= activity.count as u64;
        Some(activity)
    }

    /// Units currently assigned to in-flight activities.
    pub fn in_flight_units(&self) -> u64 {
        self.in_flight
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
