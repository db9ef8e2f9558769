//! The `Scheduler` struct and its event loop.

use bk_core::{ActivityId, Level, RAW_LEVEL, SimTime, format_duration};
use bk_rates::{PromotionRate, RateTable};
use bk_schedule::{
    Activity, ActivityKind, Ledger, PendingQueue, Producer, ProducerRegistry, ReadyQueue,
};

use crate::{SimError, SimObserver, SimResult, TrainStrategy};

// ── Allocation decision ───────────────────────────────────────────────────────

/// What an idle producer was given this pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Allocation {
    Promote { from: Level, count: u32 },
    Train { level: Level, count: u32 },
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// The discrete-event scheduler.
///
/// Owns the ledger, both queues, and the clock for the duration of one run;
/// nothing is shared between runs.  Create via
/// [`SchedulerBuilder`][crate::SchedulerBuilder].
pub struct Scheduler {
    pub goal:     u32,
    pub strategy: TrainStrategy,

    /// Producers sorted by `(level, capacity, id)`.
    pub registry: ProducerRegistry,

    pub rates:     RateTable,
    pub promotion: PromotionRate,

    /// Lowest producer level; input to `TrainStrategy::MinLevelMinusOne`.
    pub min_level: Level,
    /// Highest producer level; the goal level.
    pub max_level: Level,

    /// Idle inventory per level.
    pub ledger: Ledger,

    /// Idle producers, lowest first.
    pub ready: ReadyQueue,

    /// In-flight activities, earliest finish first.
    pub pending: PendingQueue,

    /// Simulated clock.  Advanced only by retiring an activity.
    pub now: SimTime,

    /// Every activity started so far, in creation order.
    pub log: Vec<Activity>,

    pub(crate) retired: u64,
    pub(crate) event_limit: Option<u64>,
}

impl Scheduler {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every unit has reached `max_level`.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimResult<SimOutcome> {
        observer.on_sim_start(&self.registry, self.goal);
        while !self.is_complete() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.now, &self.ledger);
        Ok(self.into_outcome())
    }

    /// One pass of the event loop: retire the earliest pending activity (if
    /// any), then allocate work to every idle producer.
    ///
    /// Returns the number of activities started.  Useful for tests and
    /// incremental stepping.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        // ── Phase 1: retire ───────────────────────────────────────────────
        if !self.pending.is_empty() {
            if let Some(limit) = self.event_limit.filter(|&limit| self.retired >= limit) {
                return Err(SimError::EventLimit { limit });
            }
            if let Some(activity) = self.pending.pop() {
                self.retire(activity, observer);
            }
        }

        // ── Phase 2: allocate ─────────────────────────────────────────────
        let started = self.allocate(observer)?;

        let in_flight = self.pending.in_flight_units();
        debug_assert_eq!(
            self.ledger.total() + in_flight,
            self.goal as u64,
            "units must be conserved"
        );
        observer.on_pass_end(self.now, &self.ledger, in_flight);

        // ── Phase 3: stall check ──────────────────────────────────────────
        if self.pending.is_empty() && !self.is_complete() {
            return Err(SimError::Stalled {
                now:    self.now,
                ledger: self.ledger.as_slice().to_vec(),
            });
        }

        Ok(started)
    }

    /// `true` once the whole goal sits at `max_level`.
    pub fn is_complete(&self) -> bool {
        self.ledger.finished() == self.goal
    }

    /// Activities retired so far.
    pub fn retired(&self) -> u64 {
        self.retired
    }

    // ── Event loop internals ──────────────────────────────────────────────

    fn retire<O: SimObserver>(&mut self, activity: Activity, observer: &mut O) {
        debug_assert!(activity.finish >= self.now, "clock must not run backwards");
        self.now = activity.finish;
        self.ledger.credit(activity.target_level, activity.count);
        self.ready.push(activity.producer);
        self.retired += 1;
        observer.on_activity_retired(&activity, &self.ledger);
    }

    /// Hand work to idle producers.  Producers that find none wait in the
    /// ready queue until the next retirement, without being re-tried this pass.
    fn allocate<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let mut skipped = ReadyQueue::new();
        let mut started = 0;

        while let Some(producer) = self.ready.pop() {
            match self.choose(&producer) {
                Some(allocation) => {
                    self.start(producer, allocation, observer)?;
                    started += 1;
                }
                None => {
                    observer.on_producer_idle(&producer, self.now);
                    skipped.push(producer);
                }
            }
        }

        self.ready = skipped;
        Ok(started)
    }

    /// Apply the allocation rules in priority order.
    fn choose(&self, producer: &Producer) -> Option<Allocation> {
        // a. a full batch is waiting below this producer's level
        if let Some(from) = self.ledger.lowest_stock_below(producer.level, producer.capacity) {
            return Some(Allocation::Promote { from, count: producer.capacity });
        }

        // b. fresh input remains
        let raw = self.ledger.raw();
        if raw > 0 {
            return Some(Allocation::Train {
                level: self.strategy.target_level(producer, self.min_level),
                count: raw.min(producer.capacity),
            });
        }

        // c. a partial batch is waiting below this producer's level
        self.ledger
            .lowest_stock_below(producer.level, 1)
            .map(|from| Allocation::Promote { from, count: self.ledger.get(from) })
    }

    fn start<O: SimObserver>(
        &mut self,
        producer:   Producer,
        allocation: Allocation,
        observer:   &mut O,
    ) -> SimResult<()> {
        let (kind, source_level, target_level, count, cost) = match allocation {
            Allocation::Promote { from, count } => {
                let cost = self.promotion.promote_cost(count, producer.level - from);
                (ActivityKind::Promote, from, producer.level, count, cost)
            }
            Allocation::Train { level, count } => {
                let cost = self.rates.train_cost(level, count).ok_or_else(|| {
                    SimError::Config(format!("no training rate for level {level}"))
                })?;
                (ActivityKind::Train, RAW_LEVEL, level, count, cost)
            }
        };

        self.ledger.debit(source_level, count);

        let activity = Activity {
            id: ActivityId(self.log.len() as u32),
            kind,
            producer,
            count,
            source_level,
            target_level,
            start: self.now,
            finish: self.now + cost,
            duration: cost,
        };
        observer.on_activity_start(&activity);
        self.log.push(activity.clone());
        self.pending.push(activity);
        Ok(())
    }

    fn into_outcome(self) -> SimOutcome {
        let busy: f64 = self.log.iter().map(|a| a.duration).sum();
        SimOutcome {
            wall_time:   self.now,
            busy_time:   SimTime(busy),
            strategy:    self.strategy,
            activities:  self.log,
            ledger:      self.ledger,
            producers:   self.registry,
            retirements: self.retired,
        }
    }
}

// ── SimOutcome ────────────────────────────────────────────────────────────────

/// Result of a completed run.
#[derive(Clone, Debug)]
pub struct SimOutcome {
    /// Simulated time at which the goal was reached.
    pub wall_time: SimTime,
    /// Sum of every activity's duration.  Concurrent producers are counted
    /// separately, so this may exceed `wall_time`.
    pub busy_time: SimTime,
    pub strategy: TrainStrategy,
    /// Every activity, in creation order.
    pub activities: Vec<Activity>,
    /// Final ledger; everything sits at the top level.
    pub ledger: Ledger,
    pub producers: ProducerRegistry,
    pub retirements: u64,
}

impl SimOutcome {
    /// `wall_time` as `"{d}d {hh}:{mm}:{ss}"`.
    pub fn wall_time_text(&self) -> String {
        format_duration(self.wall_time.secs())
    }

    /// `busy_time` as `"{d}d {hh}:{mm}:{ss}"`.
    pub fn busy_time_text(&self) -> String {
        format_duration(self.busy_time.secs())
    }

    pub fn count_of(&self, kind: ActivityKind) -> usize {
        self.activities.iter().filter(|a| a.kind == kind).count()
    }

    /// Busy time as a fraction of `wall_time × producer count`.
    ///
    /// Zero when the run took no simulated time.
    pub fn utilisation(&self) -> f64 {
        let capacity = self.wall_time.secs() * self.producers.len() as f64;
        if capacity > 0.0 { self.busy_time.secs() / capacity } else { 0.0 }
    }
}
