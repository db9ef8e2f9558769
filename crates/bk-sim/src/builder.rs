//! Fluent builder for constructing a [`Scheduler`].

use bk_core::SimTime;
use bk_rates::{PromoteSample, PromotionRate, RateTable, TrainSample};
use bk_schedule::{Ledger, PendingQueue, ProducerRegistry, ProducerSpec};

use crate::{Scheduler, SimError, SimInput, SimResult, TrainStrategy};

/// Fluent builder for [`Scheduler`].
///
/// # Required inputs
///
/// - `goal` — units that must reach the highest producer level (> 0)
/// - [`TrainStrategy`]
/// - producers — at least one with capacity > 0
/// - one [`TrainSample`] and one [`PromoteSample`]
///
/// # Optional inputs
///
/// | Method              | Default    |
/// |---------------------|------------|
/// | `.event_limit(n)`   | unlimited  |
pub struct SchedulerBuilder {
    goal:         u32,
    strategy:     TrainStrategy,
    producers:    Vec<ProducerSpec>,
    train:        TrainSample,
    promote:      PromoteSample,
    event_limit:  Option<u64>,
}

impl SchedulerBuilder {
    pub fn new(
        goal:      u32,
        strategy:  TrainStrategy,
        producers: Vec<ProducerSpec>,
        train:     TrainSample,
        promote:   PromoteSample,
    ) -> Self {
        Self { goal, strategy, producers, train, promote, event_limit: None }
    }

    pub fn from_input(input: &SimInput) -> Self {
        Self {
            goal:        input.goal,
            strategy:    input.strategy,
            producers:   input.producers.clone(),
            train:       input.train_rate.clone(),
            promote:     input.promote_rate.clone(),
            event_limit: input.event_limit,
        }
    }

    /// Fail with [`SimError::EventLimit`] after `limit` retirements.
    pub fn event_limit(mut self, limit: u64) -> Self {
        self.event_limit = Some(limit);
        self
    }

    /// Validate inputs, derive rate tables, and return a ready-to-run
    /// [`Scheduler`] with every producer idle and the whole goal as raw input.
    pub fn build(self) -> SimResult<Scheduler> {
        if self.goal == 0 {
            return Err(SimError::Config("goal must be > 0".into()));
        }

        let registry = ProducerRegistry::new(&self.producers)?;
        let max_level = registry.max_level();
        let rates = RateTable::derive(&self.train, max_level)?;
        let promotion = PromotionRate::derive(&self.promote)?;

        Ok(Scheduler {
            goal:        self.goal,
            strategy:    self.strategy,
            min_level:   registry.min_level(),
            max_level,
            ready:       registry.iter().copied().collect(),
            registry,
            rates,
            promotion,
            ledger:      Ledger::new(self.goal, max_level),
            pending:     PendingQueue::new(),
            now:         SimTime::ZERO,
            log:         Vec::new(),
            retired:     0,
            event_limit: self.event_limit,
        })
    }
}
