//! Scheduler observer trait for tracing and data collection.

use bk_core::SimTime;
use bk_schedule::{Activity, Ledger, Producer, ProducerRegistry};
use log::{debug, info, trace};

/// Callbacks invoked by [`Scheduler::run`][crate::Scheduler::run] at key
/// points in the event loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: conservation checker
///
/// ```rust,ignore
/// struct Conservation { goal: u64 }
///
/// impl SimObserver for Conservation {
///     fn on_pass_end(&mut self, _now: SimTime, ledger: &Ledger, in_flight: u64) {
///         assert_eq!(ledger.total() + in_flight, self.goal);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first allocation pass.
    fn on_sim_start(&mut self, _producers: &ProducerRegistry, _goal: u32) {}

    /// Called when a producer is handed a new activity.
    fn on_activity_start(&mut self, _activity: &Activity) {}

    /// Called after an activity's units have been credited to the ledger.
    fn on_activity_retired(&mut self, _activity: &Activity, _ledger: &Ledger) {}

    /// Called when a producer finds no work and waits for the next retirement.
    fn on_producer_idle(&mut self, _producer: &Producer, _now: SimTime) {}

    /// Called at the end of every retire + allocate pass.
    ///
    /// `in_flight` is the number of units held by pending activities.
    fn on_pass_end(&mut self, _now: SimTime, _ledger: &Ledger, _in_flight: u64) {}

    /// Called once after the goal is reached.
    fn on_sim_end(&mut self, _now: SimTime, _ledger: &Ledger) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that forwards every hook to the `log` facade.
///
/// Activity starts and retirements log at `debug`, ledger snapshots and idle
/// producers at `trace`, run start and end at `info`.
pub struct LogObserver;

impl SimObserver for LogObserver {
    fn on_sim_start(&mut self, producers: &ProducerRegistry, goal: u32) {
        info!(
            "simulating goal={goal} with {} producers (levels {}..={})",
            producers.len(),
            producers.min_level(),
            producers.max_level(),
        );
    }

    fn on_activity_start(&mut self, activity: &Activity) {
        debug!("start  {activity}");
    }

    fn on_activity_retired(&mut self, activity: &Activity, _ledger: &Ledger) {
        debug!("finish {activity}");
    }

    fn on_producer_idle(&mut self, producer: &Producer, now: SimTime) {
        trace!("{now}: {producer} idle");
    }

    fn on_pass_end(&mut self, now: SimTime, ledger: &Ledger, in_flight: u64) {
        trace!("{now}: ledger {:?}, in flight {in_flight}", ledger.as_slice());
    }

    fn on_sim_end(&mut self, now: SimTime, ledger: &Ledger) {
        info!("goal of {} reached at {now}", ledger.finished());
    }
}
