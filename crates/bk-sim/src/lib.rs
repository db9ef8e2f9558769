//! `bk-sim` — the event-driven scheduler.
//!
//! # Event loop
//!
//! ```text
//! ledger[0] = goal; every producer idle
//! until ledger[max_level] == goal:
//!   ① Retire   — pop the earliest-finishing activity, advance `now` to its
//!                finish, credit its units, return its producer to the ready
//!                queue.  (Nothing to retire on the first pass.)
//!   ② Allocate — pop idle producers lowest (level, capacity, id) first and
//!                give each the first action that applies:
//!                  a. promote `capacity` units from the lowest level below it
//!                  b. train min(raw, capacity) fresh units (strategy picks level)
//!                  c. promote whatever sits at the lowest level below it
//!                  d. stay idle until the next retirement
//!   ③ Stall    — nothing in flight and goal unmet → `SimError::Stalled`.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bk_sim::{SchedulerBuilder, TrainStrategy, NoopObserver};
//!
//! let outcome = SchedulerBuilder::new(1_000, TrainStrategy::MaxBarracksLevel, producers, train, promote)
//!     .build()?
//!     .run(&mut NoopObserver)?;
//! println!("{} wall, {} busy", outcome.wall_time_text(), outcome.busy_time_text());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod strategy;


pub use builder::SchedulerBuilder;
pub use config::SimInput;
pub use error::{SimError, SimResult};
pub use observer::{LogObserver, NoopObserver, SimObserver};
pub use sim::{Scheduler, SimOutcome};
pub use strategy::TrainStrategy;

/// Run one simulation to completion without observer callbacks.
pub fn simulate(input: &SimInput) -> SimResult<SimOutcome> {
    simulate_with(input, &mut NoopObserver)
}

/// Run one simulation to completion, reporting progress to `observer`.
pub fn simulate_with<O: SimObserver>(input: &SimInput, observer: &mut O) -> SimResult<SimOutcome> {
    SchedulerBuilder::from_input(input).build()?.run(observer)
}
