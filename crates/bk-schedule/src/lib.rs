//! `bk-schedule` — the bookkeeping the scheduler works on.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`producer`]  | `ProducerSpec`, `Producer`, `ProducerRegistry`            |
//! | [`activity`]  | `ActivityKind`, `Activity`                                |
//! | [`ledger`]    | `Ledger` (idle inventory per level)                       |
//! | [`queue`]     | `ReadyQueue` (idle producers), `PendingQueue` (in flight) |
//! | [`loader`]    | `load_producers_csv`, `load_producers_reader`             |
//! | [`error`]     | `ScheduleError`, `ScheduleResult`                         |
//!
//! # Unit accounting (summary)
//!
//! ```text
//! ledger.total() + pending.in_flight_units() == goal      (at every instant)
//! ```
//!
//! Units leave the ledger when an activity starts and come back, at the
//! activity's target level, when it is retired.

pub mod activity;
pub mod error;
pub mod ledger;
pub mod loader;
pub mod producer;
pub mod queue;


pub use activity::{Activity, ActivityKind};
pub use error::{ScheduleError, ScheduleResult};
pub use ledger::Ledger;
pub use loader::{load_producers_csv, load_producers_reader};
pub use producer::{Producer, ProducerRegistry, ProducerSpec};
pub use queue::{PendingQueue, ReadyQueue};
