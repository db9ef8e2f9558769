//! Plain data row types written by output backends.

use bk_core::{SimTime, format_duration};
use bk_schedule::{Activity, ActivityKind};

/// One scheduled activity, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    /// e.g. `"Barrack 1"`.
    pub producer:         String,
    pub start_unix_secs:  i64,
    pub finish_unix_secs: i64,
    /// Offset from the run start, e.g. `"0d 15:30:11"`.
    pub start_at:         String,
    pub finish_at:        String,
    pub task:             String,
    pub kind:             ActivityKind,
    pub duration_secs:    f64,
}

impl ActivityRow {
    /// `base_unix_secs` is the absolute time of simulated time zero.
    pub fn from_activity(activity: &Activity, base_unix_secs: i64) -> Self {
        Self {
            producer:         activity.producer.label(),
            start_unix_secs:  activity.start.unix_secs(base_unix_secs),
            finish_unix_secs: activity.finish.unix_secs(base_unix_secs),
            start_at:         activity.start.to_string(),
            finish_at:        activity.finish.to_string(),
            task:             activity.description(),
            kind:             activity.kind,
            duration_secs:    activity.duration,
        }
    }
}

/// Whole-run totals.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub wall_time:      String,
    pub busy_time:      String,
    pub wall_secs:      f64,
    pub busy_secs:      f64,
    pub activity_count: u64,
    pub producer_count: u64,
    /// `busy / (wall × producers)`; zero for a zero-length run.
    pub utilisation:    f64,
}

impl SummaryRow {
    pub fn new(wall: SimTime, busy: SimTime, activity_count: u64, producer_count: u64) -> Self {
        let capacity = wall.secs() * producer_count as f64;
        Self {
            wall_time:   format_duration(wall.secs()),
            busy_time:   format_duration(busy.secs()),
            wall_secs:   wall.secs(),
            busy_secs:   busy.secs(),
            activity_count,
            producer_count,
            utilisation: if capacity > 0.0 { busy.secs() / capacity } else { 0.0 },
        }
    }
}
