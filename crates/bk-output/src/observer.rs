//! `ReportObserver<W>` — bridges `SimObserver` to a `ReportWriter`.

use bk_core::SimTime;
use bk_schedule::{Activity, Ledger, ProducerRegistry};
use bk_sim::SimObserver;

use crate::row::{ActivityRow, SummaryRow};
use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes each activity row as soon as the activity
/// starts, and the summary when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ReportObserver<W: ReportWriter> {
    writer:         W,
    base_unix_secs: i64,
    busy_secs:      f64,
    activities:     u64,
    producers:      u64,
    last_error:     Option<OutputError>,
}

impl<W: ReportWriter> ReportObserver<W> {
    pub fn new(writer: W, base_unix_secs: i64) -> Self {
        Self {
            writer,
            base_unix_secs,
            busy_secs:  0.0,
            activities: 0,
            producers:  0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> SimObserver for ReportObserver<W> {
    fn on_sim_start(&mut self, producers: &ProducerRegistry, _goal: u32) {
        self.producers = producers.len() as u64;
    }

    fn on_activity_start(&mut self, activity: &Activity) {
        self.busy_secs += activity.duration;
        self.activities += 1;
        let row = ActivityRow::from_activity(activity, self.base_unix_secs);
        let result = self.writer.write_activities(std::slice::from_ref(&row));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, now: SimTime, _ledger: &Ledger) {
        let summary = SummaryRow::new(now, SimTime(self.busy_secs), self.activities, self.producers);
        let result = self.writer.write_summary(&summary);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
