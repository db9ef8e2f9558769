//! The `ReportWriter` trait implemented by all backend writers.

use crate::{ActivityRow, OutputResult, SummaryRow};

pub trait ReportWriter {
    /// Append a batch of activity rows.
    fn write_activities(&mut self, rows: &[ActivityRow]) -> OutputResult<()>;

    /// Write the run summary.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
