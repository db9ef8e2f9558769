//! `Report` — a finished run as rows.

use bk_sim::SimOutcome;

use crate::{ActivityRow, OutputResult, ReportWriter, SummaryRow};

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// One row per activity, in creation order.
    pub rows:    Vec<ActivityRow>,
    pub summary: SummaryRow,
}

impl Report {
    /// Build rows for every activity in `outcome`.  Pure; no I/O.
    pub fn build(outcome: &SimOutcome, base_unix_secs: i64) -> Self {
        let rows = outcome
            .activities
            .iter()
            .map(|a| ActivityRow::from_activity(a, base_unix_secs))
            .collect();
        let summary = SummaryRow::new(
            outcome.wall_time,
            outcome.busy_time,
            outcome.activities.len() as u64,
            outcome.producers.len() as u64,
        );
        Self { rows, summary }
    }

    /// Write every row and the summary, then finish the writer.
    pub fn write_to<W: ReportWriter>(&self, writer: &mut W) -> OutputResult<()> {
        writer.write_activities(&self.rows)?;
        writer.write_summary(&self.summary)?;
        writer.finish()
    }
}
