//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `activities.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{ActivityRow, OutputResult, SummaryRow};

pub const ACTIVITY_HEADERS: [&str; 8] =
    ["barrack", "start", "finish", "start_at", "finish_at", "task", "type", "duration"];

pub const SUMMARY_HEADERS: [&str; 7] = [
    "wall_time", "busy_time", "wall_secs", "busy_secs", "activities", "producers", "utilisation",
];

/// Writes a report to two CSV files.
pub struct CsvWriter {
    activities: Writer<File>,
    summary:    Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut activities = Writer::from_path(dir.join("activities.csv"))?;
        activities.write_record(ACTIVITY_HEADERS)?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(SUMMARY_HEADERS)?;

        Ok(Self { activities, summary, finished: false })
    }
}

impl ReportWriter for CsvWriter {
    fn write_activities(&mut self, rows: &[ActivityRow]) -> OutputResult<()> {
        for row in rows {
            self.activities.write_record(&[
                row.producer.clone(),
                row.start_unix_secs.to_string(),
                row.finish_unix_secs.to_string(),
                row.start_at.clone(),
                row.finish_at.clone(),
                row.task.clone(),
                row.kind.to_string(),
                format!("{:.3}", row.duration_secs),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.wall_time.clone(),
            row.busy_time.clone(),
            format!("{:.3}", row.wall_secs),
            format!("{:.3}", row.busy_secs),
            row.activity_count.to_string(),
            row.producer_count.to_string(),
            format!("{:.4}", row.utilisation),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.activities.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
