//! `bk-output` — turns a run's activities into report rows and writes them.
//!
//! | Item                 | Role                                                  |
//! |----------------------|-------------------------------------------------------|
//! | [`Report`]           | pure transformation of a `SimOutcome` into rows       |
//! | [`ReportWriter`]     | backend trait                                         |
//! | [`CsvWriter`]        | `activities.csv`, `summary.csv`                       |
//! | [`ReportObserver`]   | streams rows to a writer while the scheduler runs     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use bk_output::{CsvWriter, Report};
//!
//! let outcome = bk_sim::simulate(&input)?;
//! let report = Report::build(&outcome, input.base_unix_secs);
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! report.write_to(&mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ReportObserver;
pub use report::Report;
pub use row::{ActivityRow, SummaryRow};
pub use writer::ReportWriter;
