//! Integration tests for bk-output.

use bk_rates::{PromoteSample, TrainSample};
use bk_schedule::{ActivityKind, ProducerSpec};
use bk_sim::{SimInput, TrainStrategy};

fn two_barracks() -> SimInput {
    SimInput {
        goal:           1_000,
        strategy:       TrainStrategy::MaxBarracksLevel,
        producers:      vec![ProducerSpec::new(9, 723), ProducerSpec::new(8, 647)],
        train_rate:     TrainSample::new(9, 723, "1d 07:45:09"),
        promote_rate:   PromoteSample::new(723, "03:10:31"),
        base_unix_secs: 1_700_000_000,
        event_limit:    None,
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::Report;

    #[test]
    fn one_row_per_activity() {
        let input = two_barracks();
        let outcome = bk_sim::simulate(&input).unwrap();
        let report = Report::build(&outcome, input.base_unix_secs);
        assert_eq!(report.rows.len(), outcome.activities.len());
        assert_eq!(report.summary.activity_count, 3);
        assert_eq!(report.summary.producer_count, 2);
    }

    #[test]
    fn rows_carry_labels_times_and_kind() {
        let input = two_barracks();
        let outcome = bk_sim::simulate(&input).unwrap();
        let report = Report::build(&outcome, input.base_unix_secs);

        let first = &report.rows[0];
        assert_eq!(first.producer, "Barrack 0");
        assert_eq!(first.start_unix_secs, 1_700_000_000);
        assert_eq!(first.start_at, "0d 00:00:00");
        assert_eq!(first.finish_at, "1d 01:34:24");
        assert_eq!(first.kind, ActivityKind::Train);

        let last = &report.rows[2];
        assert_eq!(last.producer, "Barrack 1");
        assert_eq!(last.kind, ActivityKind::Promote);
        assert!(last.task.contains("promote 647 troops from level 8 to level 9"));
        assert_eq!(last.finish_at, "1d 04:24:53");
        assert_eq!(last.finish_unix_secs, 1_700_000_000 + 102_293);
    }

    #[test]
    fn summary_formats_wall_and_busy_time() {
        let outcome = bk_sim::simulate(&two_barracks()).unwrap();
        let report = Report::build(&outcome, 0);
        assert_eq!(report.summary.wall_time, "1d 04:24:53");
        assert_eq!(report.summary.busy_time, "1d 19:55:04");
        assert!(report.summary.utilisation > 0.0 && report.summary.utilisation <= 1.0);
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{ACTIVITY_HEADERS, CsvWriter, SUMMARY_HEADERS};
    use crate::writer::ReportWriter;
    use crate::{Report, ReportObserver};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_all(path: &std::path::Path) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_all(&dir.path().join("activities.csv"));
        assert_eq!(headers, ACTIVITY_HEADERS);
        assert!(rows.is_empty());

        let (headers, _) = read_all(&dir.path().join("summary.csv"));
        assert_eq!(headers, SUMMARY_HEADERS);
    }

    #[test]
    fn report_written_to_csv() {
        let dir = tmp();
        let input = two_barracks();
        let outcome = bk_sim::simulate(&input).unwrap();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        Report::build(&outcome, input.base_unix_secs).write_to(&mut w).unwrap();

        let (_, rows) = read_all(&dir.path().join("activities.csv"));
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "Barrack 0");
        assert_eq!(&rows[0][1], "1700000000");
        assert_eq!(&rows[2][6], "Promote");

        let (_, summary) = read_all(&dir.path().join("summary.csv"));
        assert_eq!(summary.len(), 1);
        assert_eq!(&summary[0][0], "1d 04:24:53");
        assert_eq!(&summary[0][1], "1d 19:55:04");
        assert_eq!(&summary[0][4], "3");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn observer_streams_same_rows_as_report() {
        let input = two_barracks();

        let streamed = tmp();
        let mut obs = ReportObserver::new(CsvWriter::new(streamed.path()).unwrap(), input.base_unix_secs);
        let outcome = bk_sim::simulate_with(&input, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let batch = tmp();
        let mut w = CsvWriter::new(batch.path()).unwrap();
        Report::build(&outcome, input.base_unix_secs).write_to(&mut w).unwrap();

        for file in ["activities.csv", "summary.csv"] {
            let a = std::fs::read_to_string(streamed.path().join(file)).unwrap();
            let b = std::fs::read_to_string(batch.path().join(file)).unwrap();
            assert_eq!(a, b, "{file} differs");
        }
    }
}
