//! CSV producer loader.
//!
//! # CSV format
//!
//! ```csv
//! level,capacity
//! 9,723
//! 8,647
//! ,
//! ```
//!
//! Rows with both fields empty are skipped, so a fixed-size table with unused
//! rows loads cleanly.  A row with only one field filled is an error.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{ProducerSpec, ScheduleError, ScheduleResult};

#[derive(Deserialize)]
struct ProducerRecord {
    level:    Option<u32>,
    capacity: Option<u32>,
}

/// Load producer specs from a CSV file.
pub fn load_producers_csv(path: &Path) -> ScheduleResult<Vec<ProducerSpec>> {
    let file = std::fs::File::open(path)?;
    load_producers_reader(file)
}

/// Like [`load_producers_csv`] but accepts any `Read` source.
pub fn load_producers_reader<R: Read>(reader: R) -> ScheduleResult<Vec<ProducerSpec>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut specs = Vec::new();

    for (row, result) in csv_reader.deserialize::<ProducerRecord>().enumerate() {
        let record = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        match (record.level, record.capacity) {
            (None, None) => continue,
            (Some(level), Some(capacity)) => specs.push(ProducerSpec { level, capacity }),
            _ => {
                return Err(ScheduleError::Parse(format!(
                    "row {}: level and capacity must both be set or both be empty",
                    row + 1
                )));
            }
        }
    }

    Ok(specs)
}
