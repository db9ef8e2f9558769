//! Calibration samples, as a player reads them off the game UI.

use bk_core::{Level, parse_duration};

use crate::{RateError, RateResult};

/// "Training `capacity` troops at `level` takes `duration`."
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainSample {
    pub level:    Level,
    pub capacity: u32,
    /// Duration text, e.g. `"1d 07:45:09"`.
    pub duration: String,
}

/// "Promoting `capacity` troops by one level takes `duration`."
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PromoteSample {
    pub capacity: u32,
    /// Duration text, e.g. `"03:10:31"`.
    pub duration: String,
}

impl TrainSample {
    pub fn new(level: Level, capacity: u32, duration: impl Into<String>) -> Self {
        Self { level, capacity, duration: duration.into() }
    }

    /// Seconds per unit at the sampled level.
    pub fn secs_per_unit(&self) -> RateResult<f64> {
        per_unit(&self.duration, self.capacity, "training")
    }
}

impl PromoteSample {
    pub fn new(capacity: u32, duration: impl Into<String>) -> Self {
        Self { capacity, duration: duration.into() }
    }

    /// Seconds per unit per level climbed.
    pub fn secs_per_unit_level(&self) -> RateResult<f64> {
        per_unit(&self.duration, self.capacity, "promotion")
    }
}

fn per_unit(duration: &str, capacity: u32, what: &str) -> RateResult<f64> {
    if capacity == 0 {
        return Err(RateError::Config(format!("{what} sample capacity must be > 0")));
    }
    let secs = parse_duration(duration)?;
    Ok(secs as f64 / capacity as f64)
}
