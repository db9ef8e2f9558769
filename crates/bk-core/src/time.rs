//! Simulated time and the duration codec.
//!
//! # Design
//!
//! Simulated time is a non-negative number of seconds since the start of a
//! run.  Costs come from per-unit rates multiplied by unit counts, so they are
//! fractional; `SimTime` therefore wraps an `f64` and orders itself with
//! `f64::total_cmp` so it can key a heap.
//!
//! Durations are exchanged as text in one bit-exact format:
//!
//! ```text
//! {days}d {hours:02}:{minutes:02}:{seconds:02}      e.g. "1d 07:45:09"
//! ```
//!
//! The parser also accepts the day component being absent (`"03:10:31"`) and
//! a single-digit hour (`"3:10:31"`).

use std::cmp::Ordering;
use std::fmt;

use crate::{CoreError, CoreResult};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR:   u64 = 3_600;
const SECS_PER_DAY:    u64 = 86_400;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// Seconds elapsed since the start of a simulation run.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// Whole seconds, rounded the same way [`format_duration`] rounds.
    #[inline]
    pub fn rounded_secs(self) -> u64 {
        round_secs(self.0)
    }

    /// Absolute Unix timestamp for this instant, given the timestamp of `SimTime::ZERO`.
    #[inline]
    pub fn unix_secs(self, base_unix_secs: i64) -> i64 {
        base_unix_secs.saturating_add(self.rounded_secs() as i64)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}

// ── Codec ─────────────────────────────────────────────────────────────────────

/// Parse `"[{days}d ]H:MM:SS"` into whole seconds.
///
/// Leading and trailing whitespace is ignored; whitespace between the day
/// component and the clock is optional.  Anything else is a
/// [`CoreError::Format`].
pub fn parse_duration(text: &str) -> CoreResult<u64> {
    let fail = |reason: &str| CoreError::Format {
        input:  text.to_owned(),
        reason: reason.to_owned(),
    };

    let trimmed = text.trim();
    let (days, clock) = match trimmed.split_once('d') {
        Some((days, rest)) => {
            let days = digits(days, 1, usize::MAX).ok_or_else(|| fail("bad day component"))?;
            (days, rest.trim_start())
        }
        None => (0, trimmed),
    };

    let mut fields = clock.split(':');
    let (Some(h), Some(m), Some(s), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(fail("expected H:MM:SS or HH:MM:SS"));
    };

    let hours   = digits(h, 1, 2).ok_or_else(|| fail("hours must be 1 or 2 digits"))?;
    let minutes = digits(m, 2, 2).ok_or_else(|| fail("minutes must be 2 digits"))?;
    let seconds = digits(s, 2, 2).ok_or_else(|| fail("seconds must be 2 digits"))?;

    days.checked_mul(SECS_PER_DAY)
        .and_then(|d| d.checked_add(hours * SECS_PER_HOUR + minutes * SECS_PER_MINUTE + seconds))
        .ok_or_else(|| fail("duration overflows"))
}

/// Format seconds as `"{days}d {hours:02}:{minutes:02}:{seconds:02}"`.
///
/// The input is rounded to the nearest whole second (ties to even).  Negative
/// and NaN inputs format as zero.
pub fn format_duration(secs: f64) -> String {
    let total   = round_secs(secs);
    let days    = total / SECS_PER_DAY;
    let rem     = total % SECS_PER_DAY;
    let hours   = rem / SECS_PER_HOUR;
    let minutes = (rem % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = rem % SECS_PER_MINUTE;
    format!("{days}d {hours:02}:{minutes:02}:{seconds:02}")
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn round_secs(secs: f64) -> u64 {
    // `as` saturates: NaN → 0, +inf → u64::MAX.
    secs.max(0.0).round_ties_even() as u64
}

/// Parse an all-ASCII-digit field whose length is within `[min, max]`.
fn digits(field: &str, min: usize, max: usize) -> Option<u64> {
    if field.len() < min || field.len() > max || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
