use bk_core::{CoreError, SimTime};
use bk_rates::RateError;
use bk_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("simulation stalled at {now}: no producer can act and nothing is in flight (ledger {ledger:?})")]
    Stalled {
        now:    SimTime,
        ledger: Vec<u32>,
    },

    #[error("event limit of {limit} retirements exceeded")]
    EventLimit { limit: u64 },

    #[error(transparent)]
    Rates(#[from] RateError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Format(#[from] CoreError),
}

impl SimError {
    /// `true` for every flavour of invalid input, whichever layer caught it.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            SimError::Config(_)
                | SimError::Rates(RateError::Config(_))
                | SimError::Schedule(ScheduleError::Config(_))
        )
    }

    /// `true` if a duration string failed to parse.
    pub fn is_format_error(&self) -> bool {
        matches!(self, SimError::Format(_) | SimError::Rates(RateError::Format(_)))
    }
}

pub type SimResult<T> = Result<T, SimError>;
