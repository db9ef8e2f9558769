//! Run configuration.

use bk_rates::{PromoteSample, TrainSample};
use bk_schedule::ProducerSpec;

use crate::TrainStrategy;

/// Everything needed for one simulation run.
///
/// Typically deserialised from JSON by the application (enable the `serde`
/// feature) and handed to [`crate::simulate`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimInput {
    /// Units that must reach the highest producer level.
    pub goal: u32,

    pub strategy: TrainStrategy,

    /// Producers in any order; zero-capacity entries are ignored.
    pub producers: Vec<ProducerSpec>,

    /// One measured training batch.
    pub train_rate: TrainSample,

    /// One measured single-level promotion batch.
    pub promote_rate: PromoteSample,

    /// Unix timestamp of simulated time zero, used for absolute report times.
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_unix_secs: i64,

    /// Abort with `SimError::EventLimit` after this many retirements.
    #[cfg_attr(feature = "serde", serde(default))]
    pub event_limit: Option<u64>,
}
